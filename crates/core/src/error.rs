#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Reference data is still loading, failed to load, or has no locations.
    #[error("Editor not ready: {0}")]
    NotReady(String),
}
