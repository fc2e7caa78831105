//! The single in-memory editor session.
//!
//! [`EditorSession`] holds the current [`Editor`] snapshot. Readers take a
//! cloned `Arc` and never block writers for longer than the clone. Writers
//! hold the write lock while they compute the next editor from the current
//! one, then swap it in whole, so no reader ever sees a half-applied change.

use std::sync::Arc;

use scene_editor_core::editor::Editor;
use scene_editor_core::error::CoreError;
use tokio::sync::RwLock;

pub struct EditorSession {
    current: RwLock<Arc<Editor>>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(Editor::new())
    }
}

impl EditorSession {
    pub fn new(editor: Editor) -> Self {
        Self {
            current: RwLock::new(Arc::new(editor)),
        }
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<Editor> {
        Arc::clone(&*self.current.read().await)
    }

    /// Replace the editor with `f(current)`, or leave it untouched on error.
    pub async fn apply(
        &self,
        f: impl FnOnce(&Editor) -> Result<Editor, CoreError>,
    ) -> Result<Arc<Editor>, CoreError> {
        let mut current = self.current.write().await;
        let next = Arc::new(f(&current)?);
        *current = Arc::clone(&next);
        Ok(next)
    }

    /// Like [`apply`](Self::apply), also returning a value produced alongside
    /// the next editor (e.g. the created scene).
    pub async fn apply_with<T>(
        &self,
        f: impl FnOnce(&Editor) -> Result<(Editor, T), CoreError>,
    ) -> Result<T, CoreError> {
        let mut current = self.current.write().await;
        let (next, value) = f(&current)?;
        *current = Arc::new(next);
        Ok(value)
    }

    /// Replace the editor with an infallible transition.
    pub async fn record(&self, f: impl FnOnce(&Editor) -> Editor) {
        let mut current = self.current.write().await;
        *current = Arc::new(f(&current));
    }
}
