//! Domain types and pure editor logic for the scene editor.
//!
//! Nothing in this crate performs I/O. Every mutating operation takes the
//! current value and returns a new one, so callers can swap whole snapshots.

pub mod editor;
pub mod error;
pub mod reference;
pub mod scene;
pub mod types;
