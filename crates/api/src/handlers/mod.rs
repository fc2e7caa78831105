pub mod editor;
pub mod page;
pub mod scene;
