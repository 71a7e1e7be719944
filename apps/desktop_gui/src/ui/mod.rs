//! UI layer for the albums desktop app: app shell and album panels.

pub mod app;
pub mod panels;

pub use app::AlbumsApp;
