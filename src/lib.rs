pub mod canvas;
pub mod commands;
pub mod config;
pub mod editor;
pub mod formatting;
pub mod measure;
pub mod memo;
pub mod styles;
pub mod tui;

#[cfg(feature = "development")]
pub mod dev;
