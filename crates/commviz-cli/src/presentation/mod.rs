//! Presentation layer
//!
//! - formatters: shared value formatting (dates)
//! - view_models: plain data prepared for display, serializable for `--format json`
//! - presenters: pure functions from engine state to view models
//! - views: Display impls (console) and ratatui widgets (TUI) over view models
//! - renderers: console output, interactive TUI loop, non-interactive playback

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
