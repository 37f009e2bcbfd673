//! Views over view models
//!
//! - console: `Display` impls wired up through `CreateView`
//! - tui: ratatui widgets, one per screen region
//!
//! Views do no calculation; they only lay out what the presenter prepared.

pub mod console;
pub mod tui;
