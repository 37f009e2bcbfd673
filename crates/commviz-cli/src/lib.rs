// NOTE: commviz layout
//
// - commviz-types: topics, phases and the static panel catalog
// - commviz-engine: the presentation controller and its tick timer, the
//   stage highlight table, learning progress and the keyword guide
// - this crate: argument parsing, config, logging, and the presentation
//   layer (view models, presenters, console and TUI renderers)
//
// Example values ("HELLO" -> "KHOOR", 'A' -> 01000001) are fixed
// illustrations. Nothing in the workspace actually encrypts, encodes,
// modulates or multiplexes.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
