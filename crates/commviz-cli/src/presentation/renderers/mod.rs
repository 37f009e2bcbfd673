pub mod console;
pub mod playback;
pub mod tui;

pub use console::ConsoleRenderer;
pub use playback::ConsolePlayback;
pub use tui::TuiRenderer;
