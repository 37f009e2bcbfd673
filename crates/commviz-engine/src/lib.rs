//! Animation state machine and learning aids for commviz.
//!
//! Everything here is pure state: no terminal, no filesystem layout, no
//! clock other than the `Instant` values callers pass in (or `now()` in the
//! convenience wrappers).

pub mod controller;
pub mod guide;
pub mod highlight;
pub mod progress;
pub mod timer;

pub use controller::{ControllerSnapshot, PresentationController};
pub use guide::{GuideAction, GuideReply, respond};
pub use highlight::{Stage, StageHighlight};
pub use progress::Progress;
pub use timer::{DEFAULT_TICK_INTERVAL, TickTimer};
