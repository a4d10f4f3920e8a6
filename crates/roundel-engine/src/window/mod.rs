//! The editor window and its event loop.
//!
//! One window, redrawn on input, on resize, and at deadlines the application
//! asks for. Between those the loop sleeps.

mod runtime;
mod schedule;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
pub use schedule::RedrawSchedule;
pub use winit::window::CursorIcon;
