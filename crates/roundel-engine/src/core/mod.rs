//! Core engine-facing contracts.
//!
//! Defines the interface between the window runtime and the editor layer:
//! the `App` trait and the per-frame context handed to it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
