//! Roundel editor: drag handles around a box to author a CSS `border-radius`.
//!
//! The crate splits into a display-free core and a thin presentation layer:
//!
//! - [`geometry`] maps pointer coordinates to clamped percentages
//! - [`state`] holds the eight corner percentages and applies drag updates
//! - [`controller`] runs the press/move/release drag lifecycle
//! - [`editor`] lays out, hit-tests and paints the editor component
//! - [`app`] wires the component to the engine runtime
//!
//! # Quick start
//!
//! ```rust,ignore
//! use roundel_editor::Application;
//!
//! Application::new()
//!     .title("Roundel")
//!     .size(640.0, 720.0)
//!     .run();
//! ```

pub mod app;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod pointer;
pub mod radii;
pub mod state;

pub use app::Application;

/// Everything needed to embed or drive the editor.
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::clipboard::{ClipboardWriter, CopyNotice, SystemClipboard};
    pub use crate::config::{EditorConfig, Palette};
    pub use crate::controller::{DragSession, DragUpdate, InteractionController};
    pub use crate::editor::{EditorLayout, RadiusEditor};
    pub use crate::error::ClipboardError;
    pub use crate::geometry::{BoundingMeasurement, ContainerMeasure};
    pub use crate::handle::HandleId;
    pub use crate::pointer::{PointerSource, PointerSubscription};
    pub use crate::radii::{AxisRadii, BorderRadius, Side};
    pub use crate::state::RadiusState;

    pub use roundel_engine::coords::{Axis, Rect, Vec2};
}
