//! Coordinate and geometry types shared across engine renderers and the editor.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod axis;
mod corner_radii;
mod rect;
mod vec2;
mod viewport;

pub use axis::Axis;
pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
