//! Paint model shared between the editor and renderers.
//!
//! Only solid fills exist: the editor paints flat shapes, handles, and a
//! button. Geometry types remain in `coords`.

mod color;

pub use color::Color;
