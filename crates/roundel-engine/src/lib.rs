//! Roundel engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the editor layer: window
//! loop, pointer input translation, logging, and the shape renderers that
//! draw the edited border-radius.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
