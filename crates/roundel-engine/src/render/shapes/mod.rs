//! Shape renderers.

mod common;

pub mod blob;
pub mod circle;
