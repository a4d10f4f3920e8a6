use crate::scene::shapes::blob::BlobCmd;
use crate::scene::shapes::circle::CircleCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a shape module under `scene::shapes::*` with its push helpers
/// - add a variant here
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Blob(BlobCmd),
    Circle(CircleCmd),
}
