// The erase step: move the eraser to the pointer, then recolor whatever
// it touches. One call per Running-loop iteration.

use crate::scene::{ItemId, Scene, SceneError};
use crate::types::Color;

/// Side length of the eraser square, in pixels.
pub const ERASER_SIZE: i32 = 20;

/// Erase objects in contact with the eraser.
///
/// Moves the eraser's top-left corner to (x, y), queries everything
/// overlapping its bounding box and recolors the hits to `background` —
/// except the eraser itself, which is never an erase target. Returns how
/// many items were recolored; an empty overlap result is a no-op.
pub fn erase_objects(
    scene: &mut Scene,
    eraser: ItemId,
    x: i32,
    y: i32,
    background: Color,
) -> Result<usize, SceneError> {
    let bounds = scene.move_to(eraser, x, y)?;

    let mut erased = 0;
    for id in scene.find_overlapping(bounds) {
        if id != eraser {
            scene.set_color(id, background)?;
            erased += 1;
        }
    }
    Ok(erased)
}
