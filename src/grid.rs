// Grid builder: tile the top-left width x height region with squares.

use log::warn;

use crate::scene::Scene;
use crate::types::Color;

/// Create the initial grid of `color` squares, one draw call per cell.
/// Cells that do not fit whole are omitted (integer division), so this
/// makes exactly ⌊height/cell_size⌋ x ⌊width/cell_size⌋ cells.
///
/// A cell that fails to create is logged and skipped; the rest of the
/// grid is still built. Returns the number of cells created.
pub fn create_grid(
    scene: &mut Scene,
    width: i32,
    height: i32,
    cell_size: i32,
    color: Color,
) -> usize {
    let num_rows = height / cell_size;
    let num_cols = width / cell_size;

    let mut created = 0;
    for row in 0..num_rows {
        for col in 0..num_cols {
            let left_x = col * cell_size;
            let top_y = row * cell_size;
            match scene.create_rectangle(
                left_x,
                top_y,
                left_x + cell_size,
                top_y + cell_size,
                color,
            ) {
                Ok(_) => created += 1,
                Err(e) => warn!("error creating grid cell at ({row}, {col}): {e}"),
            }
        }
    }
    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLUE, Rect};

    #[test]
    fn makes_625_forty_pixel_cells_on_a_1000_square_canvas() {
        let mut scene = Scene::new();
        let created = create_grid(&mut scene, 1000, 1000, 40, BLUE);
        assert_eq!(created, 625);
        assert_eq!(scene.len(), 625);
    }

    #[test]
    fn partial_trailing_cells_are_omitted() {
        let mut scene = Scene::new();
        // 100/40 = 2 whole cells per axis, the trailing 20px strip is skipped
        assert_eq!(create_grid(&mut scene, 100, 100, 40, BLUE), 4);
        // nothing extends past 80 on either axis
        let hits = scene.find_overlapping(Rect { x1: 81, y1: 0, x2: 100, y2: 100 });
        assert!(hits.is_empty());
    }

    #[test]
    fn cells_tile_without_gaps() {
        let mut scene = Scene::new();
        create_grid(&mut scene, 120, 80, 40, BLUE);
        // every pixel-sized probe inside the tiled region hits some cell
        for y in (0..80).step_by(7) {
            for x in (0..120).step_by(7) {
                let probe = Rect { x1: x, y1: y, x2: x + 1, y2: y + 1 };
                assert!(
                    !scene.find_overlapping(probe).is_empty(),
                    "gap at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn every_cell_starts_with_the_grid_color_and_size() {
        let mut scene = Scene::new();
        create_grid(&mut scene, 200, 200, 40, BLUE);
        let all = scene.find_overlapping(Rect { x1: 0, y1: 0, x2: 200, y2: 200 });
        assert_eq!(all.len(), 25);
        for id in all {
            assert_eq!(scene.color(id).unwrap(), BLUE);
            let b = scene.bounds(id).unwrap();
            assert_eq!((b.width(), b.height()), (40, 40));
        }
    }
}
