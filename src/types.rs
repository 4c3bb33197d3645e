// Core types shared by the scene, the grid builder and the eraser step.

/// Fill color of a drawn item, packed as 0x00RRGGBB for minifb.
pub type Color = u32;

/// Color of an untouched grid cell.
pub const BLUE: Color = 0x0000_00FF;
/// Canvas background; erased cells are recolored to this.
pub const WHITE: Color = 0x00FF_FFFF;
/// The eraser rectangle itself.
pub const PINK: Color = 0x00FF_C0CB;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// Allocate a buffer of the given size, filled with `fill`.
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self { width, height, pixels: vec![fill; width * height] }
    }
}

/// Axis-aligned rectangle with integer corners; `x1 < x2` and `y1 < y2`
/// always hold for rectangles handed out by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// The same rectangle with its top-left corner moved to (x, y).
    pub fn at(&self, x: i32, y: i32) -> Rect {
        Rect { x1: x, y1: y, x2: x + self.width(), y2: y + self.height() }
    }

    /// Inclusive overlap test: boxes that merely touch along an edge
    /// count as overlapping, like Tk's find_overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2
            && self.y1 <= other.y2 && other.y1 <= self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Rect {
        Rect { x1, y1, x2, y2 }
    }

    #[test]
    fn at_preserves_size() {
        let r = rect(10, 20, 30, 60).at(-5, 7);
        assert_eq!(r, rect(-5, 7, 15, 47));
        assert_eq!(r.width(), 20);
        assert_eq!(r.height(), 40);
    }

    #[test]
    fn overlap_is_inclusive_on_edges() {
        let a = rect(0, 0, 40, 40);
        assert!(a.overlaps(&rect(40, 0, 80, 40)), "shared edge counts");
        assert!(a.overlaps(&rect(40, 40, 80, 80)), "shared corner counts");
        assert!(!a.overlaps(&rect(41, 0, 80, 40)));
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = rect(0, 0, 10, 10);
        assert!(!a.overlaps(&rect(100, 100, 120, 120)));
        assert!(!a.overlaps(&rect(0, 50, 10, 60)));
    }
}
