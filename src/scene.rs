// Retained drawing surface: a list of colored rectangles with stable
// identities. This is the half of the graphics facade that needs no
// window, so all the grid/erase logic on top of it is testable headless.
//
// Visual expectation: whatever is in the scene is exactly what
// `render` paints — white background, then every item in creation
// order, so later items sit on top of earlier ones.

use crate::types::{Color, FrameBuffer, Rect, WHITE};

/// Identity of one drawn rectangle, unique within a scene for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u32);

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("rectangle has no area: ({x1}, {y1})..({x2}, {y2})")]
    EmptyRect { x1: i32, y1: i32, x2: i32, y2: i32 },

    #[error("unknown scene item: {0:?}")]
    UnknownItem(ItemId),
}

struct Item {
    id: ItemId,
    bounds: Rect,
    color: Color,
}

/// All rectangles drawn so far, in draw order.
pub struct Scene {
    items: Vec<Item>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 0 }
    }

    /// Add a filled rectangle given two corners and a color.
    /// Visual: after the next render, the rectangle appears on top of
    /// everything drawn before it.
    pub fn create_rectangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) -> Result<ItemId, SceneError> {
        if x1 >= x2 || y1 >= y2 {
            return Err(SceneError::EmptyRect { x1, y1, x2, y2 });
        }
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(Item { id, bounds: Rect { x1, y1, x2, y2 }, color });
        Ok(id)
    }

    /// Change an existing item's fill color.
    pub fn set_color(&mut self, id: ItemId, color: Color) -> Result<(), SceneError> {
        self.item_mut(id)?.color = color;
        Ok(())
    }

    /// Move an item's top-left corner to (x, y), preserving its size.
    /// Returns the new bounds.
    pub fn move_to(&mut self, id: ItemId, x: i32, y: i32) -> Result<Rect, SceneError> {
        let item = self.item_mut(id)?;
        item.bounds = item.bounds.at(x, y);
        Ok(item.bounds)
    }

    pub fn bounds(&self, id: ItemId) -> Result<Rect, SceneError> {
        self.item(id).map(|i| i.bounds)
    }

    pub fn color(&self, id: ItemId) -> Result<Color, SceneError> {
        self.item(id).map(|i| i.color)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Every item whose bounds overlap `region`, in draw order. A region
    /// away from all items (e.g. the pointer left the canvas) yields an
    /// empty vec.
    pub fn find_overlapping(&self, region: Rect) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|i| i.bounds.overlaps(&region))
            .map(|i| i.id)
            .collect()
    }

    /// Paint the scene into `fb`: white background, then each item in
    /// draw order, clipped to the buffer.
    pub fn render(&self, fb: &mut FrameBuffer) {
        fb.pixels.fill(WHITE);
        for item in &self.items {
            fill_rect(fb, item.bounds, item.color);
        }
    }

    fn item(&self, id: ItemId) -> Result<&Item, SceneError> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or(SceneError::UnknownItem(id))
    }

    fn item_mut(&mut self, id: ItemId) -> Result<&mut Item, SceneError> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(SceneError::UnknownItem(id))
    }
}

/// Fill the part of `r` that lies inside the buffer.
fn fill_rect(fb: &mut FrameBuffer, r: Rect, color: Color) {
    let x1 = (r.x1.max(0) as usize).min(fb.width);
    let y1 = (r.y1.max(0) as usize).min(fb.height);
    let x2 = (r.x2.max(0) as usize).min(fb.width);
    let y2 = (r.y2.max(0) as usize).min(fb.height);
    for y in y1..y2 {
        let row = y * fb.width;
        fb.pixels[row + x1..row + x2].fill(color);
    }
}
