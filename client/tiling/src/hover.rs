use crate::layout::Layout;
use geometry::Point;

// Hover tracks whether the pointer rests on an octagon. Only octagons trigger
// the dimmed state; rhombi and gaps clear it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Hover {
    Idle,
    // index of the hovered tile in Layout::tiles
    Octagon(usize),
}

impl Default for Hover {
    fn default() -> Hover {
        Hover::Idle
    }
}

impl Hover {
    pub fn over(layout: &Layout, point: &Point) -> Hover {
        match layout.tile_at(point) {
            Some((index, tile)) if tile.is_octagon() => Hover::Octagon(index),
            _ => Hover::Idle,
        }
    }

    pub fn leave() -> Hover {
        Hover::Idle
    }

    pub fn has_hover(&self) -> bool {
        matches!(self, Hover::Octagon(_))
    }
}
