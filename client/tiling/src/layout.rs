use crate::item::{DisplayItem, Placement};
use common::ceil_count;
use geometry::Point;
use itertools::iproduct;
use tile::{Tile, TileKind};

// Geometry holds the fixed ratios between a regular octagon inscribed in a
// square of width octagon_size and the rhombus filling the gap between four
// such octagons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    octagon_size: f64,
    side: f64,
    rhombus_size: f64,
}

impl Geometry {
    pub fn new(octagon_size: f64) -> Geometry {
        Geometry {
            octagon_size,
            side: tile::octagon_side(octagon_size),
            rhombus_size: 2. * tile::corner_cut(octagon_size),
        }
    }

    pub fn octagon_size(&self) -> f64 {
        self.octagon_size
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn rhombus_size(&self) -> f64 {
        self.rhombus_size
    }

    pub fn corner_cut(&self) -> f64 {
        self.rhombus_size / 2.
    }

    fn is_degenerate(&self) -> bool {
        !self.octagon_size.is_finite() || self.octagon_size <= 0.
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GridDimensions {
    pub cols: usize,
    pub rows: usize,
}

// Grids with more octagons than this are treated like a zero-size viewport.
pub const MAX_OCTAGONS: usize = 1 << 20;

impl GridDimensions {
    // for_viewport covers the viewport with one extra row and column of overscan
    pub fn for_viewport(geometry: &Geometry, viewport: &Viewport) -> GridDimensions {
        if geometry.is_degenerate() {
            return GridDimensions::default();
        }
        let cols = ceil_count(viewport.width, geometry.octagon_size);
        let rows = ceil_count(viewport.height, geometry.octagon_size);
        if cols == 0 || rows == 0 {
            return GridDimensions::default();
        }
        match (cols.checked_add(1), rows.checked_add(1)) {
            (Some(cols), Some(rows)) if cols.checked_mul(rows).map_or(false, |n| n <= MAX_OCTAGONS) => {
                GridDimensions { cols, rows }
            },
            _ => GridDimensions::default(),
        }
    }

    pub fn octagon_count(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    pub fn rhombus_count(&self) -> usize {
        self.cols.saturating_sub(1).saturating_mul(self.rows.saturating_sub(1))
    }
}

// Layout is the full tile set for one viewport. Tiles are ordered row-major and
// each octagon is followed by the rhombus at its bottom-right corner, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub geometry: Geometry,
    pub dimensions: GridDimensions,
    tiles: Vec<Tile>,
}

impl Layout {
    pub fn compute(geometry: &Geometry, viewport: &Viewport) -> Layout {
        let dimensions = GridDimensions::for_viewport(geometry, viewport);
        let GridDimensions { cols, rows } = dimensions;
        let size = geometry.octagon_size;

        let mut tiles = Vec::with_capacity(dimensions.octagon_count().saturating_add(dimensions.rhombus_count()));
        for (r, c) in iproduct!(0..rows, 0..cols) {
            let top_left = Point(c as f64 * size, r as f64 * size);
            tiles.push(Tile::octagon(&top_left, size));
            if r + 1 < rows && c + 1 < cols {
                let corner = &top_left + &Point(size, size);
                tiles.push(Tile::rhombus(&corner, geometry.rhombus_size));
            }
        }

        Layout {
            geometry: *geometry,
            dimensions,
            tiles,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn octagons(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| tile.kind == TileKind::Octagon)
    }

    pub fn rhombi(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| tile.kind == TileKind::Rhombus)
    }

    // assign hands out items to octagons in order, wrapping around when octagons outnumber items
    pub fn assign<'a>(&'a self, items: &'a [DisplayItem]) -> Vec<Placement<'a>> {
        let mut octagon_index = 0_usize;
        self.tiles
            .iter()
            .map(|tile| {
                let item = if tile.is_octagon() && !items.is_empty() {
                    let item = &items[octagon_index % items.len()];
                    octagon_index += 1;
                    Some(item)
                } else {
                    None
                };
                Placement { tile, item }
            })
            .collect()
    }

    // tile_at returns the index and tile whose polygon contains point
    pub fn tile_at(&self, point: &Point) -> Option<(usize, &Tile)> {
        self.tiles.iter().enumerate().find(|(_, tile)| tile.contains(point))
    }
}
