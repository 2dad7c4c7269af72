use geometry::{Bounds, Point};
use itertools::izip;
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Octagon,
    Rhombus,
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileKind::Octagon => write!(f, "octagon"),
            TileKind::Rhombus => write!(f, "rhombus"),
        }
    }
}

// Tile is a square-bounded tile positioned by its top-left corner.
// size is the edge length of the bounding square.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Tile {
    pub kind: TileKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

// octagon_side is the side length of a regular octagon inscribed in a square of width octagon_size
pub fn octagon_side(octagon_size: f64) -> f64 {
    octagon_size / (1. + SQRT_2)
}

// corner_cut is the distance from a bounding-square corner of a regular octagon
// to the nearest octagon vertex. Twice this is the bounding size of the rhombus
// filling the gap between four octagons.
pub fn corner_cut(octagon_size: f64) -> f64 {
    octagon_side(octagon_size) * SQRT_2 / 2.
}

impl Tile {
    pub fn octagon(top_left: &Point, size: f64) -> Tile {
        Tile { kind: TileKind::Octagon, x: top_left.0, y: top_left.1, size }
    }

    // rhombus is positioned by its center since it always sits on a shared octagon corner
    pub fn rhombus(center: &Point, size: f64) -> Tile {
        let half = size / 2.;
        Tile { kind: TileKind::Rhombus, x: center.0 - half, y: center.1 - half, size }
    }

    pub fn is_octagon(&self) -> bool {
        self.kind == TileKind::Octagon
    }

    pub fn top_left(&self) -> Point {
        Point(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        let half = self.size / 2.;
        Point(self.x + half, self.y + half)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::square(&self.top_left(), self.size)
    }

    // points returns the polygon's vertices clockwise (y grows downwards), starting at the top
    pub fn points(&self) -> Vec<Point> {
        let (x, y, w) = (self.x, self.y, self.size);
        match self.kind {
            TileKind::Octagon => {
                let c = corner_cut(w);
                vec![
                    Point(x + c, y),
                    Point(x + w - c, y),
                    Point(x + w, y + c),
                    Point(x + w, y + w - c),
                    Point(x + w - c, y + w),
                    Point(x + c, y + w),
                    Point(x, y + w - c),
                    Point(x, y + c),
                ]
            },
            TileKind::Rhombus => {
                let half = w / 2.;
                vec![
                    Point(x + half, y),
                    Point(x + w, y + half),
                    Point(x + half, y + w),
                    Point(x, y + half),
                ]
            },
        }
    }

    // contains determines whether or not the provided point is contained within the tile
    // https://alienryderflex.com/polygon
    pub fn contains(&self, point: &Point) -> bool {
        if !point.intersects(&self.bounds()) {
            return false;
        }
        let points = self.points();
        let mut odd_nodes = false;
        for (start, stop) in izip!(points.iter(), points.iter().cycle().skip(1)) {
            if
                ((stop.1 < point.1 && start.1 >= point.1) || (start.1 < point.1 && stop.1 >= point.1)) &&
                (start.0 <= point.0 || stop.0 <= point.0)
            {
                odd_nodes ^= (stop.0 + (point.1 - stop.1) / (start.1 - stop.1) * (start.0 - stop.0)) < point.0;
            }
        }
        odd_nodes
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{}x{}",
            self.kind,
            self.top_left(),
            common::fmt_float(self.size, geometry::DISPLAY_PRECISION),
        )
    }
}
