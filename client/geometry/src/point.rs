use crate::bounds::Bounds;
use common::{DEFAULT_F64_MARGIN, fmt_float};
use float_cmp::ApproxEq;
use std::ops::{Add, Sub};

pub const ORIGIN: Point = Point(0., 0.);

pub const DISPLAY_PRECISION: u32 = 2;

// Point is a position in layout units; x grows rightwards and y grows downwards.
#[derive(Clone, Copy, Debug)]
pub struct Point(pub f64, pub f64);

impl Point {
    // half-open on the low side so that adjacent bounds never both claim a point
    pub fn intersects(&self, bounds: &Bounds) -> bool {
        (self.0 <= bounds.center.0 + bounds.radius) &&
        (self.0  > bounds.center.0 - bounds.radius) &&
        (self.1 <= bounds.center.1 + bounds.radius) &&
        (self.1  > bounds.center.1 - bounds.radius)
    }
}

impl Add for &Point {
    type Output = Point;
    fn add(self, other: &Point) -> Self::Output {
        Point(self.0 + other.0, self.1 + other.1)
    }
}

// equal within DEFAULT_F64_MARGIN per component
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.0.approx_eq(other.0, DEFAULT_F64_MARGIN)
            && self.1.approx_eq(other.1, DEFAULT_F64_MARGIN)
    }
}

impl Sub for &Point {
    type Output = Point;
    fn sub(self, other: &Point) -> Self::Output {
        Point(self.0 - other.0, self.1 - other.1)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{},{}]",
            fmt_float(self.0, DISPLAY_PRECISION),
            fmt_float(self.1, DISPLAY_PRECISION),
        )
    }
}
