use crate::point::Point;

// Bounds is an axis-aligned square.
#[derive(Clone, Debug)]
pub struct Bounds {
    pub center: Point,
    pub radius: f64, // length from center to middle of edge
}

impl Bounds {
    // square builds the bounds of a square given its top-left corner and edge length
    pub fn square(top_left: &Point, size: f64) -> Bounds {
        let radius = size / 2.;
        Bounds {
            center: top_left + &Point(radius, radius),
            radius,
        }
    }
}
