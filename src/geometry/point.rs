use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A point in 2d pixel space.
///
/// Unlike the hex coordinate types, a `Point` carries no invariant.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({x}, {y})")]
#[from_str(regex = r"^\(\s*(?P<x>[^,\s]+)\s*,\s*(?P<y>[^,\s]+)\s*\)$")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Point) -> f64 {
        let d = self - other;
        d.x.hypot(d.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Add for Point {
    type Output = Point;

    fn add(mut self, rhs: Point) -> Self::Output {
        self += rhs;
        self
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(mut self, rhs: Point) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Self::Output {
        Point::new(self.x * rhs, self.y * rhs)
    }
}
