use super::{Error, FractionalHex, Hex};
use crate::geometry::Point;
use std::f64::consts::PI;

// `f64::sqrt` is not const.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Basis matrices relating axial coordinates to pixel space.
///
/// `f` maps `(q, r)` to `(x, y)` before scaling; `b` is its inverse.
/// Only [`POINTY`] and [`FLAT`] are known to be consistent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub f: [f64; 4],
    pub b: [f64; 4],
    /// in multiples of 60°
    pub start_angle: f64,
}

/// Hexes with a vertex at the top; rows are horizontal.
pub const POINTY: Orientation = Orientation {
    f: [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
    b: [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
    start_angle: 0.5,
};

/// Hexes with an edge at the top; columns are vertical.
pub const FLAT: Orientation = Orientation {
    f: [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
    b: [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
    start_angle: 0.0,
};

/// Mapping between hex coordinates and pixel space.
///
/// `size` is the distance from a hex's center to its corners along each axis,
/// and must have non-zero components. `origin` is the pixel center of
/// [`Hex::ORIGIN`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub orientation: Orientation,
    pub size: Point,
    pub origin: Point,
}

impl Layout {
    pub const fn new(orientation: Orientation, size: Point, origin: Point) -> Layout {
        Layout {
            orientation,
            size,
            origin,
        }
    }

    /// Pixel center of a hex.
    pub fn to_pixel(&self, hex: Hex) -> Point {
        let m = &self.orientation;
        let q = hex.q() as f64;
        let r = hex.r() as f64;
        Point {
            x: (m.f[0] * q + m.f[1] * r) * self.size.x + self.origin.x,
            y: (m.f[2] * q + m.f[3] * r) * self.size.y + self.origin.y,
        }
    }

    /// Fractional hex coordinates of a pixel.
    ///
    /// Fails when the point or the layout is not finite, as with a zero `size`.
    pub fn to_hex(&self, point: Point) -> Result<FractionalHex, Error> {
        let m = &self.orientation;
        let pt = Point {
            x: (point.x - self.origin.x) / self.size.x,
            y: (point.y - self.origin.y) / self.size.y,
        };
        let q = m.b[0] * pt.x + m.b[1] * pt.y;
        let r = m.b[2] * pt.x + m.b[3] * pt.y;
        FractionalHex::new(q, r, -q - r)
    }

    /// The hex containing a pixel.
    ///
    /// Fails where [`Layout::to_hex`] does, and for pixels beyond the valid hex range.
    pub fn hex_at(&self, point: Point) -> Result<Hex, Error> {
        self.to_hex(point)?.try_round()
    }

    /// Offset from a hex's center to one of its corners.
    ///
    /// Corners are numbered from the orientation's start angle, stepping 60° at a time.
    pub fn corner_offset(&self, corner: usize) -> Point {
        let angle = 2.0 * PI * (self.orientation.start_angle - corner as f64) / 6.0;
        Point {
            x: self.size.x * angle.cos(),
            y: self.size.y * angle.sin(),
        }
    }

    /// Outline of a hex in pixel space, in corner order.
    pub fn polygon_corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.to_pixel(hex);
        [0, 1, 2, 3, 4, 5].map(|corner| center + self.corner_offset(corner))
    }
}
