use super::{direction, Direction, Error, FractionalHex};
use std::{
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

/// Offsets applied to both endpoints before drawing a line, so that samples
/// never land exactly on the edge between two hexes.
const LINE_NUDGE: (f64, f64, f64) = (1e-6, 1e-6, -2e-6);

/// Largest magnitude of any single cube coordinate a checked constructor accepts.
///
/// Within this range rotation, distance, and every storage conversion stay
/// inside `i32`, as does the sum or difference of any two hexes.
pub const MAX_COORDINATE: i32 = i32::MAX / 4;

/// Cube hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`. The fields are private so that the constraint
/// holds for every value of this type; [`Hex::new`] checks it, and everything
/// else derives `s` from `q` and `r`.
///
/// `+`, `-` and unary `-` are plain `i32` arithmetic. Applied to hexes within
/// [`MAX_COORDINATE`] they cannot overflow, but their results may lie outside it;
/// [`Hex::checked_add`] and [`Hex::checked_sub`] keep results in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash, parse_display::Display)]
#[display("({q}, {r}, {s})")]
pub struct Hex {
    q: i32,
    r: i32,
    s: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex::from_axial(0, 0);

    /// Construct a hex from cube coordinates, checking that they sum to 0
    /// and that each lies within [`MAX_COORDINATE`].
    pub fn new(q: i32, r: i32, s: i32) -> Result<Hex, Error> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            return Err(Error::InvariantViolation { q, r, s });
        }
        Hex::checked(q.into(), r.into())
    }

    /// Construct a hex from axial coordinates; `s` is implied.
    pub fn axial(q: i32, r: i32) -> Result<Hex, Error> {
        Hex::checked(q.into(), r.into())
    }

    /// Axial construction from wide intermediate values, rejecting anything out of range.
    pub(crate) fn checked(q: i64, r: i64) -> Result<Hex, Error> {
        let s = -q - r;
        let limit = i64::from(MAX_COORDINATE);
        if q.abs() > limit || r.abs() > limit || s.abs() > limit {
            return Err(Error::OutOfRange { q, r, s });
        }
        Ok(Hex::from_axial(q as i32, r as i32))
    }

    /// Unchecked axial construction; callers keep `q`, `r` and `q + r` in range.
    pub(crate) const fn from_axial(q: i32, r: i32) -> Hex {
        Hex { q, r, s: -q - r }
    }

    /// Position along the `q` axis.
    pub fn q(self) -> i32 {
        self.q
    }

    /// Position along the `r` axis.
    pub fn r(self) -> i32 {
        self.r
    }

    /// Position along the `s` axis; always `-q - r`.
    pub fn s(self) -> i32 {
        self.s
    }

    /// Multiply each coordinate by `k`, failing if the result leaves the valid range.
    pub fn scale(self, k: i32) -> Result<Hex, Error> {
        let k = i64::from(k);
        Hex::checked(i64::from(self.q) * k, i64::from(self.r) * k)
    }

    /// `self + other`, failing if the result leaves the valid range.
    pub fn checked_add(self, other: Hex) -> Result<Hex, Error> {
        Hex::checked(
            i64::from(self.q) + i64::from(other.q),
            i64::from(self.r) + i64::from(other.r),
        )
    }

    /// `self - other`, failing if the result leaves the valid range.
    pub fn checked_sub(self, other: Hex) -> Result<Hex, Error> {
        Hex::checked(
            i64::from(self.q) - i64::from(other.q),
            i64::from(self.r) - i64::from(other.r),
        )
    }

    /// Rotate 60° about the origin, toward increasing direction index.
    pub fn rotate_left(self) -> Hex {
        Hex::from_axial(-self.s, -self.q)
    }

    /// Rotate 60° about the origin, toward decreasing direction index.
    pub fn rotate_right(self) -> Hex {
        Hex::from_axial(-self.r, -self.s)
    }

    /// Distance to the origin.
    pub fn length(self) -> i32 {
        let sum = u64::from(self.q.unsigned_abs())
            + u64::from(self.r.unsigned_abs())
            + u64::from(self.s.unsigned_abs());
        (sum / 2) as i32
    }

    /// Distance to another hex, in steps.
    pub fn distance(self, other: Hex) -> i32 {
        (self - other).length()
    }

    /// The adjacent hex at the given direction index.
    ///
    /// Indices follow [`DIRECTIONS`](super::DIRECTIONS); anything outside `0..6` is an error.
    pub fn neighbor(self, index: usize) -> Result<Hex, Error> {
        Ok(self + direction::direction(index)?)
    }

    /// The adjacent hex in a named direction.
    pub fn neighbor_toward(self, direction: Direction) -> Hex {
        self + direction
    }

    /// The hex across the corner at the given index.
    ///
    /// Indices follow [`DIAGONALS`](super::DIAGONALS); anything outside `0..6` is an error.
    pub fn diagonal_neighbor(self, index: usize) -> Result<Hex, Error> {
        Ok(self + direction::diagonal(index)?)
    }

    pub fn neighbors(self) -> impl 'static + Iterator<Item = Hex> {
        Direction::iter().map(move |direction| self + direction)
    }

    pub fn diagonal_neighbors(self) -> impl 'static + Iterator<Item = Hex> {
        Direction::iter().map(move |direction| self + direction.diagonal())
    }

    /// Hexes along the straight line from `self` to `other`, inclusive of both ends.
    ///
    /// The result always contains `self.distance(other) + 1` hexes. Ties are
    /// broken by nudging both endpoints slightly off the lattice first.
    pub fn linedraw(self, other: Hex) -> Vec<Hex> {
        let n = self.distance(other);
        let a = FractionalHex::from(self).nudged(LINE_NUDGE);
        let b = FractionalHex::from(other).nudged(LINE_NUDGE);
        let step = 1.0 / n.max(1) as f64;
        log::trace!("drawing {} samples from {} to {}", n + 1, self, other);
        (0..=n)
            .map(|i| a.lerp(b, step * i as f64).round())
            .collect()
    }
}

impl AddAssign for Hex {
    fn add_assign(&mut self, rhs: Hex) {
        *self = Hex::from_axial(self.q + rhs.q, self.r + rhs.r);
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(mut self, rhs: Hex) -> Self::Output {
        self += rhs;
        self
    }
}

impl SubAssign for Hex {
    fn sub_assign(&mut self, rhs: Hex) {
        *self = Hex::from_axial(self.q - rhs.q, self.r - rhs.r);
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(mut self, rhs: Hex) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Neg for Hex {
    type Output = Hex;

    fn neg(self) -> Self::Output {
        Hex::from_axial(-self.q, -self.r)
    }
}

impl AddAssign<Direction> for Hex {
    fn add_assign(&mut self, rhs: Direction) {
        *self += rhs.unit();
    }
}

impl Add<Direction> for Hex {
    type Output = Hex;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

/// Unchecked textual form of a hex, validated on conversion.
#[derive(parse_display::FromStr)]
#[from_str(regex = r"^\(\s*(?P<q>-?\d+)\s*,\s*(?P<r>-?\d+)\s*,\s*(?P<s>-?\d+)\s*\)$")]
struct RawHex {
    q: i32,
    r: i32,
    s: i32,
}

impl FromStr for Hex {
    type Err = Error;

    /// Parse `(q, r, s)`, as produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawHex = s.parse().map_err(|_| Error::Parse(s.to_owned()))?;
        Hex::new(raw.q, raw.r, raw.s)
    }
}
