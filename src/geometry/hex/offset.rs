//! Rectangular storage coordinates.
//!
//! Offset coordinates shove every other column (`q` variants) or row (`r` variants)
//! by half a hex; [`Parity`] says whether the even or the odd ones are shoved.
//! Doubled coordinates avoid the parity question by doubling one axis instead.
//!
//! See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates-offset).
//!
//! Every conversion here is exact: converting to cube coordinates and back
//! returns the value you started with. Conversions work in `i64` and fail with
//! [`Error::OutOfRange`] only when the result would leave the valid range; for
//! a hex within [`MAX_COORDINATE`](super::MAX_COORDINATE) converting away from
//! cube coordinates never fails.

use super::{Error, Hex};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Which columns or rows of an offset layout are shoved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

pub const EVEN: Parity = Parity::Even;
pub const ODD: Parity = Parity::Odd;

impl Parity {
    /// `+1` for `Even`, `-1` for `Odd`.
    pub fn offset(self) -> i32 {
        match self {
            Parity::Even => 1,
            Parity::Odd => -1,
        }
    }

    /// Half-hex adjustment for a shoved axis value.
    ///
    /// Division truncates toward zero; `n & 1` is 1 for every odd `n`, negative included.
    fn shove(self, n: i64) -> i64 {
        (n + i64::from(self.offset()) * (n & 1)) / 2
    }
}

impl TryFrom<i32> for Parity {
    type Error = Error;

    fn try_from(offset: i32) -> Result<Self, Self::Error> {
        match offset {
            1 => Ok(Parity::Even),
            -1 => Ok(Parity::Odd),
            _ => {
                log::debug!("rejecting offset parity {}", offset);
                Err(Error::InvalidParity(offset))
            }
        }
    }
}

impl From<Parity> for i32 {
    fn from(parity: Parity) -> i32 {
        parity.offset()
    }
}

/// Column and row of a hex stored in a rectangular array with shoved columns or rows.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({col}, {row})")]
pub struct OffsetCoord {
    pub col: i32,
    pub row: i32,
}

/// Wide cube coordinates of a hex, for conversion arithmetic.
fn wide(hex: Hex) -> (i64, i64) {
    (i64::from(hex.q()), i64::from(hex.r()))
}

/// Narrow a converted `(col, row)` back to `i32`, blaming `hex` if it does not fit.
fn narrow(hex: Hex, col: i64, row: i64) -> Result<(i32, i32), Error> {
    match (i32::try_from(col), i32::try_from(row)) {
        (Ok(col), Ok(row)) => Ok((col, row)),
        _ => Err(Error::OutOfRange {
            q: hex.q().into(),
            r: hex.r().into(),
            s: hex.s().into(),
        }),
    }
}

impl OffsetCoord {
    pub const fn new(col: i32, row: i32) -> OffsetCoord {
        OffsetCoord { col, row }
    }

    fn narrowed(hex: Hex, col: i64, row: i64) -> Result<OffsetCoord, Error> {
        let (col, row) = narrow(hex, col, row)?;
        Ok(OffsetCoord { col, row })
    }

    fn wide(self) -> (i64, i64) {
        (i64::from(self.col), i64::from(self.row))
    }

    /// Offset coordinates for a layout whose columns are shoved (flat-top hexes).
    pub fn qoffset_from_cube(parity: Parity, hex: Hex) -> Result<OffsetCoord, Error> {
        let (q, r) = wide(hex);
        OffsetCoord::narrowed(hex, q, r + parity.shove(q))
    }

    pub fn qoffset_to_cube(self, parity: Parity) -> Result<Hex, Error> {
        let (col, row) = self.wide();
        Hex::checked(col, row - parity.shove(col))
    }

    /// Offset coordinates for a layout whose rows are shoved (pointy-top hexes).
    pub fn roffset_from_cube(parity: Parity, hex: Hex) -> Result<OffsetCoord, Error> {
        let (q, r) = wide(hex);
        OffsetCoord::narrowed(hex, q + parity.shove(r), r)
    }

    pub fn roffset_to_cube(self, parity: Parity) -> Result<Hex, Error> {
        let (col, row) = self.wide();
        Hex::checked(col - parity.shove(row), row)
    }

    /// As [`OffsetCoord::qoffset_from_cube`], for a raw `+1`/`-1` offset.
    pub fn try_qoffset_from_cube(offset: i32, hex: Hex) -> Result<OffsetCoord, Error> {
        OffsetCoord::qoffset_from_cube(Parity::try_from(offset)?, hex)
    }

    /// As [`OffsetCoord::qoffset_to_cube`], for a raw `+1`/`-1` offset.
    pub fn try_qoffset_to_cube(self, offset: i32) -> Result<Hex, Error> {
        self.qoffset_to_cube(Parity::try_from(offset)?)
    }

    /// As [`OffsetCoord::roffset_from_cube`], for a raw `+1`/`-1` offset.
    pub fn try_roffset_from_cube(offset: i32, hex: Hex) -> Result<OffsetCoord, Error> {
        OffsetCoord::roffset_from_cube(Parity::try_from(offset)?, hex)
    }

    /// As [`OffsetCoord::roffset_to_cube`], for a raw `+1`/`-1` offset.
    pub fn try_roffset_to_cube(self, offset: i32) -> Result<Hex, Error> {
        self.roffset_to_cube(Parity::try_from(offset)?)
    }
}

/// Column and row of a hex in doubled coordinates.
///
/// Only values where `col + row` is even correspond to hexes; conversion of
/// any other value truncates toward zero.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({col}, {row})")]
pub struct DoubledCoord {
    pub col: i32,
    pub row: i32,
}

impl DoubledCoord {
    pub const fn new(col: i32, row: i32) -> DoubledCoord {
        DoubledCoord { col, row }
    }

    fn narrowed(hex: Hex, col: i64, row: i64) -> Result<DoubledCoord, Error> {
        let (col, row) = narrow(hex, col, row)?;
        Ok(DoubledCoord { col, row })
    }

    fn wide(self) -> (i64, i64) {
        (i64::from(self.col), i64::from(self.row))
    }

    /// Doubled rows: each column steps its row by 2 (flat-top hexes).
    pub fn qdoubled_from_cube(hex: Hex) -> Result<DoubledCoord, Error> {
        let (q, r) = wide(hex);
        DoubledCoord::narrowed(hex, q, 2 * r + q)
    }

    pub fn qdoubled_to_cube(self) -> Result<Hex, Error> {
        let (col, row) = self.wide();
        Hex::checked(col, (row - col) / 2)
    }

    /// Doubled columns: each row steps its column by 2 (pointy-top hexes).
    pub fn rdoubled_from_cube(hex: Hex) -> Result<DoubledCoord, Error> {
        let (q, r) = wide(hex);
        DoubledCoord::narrowed(hex, 2 * q + r, r)
    }

    pub fn rdoubled_to_cube(self) -> Result<Hex, Error> {
        let (col, row) = self.wide();
        Hex::checked((col - row) / 2, row)
    }
}
