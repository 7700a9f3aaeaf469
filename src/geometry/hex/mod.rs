//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)
//!
//! [`Hex`] is the canonical cube coordinate. The other coordinate systems convert to and from it:
//!
//! - [`FractionalHex`] for interpolation and pixel picking
//! - [`OffsetCoord`] and [`DoubledCoord`] for rectangular storage
//! - [`Layout`] for projection into pixel space

pub mod coordinate;
pub mod direction;
mod error;
pub mod fractional;
pub mod layout;
pub mod offset;

pub use coordinate::{Hex, MAX_COORDINATE};
pub use direction::{Direction, DIAGONALS, DIRECTIONS};
pub use error::Error;
pub use fractional::FractionalHex;
pub use layout::{Layout, Orientation, FLAT, POINTY};
pub use offset::{DoubledCoord, OffsetCoord, Parity, EVEN, ODD};
