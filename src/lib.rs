pub mod config;
pub mod geometry;

pub use geometry::hex::{
    Direction, DoubledCoord, Error, FractionalHex, Hex, Layout, OffsetCoord, Orientation, Parity,
    EVEN, MAX_COORDINATE, ODD,
};
pub use geometry::Point;
