pub mod hex;
pub mod point;

pub use hex::{Hex, Layout};
pub use point::Point;
