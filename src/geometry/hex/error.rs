/// Errors produced by hex coordinate construction and conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("cube coordinates must sum to 0: q={q}, r={r}, s={s}")]
    InvariantViolation { q: i32, r: i32, s: i32 },
    #[error("cube coordinates out of range: q={q}, r={r}, s={s}")]
    OutOfRange { q: i64, r: i64, s: i64 },
    #[error("fractional cube coordinates must sum to 0: q={q}, r={r}, s={s}")]
    FractionalInvariantViolation { q: f64, r: f64, s: f64 },
    #[error("offset must be EVEN (+1) or ODD (-1); got {0}")]
    InvalidParity(i32),
    #[error("direction index must be in 0..6; got {0}")]
    InvalidDirection(usize),
    #[error("could not parse hex coordinate from {0:?}")]
    Parse(String),
}
