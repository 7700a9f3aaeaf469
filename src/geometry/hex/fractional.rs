use super::{Error, Hex, MAX_COORDINATE};

/// Cube coordinates which may fall between lattice hexes.
///
/// Produced by interpolation and by [`Layout::to_hex`](super::Layout::to_hex);
/// snap to the lattice with [`FractionalHex::round`].
///
/// Constraint: `round(q + r + s) == 0`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, parse_display::Display)]
#[display("({q}, {r}, {s})")]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    /// Construct from cube coordinates, checking that they sum to 0 after rounding.
    ///
    /// Non-finite coordinates never satisfy the constraint.
    pub fn new(q: f64, r: f64, s: f64) -> Result<FractionalHex, Error> {
        if (q + r + s).round() != 0.0 {
            return Err(Error::FractionalInvariantViolation { q, r, s });
        }
        Ok(FractionalHex { q, r, s })
    }

    pub fn q(self) -> f64 {
        self.q
    }

    pub fn r(self) -> f64 {
        self.r
    }

    pub fn s(self) -> f64 {
        self.s
    }

    pub(crate) fn nudged(self, (dq, dr, ds): (f64, f64, f64)) -> FractionalHex {
        FractionalHex {
            q: self.q + dq,
            r: self.r + dr,
            s: self.s + ds,
        }
    }

    /// Interpolate each axis independently: `t == 0` yields `self`, `t == 1` yields `other`.
    pub fn lerp(self, other: FractionalHex, t: f64) -> FractionalHex {
        let lerp = |a: f64, b: f64| a * (1.0 - t) + b * t;
        FractionalHex {
            q: lerp(self.q, other.q),
            r: lerp(self.r, other.r),
            s: lerp(self.s, other.s),
        }
    }

    /// Snap to the nearest lattice hex.
    ///
    /// Each axis is rounded on its own; the axis which moved furthest is then
    /// recomputed from the other two. `q` is recomputed only when its error is
    /// strictly the largest, otherwise `r` when its error strictly exceeds that
    /// of `s`, otherwise `s`.
    ///
    /// A result beyond [`MAX_COORDINATE`] saturates: `q` and `r` are clamped to
    /// half of it on either side, so that `s` stays in range as well. NaN rounds
    /// to 0. [`FractionalHex::try_round`] reports both cases instead.
    pub fn round(self) -> Hex {
        let (q, r) = self.round_axial();
        let limit = f64::from(MAX_COORDINATE);
        if q.abs() <= limit && r.abs() <= limit && (q + r).abs() <= limit {
            return Hex::from_axial(q as i32, r as i32);
        }
        let half = f64::from(MAX_COORDINATE / 2);
        Hex::from_axial(q.clamp(-half, half) as i32, r.clamp(-half, half) as i32)
    }

    /// As [`FractionalHex::round`], but fails rather than saturating.
    pub fn try_round(self) -> Result<Hex, Error> {
        let (q, r) = self.round_axial();
        if !q.is_finite() || !r.is_finite() {
            return Err(Error::FractionalInvariantViolation {
                q: self.q,
                r: self.r,
                s: self.s,
            });
        }
        let limit = f64::from(MAX_COORDINATE);
        if q.abs() > limit || r.abs() > limit {
            // saturating casts; only reported, never computed with
            return Err(Error::OutOfRange {
                q: q as i64,
                r: r as i64,
                s: (-q - r) as i64,
            });
        }
        Hex::checked(q as i64, r as i64)
    }

    /// Rounded `q` and `r`, with the largest rounding error absorbed by one axis.
    fn round_axial(self) -> (f64, f64) {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }
        // otherwise s is the one to recompute, which `from_axial` does anyway

        (q, r)
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        FractionalHex {
            q: hex.q() as f64,
            r: hex.r() as f64,
            s: hex.s() as f64,
        }
    }
}
