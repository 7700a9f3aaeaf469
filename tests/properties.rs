//! Run with: `cargo test --test properties`

use hexmath::{
    geometry::hex::{direction, FLAT, POINTY},
    Direction, DoubledCoord, FractionalHex, Hex, Layout, OffsetCoord, Parity, Point,
    MAX_COORDINATE,
};
use proptest::prelude::*;

fn any_hex() -> impl Strategy<Value = Hex> {
    (-1000i32..1000, -1000i32..1000).prop_map(|(q, r)| Hex::axial(q, r).unwrap())
}

fn any_parity() -> impl Strategy<Value = Parity> {
    prop_oneof![Just(Parity::Even), Just(Parity::Odd)]
}

fn any_layout() -> impl Strategy<Value = Layout> {
    (
        prop_oneof![Just(POINTY), Just(FLAT)],
        1.0f64..100.0,
        1.0f64..100.0,
        -1000.0f64..1000.0,
        -1000.0f64..1000.0,
    )
        .prop_map(|(orientation, sx, sy, ox, oy)| {
            Layout::new(orientation, Point::new(sx, sy), Point::new(ox, oy))
        })
}

proptest! {
    #[test]
    fn cube_coordinates_sum_to_zero(h in any_hex(), k in -10i32..10) {
        let scaled = h.scale(k).unwrap();
        for hex in [h, scaled, h.rotate_left(), h.rotate_right(), -h].iter() {
            prop_assert_eq!(hex.q() + hex.r() + hex.s(), 0);
        }
    }

    #[test]
    fn new_rejects_every_nonzero_sum(q in -1000i32..1000, r in -1000i32..1000, s in -1000i32..1000) {
        prop_assert_eq!(Hex::new(q, r, s).is_ok(), q + r + s == 0);
    }

    #[test]
    fn accepted_hexes_convert_without_overflow(q in (i32::MIN / 2)..(i32::MAX / 2), r in (i32::MIN / 2)..(i32::MAX / 2)) {
        if let Ok(hex) = Hex::new(q, r, -q - r) {
            prop_assert!(hex.q().abs() <= MAX_COORDINATE);
            let _ = (hex.length(), hex.rotate_left(), hex.rotate_right(), hex.distance(-hex));
            prop_assert!(DoubledCoord::rdoubled_from_cube(hex).is_ok());
            prop_assert!(OffsetCoord::roffset_from_cube(Parity::Odd, hex).is_ok());
        }
    }

    #[test]
    fn rotations_invert(h in any_hex()) {
        prop_assert_eq!(h.rotate_left().rotate_right(), h);
        prop_assert_eq!(h.rotate_right().rotate_left(), h);
    }

    #[test]
    fn six_rotations_return_home(h in any_hex()) {
        let rotated = (0..6).fold(h, |hex, _| hex.rotate_left());
        prop_assert_eq!(rotated, h);
    }

    #[test]
    fn rotation_preserves_length(h in any_hex()) {
        prop_assert_eq!(h.rotate_left().length(), h.length());
    }

    #[test]
    fn neighbor_is_add_direction(h in any_hex(), d in 0usize..6) {
        let unit = direction::direction(d).unwrap();
        prop_assert_eq!(h + unit.scale(1).unwrap(), h.neighbor(d).unwrap());
        prop_assert_eq!(h.neighbor(d).unwrap(), h + Direction::iter().nth(d).unwrap());
    }

    #[test]
    fn distance_is_a_metric(a in any_hex(), b in any_hex()) {
        prop_assert_eq!(a.distance(a), 0);
        prop_assert_eq!(a.distance(b), b.distance(a));
        prop_assert!(a.distance(b) >= 0);
    }

    #[test]
    fn linedraw_spans_endpoints(a in any_hex(), b in any_hex()) {
        let line = a.linedraw(b);
        prop_assert_eq!(line.len() as i32, a.distance(b) + 1);
        prop_assert_eq!(line.first().copied(), Some(a));
        prop_assert_eq!(line.last().copied(), Some(b));
    }

    #[test]
    fn round_restores_lattice_hex(h in any_hex()) {
        prop_assert_eq!(FractionalHex::from(h).round(), h);
    }

    #[test]
    fn offset_roundtrip_from_cube(h in any_hex(), parity in any_parity()) {
        prop_assert_eq!(OffsetCoord::qoffset_from_cube(parity, h).unwrap().qoffset_to_cube(parity), Ok(h));
        prop_assert_eq!(OffsetCoord::roffset_from_cube(parity, h).unwrap().roffset_to_cube(parity), Ok(h));
    }

    #[test]
    fn offset_roundtrip_to_cube(col in -1000i32..1000, row in -1000i32..1000, parity in any_parity()) {
        let c = OffsetCoord::new(col, row);
        prop_assert_eq!(OffsetCoord::qoffset_from_cube(parity, c.qoffset_to_cube(parity).unwrap()), Ok(c));
        prop_assert_eq!(OffsetCoord::roffset_from_cube(parity, c.roffset_to_cube(parity).unwrap()), Ok(c));
    }

    #[test]
    fn doubled_roundtrip_from_cube(h in any_hex()) {
        prop_assert_eq!(DoubledCoord::qdoubled_from_cube(h).unwrap().qdoubled_to_cube(), Ok(h));
        prop_assert_eq!(DoubledCoord::rdoubled_from_cube(h).unwrap().rdoubled_to_cube(), Ok(h));
    }

    #[test]
    fn doubled_roundtrip_to_cube(col in -1000i32..1000, half_row in -500i32..500) {
        // only coordinates with an even `col + row` name a hex
        let c = DoubledCoord::new(col, 2 * half_row + col.rem_euclid(2));
        prop_assert_eq!(DoubledCoord::qdoubled_from_cube(c.qdoubled_to_cube().unwrap()), Ok(c));
        prop_assert_eq!(DoubledCoord::rdoubled_from_cube(c.rdoubled_to_cube().unwrap()), Ok(c));
    }

    #[test]
    fn layout_roundtrip(h in any_hex(), layout in any_layout()) {
        let fractional = layout.to_hex(layout.to_pixel(h)).unwrap();
        prop_assert!((fractional.q() - h.q() as f64).abs() < 1e-6);
        prop_assert!((fractional.r() - h.r() as f64).abs() < 1e-6);
        prop_assert_eq!(fractional.round(), h);
    }
}
