// Tests for the variant model: ordering, parsing, colors, burst strengths.

use std::str::FromStr;

use field_core::{Variant, VARIANTS};

#[test]
fn cycle_order_and_indices() {
    assert_eq!(VARIANTS[0], Variant::Home);
    assert_eq!(VARIANTS[4], Variant::Checkout);
    for (i, v) in VARIANTS.into_iter().enumerate() {
        assert_eq!(v.index(), i);
    }
}

#[test]
fn next_wraps_after_the_last_variant() {
    assert_eq!(Variant::Checkout.next(), Variant::Home);
    let mut v = Variant::Home;
    for _ in 0..VARIANTS.len() {
        v = v.next();
    }
    assert_eq!(v, Variant::Home);
}

#[test]
fn tags_round_trip() {
    for v in VARIANTS {
        assert_eq!(Variant::from_str(v.tag()).unwrap(), v);
    }
}

#[test]
fn unknown_tags_error() {
    assert!(Variant::from_str("landing").is_err());
    assert!(Variant::from_str("Home").is_err());
    assert!(Variant::from_str("").is_err());
}

#[test]
fn burst_strength_decreases_from_fastest_to_slowest() {
    for pair in VARIANTS.windows(2) {
        assert!(
            pair[0].burst_strength() > pair[1].burst_strength(),
            "{:?} should kick harder than {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn colors_stay_in_unit_range() {
    for v in VARIANTS {
        for color in [v.accent(), v.vertical()] {
            for channel in color.to_array() {
                assert!((0.0..=1.0).contains(&channel), "{v:?}: {channel}");
            }
        }
    }
}
