use std::str::FromStr;

use glam::Vec3;
use thiserror::Error;

/// Page variants in their fixed cycle order.
///
/// Declaration order is both the autoplay order and the source of each
/// variant's numeric index; nothing else stores the index. `Home` is the
/// fastest page and drifts quickest, `Checkout` the slowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Home,
    Category,
    Product,
    Cart,
    Checkout,
}

pub const VARIANTS: [Variant; 5] = [
    Variant::Home,
    Variant::Category,
    Variant::Product,
    Variant::Cart,
    Variant::Checkout,
];

#[derive(Debug, Error)]
#[error("unknown variant tag: {0}")]
pub struct UnknownVariant(pub String);

impl Variant {
    /// Position in the fixed cycle order, fed to the shader as a float.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next variant in cycle order, wrapping from the last back to the first.
    pub fn next(self) -> Variant {
        VARIANTS[(self.index() + 1) % VARIANTS.len()]
    }

    /// The `data-variant` value the pill markup uses for this variant.
    pub fn tag(self) -> &'static str {
        match self {
            Variant::Home => "home",
            Variant::Category => "category",
            Variant::Product => "product",
            Variant::Cart => "cart",
            Variant::Checkout => "checkout",
        }
    }

    /// Horizontal-line color.
    pub fn accent(self) -> Vec3 {
        match self {
            Variant::Home => Vec3::new(0.0, 148.0 / 255.0, 230.0 / 255.0), // primary blue
            Variant::Category => Vec3::new(0.21, 0.78, 0.72),              // teal
            Variant::Product => Vec3::new(0.13, 0.70, 1.0),                // light blue
            Variant::Cart => Vec3::new(1.0, 0.42, 0.21),                   // orange
            Variant::Checkout => Vec3::new(1.0, 0.51, 0.33),               // soft orange
        }
    }

    /// Vertical-line color.
    pub fn vertical(self) -> Vec3 {
        match self {
            Variant::Home => Vec3::new(1.0, 0.92, 0.29),     // neon yellow
            Variant::Category => Vec3::new(0.78, 0.48, 1.0), // laser purple
            Variant::Product => Vec3::new(1.0, 0.3, 0.3),    // cyber red
            Variant::Cart => Vec3::new(0.49, 1.0, 0.43),     // acid green
            Variant::Checkout => Vec3::new(0.39, 0.99, 0.85), // aqua mint
        }
    }

    /// How hard activating this variant kicks the field. Faster pages get
    /// the stronger kick.
    pub fn burst_strength(self) -> f32 {
        match self {
            Variant::Home => 1.6,
            Variant::Category => 1.3,
            Variant::Product => 1.1,
            Variant::Cart => 1.0,
            Variant::Checkout => 0.9,
        }
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VARIANTS
            .into_iter()
            .find(|v| v.tag() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}
