use crate::constants::{BURST_DECAY, BURST_FLOOR};
use crate::variant::Variant;

/// Render-facing state: which variant is active and how much of the
/// transient burst kick is still in flight.
///
/// Shared between the DOM adapters and the frame loop; created at init and
/// lives for the page's lifetime.
pub struct FieldEngine {
    active: Variant,
    burst: f32,
}

impl FieldEngine {
    pub fn new(initial: Variant) -> Self {
        Self {
            active: initial,
            burst: 0.0,
        }
    }

    pub fn active(&self) -> Variant {
        self.active
    }

    pub fn burst(&self) -> f32 {
        self.burst
    }

    /// Make a variant active. `None` (an unknown or missing tag) falls back
    /// to the first variant. Non-silent activation overwrites the burst with
    /// the variant's configured strength, so repeated activations cannot
    /// compound it.
    pub fn activate(&mut self, requested: Option<Variant>, silent: bool) -> Variant {
        let variant = requested.unwrap_or(Variant::Home);
        self.active = variant;
        if !silent {
            self.burst = variant.burst_strength();
        }
        variant
    }

    /// Autoplay step: next variant in cycle order, never silent.
    pub fn advance(&mut self) -> Variant {
        let next = self.active.next();
        self.activate(Some(next), false)
    }

    /// Per-frame burst decay. Snaps to exactly zero once below the floor so
    /// the field holds no sub-visible motion.
    pub fn tick(&mut self) {
        self.burst *= BURST_DECAY;
        if self.burst < BURST_FLOOR {
            self.burst = 0.0;
        }
    }
}
