//! Spacing-constrained random placement.
//!
//! `SpacedPlacer` is stateless: every sample is independent and uniform inside
//! an axis-aligned box centred on `anchor`. Spacing is best effort: after
//! `max_attempts` rejected samples the last one is accepted anyway, so a box
//! that is too small for the requested spacing never stalls a wave.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used for target placement and spin.
#[derive(Resource, Debug, Clone)]
pub struct PlacementRng(pub ChaCha8Rng);

impl PlacementRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// `None` draws a seed from the thread RNG.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self::seeded(seed.unwrap_or_else(rand::random))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacedPlacer {
    pub anchor: Vec3,
    pub half_extents: Vec3,
}

/// Outcome of one placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub attempts: u32,
    /// `false` when the attempt budget ran out and the last sample was kept.
    pub spaced: bool,
}

impl SpacedPlacer {
    /// Non-finite extents collapse to zero on that axis.
    pub fn new(anchor: Vec3, half_extents: Vec3) -> Self {
        let clean = |h: f32| if h.is_finite() { h.abs() } else { 0.0 };
        Self {
            anchor,
            half_extents: Vec3::new(
                clean(half_extents.x),
                clean(half_extents.y),
                clean(half_extents.z),
            ),
        }
    }

    /// Uniform sample inside the box.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let h = self.half_extents;
        self.anchor
            + Vec3::new(
                rng.gen_range(-h.x..=h.x),
                rng.gen_range(-h.y..=h.y),
                rng.gen_range(-h.z..=h.z),
            )
    }

    /// Find a position at least `min_spacing` away from everything in `placed`.
    ///
    /// At least one sample is always drawn, even with a zero budget.
    pub fn place<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        placed: &[Vec3],
        min_spacing: f32,
        max_attempts: u32,
    ) -> Placement {
        let budget = max_attempts.max(1);
        let mut position = self.anchor;

        for attempt in 1..=budget {
            position = self.sample(rng);
            let clear = placed.iter().all(|p| p.distance(position) >= min_spacing);
            if clear {
                return Placement {
                    position,
                    attempts: attempt,
                    spaced: true,
                };
            }
        }

        Placement {
            position,
            attempts: budget,
            spaced: false,
        }
    }
}
