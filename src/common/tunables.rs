//! Tunable gameplay constants.
//!
//! Fixed at app construction. `load_or_default` reads an optional RON file;
//! every field missing from the file keeps its default.

use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

/// Default location of the tunables override file, relative to the working directory.
pub const TUNABLES_PATH: &str = "assets/tunables.ron";

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub round_duration_secs: f32,
    pub wave_cleared_bonus: i32,
    pub target_pool_size: usize,
    /// Center of the spawn box.
    pub spawn_anchor: [f32; 3],
    pub spawn_half_extents: [f32; 3],
    pub min_target_spacing: f32,
    pub max_placement_attempts: u32,
    pub target_points: i32,
    pub target_max_health: f32,
    pub target_spin_degrees_per_sec: f32,
    pub reveal_step_delay_secs: f32,
    pub countdown_secs: u32,
    pub cannonball_pool_size: usize,
    pub cannonball_speed: f32,
    pub cannonball_lifetime_secs: f32,
    pub cannonball_damage: f32,
    /// `None` seeds placement from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            round_duration_secs: 60.0,
            wave_cleared_bonus: 100,
            target_pool_size: 5,
            spawn_anchor: [0.0, 2.5, -12.0],
            spawn_half_extents: [5.0, 2.5, 2.0],
            min_target_spacing: 1.0,
            max_placement_attempts: 5,
            target_points: 10,
            target_max_health: 1.0,
            target_spin_degrees_per_sec: 90.0,
            reveal_step_delay_secs: 1.0,
            countdown_secs: 3,
            cannonball_pool_size: 32,
            cannonball_speed: 10.0,
            cannonball_lifetime_secs: 2.0,
            cannonball_damage: 1.0,
            rng_seed: None,
        }
    }
}

impl Tunables {
    pub fn spawn_anchor(&self) -> Vec3 {
        Vec3::from_array(self.spawn_anchor)
    }

    pub fn spawn_half_extents(&self) -> Vec3 {
        Vec3::from_array(self.spawn_half_extents)
    }

    /// Parse tunables from RON text. Out-of-range values are replaced by
    /// their defaults (see [`Tunables::sanitized`]).
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str::<Self>(text).map(Self::sanitized)
    }

    /// Replace every value that would break a timer, the placer or physics
    /// with its default.
    ///
    /// Durations, extents, spacing and health must be finite and
    /// non-negative. Anchor, speed, spin and damage must be finite.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn non_negative(name: &str, value: &mut f32, default: f32) {
            if !value.is_finite() || *value < 0.0 {
                warn!("Tunable {name} = {value} is out of range, using {default}");
                *value = default;
            }
        }

        fn finite(name: &str, value: &mut f32, default: f32) {
            if !value.is_finite() {
                warn!("Tunable {name} = {value} is not finite, using {default}");
                *value = default;
            }
        }

        non_negative(
            "round_duration_secs",
            &mut self.round_duration_secs,
            defaults.round_duration_secs,
        );
        non_negative(
            "min_target_spacing",
            &mut self.min_target_spacing,
            defaults.min_target_spacing,
        );
        non_negative(
            "target_max_health",
            &mut self.target_max_health,
            defaults.target_max_health,
        );
        non_negative(
            "reveal_step_delay_secs",
            &mut self.reveal_step_delay_secs,
            defaults.reveal_step_delay_secs,
        );
        non_negative(
            "cannonball_lifetime_secs",
            &mut self.cannonball_lifetime_secs,
            defaults.cannonball_lifetime_secs,
        );
        finite(
            "target_spin_degrees_per_sec",
            &mut self.target_spin_degrees_per_sec,
            defaults.target_spin_degrees_per_sec,
        );
        finite(
            "cannonball_speed",
            &mut self.cannonball_speed,
            defaults.cannonball_speed,
        );
        finite(
            "cannonball_damage",
            &mut self.cannonball_damage,
            defaults.cannonball_damage,
        );

        for axis in 0..3 {
            non_negative(
                "spawn_half_extents",
                &mut self.spawn_half_extents[axis],
                defaults.spawn_half_extents[axis],
            );
            finite(
                "spawn_anchor",
                &mut self.spawn_anchor[axis],
                defaults.spawn_anchor[axis],
            );
        }

        self
    }

    /// Load from `path`, falling back to defaults.
    ///
    /// A missing file is the normal case and is not reported.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("Failed to read {}: {e}, using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_ron(&text) {
            Ok(tunables) => {
                info!("Loaded tunables from {}", path.display());
                tunables
            }
            Err(e) => {
                warn!("Failed to parse {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
