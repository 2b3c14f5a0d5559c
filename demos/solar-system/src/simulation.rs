//! Per-body orbital state and the global pause flag.
//!
//! Orbits are circular and uniform in the XZ plane. One `BodyState` exists
//! per registry body, in the same order, for the lifetime of the state.

use glam::DVec3;
use orrery_engine::Rng;

use crate::bodies::{BodyRegistry, CelestialBody};
use crate::error::{SimError, SimResult};

/// Scales every orbital step; tuned for visual speed, not derived.
pub const TIME_SCALE: f64 = 0.1;

/// Mutable state of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Radians; grows without bound, only cos/sin are read.
    pub orbit_angle: f64,
    /// User-adjustable orbital rate, always finite and >= 0.
    pub angular_rate_override: f64,
    /// Own-axis rotation accumulator, radians.
    pub spin_angle: f64,
    pub highlighted: bool,
}

/// Position of a body on its circular orbit.
pub fn world_position(orbital_radius: f64, orbit_angle: f64) -> DVec3 {
    DVec3::new(orbit_angle.cos() * orbital_radius, 0.0, orbit_angle.sin() * orbital_radius)
}

pub struct SimulationState {
    registry: BodyRegistry,
    states: Vec<BodyState>,
    paused: bool,
    last_picked: Option<usize>,
}

impl SimulationState {
    /// Create state for every body, with start angles drawn from `rng` so
    /// the planets do not line up.
    pub fn new(registry: BodyRegistry, rng: &mut Rng) -> Self {
        let states = registry
            .iter()
            .map(|body| BodyState {
                orbit_angle: rng.angle(),
                angular_rate_override: body.base_angular_rate(),
                spin_angle: 0.0,
                highlighted: false,
            })
            .collect();
        Self {
            registry,
            states,
            paused: false,
            last_picked: None,
        }
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    /// Advance all bodies by `delta_seconds`. No-op while paused. Negative
    /// or non-finite deltas count as zero.
    pub fn advance(&mut self, delta_seconds: f64) {
        if self.paused || !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return;
        }
        for (body, state) in self.registry.iter().zip(self.states.iter_mut()) {
            state.orbit_angle += state.angular_rate_override * delta_seconds * TIME_SCALE;
            state.spin_angle += body.axial_spin_rate * delta_seconds;
        }
    }

    /// Set the orbital rate of one body.
    pub fn set_speed_override(&mut self, name: &str, value: f64) -> SimResult<()> {
        let index = self.registry.index_of(name).ok_or_else(|| SimError::unknown_body(name))?;
        if !value.is_finite() || value < 0.0 {
            return Err(SimError::InvalidArgument(format!(
                "speed {value} for '{name}' must be finite and non-negative"
            )));
        }
        self.states[index].angular_rate_override = value;
        Ok(())
    }

    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::debug!("simulation {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn body(&self, name: &str) -> Option<&CelestialBody> {
        self.registry.by_name(name)
    }

    pub fn state(&self, name: &str) -> Option<&BodyState> {
        self.registry.index_of(name).map(|i| &self.states[i])
    }

    /// Current position of the body at `index`, or None if out of range.
    pub fn position_at(&self, index: usize) -> Option<DVec3> {
        let body = self.registry.get(index)?;
        Some(world_position(body.orbital_radius, self.states[index].orbit_angle))
    }

    pub fn position_of(&self, name: &str) -> Option<DVec3> {
        self.position_at(self.registry.index_of(name)?)
    }

    /// Bodies paired with their state, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&CelestialBody, &BodyState)> {
        self.registry.iter().zip(self.states.iter())
    }

    pub fn highlighted(&self, name: &str) -> bool {
        self.state(name).is_some_and(|s| s.highlighted)
    }

    pub fn last_picked(&self) -> Option<&'static str> {
        self.last_picked.and_then(|i| self.registry.get(i)).map(|b| b.name)
    }

    /// Make `name` the only highlighted body and remember it as last picked.
    pub fn highlight(&mut self, name: &str) -> SimResult<()> {
        let index = self.registry.index_of(name).ok_or_else(|| SimError::unknown_body(name))?;
        for (i, state) in self.states.iter_mut().enumerate() {
            state.highlighted = i == index;
        }
        self.last_picked = Some(index);
        Ok(())
    }

    /// Remove any highlight and forget the last picked body.
    pub fn clear_highlight(&mut self) {
        for state in &mut self.states {
            state.highlighted = false;
        }
        self.last_picked = None;
    }
}
