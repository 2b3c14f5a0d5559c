//! Celestial body registry: the sun plus the eight planets.
//!
//! Distances and radii are scene units, exaggerated for readability.
//! Periods are in Earth days and only set the relative orbital speeds.

use crate::error::{SimError, SimResult};

/// Body index constants (registry order).
pub const SUN: usize = 0;
pub const MERCURY: usize = 1;
pub const VENUS: usize = 2;
pub const EARTH: usize = 3;
pub const MARS: usize = 4;
pub const JUPITER: usize = 5;
pub const SATURN: usize = 6;
pub const URANUS: usize = 7;
pub const NEPTUNE: usize = 8;
pub const BODY_COUNT: usize = 9;

/// Immutable per-body data, created once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    /// Sphere radius in scene units (> 0).
    pub visual_radius: f64,
    /// Distance from the origin (0 for the sun).
    pub orbital_radius: f64,
    /// Orbital period in days; None for bodies that do not orbit.
    pub orbital_period: Option<f64>,
    /// Own-axis rotation, radians per second.
    pub axial_spin_rate: f64,
    /// Flat color used until (or instead of) the texture.
    pub color: u32,
    /// Texture path handed to the host.
    pub texture: &'static str,
}

impl CelestialBody {
    const fn planet(
        name: &'static str,
        visual_radius: f64,
        orbital_radius: f64,
        orbital_period: f64,
        axial_spin_rate: f64,
        color: u32,
        texture: &'static str,
    ) -> Self {
        Self {
            name,
            visual_radius,
            orbital_radius,
            orbital_period: Some(orbital_period),
            axial_spin_rate,
            color,
            texture,
        }
    }

    /// Default orbital speed: `1000 / period`, or 0 for a body that does
    /// not orbit.
    pub fn base_angular_rate(&self) -> f64 {
        self.orbital_period.map_or(0.0, |p| 1000.0 / p)
    }

    pub fn orbits(&self) -> bool {
        self.orbital_period.is_some() && self.orbital_radius > 0.0
    }
}

// ── Default table ────────────────────────────────────────────────────

pub const SUN_RADIUS: f64 = 140.0;
pub const SUN_COLOR: u32 = 0xffff00;

pub const BODIES: [CelestialBody; BODY_COUNT] = [
    CelestialBody {
        name: "Sun",
        visual_radius: SUN_RADIUS,
        orbital_radius: 0.0,
        orbital_period: None,
        axial_spin_rate: 0.0,
        color: SUN_COLOR,
        texture: "assets/sun.jpg",
    },
    CelestialBody::planet("Mercury", 30.0, 400.0, 88.0, 0.05, 0xcccccc, "assets/mercury.jpg"),
    CelestialBody::planet("Venus", 45.0, 550.0, 225.0, 0.03, 0xe6e6a1, "assets/venus.jpg"),
    CelestialBody::planet("Earth", 54.0, 700.0, 365.0, 0.1, 0x4d88ff, "assets/earth.jpg"),
    CelestialBody::planet("Mars", 36.0, 850.0, 687.0, 0.09, 0xff6600, "assets/mars.jpg"),
    CelestialBody::planet("Jupiter", 135.0, 1300.0, 4331.0, 0.2, 0xd9b38c, "assets/jupiter.jpg"),
    CelestialBody::planet("Saturn", 114.0, 1750.0, 10747.0, 0.18, 0xffc34d, "assets/saturn.jpg"),
    CelestialBody::planet("Uranus", 81.0, 2200.0, 30589.0, 0.15, 0x80bfff, "assets/uranus.jpg"),
    CelestialBody::planet("Neptune", 72.0, 2650.0, 59800.0, 0.12, 0x3366ff, "assets/neptune.jpg"),
];

/// Validated, fixed-size list of bodies. Indices are stable for the
/// lifetime of the registry.
#[derive(Debug, Clone)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
}

impl BodyRegistry {
    /// The sun and the eight planets.
    pub fn solar_system() -> Self {
        Self {
            bodies: BODIES.to_vec(),
        }
    }

    /// Build a registry from a custom table. Names must be unique, radii
    /// positive, distances non-negative and periods positive.
    pub fn new(bodies: Vec<CelestialBody>) -> SimResult<Self> {
        for (i, body) in bodies.iter().enumerate() {
            if bodies[..i].iter().any(|b| b.name == body.name) {
                return Err(SimError::InvalidArgument(format!("duplicate body '{}'", body.name)));
            }
            if body.visual_radius.is_nan() || body.visual_radius <= 0.0 {
                return Err(SimError::InvalidArgument(format!(
                    "'{}' needs a positive radius, got {}",
                    body.name, body.visual_radius
                )));
            }
            if body.orbital_radius.is_nan() || body.orbital_radius < 0.0 {
                return Err(SimError::InvalidArgument(format!(
                    "'{}' has a negative orbital radius",
                    body.name
                )));
            }
            if let Some(period) = body.orbital_period {
                if !period.is_finite() || period <= 0.0 {
                    return Err(SimError::InvalidArgument(format!(
                        "'{}' has a non-positive period {period}",
                        body.name
                    )));
                }
            }
        }
        Ok(Self { bodies })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    pub fn by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.index_of(name).map(|i| &self.bodies[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Bodies that travel around the origin, with their registry index.
    pub fn orbiting(&self) -> impl Iterator<Item = (usize, &CelestialBody)> {
        self.bodies.iter().enumerate().filter(|(_, b)| b.orbits())
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::solar_system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_sun_and_eight_planets() {
        let reg = BodyRegistry::solar_system();
        assert_eq!(reg.len(), BODY_COUNT);
        assert_eq!(reg.get(SUN).unwrap().name, "Sun");
        assert_eq!(reg.get(NEPTUNE).unwrap().name, "Neptune");
        assert_eq!(reg.orbiting().count(), 8);
        assert_eq!(reg.index_of("Earth"), Some(EARTH));
    }

    #[test]
    fn base_rate_is_thousand_over_period() {
        let earth = BODIES[EARTH];
        assert!((earth.base_angular_rate() - 1000.0 / 365.0).abs() < 1e-12);
        assert!((BODIES[MERCURY].base_angular_rate() - 11.363_636).abs() < 1e-5);
        assert_eq!(BODIES[SUN].base_angular_rate(), 0.0);
        assert!(!BODIES[SUN].orbits());
    }

    #[test]
    fn table_constants() {
        assert_eq!(BODIES[JUPITER].visual_radius, 135.0);
        assert_eq!(BODIES[SATURN].orbital_radius, 1750.0);
        assert_eq!(BODIES[URANUS].axial_spin_rate, 0.15);
        assert_eq!(BODIES[MARS].color, 0xff6600);
        assert_eq!(BODIES[VENUS].texture, "assets/venus.jpg");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let body = BODIES[EARTH];
        let err = BodyRegistry::new(vec![body, body]).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument(_)));
    }

    #[test]
    fn bad_radius_is_rejected() {
        let mut body = BODIES[MARS];
        body.visual_radius = 0.0;
        assert!(BodyRegistry::new(vec![body]).is_err());
        body.visual_radius = f64::NAN;
        assert!(BodyRegistry::new(vec![body]).is_err());
    }

    #[test]
    fn lookup_of_unknown_name() {
        let reg = BodyRegistry::solar_system();
        assert!(reg.by_name("Pluto").is_none());
    }
}
