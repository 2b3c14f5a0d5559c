//! Static background starfield: points scattered uniformly in a cube.

use crate::components::mesh::Rgb;
use crate::core::rng::Rng;
use crate::renderer::instance::StarVertex;

/// Starfield description and its generated points.
pub struct Starfield {
    stars: Vec<StarVertex>,
    pub color: Rgb,
    /// Point size in world units.
    pub size: f32,
}

impl Starfield {
    /// Scatter `count` stars in a cube of side `spread` centered at the origin.
    pub fn generate(count: usize, spread: f32, rng: &mut Rng) -> Self {
        let spread = spread as f64;
        let stars = (0..count)
            .map(|_| StarVertex {
                x: rng.spread(spread) as f32,
                y: rng.spread(spread) as f32,
                z: rng.spread(spread) as f32,
            })
            .collect();
        Self {
            stars,
            color: Rgb::WHITE,
            size: 0.1,
        }
    }

    pub fn empty() -> Self {
        Self {
            stars: Vec::new(),
            color: Rgb::WHITE,
            size: 0.1,
        }
    }

    pub fn stars(&self) -> &[StarVertex] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

impl Default for Starfield {
    fn default() -> Self {
        Self::empty()
    }
}
