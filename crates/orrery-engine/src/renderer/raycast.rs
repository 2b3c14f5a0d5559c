//! Pointer picking: rays through the camera and nearest-hit sphere queries.

use glam::{Vec2, Vec3};
use crate::api::types::EntityId;
use crate::renderer::camera::PerspectiveCamera;

/// A half-line starting at `origin` along unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first intersection with a sphere,
    /// or None if the ray misses or the sphere is entirely behind the origin.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        if near >= 0.0 {
            return Some(near);
        }
        // Origin inside the sphere: the exit point is the hit.
        let far = -b + sqrt_d;
        (far >= 0.0).then_some(far)
    }
}

/// A pickable sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickTarget {
    pub id: EntityId,
    pub center: Vec3,
    pub radius: f32,
}

/// Closest intersection returned by a pick query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: EntityId,
    pub distance: f32,
    pub point: Vec3,
}

#[derive(Debug, Clone, Copy)]
pub struct Raycaster {
    pub ray: Ray,
}

impl Raycaster {
    /// Ray from the camera eye through a point in normalized device
    /// coordinates (x right, y up, both in [-1, 1]).
    pub fn from_camera(ndc: Vec2, camera: &PerspectiveCamera) -> Self {
        let through = camera.unproject(ndc.extend(0.5));
        Self {
            ray: Ray::new(camera.position, through - camera.position),
        }
    }

    /// Nearest hit among `targets`, sorted by distance along the ray.
    pub fn intersect_nearest<'a>(&self, targets: impl IntoIterator<Item = &'a PickTarget>) -> Option<Hit> {
        targets
            .into_iter()
            .filter_map(|t| {
                self.ray.intersect_sphere(t.center, t.radius).map(|distance| Hit {
                    id: t.id,
                    distance,
                    point: self.ray.at(distance),
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
