//! Orbit-style camera controller.
//!
//! Left drag orbits around the target, right drag pans, the wheel dollies.
//! Input only accumulates deltas; `update()` applies them once per frame
//! and, with damping enabled, lets the motion decay smoothly over the
//! following frames.

use std::f32::consts::{PI, TAU};
use glam::Vec3;
use crate::input::queue::InputEvent;
use crate::renderer::camera::{PerspectiveCamera, Viewport};

/// Keeps the camera from flipping over the poles.
const POLAR_EPSILON: f32 = 1e-6;

/// Controller setup, provided by the game through `GameConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsConfig {
    pub enable_damping: bool,
    /// Fraction of the pending motion applied per update (0..1).
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// When false, vertical panning moves the target in the world XZ plane.
    pub screen_space_panning: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub target: Vec3,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_damping: false,
            damping_factor: 0.05,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            screen_space_panning: true,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            target: Vec3::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Drag {
    Idle,
    Rotate { x: f32, y: f32 },
    Pan { x: f32, y: f32 },
}

/// Spherical coordinates of the eye around the target (Y-up).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    /// Polar angle from +Y.
    phi: f32,
    /// Azimuth around Y, measured from +Z toward +X.
    theta: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self { radius, phi: 0.0, theta: 0.0 };
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

pub struct OrbitControls {
    config: ControlsConfig,
    target: Vec3,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vec3,
    drag: Drag,
}

impl OrbitControls {
    pub fn new(config: ControlsConfig) -> Self {
        Self {
            target: config.target,
            config,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            drag: Drag::Idle,
        }
    }

    pub fn config(&self) -> &ControlsConfig {
        &self.config
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag != Drag::Idle
    }

    /// Feed one input event. Only pointer and wheel events are consumed.
    pub fn handle_input(&mut self, event: &InputEvent, camera: &PerspectiveCamera, viewport: Viewport) {
        match *event {
            InputEvent::PointerDown { x, y, button } => {
                self.drag = match button {
                    0 => Drag::Rotate { x, y },
                    2 => Drag::Pan { x, y },
                    _ => Drag::Idle,
                };
            }
            InputEvent::PointerMove { x, y } => match self.drag {
                Drag::Rotate { x: lx, y: ly } => {
                    let h = viewport.height.max(1.0);
                    self.rotate_left(TAU * (x - lx) / h * self.config.rotate_speed);
                    self.rotate_up(TAU * (y - ly) / h * self.config.rotate_speed);
                    self.drag = Drag::Rotate { x, y };
                }
                Drag::Pan { x: lx, y: ly } => {
                    self.pan((x - lx) * self.config.pan_speed, (y - ly) * self.config.pan_speed, camera, viewport);
                    self.drag = Drag::Pan { x, y };
                }
                Drag::Idle => {}
            },
            InputEvent::PointerUp { .. } => self.drag = Drag::Idle,
            InputEvent::Wheel { delta_y } => {
                let zoom = self.zoom_scale();
                if delta_y < 0.0 {
                    self.scale *= zoom;
                } else if delta_y > 0.0 {
                    self.scale /= zoom;
                }
            }
            _ => {}
        }
    }

    /// Apply pending motion to the camera. Call once per frame.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        let mut s = Spherical::from_offset(camera.position - self.target);

        let f = if self.config.enable_damping { self.config.damping_factor } else { 1.0 };
        s.theta += self.delta_theta * f;
        s.phi += self.delta_phi * f;
        s.phi = s.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        s.radius = (s.radius * self.scale).clamp(self.config.min_distance, self.config.max_distance);
        self.target += self.pan_offset * f;

        camera.position = self.target + s.to_offset();
        camera.look_at(self.target);

        if self.config.enable_damping {
            let decay = 1.0 - self.config.damping_factor;
            self.delta_theta *= decay;
            self.delta_phi *= decay;
            self.pan_offset *= decay;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;
    }

    fn zoom_scale(&self) -> f32 {
        0.95_f32.powf(self.config.zoom_speed)
    }

    fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    fn pan(&mut self, dx: f32, dy: f32, camera: &PerspectiveCamera, viewport: Viewport) {
        // Scale pixels to world units at the target's depth.
        let half_fov = (camera.fov_y_degrees.to_radians() / 2.0).tan();
        let target_distance = camera.distance_to_target() * half_fov;
        let h = viewport.height.max(1.0);

        let right = camera.right();
        self.pan_offset += right * (-2.0 * dx * target_distance / h);

        let up = if self.config.screen_space_panning {
            right.cross((camera.target - camera.position).normalize_or_zero())
        } else {
            camera.up.cross(right)
        };
        self.pan_offset += up * (2.0 * dy * target_distance / h);
    }
}
