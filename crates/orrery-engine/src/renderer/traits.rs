//! Renderer trait: the seam between the engine and a drawing backend.
//!
//! In the browser the backend is the shared frame buffer read by the host's
//! WebGPU renderer (see `orrery-web`). Native backends or test doubles
//! implement the same trait.

use crate::api::types::GameEvent;
use crate::components::mesh::Rgb;
use crate::error::EngineResult;
use crate::renderer::camera::{CameraUniform, Viewport};
use crate::renderer::instance::{MeshInstance, RingInstance, StarVertex};
use crate::systems::lighting::PointLight;

/// Timing information from a draw call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawTiming {
    /// Time spent submitting draw calls (microseconds)
    pub draw_us: u32,
}

/// Renderer trait for drawing backends.
pub trait Renderer {
    /// Backend identifier (e.g., "webgpu-buffer", "recording").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame. An error here is not recoverable mid-loop;
    /// the runner propagates it to the host.
    fn draw(&mut self, frame: &FrameData) -> EngineResult<DrawTiming>;

    /// Handle a viewport resize (CSS pixels).
    fn resize(&mut self, width: u32, height: u32);
}

/// Complete frame data for rendering.
/// Aggregates all render data produced by engine systems.
pub struct FrameData<'a> {
    pub frame: u64,
    pub viewport: Viewport,
    pub camera: CameraUniform,
    pub background: Rgb,
    pub meshes: &'a [MeshInstance],
    pub rings: &'a [RingInstance],
    pub stars: &'a [StarVertex],
    pub star_color: Rgb,
    pub star_size: f32,
    pub lights: &'a [PointLight],
    pub ambient: Rgb,
    /// Game events emitted during this frame.
    pub events: &'a [GameEvent],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::renderer::camera::PerspectiveCamera;

    struct Flaky {
        draws: u32,
        fail_on: u32,
    }

    impl Renderer for Flaky {
        fn backend(&self) -> &'static str {
            "flaky"
        }

        fn draw(&mut self, _frame: &FrameData) -> EngineResult<DrawTiming> {
            self.draws += 1;
            if self.draws == self.fail_on {
                return Err(EngineError::Draw {
                    backend: self.backend(),
                    reason: "device lost".into(),
                });
            }
            Ok(DrawTiming::default())
        }

        fn resize(&mut self, _width: u32, _height: u32) {}
    }

    #[test]
    fn draw_errors_surface_to_caller() {
        let camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        let frame = FrameData {
            frame: 1,
            viewport: Viewport::default(),
            camera: camera.uniform(),
            background: Rgb::BLACK,
            meshes: &[],
            rings: &[],
            stars: &[],
            star_color: Rgb::WHITE,
            star_size: 0.1,
            lights: &[],
            ambient: Rgb::WHITE,
            events: &[],
        };
        let mut renderer = Flaky { draws: 0, fail_on: 2 };
        assert!(renderer.draw(&frame).is_ok());
        let err = renderer.draw(&frame).unwrap_err();
        assert_eq!(err.to_string(), "draw failed on backend 'flaky': device lost");
    }
}
