//! Shared frame buffer layout.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 24 floats]
//! [Camera: 20 floats]
//! [Meshes: max_meshes × 16 floats]
//! [Rings:  max_rings × 8 floats]
//! [Stars:  max_stars × 3 floats]
//! [Events: max_events × 4 floats]
//! [Lights: max_lights × 8 floats]
//! ```
//!
//! Capacities are written into the header on every frame.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{MeshInstance, RingInstance, StarVertex};
use crate::systems::lighting::PointLight;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 24;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_MESHES: usize = 2;
pub const HEADER_MESH_COUNT: usize = 3;
pub const HEADER_MAX_RINGS: usize = 4;
pub const HEADER_RING_COUNT: usize = 5;
pub const HEADER_MAX_STARS: usize = 6;
pub const HEADER_STAR_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_MAX_LIGHTS: usize = 10;
pub const HEADER_LIGHT_COUNT: usize = 11;
/// Ambient light r, g, b.
pub const HEADER_AMBIENT: usize = 12;
/// Clear color r, g, b.
pub const HEADER_BACKGROUND: usize = 15;
/// Star color r, g, b.
pub const HEADER_STAR_COLOR: usize = 18;
pub const HEADER_STAR_SIZE: usize = 21;
pub const HEADER_VIEWPORT_WIDTH: usize = 22;
pub const HEADER_VIEWPORT_HEIGHT: usize = 23;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_meshes: usize,
    pub max_rings: usize,
    pub max_stars: usize,
    pub max_events: usize,
    pub max_lights: usize,

    /// Offset (in floats) where the camera uniform begins.
    pub camera_offset: usize,
    /// Offset (in floats) where mesh data begins.
    pub mesh_data_offset: usize,
    /// Offset (in floats) where ring data begins.
    pub ring_data_offset: usize,
    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_meshes: usize,
        max_rings: usize,
        max_stars: usize,
        max_events: usize,
        max_lights: usize,
    ) -> Self {
        let camera_offset = HEADER_FLOATS;
        let mesh_data_offset = camera_offset + CameraUniform::FLOATS;
        let ring_data_offset = mesh_data_offset + max_meshes * MeshInstance::FLOATS;
        let star_data_offset = ring_data_offset + max_rings * RingInstance::FLOATS;
        let event_data_offset = star_data_offset + max_stars * StarVertex::FLOATS;
        let light_data_offset = event_data_offset + max_events * GameEvent::FLOATS;
        let buffer_total_floats = light_data_offset + max_lights * PointLight::FLOATS;

        Self {
            max_meshes,
            max_rings,
            max_stars,
            max_events,
            max_lights,
            camera_offset,
            mesh_data_offset,
            ring_data_offset,
            star_data_offset,
            event_data_offset,
            light_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_meshes,
            config.max_rings,
            config.star_count,
            config.max_events,
            config.max_lights,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(16, 8, 10_000, 32, 4);
        let expected_total = HEADER_FLOATS + 20 + 16 * 16 + 8 * 8 + 10_000 * 3 + 32 * 4 + 4 * 8;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 5, 100, 20, 2);

        assert_eq!(layout.camera_offset, HEADER_FLOATS);
        assert_eq!(layout.mesh_data_offset, layout.camera_offset + CameraUniform::FLOATS);
        assert_eq!(layout.ring_data_offset, layout.mesh_data_offset + 10 * MeshInstance::FLOATS);
        assert_eq!(layout.star_data_offset, layout.ring_data_offset + 5 * RingInstance::FLOATS);
        assert_eq!(layout.event_data_offset, layout.star_data_offset + 100 * StarVertex::FLOATS);
        assert_eq!(layout.light_data_offset, layout.event_data_offset + 20 * GameEvent::FLOATS);
        assert_eq!(layout.buffer_total_floats, layout.light_data_offset + 2 * PointLight::FLOATS);
    }

    #[test]
    fn header_fields_fit_in_header() {
        assert!(HEADER_VIEWPORT_HEIGHT < HEADER_FLOATS);
        assert!(HEADER_STAR_COLOR + 2 < HEADER_STAR_SIZE);
    }

    #[test]
    fn from_default_config() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        assert_eq!(layout.max_meshes, config.max_meshes);
        assert_eq!(layout.max_stars, config.star_count);
    }
}
