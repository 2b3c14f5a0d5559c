use orrery_engine::bridge::protocol::*;
use orrery_engine::{
    DrawTiming, EngineError, EngineResult, FrameData, GameEvent, MeshInstance, PointLight,
    ProtocolLayout, Renderer, RingInstance, StarVertex,
};

/// Renderer backend that serializes each frame into one flat `f32` buffer.
///
/// The host maps the buffer through `get_frame_buffer_ptr()` and issues the
/// actual WebGPU draw from it. Sections past their capacity are truncated;
/// the header always carries the counts that were written.
pub struct FrameBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let data = vec![0.0; layout.buffer_total_floats];
        Self {
            layout,
            data,
            width: 0,
            height: 0,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    /// Last size reported through `resize`, in CSS pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Copy up to `max` items of `stride` floats into the section at `offset`.
    /// Returns the number of items written.
    fn write_section(&mut self, offset: usize, max: usize, stride: usize, src: &[f32]) -> usize {
        let count = (src.len() / stride).min(max);
        let len = count * stride;
        self.data[offset..offset + len].copy_from_slice(&src[..len]);
        count
    }

    fn write_rgb(&mut self, index: usize, rgb: [f32; 3]) {
        self.data[index..index + 3].copy_from_slice(&rgb);
    }
}

impl Renderer for FrameBuffer {
    fn backend(&self) -> &'static str {
        "shared-buffer"
    }

    fn draw(&mut self, frame: &FrameData) -> EngineResult<DrawTiming> {
        if self.data.len() != self.layout.buffer_total_floats {
            return Err(EngineError::Draw {
                backend: self.backend(),
                reason: format!(
                    "buffer holds {} floats, layout needs {}",
                    self.data.len(),
                    self.layout.buffer_total_floats
                ),
            });
        }
        let layout = self.layout.clone();

        let camera = bytemuck::cast_slice::<_, f32>(std::slice::from_ref(&frame.camera));
        self.data[layout.camera_offset..layout.camera_offset + camera.len()].copy_from_slice(camera);

        let meshes = self.write_section(
            layout.mesh_data_offset,
            layout.max_meshes,
            MeshInstance::FLOATS,
            bytemuck::cast_slice(frame.meshes),
        );
        let rings = self.write_section(
            layout.ring_data_offset,
            layout.max_rings,
            RingInstance::FLOATS,
            bytemuck::cast_slice(frame.rings),
        );
        let stars = self.write_section(
            layout.star_data_offset,
            layout.max_stars,
            StarVertex::FLOATS,
            bytemuck::cast_slice(frame.stars),
        );
        let events = self.write_section(
            layout.event_data_offset,
            layout.max_events,
            GameEvent::FLOATS,
            bytemuck::cast_slice(frame.events),
        );
        if events < frame.events.len() {
            log::warn!("event buffer full, dropped {} events", frame.events.len() - events);
        }
        let lights = self.write_section(
            layout.light_data_offset,
            layout.max_lights,
            PointLight::FLOATS,
            bytemuck::cast_slice(frame.lights),
        );

        let header = &mut self.data[..HEADER_FLOATS];
        header[HEADER_FRAME_COUNTER] = frame.frame as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_MAX_MESHES] = layout.max_meshes as f32;
        header[HEADER_MESH_COUNT] = meshes as f32;
        header[HEADER_MAX_RINGS] = layout.max_rings as f32;
        header[HEADER_RING_COUNT] = rings as f32;
        header[HEADER_MAX_STARS] = layout.max_stars as f32;
        header[HEADER_STAR_COUNT] = stars as f32;
        header[HEADER_MAX_EVENTS] = layout.max_events as f32;
        header[HEADER_EVENT_COUNT] = events as f32;
        header[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        header[HEADER_LIGHT_COUNT] = lights as f32;
        header[HEADER_STAR_SIZE] = frame.star_size;
        header[HEADER_VIEWPORT_WIDTH] = frame.viewport.width;
        header[HEADER_VIEWPORT_HEIGHT] = frame.viewport.height;
        self.write_rgb(HEADER_AMBIENT, frame.ambient.to_array());
        self.write_rgb(HEADER_BACKGROUND, frame.background.to_array());
        self.write_rgb(HEADER_STAR_COLOR, frame.star_color.to_array());

        Ok(DrawTiming::default())
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("frame buffer resized to {width}x{height}");
        self.width = width;
        self.height = height;
    }
}
