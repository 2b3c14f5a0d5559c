use bytemuck::{Pod, Zeroable};

/// Per-instance data for one sphere mesh.
/// Written to the frame buffer for the host renderer.
/// 16 floats = 64 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub rotation_y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive_r: f32,
    pub emissive_g: f32,
    pub emissive_b: f32,
    /// Texture slot, or -1 to draw the flat base color.
    pub texture: f32,
    /// 1.0 = lit (standard), 0.0 = unlit (basic).
    pub lit: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Torus lying flat in the XZ plane, centered at the origin.
/// 8 floats per ring.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RingInstance {
    pub radius: f32,
    pub tube: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl RingInstance {
    pub const FLOATS: usize = 8;
}

/// One point of the background starfield.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl StarVertex {
    pub const FLOATS: usize = 3;
}

/// Growable buffer of instances rebuilt every frame.
pub struct InstanceBuffer<T: Pod> {
    instances: Vec<T>,
}

impl<T: Pod> InstanceBuffer<T> {
    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: T) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.instances
    }

    /// Flat f32 view for copying into the frame buffer.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl<T: Pod> Default for InstanceBuffer<T> {
    fn default() -> Self {
        Self::with_capacity(16)
    }
}

pub type MeshBuffer = InstanceBuffer<MeshInstance>;
pub type RingBuffer = InstanceBuffer<RingInstance>;
