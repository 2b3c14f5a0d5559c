//! Orbit guide rings: thin tori lying flat in the XZ plane.

use crate::components::mesh::Rgb;
use crate::renderer::instance::{RingBuffer, RingInstance};

/// One orbit guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRing {
    pub radius: f32,
    pub tube: f32,
    pub color: Rgb,
}

impl OrbitRing {
    pub fn new(radius: f32, tube: f32, color: Rgb) -> Self {
        Self { radius, tube, color }
    }
}

/// Rebuild the ring buffer. Rings with a non-positive radius (the sun's
/// "orbit") are skipped.
pub fn build_ring_buffer(rings: &[OrbitRing], buffer: &mut RingBuffer) {
    buffer.clear();
    for ring in rings.iter().filter(|r| r.radius > 0.0) {
        buffer.push(RingInstance {
            radius: ring.radius,
            tube: ring.tube,
            r: ring.color.r,
            g: ring.color.g,
            b: ring.color.b,
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_radius_ring_is_skipped() {
        let grey = Rgb::from_hex(0x555555);
        let rings = [
            OrbitRing::new(0.0, 3.0, grey),
            OrbitRing::new(400.0, 3.0, grey),
            OrbitRing::new(550.0, 3.0, grey),
        ];
        let mut buffer = RingBuffer::default();
        build_ring_buffer(&rings, &mut buffer);
        assert_eq!(buffer.instance_count(), 2);
        assert_eq!(buffer.as_slice()[0].radius, 400.0);
        assert_eq!(buffer.as_slice()[1].tube, 3.0);
    }
}
