use bytemuck::{Pod, Zeroable};

/// Per-point render data written to the frame buffer for the host renderer.
/// 8 floats = 32 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Circle radius (2D) or point size (3D).
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
}

impl PointInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Points produced for the current frame, in scene order.
pub struct PointBuffer {
    instances: Vec<PointInstance>,
    capacity: usize,
}

impl PointBuffer {
    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            capacity: max,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append a point. Returns false (and drops it) once the buffer is full.
    pub fn push(&mut self, instance: PointInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn as_slice(&self) -> &[PointInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw pointer to instance data for zero-copy reads from the host.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for PointBuffer {
    fn default() -> Self {
        Self::with_capacity(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<PointInstance>(), PointInstance::STRIDE_BYTES);
        assert_eq!(PointInstance::FLOATS, 8);
    }

    #[test]
    fn push_stops_at_capacity() {
        let mut buf = PointBuffer::with_capacity(2);
        assert!(buf.push(PointInstance::default()));
        assert!(buf.push(PointInstance::default()));
        assert!(!buf.push(PointInstance::default()));
        assert_eq!(buf.instance_count(), 2);
    }
}
