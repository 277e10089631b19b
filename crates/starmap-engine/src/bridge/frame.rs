use log::warn;

use crate::api::types::AppEvent;
use crate::bridge::protocol::*;
use crate::renderer::camera::CameraUniform;
use crate::renderer::point_instance::PointInstance;

/// Everything the host needs to draw one frame.
pub struct FrameState<'a> {
    pub frame: u64,
    pub running: bool,
    pub world_size: (f32, f32),
    pub ambient: [f32; 3],
    pub ui_revision: u32,
    pub points: &'a [PointInstance],
    pub camera: CameraUniform,
    pub events: &'a [AppEvent],
}

/// Contiguous f32 buffer packed according to a `ProtocolLayout`.
/// Allocated once; rewritten in place every frame.
pub struct FrameBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let data = vec![0.0; layout.buffer_total_floats];
        Self { layout, data }
    }

    pub fn write(&mut self, state: &FrameState<'_>) {
        let layout = &self.layout;
        let points = clip(state.points, layout.max_points, "points");
        let events = clip(state.events, layout.max_events, "events");

        let header = &mut self.data[..HEADER_FLOATS];
        header.fill(0.0);
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_FRAME_COUNTER] = state.frame as f32;
        header[HEADER_MAX_POINTS] = layout.max_points as f32;
        header[HEADER_POINT_COUNT] = points.len() as f32;
        header[HEADER_MAX_EVENTS] = layout.max_events as f32;
        header[HEADER_EVENT_COUNT] = events.len() as f32;
        header[HEADER_WORLD_WIDTH] = state.world_size.0;
        header[HEADER_WORLD_HEIGHT] = state.world_size.1;
        header[HEADER_AMBIENT_R] = state.ambient[0];
        header[HEADER_AMBIENT_G] = state.ambient[1];
        header[HEADER_AMBIENT_B] = state.ambient[2];
        header[HEADER_RUNNING] = if state.running { 1.0 } else { 0.0 };
        header[HEADER_UI_REVISION] = state.ui_revision as f32;

        let point_floats: &[f32] = bytemuck::cast_slice(points);
        let start = layout.point_data_offset;
        self.data[start..start + point_floats.len()].copy_from_slice(point_floats);

        let camera_floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&state.camera));
        let start = layout.camera_data_offset;
        self.data[start..start + CAMERA_FLOATS].copy_from_slice(camera_floats);

        let event_floats: &[f32] = bytemuck::cast_slice(events);
        let start = layout.event_data_offset;
        self.data[start..start + event_floats.len()].copy_from_slice(event_floats);
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn clip<'a, T>(items: &'a [T], max: usize, what: &str) -> &'a [T] {
    if items.len() > max {
        warn!("frame holds at most {} {}, dropping {}", max, what, items.len() - max);
        &items[..max]
    } else {
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::camera::OrbitCamera;

    fn state<'a>(points: &'a [PointInstance], events: &'a [AppEvent]) -> FrameState<'a> {
        FrameState {
            frame: 7,
            running: true,
            world_size: (500.0, 400.0),
            ambient: [0.5, 0.5, 0.5],
            ui_revision: 3,
            points,
            camera: OrbitCamera::new(1.0).uniform(),
            events,
        }
    }

    #[test]
    fn header_reflects_state() {
        let mut frame = FrameBuffer::new(ProtocolLayout::new(4, 2));
        let points = [PointInstance::default(); 3];
        let events = [AppEvent::new(1.0, 2.0, 3.0, 4.0)];
        frame.write(&state(&points, &events));

        let data = frame.as_slice();
        assert_eq!(data[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(data[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(data[HEADER_MAX_POINTS], 4.0);
        assert_eq!(data[HEADER_POINT_COUNT], 3.0);
        assert_eq!(data[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(data[HEADER_WORLD_WIDTH], 500.0);
        assert_eq!(data[HEADER_AMBIENT_G], 0.5);
        assert_eq!(data[HEADER_RUNNING], 1.0);
        assert_eq!(data[HEADER_UI_REVISION], 3.0);
    }

    #[test]
    fn sections_land_at_layout_offsets() {
        let layout = ProtocolLayout::new(4, 2);
        let mut frame = FrameBuffer::new(layout.clone());
        let points = [PointInstance { x: 10.0, y: 20.0, z: 30.0, size: 2.0, r: 1.0, g: 1.0, b: 1.0, alpha: 1.0 }];
        let events = [AppEvent::new(9.0, 8.0, 7.0, 6.0)];
        frame.write(&state(&points, &events));

        let data = frame.as_slice();
        assert_eq!(&data[layout.point_data_offset..layout.point_data_offset + 4], &[10.0, 20.0, 30.0, 2.0]);
        assert_eq!(data[layout.camera_data_offset + CAMERA_FLOATS - 1], 100.0);
        assert_eq!(&data[layout.event_data_offset..layout.event_data_offset + 4], &[9.0, 8.0, 7.0, 6.0]);
    }

    #[test]
    fn excess_events_are_clipped() {
        let mut frame = FrameBuffer::new(ProtocolLayout::new(1, 1));
        let events = [AppEvent::default(); 3];
        frame.write(&state(&[], &events));
        assert_eq!(frame.as_slice()[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(frame.len(), ProtocolLayout::new(1, 1).buffer_total_floats);
    }
}
