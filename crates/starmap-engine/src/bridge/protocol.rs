/// Frame buffer layout shared with the host renderer.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Points: max_points × 8 floats]
/// [Camera: 20 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame, so the host can
/// compute offsets without knowing the app's config.

use crate::api::app::AppConfig;
use crate::api::types::AppEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::point_instance::PointInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_POINTS: usize = 2;
pub const HEADER_POINT_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_WORLD_WIDTH: usize = 6;
pub const HEADER_WORLD_HEIGHT: usize = 7;
pub const HEADER_AMBIENT_R: usize = 8;
pub const HEADER_AMBIENT_G: usize = 9;
pub const HEADER_AMBIENT_B: usize = 10;
pub const HEADER_RUNNING: usize = 11;
pub const HEADER_UI_REVISION: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per point instance: x, y, z, size, r, g, b, alpha.
pub const POINT_FLOATS: usize = PointInstance::FLOATS;

/// Floats in the camera block: view-projection matrix, eye xyz, distance.
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Floats per app event: kind, a, b, c.
pub const EVENT_FLOATS: usize = AppEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_points: usize,
    pub max_events: usize,

    pub point_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where point data begins.
    pub point_data_offset: usize,
    /// Offset (in floats) where the camera block begins.
    pub camera_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_points: usize, max_events: usize) -> Self {
        let point_data_floats = max_points * POINT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let point_data_offset = HEADER_FLOATS;
        let camera_data_offset = point_data_offset + point_data_floats;
        let event_data_offset = camera_data_offset + CAMERA_FLOATS;
        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_points,
            max_events,
            point_data_floats,
            event_data_floats,
            point_data_offset,
            camera_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_points, config.max_events)
    }
}
