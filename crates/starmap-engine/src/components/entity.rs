use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::point::PointComponent;

/// Fat Entity — a single struct with optional components.
/// 2D scenes keep `pos.z` at zero and use screen units for x/y.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Point visual (optional — entities without one are invisible).
    pub point: Option<PointComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            point: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_point(mut self, point: PointComponent) -> Self {
        self.point = Some(point);
        self
    }
}
