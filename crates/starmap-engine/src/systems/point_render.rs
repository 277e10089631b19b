use log::warn;

use crate::components::entity::Entity;
use crate::renderer::point_instance::{PointBuffer, PointInstance};

/// Build the point buffer from entities with point components.
/// Returns how many visible points did not fit.
pub fn build_point_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut PointBuffer,
) -> usize {
    buffer.clear();
    let mut dropped = 0;
    for entity in entities {
        if !entity.active {
            continue;
        }
        let point = match &entity.point {
            Some(p) => p,
            None => continue,
        };
        let pushed = buffer.push(PointInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            size: point.size,
            r: point.color.r,
            g: point.color.g,
            b: point.color.b,
            alpha: point.alpha,
        });
        if !pushed {
            dropped += 1;
        }
    }
    if dropped > 0 {
        warn!("point buffer full: {} points dropped (capacity {})", dropped, buffer.capacity());
    }
    dropped
}
