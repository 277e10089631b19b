/// Static star map — pick a planet, see its stars.
///
/// Canvas 2D host: every point is a filled white circle at canvas pixel
/// coordinates. Nothing moves, so `update` only reacts to selections.

use log::{debug, warn};
use glam::Vec3;
use starmap_engine::{
    App, AppConfig, AppEvent, EngineContext, Entity, InputEvent, InputQueue, PointColor,
    PointComponent,
};

use crate::planets::PlanetId;

const CANVAS_W: f32 = 500.0;
const CANVAS_H: f32 = 500.0;

const STAR_COLOR: PointColor = PointColor::WHITE;

// ── App event kinds to the host ─────────────────────────────────────

pub const EVENT_PLANET_DRAWN: f32 = 1.0;

pub struct StarMap {
    current: Option<PlanetId>,
}

impl StarMap {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Planet currently on the canvas.
    pub fn current(&self) -> Option<PlanetId> {
        self.current
    }
}

impl Default for StarMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Clear the canvas and paint `planet`'s stars.
pub fn draw_stars(ctx: &mut EngineContext, planet: PlanetId) {
    ctx.reset_scene();
    for s in planet.stars() {
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(planet.key())
                .with_pos(Vec3::new(s.x, s.y, 0.0))
                .with_point(PointComponent::new(s.radius, STAR_COLOR)),
        );
    }
    ctx.emit_event(AppEvent::new(
        EVENT_PLANET_DRAWN,
        planet.index() as f32,
        planet.stars().len() as f32,
        0.0,
    ));
}

impl App for StarMap {
    fn config(&self) -> AppConfig {
        AppConfig {
            world_width: CANVAS_W,
            world_height: CANVAS_H,
            max_points: 64,
            max_events: 8,
            ..AppConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut EngineContext) {}

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            if let InputEvent::Select { index } = *event {
                match PlanetId::try_from(index) {
                    Ok(planet) => {
                        debug!("drawing {}", planet);
                        draw_stars(ctx, planet);
                        self.current = Some(planet);
                    }
                    Err(err) => warn!("{}", err),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starmap_engine::{build_point_buffer, PointBuffer, PointInstance};

    fn select(app: &mut StarMap, ctx: &mut EngineContext, index: i64) {
        let mut input = InputQueue::new();
        input.push(InputEvent::Select { index });
        app.update(ctx, &input);
    }

    fn drawn(ctx: &EngineContext) -> Vec<PointInstance> {
        let mut buffer = PointBuffer::with_capacity(64);
        build_point_buffer(ctx.scene.iter(), &mut buffer);
        buffer.as_slice().to_vec()
    }

    fn white(x: f32, y: f32, size: f32) -> PointInstance {
        PointInstance { x, y, z: 0.0, size, r: 1.0, g: 1.0, b: 1.0, alpha: 1.0 }
    }

    #[test]
    fn planet2_draws_exactly_its_three_stars() {
        let mut app = StarMap::new();
        let mut ctx = EngineContext::new(&app.config());
        select(&mut app, &mut ctx, PlanetId::Planet2.index() as i64);

        assert_eq!(
            drawn(&ctx),
            vec![white(50.0, 100.0, 2.0), white(250.0, 350.0, 6.0), white(400.0, 450.0, 3.0)]
        );
        assert_eq!(app.current(), Some(PlanetId::Planet2));
    }

    #[test]
    fn reselecting_clears_previous_stars() {
        let mut app = StarMap::new();
        let mut ctx = EngineContext::new(&app.config());
        select(&mut app, &mut ctx, 0);
        select(&mut app, &mut ctx, 1);
        select(&mut app, &mut ctx, 1);

        assert_eq!(ctx.scene.len(), 3);
        assert_eq!(ctx.scene.tagged("planet2").count(), 3);
        assert_eq!(ctx.scene.tagged("planet1").count(), 0);
    }

    #[test]
    fn unknown_planet_keeps_current_drawing() {
        let mut app = StarMap::new();
        let mut ctx = EngineContext::new(&app.config());
        select(&mut app, &mut ctx, 2);
        select(&mut app, &mut ctx, 9);
        select(&mut app, &mut ctx, -4);

        assert_eq!(app.current(), Some(PlanetId::Planet3));
        assert_eq!(ctx.scene.tagged("planet3").count(), 3);
    }

    #[test]
    fn drawing_reports_to_host() {
        let mut app = StarMap::new();
        let mut ctx = EngineContext::new(&app.config());
        select(&mut app, &mut ctx, 2);
        assert_eq!(ctx.events, vec![AppEvent::new(EVENT_PLANET_DRAWN, 2.0, 3.0, 0.0)]);
    }

    #[test]
    fn canvas_starts_blank() {
        let mut app = StarMap::new();
        let mut ctx = EngineContext::new(&app.config());
        app.init(&mut ctx);
        assert!(ctx.scene.is_empty());
        assert_eq!(app.current(), None);
    }
}
