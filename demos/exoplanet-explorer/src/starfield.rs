//! Random star shell around the selected exoplanet.

use glam::Vec3;
use log::warn;
use starmap_engine::{AmbientLight, EngineContext, Entity, PointColor, PointComponent, Rng};

use crate::catalog::Exoplanet;

/// Stars generated per selection.
pub const STAR_COUNT: usize = 1000;
/// Shell radius per light year of distance.
pub const SHELL_SCALE: f64 = 10.0;
pub const STAR_BASE_SIZE: f32 = 2.0;
pub const AMBIENT_INTENSITY: f32 = 0.5;

pub const STAR_TAG: &str = "star";

/// Brightness multiplier from the g-band magnitude: brighter (lower) magnitudes
/// give values near 1.0, never dimmer than 0.2.
pub fn brightness_factor(g_magnitude: f64) -> f32 {
    (1.0 - g_magnitude / 20.0).clamp(0.2, 1.0) as f32
}

pub fn shell_radius(planet: &Exoplanet) -> f32 {
    (planet.distance_light_years * SHELL_SCALE) as f32
}

/// `STAR_COUNT` positions uniformly distributed on the planet's shell.
pub fn generate_shell(planet: &Exoplanet, rng: &mut Rng) -> Vec<Vec3> {
    let radius = shell_radius(planet);
    (0..STAR_COUNT).map(|_| rng.unit_vector() * radius).collect()
}

/// Replace the scene with the shell for `planet` and frame it.
///
/// An invalid record leaves only the ambient light.
pub fn rebuild_scene(ctx: &mut EngineContext, planet: &Exoplanet) {
    ctx.reset_scene();
    ctx.lights.add_ambient(AmbientLight::white(AMBIENT_INTENSITY));

    if let Err(err) = planet.validate() {
        warn!("not rendering stars: {}", err);
        return;
    }

    let factor = brightness_factor(planet.g_magnitude);
    let point = PointComponent::new(STAR_BASE_SIZE * factor, PointColor::gray(factor));

    for pos in generate_shell(planet, &mut ctx.rng) {
        let id = ctx.next_id();
        ctx.scene.spawn(Entity::new(id).with_tag(STAR_TAG).with_pos(pos).with_point(point));
    }

    ctx.camera.frame_sphere(Vec3::ZERO, shell_radius(planet));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(distance: f64, g_magnitude: f64) -> Exoplanet {
        Exoplanet {
            name: "Test-1b".into(),
            right_ascension: 10.0,
            declination: -5.0,
            distance_light_years: distance,
            g_magnitude,
        }
    }

    #[test]
    fn factor_bounds() {
        assert!((brightness_factor(0.0) - 1.0).abs() < 1e-6);
        assert!((brightness_factor(10.0) - 0.5).abs() < 1e-6);
        assert!((brightness_factor(20.0) - 0.2).abs() < 1e-6);
        assert!((brightness_factor(30.0) - 0.2).abs() < 1e-6);
        assert!((brightness_factor(-5.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn factor_never_increases_with_magnitude() {
        let mut last = brightness_factor(-10.0);
        for step in -99..=300 {
            let f = brightness_factor(step as f64 * 0.1);
            assert!(f <= last);
            last = f;
        }
    }

    #[test]
    fn shell_has_star_count_points_on_radius() {
        let mut rng = Rng::new(7);
        let points = generate_shell(&planet(620.0, 11.7), &mut rng);
        assert_eq!(points.len(), STAR_COUNT);
        for p in points {
            assert!((p.length() - 6200.0).abs() / 6200.0 < 1e-4);
        }
    }

    #[test]
    fn shell_covers_both_hemispheres() {
        let mut rng = Rng::new(11);
        let points = generate_shell(&planet(1.0, 0.0), &mut rng);
        let north = points.iter().filter(|p| p.z > 0.0).count();
        assert!(north > 400 && north < 600, "north = {north}");
    }

    #[test]
    fn rebuild_uses_one_color_and_size() {
        let mut ctx = EngineContext::default();
        rebuild_scene(&mut ctx, &planet(4.2, 10.0));

        assert_eq!(ctx.scene.tagged(STAR_TAG).count(), STAR_COUNT);
        for e in ctx.scene.iter() {
            let point = e.point.unwrap();
            assert!((point.size - 1.0).abs() < 1e-6);
            assert_eq!(point.color, PointColor::gray(0.5));
        }
        assert_eq!(ctx.lights.count(), 1);
        assert!((ctx.camera.goal_distance() - 63.0).abs() < 1e-3);
    }

    #[test]
    fn rebuild_replaces_previous_shell() {
        let mut ctx = EngineContext::default();
        rebuild_scene(&mut ctx, &planet(4.2, 10.0));
        rebuild_scene(&mut ctx, &planet(12.0, 3.0));
        assert_eq!(ctx.scene.len(), STAR_COUNT);
        assert_eq!(ctx.lights.count(), 1);
    }

    #[test]
    fn distant_planet_is_framed_outside_its_shell() {
        let mut ctx = EngineContext::default();
        rebuild_scene(&mut ctx, &planet(20_000.0, 14.0));
        assert_eq!(ctx.camera.goal_distance(), 300_000.0);
        for _ in 0..600 {
            ctx.camera.update(1.0 / 60.0);
        }
        assert!(ctx.camera.distance > 200_000.0);
    }

    #[test]
    fn invalid_record_keeps_only_ambient_light() {
        let mut ctx = EngineContext::default();
        rebuild_scene(&mut ctx, &planet(4.2, 10.0));
        rebuild_scene(&mut ctx, &planet(f64::NAN, 10.0));
        assert!(ctx.scene.is_empty());
        assert_eq!(ctx.lights.ambient(), [0.5, 0.5, 0.5]);
    }
}
