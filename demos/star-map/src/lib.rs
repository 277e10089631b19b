use wasm_bindgen::prelude::*;

pub mod app;
pub mod planets;
use app::StarMap;
use planets::PlanetId;

starmap_web::export_app!(StarMap, "star-map");

/// Select a planet by its control id (`"planet1"` ...), as the page's buttons do.
#[wasm_bindgen]
pub fn star_map_select(key: &str) {
    match key.parse::<PlanetId>() {
        Ok(planet) => app_select(planet.index() as i32),
        Err(err) => log::warn!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starmap_web::AppRunner;

    #[test]
    fn runner_publishes_selected_field() {
        let mut runner = AppRunner::new(StarMap::new());
        runner.init();
        runner.push_input(starmap_web::starmap_engine::InputEvent::Select { index: 1 });
        assert!(runner.tick(1.0 / 60.0));
        assert_eq!(runner.point_count(), 3);
        assert_eq!(runner.app().current(), Some(PlanetId::Planet2));

        runner.push_input(starmap_web::starmap_engine::InputEvent::Select { index: 0 });
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.point_count(), 3);
        assert_eq!(runner.app().current(), Some(PlanetId::Planet1));
    }
}
