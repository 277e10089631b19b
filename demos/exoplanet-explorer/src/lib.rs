use wasm_bindgen::prelude::*;

pub mod app;
pub mod catalog;
pub mod starfield;
use app::Explorer;

starmap_web::export_app!(Explorer, "exoplanet-explorer");

/// Fetch the bundled catalog and hand it to the explorer.
#[wasm_bindgen]
pub async fn explorer_load_catalog() {
    app_fetch_text(app::CATALOG_URL.to_string()).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use starmap_web::starmap_engine::LoadError;
    use starmap_web::AppRunner;

    fn runner() -> AppRunner<Explorer> {
        let mut runner = AppRunner::new(Explorer::new());
        runner.seed(1234);
        runner.init();
        runner
    }

    #[test]
    fn fetch_failure_leaves_an_empty_working_app() {
        let mut runner = runner();
        runner.load(Err(LoadError::Request { url: app::CATALOG_URL.into(), reason: "offline".into() }));
        assert_eq!(runner.list_json(), "[]");
        runner.push_input(InputEvent::Select { index: 0 });
        assert!(runner.tick(1.0 / 60.0));
        assert_eq!(runner.point_count(), 0);
    }

    #[test]
    fn bundled_catalog_renders_full_shell() {
        let mut runner = runner();
        runner.load(Ok(include_str!("../data/exoplanets.md")));
        assert!(runner.list_json().contains("Kepler-22b"));

        runner.push_input(InputEvent::Select { index: 1 });
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.point_count(), 1000);
        assert_eq!(runner.frame_len(), runner.buffer_total_floats());
    }

    #[test]
    fn camera_eases_toward_selected_shell() {
        let mut runner = runner();
        runner.load(Ok(include_str!("../data/exoplanets.md")));
        runner.push_input(InputEvent::Select { index: 1 });
        runner.tick(1.0 / 60.0);
        let goal = runner.context().camera.goal_distance();
        let first = (runner.context().camera.distance - goal).abs();
        for _ in 0..600 {
            runner.tick(1.0 / 60.0);
        }
        let last = (runner.context().camera.distance - goal).abs();
        assert!(last < first);
        assert!(last / goal < 1e-3);
    }

    #[test]
    fn stopped_explorer_ignores_frames() {
        let mut runner = runner();
        runner.stop();
        assert!(!runner.tick(1.0 / 60.0));
        runner.start();
        assert!(runner.is_running());
    }
}
