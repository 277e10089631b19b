/// Exoplanet explorer — catalog sidebar + 3D star shell.
///
/// The host fetches (or asks us to fetch) the markdown catalog, shows the
/// sidebar from `get_list_json`, and paints the point buffer with the camera
/// block. Selecting a row regenerates the shell around that planet.

use glam::Vec2;
use log::{debug, error, info, warn};
use starmap_engine::{
    AmbientLight, App, AppConfig, AppEvent, EngineContext, InputEvent, InputQueue, LoadError,
};

use crate::catalog::{parse_catalog, Exoplanet};
use crate::starfield::{self, AMBIENT_INTENSITY, STAR_COUNT};

/// Path the host serves the catalog from.
pub const CATALOG_URL: &str = "data/exoplanets.md";

// ── App event kinds to the host ─────────────────────────────────────

pub const EVENT_CATALOG_READY: f32 = 1.0;
pub const EVENT_SHELL_BUILT: f32 = 2.0;

const WHEEL_TICK: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerState {
    Loading,
    Ready { catalog: Vec<Exoplanet>, selected: Option<usize> },
}

pub struct Explorer {
    state: ExplorerState,
    drag: Option<Vec2>,
}

impl Explorer {
    pub fn new() -> Self {
        Self { state: ExplorerState::Loading, drag: None }
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    fn select(&mut self, ctx: &mut EngineContext, index: i64) {
        let ExplorerState::Ready { catalog, selected } = &mut self.state else {
            debug!("selection {} ignored: catalog still loading", index);
            return;
        };

        let Ok(i) = usize::try_from(index) else {
            warn!("selection {} ignored: negative index", index);
            return;
        };

        if let Err(err) = ctx.sidebar.select(i) {
            warn!("{}", err);
            return;
        }

        // Sidebar entries mirror the catalog one to one.
        let Some(planet) = catalog.get(i) else { return };
        debug!("selected {}", planet.name);
        *selected = Some(i);
        starfield::rebuild_scene(ctx, planet);
        let stars = ctx.scene.len() as f32;
        ctx.emit_event(AppEvent::new(EVENT_SHELL_BUILT, i as f32, stars, 0.0));
    }

    fn pointer(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => self.drag = Some(Vec2::new(x, y)),
            InputEvent::PointerMove { x, y } => {
                if let Some(last) = self.drag {
                    let now = Vec2::new(x, y);
                    let delta = now - last;
                    ctx.camera.orbit(delta.x, delta.y);
                    self.drag = Some(now);
                }
            }
            InputEvent::PointerUp { .. } => self.drag = None,
            InputEvent::Wheel { delta } => ctx.camera.zoom(-delta / WHEEL_TICK),
            _ => {}
        }
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Explorer {
    fn config(&self) -> AppConfig {
        AppConfig {
            max_points: STAR_COUNT.next_power_of_two(),
            ..AppConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.lights.add_ambient(AmbientLight::white(AMBIENT_INTENSITY));
        ctx.sidebar.set_label("Loading...");
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::Select { index } => self.select(ctx, *index),
                InputEvent::TogglePanel => ctx.sidebar.toggle_panel(),
                other => self.pointer(ctx, other),
            }
        }
    }

    fn load(&mut self, ctx: &mut EngineContext, text: Result<&str, LoadError>) {
        if let ExplorerState::Ready { .. } = self.state {
            warn!("catalog already loaded; ignoring another load");
            return;
        }

        let catalog = match text {
            Ok(body) => parse_catalog(body),
            Err(err) => {
                error!("catalog unavailable: {}", err);
                Vec::new()
            }
        };
        info!("catalog ready: {} planets", catalog.len());

        ctx.sidebar.set_entries(catalog.iter().map(|p| p.name.as_str()));
        ctx.sidebar.set_label(if catalog.is_empty() { "No planets" } else { "Select a planet" });
        ctx.emit_event(AppEvent::new(EVENT_CATALOG_READY, catalog.len() as f32, 0.0, 0.0));
        self.state = ExplorerState::Ready { catalog, selected: None };
    }
}
