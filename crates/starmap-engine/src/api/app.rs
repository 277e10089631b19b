use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::api::error::LoadError;
use crate::api::types::{AppEvent, EntityId};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::OrbitCamera;
use crate::systems::lighting::LightState;
use crate::systems::rng::Rng;
use crate::ui::sidebar::Sidebar;

/// Configuration for the engine, provided by the app.
///
/// Hosts may override fields with a JSON object (see `with_json_overrides`);
/// anything missing keeps the app's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Drawing surface width in world units.
    pub world_width: f32,
    /// Drawing surface height in world units.
    pub world_height: f32,
    /// Maximum number of points per frame (default: 1024).
    pub max_points: usize,
    /// Maximum number of app events per frame (default: 32).
    pub max_events: usize,
    /// Viewports at most this wide show the sidebar as an overlay.
    pub narrow_breakpoint: f32,
    /// Camera smoothing: fraction of the remaining gap kept per 1/60 s.
    pub camera_smoothing: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_points: 1024,
            max_events: 32,
            narrow_breakpoint: 768.0,
            camera_smoothing: 0.95,
        }
    }
}

impl AppConfig {
    /// Apply a host JSON object on top of this config.
    pub fn with_json_overrides(&self, json: &str) -> Result<Self, serde_json::Error> {
        let mut merged = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        match (merged.as_object_mut(), overrides) {
            (Some(base), serde_json::Value::Object(fields)) => base.extend(fields),
            _ => return Err(serde_json::Error::custom("config override must be a JSON object")),
        }
        serde_json::from_value(merged)
    }
}

/// The contract every app (star map, explorer, ...) fulfills.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Build the initial scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed step: react to input, adjust the scene.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// A text resource requested by the host finished loading (or failed).
    fn load(&mut self, _ctx: &mut EngineContext, _text: Result<&str, LoadError>) {}
}

/// Mutable access to engine state, passed to `App::init`, `update` and `load`.
pub struct EngineContext {
    pub scene: Scene,
    pub lights: LightState,
    pub camera: OrbitCamera,
    pub sidebar: Sidebar,
    pub rng: Rng,
    pub events: Vec<AppEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &AppConfig) -> Self {
        let mut camera = OrbitCamera::new(config.world_width / config.world_height);
        camera.set_smoothing(config.camera_smoothing);
        let mut sidebar = Sidebar::new(config.narrow_breakpoint);
        sidebar.set_viewport_width(config.world_width);
        Self {
            scene: Scene::new(),
            lights: LightState::new(),
            camera,
            sidebar,
            rng: Rng::new(42),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Reseed the random source (once per session on the web).
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = Rng::new(seed);
    }

    /// Emit an app event to be forwarded to the host.
    pub fn emit_event(&mut self, event: AppEvent) {
        self.events.push(event);
    }

    /// Drop every entity and light.
    pub fn reset_scene(&mut self) {
        self.scene.clear();
        self.lights.clear();
    }

    /// Track a new surface size: camera aspect and sidebar layout follow it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_aspect(width, height);
        self.sidebar.set_viewport_width(width);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
