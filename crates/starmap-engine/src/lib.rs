pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod ui;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, EngineContext};
pub use api::error::{LoadError, SelectionError};
pub use api::types::{AppEvent, EntityId};
pub use components::entity::Entity;
pub use components::point::{PointColor, PointComponent};
pub use crate::core::scene::Scene;
pub use crate::core::time::{FixedTimestep, LoopControl};
pub use renderer::camera::{CameraUniform, OrbitCamera};
pub use renderer::point_instance::{PointBuffer, PointInstance};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::frame::{FrameBuffer, FrameState};
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{AmbientLight, LightState};
pub use systems::point_render::build_point_buffer;
pub use systems::rng::Rng;
pub use ui::sidebar::{ListEntry, Sidebar};
