use log::{info, warn};
use starmap_engine::{
    build_point_buffer, App, AppConfig, EngineContext, FixedTimestep, FrameBuffer, FrameState,
    InputEvent, InputQueue, LoadError, LoopControl, PointBuffer, ProtocolLayout,
};

/// Generic runner that owns an app, its engine context and the render loop.
///
/// Each concrete app (e.g. `star-map`) keeps one `AppRunner` in a
/// `thread_local!` and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
///
/// The host calls `tick` from its refresh callback. The loop is explicit:
/// `init` starts it, `stop` halts it and `start` resumes it; a stopped runner's
/// `tick` does nothing.
pub struct AppRunner<A: App> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    points: PointBuffer,
    frame: FrameBuffer,
    timestep: FixedTimestep,
    control: LoopControl,
    config: AppConfig,
    initialized: bool,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        Self::with_config(app, config)
    }

    /// Build with the app's config overridden by a host JSON object.
    /// An unusable override is logged and ignored.
    pub fn with_config_json(app: A, json: &str) -> Self {
        let base = app.config();
        let config = base.with_json_overrides(json).unwrap_or_else(|err| {
            warn!("config override ignored: {}", err);
            base
        });
        Self::with_config(app, config)
    }

    pub fn with_config(app: A, config: AppConfig) -> Self {
        let layout = ProtocolLayout::from_config(&config);
        Self {
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            points: PointBuffer::with_capacity(config.max_points),
            frame: FrameBuffer::new(layout),
            timestep: FixedTimestep::new(config.fixed_dt),
            control: LoopControl::new(),
            config,
            app,
            initialized: false,
        }
    }

    /// Reseed the app's random source. Call before `init`.
    pub fn seed(&mut self, seed: u64) {
        self.ctx.seed_rng(seed);
    }

    /// Initialize the app and start the loop. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            warn!("runner already initialized");
            return;
        }
        self.app.init(&mut self.ctx);
        self.initialized = true;
        self.control.start();
        self.publish();
    }

    pub fn start(&mut self) {
        if !self.initialized {
            warn!("start ignored: runner not initialized");
            return;
        }
        self.control.start();
    }

    /// Halt the loop. Input queued but not yet stepped is discarded.
    pub fn stop(&mut self) {
        self.control.stop();
        self.timestep.reset();
        self.input.drain();
        self.publish();
    }

    pub fn is_running(&self) -> bool {
        self.control.is_running()
    }

    /// Queue an input event for the next fixed step.
    /// Resizes are applied to the context right away.
    pub fn push_input(&mut self, event: InputEvent) {
        if let InputEvent::Resize { width, height } = event {
            self.ctx.resize(width, height);
        }
        self.input.push(event);
    }

    /// Hand a loaded text resource (or the reason it failed) to the app.
    pub fn load(&mut self, text: Result<&str, LoadError>) {
        match &text {
            Ok(body) => info!("loaded {} bytes", body.len()),
            Err(err) => warn!("load failed: {}", err),
        }
        self.app.load(&mut self.ctx, text);
        self.publish();
    }

    /// Run one frame. Returns false when the loop is stopped.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.initialized || !self.control.is_running() {
            return false;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            self.app.update(&mut self.ctx, &self.input);
            if step == 0 {
                // Each input is seen by exactly one update.
                self.input.drain();
            }
        }

        self.ctx.camera.update(steps as f32 * self.timestep.dt());

        self.control.advance();
        self.publish();
        true
    }

    /// Rebuild the point buffer and repack the frame.
    fn publish(&mut self) {
        build_point_buffer(self.ctx.scene.iter(), &mut self.points);
        self.frame.write(&FrameState {
            frame: self.control.frame(),
            running: self.control.is_running(),
            world_size: (self.config.world_width, self.config.world_height),
            ambient: self.ctx.lights.ambient(),
            ui_revision: self.ctx.sidebar.revision(),
            points: self.points.as_slice(),
            camera: self.ctx.camera.uniform(),
            events: &self.ctx.events,
        });
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Frame accessors for zero-copy reads from the host ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn frame_counter(&self) -> u64 {
        self.control.frame()
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.points.instances_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.points.instance_count() as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.frame.as_slice()[self.frame.layout().camera_data_offset..].as_ptr()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ctx.lights.ambient()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors ----

    pub fn max_points(&self) -> u32 {
        self.frame.layout().max_points as u32
    }

    pub fn max_events(&self) -> u32 {
        self.frame.layout().max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.frame.layout().buffer_total_floats as u32
    }

    // ---- Sidebar accessors ----

    /// Sidebar entries as JSON; `"[]"` if serialization fails.
    pub fn list_json(&self) -> String {
        self.ctx.sidebar.to_json().unwrap_or_else(|err| {
            warn!("sidebar serialization failed: {}", err);
            "[]".to_string()
        })
    }

    pub fn label(&self) -> String {
        self.ctx.sidebar.label().to_string()
    }

    pub fn panel_open(&self) -> bool {
        self.ctx.sidebar.panel_open()
    }

    pub fn ui_revision(&self) -> u32 {
        self.ctx.sidebar.revision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use starmap_engine::bridge::protocol::{HEADER_POINT_COUNT, HEADER_RUNNING};
    use starmap_engine::{Entity, PointComponent};

    /// Spawns one point per Select event; remembers what it loaded.
    #[derive(Default)]
    struct Probe {
        updates: u32,
        selects: u32,
        loaded: Option<Result<String, LoadError>>,
    }

    impl App for Probe {
        fn config(&self) -> AppConfig {
            AppConfig { camera_smoothing: 0.0, ..AppConfig::default() }
        }

        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            for event in input.iter() {
                if let InputEvent::Select { .. } = event {
                    self.selects += 1;
                    let id = ctx.next_id();
                    ctx.scene.spawn(
                        Entity::new(id)
                            .with_pos(Vec3::new(1.0, 2.0, 3.0))
                            .with_point(PointComponent::default()),
                    );
                }
            }
        }

        fn load(&mut self, _ctx: &mut EngineContext, text: Result<&str, LoadError>) {
            self.loaded = Some(text.map(str::to_string));
        }
    }

    fn running_probe() -> AppRunner<Probe> {
        let mut runner = AppRunner::new(Probe::default());
        runner.init();
        runner
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = AppRunner::new(Probe::default());
        assert!(!runner.tick(1.0 / 60.0));
        runner.start();
        assert!(!runner.is_running());
    }

    #[test]
    fn stopped_runner_does_not_advance() {
        let mut runner = running_probe();
        assert!(runner.tick(1.0 / 60.0));
        assert_eq!(runner.frame_counter(), 1);

        runner.stop();
        assert!(!runner.tick(1.0 / 60.0));
        assert!(!runner.tick(1.0 / 60.0));
        assert_eq!(runner.frame_counter(), 1);
        assert_eq!(runner.app().updates, 1);
        assert_eq!(runner.frame.as_slice()[HEADER_RUNNING], 0.0);

        runner.start();
        assert!(runner.tick(1.0 / 60.0));
        assert_eq!(runner.frame_counter(), 2);
    }

    #[test]
    fn input_is_handled_once_even_with_multiple_steps() {
        let mut runner = running_probe();
        runner.push_input(InputEvent::Select { index: 0 });
        runner.tick(3.0 / 60.0 + 0.001);
        assert_eq!(runner.app().updates, 3);
        assert_eq!(runner.app().selects, 1);
        assert_eq!(runner.point_count(), 1);
        assert_eq!(runner.frame.as_slice()[HEADER_POINT_COUNT], 1.0);
    }

    #[test]
    fn input_waits_for_a_full_step() {
        let mut runner = running_probe();
        runner.push_input(InputEvent::Select { index: 0 });
        runner.tick(0.001);
        assert_eq!(runner.app().selects, 0);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.app().selects, 1);
    }

    #[test]
    fn load_failure_reaches_app_without_panicking() {
        let mut runner = running_probe();
        runner.load(Err(LoadError::Host("offline".into())));
        assert_eq!(runner.app().loaded, Some(Err(LoadError::Host("offline".into()))));
        assert_eq!(runner.list_json(), "[]");
    }

    #[test]
    fn input_while_stopped_is_not_replayed() {
        let mut runner = running_probe();
        runner.push_input(InputEvent::Select { index: 0 });
        runner.stop();
        runner.push_input(InputEvent::Select { index: 1 });
        runner.tick(1.0 / 60.0);

        runner.start();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.app().selects, 0);
        assert_eq!(runner.point_count(), 0);
    }

    #[test]
    fn json_override_sizes_buffers() {
        let runner = AppRunner::with_config_json(Probe::default(), r#"{"max_points":2048}"#);
        assert_eq!(runner.max_points(), 2048);
        assert_eq!(runner.max_events(), 32);
    }

    #[test]
    fn bad_json_override_keeps_app_config() {
        let runner = AppRunner::with_config_json(Probe::default(), r#"{"max_points":-1}"#);
        assert_eq!(runner.max_points(), 1024);
    }

    #[test]
    fn resize_applies_immediately() {
        let mut runner = running_probe();
        runner.push_input(InputEvent::Resize { width: 400.0, height: 800.0 });
        assert!(runner.context().sidebar.is_narrow());
    }

    #[test]
    fn camera_block_is_inside_frame() {
        let runner = running_probe();
        let offset = runner.frame.layout().camera_data_offset;
        assert_eq!(runner.camera_ptr(), runner.frame.as_slice()[offset..].as_ptr());
        assert_eq!(runner.buffer_total_floats(), runner.frame_len());
    }
}
