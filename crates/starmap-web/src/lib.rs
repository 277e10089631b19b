pub mod fetch;
pub mod runner;

pub use runner::AppRunner;

// Re-exported so `export_app!` expansions resolve without extra deps.
pub use js_sys;
pub use starmap_engine;

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// Generates:
/// - `thread_local!` storage for the AppRunner
/// - `with_runner()` helper (returns `None` before `app_init`)
/// - lifecycle, input, loading, frame and sidebar exports
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod app;
/// use app::MyApp;
///
/// starmap_web::export_app!(MyApp, "my-app");
/// ```
///
/// The calling crate needs `wasm-bindgen`, `wasm-bindgen-futures`, `log`,
/// `console_log` and `console_error_panic_hook` as dependencies.
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;
        use $crate::starmap_engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::AppRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::AppRunner<$app_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        // ---- Lifecycle ----

        fn install(mut runner: $crate::AppRunner<$app_type>) {
            runner.seed(($crate::js_sys::Math::random() * (1u64 << 53) as f64) as u64);
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            with_runner(|r| r.init());
            log::info!("{}: initialized", $app_name);
        }

        fn install_logging() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
        }

        #[wasm_bindgen]
        pub fn app_init() {
            install_logging();
            install($crate::AppRunner::new(<$app_type>::new()));
        }

        /// Like `app_init`, with a JSON object overriding fields of the app's config.
        #[wasm_bindgen]
        pub fn app_init_with_config(json: &str) {
            install_logging();
            install($crate::AppRunner::with_config_json(<$app_type>::new(), json));
        }

        #[wasm_bindgen]
        pub fn app_start() {
            with_runner(|r| r.start());
        }

        #[wasm_bindgen]
        pub fn app_stop() {
            with_runner(|r| r.stop());
        }

        #[wasm_bindgen]
        pub fn app_is_running() -> bool {
            with_runner(|r| r.is_running()).unwrap_or(false)
        }

        #[wasm_bindgen]
        pub fn app_tick(dt: f32) -> bool {
            with_runner(|r| r.tick(dt)).unwrap_or(false)
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn app_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn app_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn app_select(index: i32) {
            with_runner(|r| r.push_input(InputEvent::Select { index: index as i64 }));
        }

        #[wasm_bindgen]
        pub fn app_toggle_panel() {
            with_runner(|r| r.push_input(InputEvent::TogglePanel));
        }

        #[wasm_bindgen]
        pub fn app_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data loading ----

        #[wasm_bindgen]
        pub async fn app_fetch_text(url: String) {
            let result = $crate::fetch::fetch_text(&url).await;
            with_runner(move |r| r.load(result.as_deref().map_err(|e| e.clone())));
        }

        #[wasm_bindgen]
        pub fn app_load_text(text: &str) {
            with_runner(|r| r.load(Ok(text)));
        }

        #[wasm_bindgen]
        pub fn app_load_failed(reason: String) {
            with_runner(move |r| r.load(Err($crate::starmap_engine::LoadError::Host(reason))));
        }

        // ---- Frame accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_frame_len() -> u32 {
            with_runner(|r| r.frame_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_points_ptr() -> *const f32 {
            with_runner(|r| r.points_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_point_count() -> u32 {
            with_runner(|r| r.point_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient()[0]).unwrap_or(1.0)
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient()[1]).unwrap_or(1.0)
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient()[2]).unwrap_or(1.0)
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height()).unwrap_or(0.0)
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_points() -> u32 {
            with_runner(|r| r.max_points()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
        }

        // ---- Sidebar accessors ----

        #[wasm_bindgen]
        pub fn get_list_json() -> String {
            with_runner(|r| r.list_json()).unwrap_or_else(|| "[]".to_string())
        }

        #[wasm_bindgen]
        pub fn get_label() -> String {
            with_runner(|r| r.label()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_panel_open() -> bool {
            with_runner(|r| r.panel_open()).unwrap_or(false)
        }

        #[wasm_bindgen]
        pub fn get_ui_revision() -> u32 {
            with_runner(|r| r.ui_revision()).unwrap_or(0)
        }
    };
}
