pub mod frame_buffer;
pub mod runner;

pub use frame_buffer::FrameBuffer;
pub use runner::GameRunner;
pub use orrery_engine;

use orrery_engine::EngineError;
use wasm_bindgen::JsValue;

/// Seed for the engine RNG, drawn from `Math.random()` on the host.
pub fn host_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

/// Convert an engine error into a JS exception, echoing it to the console
/// regardless of the configured log level.
pub fn to_js_error(err: EngineError) -> JsValue {
    let value = JsValue::from_str(&err.to_string());
    web_sys::console::error_1(&value);
    value
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// This macro generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers,
///   texture callbacks, frame buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_game!(MyScene, "my-scene");
/// ```
///
/// The game crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`, and `$game_type` must have a `new()`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        /// Run `f` against the live runner, or log and return None before
        /// `game_init()` has been called.
        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        log::error!("{}: game not initialized, call game_init() first", $game_name);
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init(orbit_controls: bool) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let mut runner = $crate::GameRunner::new(game);
            runner.init_with(
                $crate::host_seed(),
                $crate::orrery_engine::HostCapabilities { orbit_controls },
            );

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(now_ms: f64) -> Result<(), JsValue> {
            match with_runner(|r| r.tick(now_ms)) {
                Some(Ok(_)) | None => Ok(()),
                Some(Err(err)) => Err($crate::to_js_error(err)),
            }
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32, button: u32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::PointerDown { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32, button: u32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::PointerUp { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta_y: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::Wheel { delta_y }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Textures ----

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) -> Result<u32, JsValue> {
            match with_runner(|r| r.load_manifest(json)) {
                Some(Ok(n)) => Ok(n as u32),
                Some(Err(err)) => Err($crate::to_js_error(err)),
                None => Ok(0),
            }
        }

        #[wasm_bindgen]
        pub fn game_pending_textures() -> Result<String, JsValue> {
            match with_runner(|r| r.pending_textures_json()) {
                Some(Ok(json)) => Ok(json),
                Some(Err(err)) => Err($crate::to_js_error(err)),
                None => Ok(String::from("{}")),
            }
        }

        #[wasm_bindgen]
        pub fn game_texture_loaded(name: &str, ok: bool, error: &str) {
            with_runner(|r| r.texture_loaded(name, ok, error));
        }

        // ---- Frame buffer ----

        #[wasm_bindgen]
        pub fn get_frame_buffer_ptr() -> *const f32 {
            with_runner(|r| r.frame_buffer_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or_default()
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_meshes() -> u32 {
            with_runner(|r| r.max_meshes()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_max_rings() -> u32 {
            with_runner(|r| r.max_rings()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_max_stars() -> u32 {
            with_runner(|r| r.max_stars()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights()).unwrap_or_default()
        }
    };
}
