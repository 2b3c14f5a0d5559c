use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod error;
pub mod game;
pub mod panel;
pub mod picking;
pub mod simulation;
pub use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");

// ── Control panel ────────────────────────────────────────────────────

/// Panel layout (sliders, labels, theme colors) as JSON.
#[wasm_bindgen]
pub fn game_panel_json() -> Result<String, JsValue> {
    match with_runner(|r| r.game().describe_panel()) {
        Some(Ok(json)) => Ok(json),
        Some(Err(err)) => Err(JsValue::from_str(&err.to_string())),
        None => Ok(String::from("{}")),
    }
}

/// Slider input for the named body. Returns the readout text.
#[wasm_bindgen]
pub fn game_set_speed(name: &str, value: f64) -> Result<String, JsValue> {
    match with_runner(|r| r.game_mut().set_speed(name, value)) {
        Some(Ok(readout)) => Ok(readout),
        Some(Err(err)) => Err(JsValue::from_str(&err.to_string())),
        None => Ok(String::new()),
    }
}

/// Returns the new pause button label.
#[wasm_bindgen]
pub fn game_toggle_pause() -> String {
    with_runner(|r| r.game_mut().toggle_pause()).unwrap_or("Pause").to_string()
}

/// Returns the new theme, "dark" or "light".
#[wasm_bindgen]
pub fn game_toggle_theme() -> String {
    match with_runner(|r| r.game_mut().toggle_theme()) {
        Some(panel::Theme::Light) => "light".to_string(),
        _ => "dark".to_string(),
    }
}
