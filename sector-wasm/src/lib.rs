//! WASM bindings for the sector decomposition visualization.
//!
//! The page owns the slider state; every change calls [`decompose`] with the current values and
//! draws the returned polygons.

use log::{error, info};
use sector_core::{Decomposition, Params, DEFAULT_SAMPLES};
use wasm_bindgen::prelude::*;
use wasm_bindgen_console_logger::DEFAULT_LOGGER;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

fn params_from_js(params: JsValue) -> Result<Params, JsValue> {
    serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse params: {}", e)))
}

/// Initializes the logging system for WASM.
///
/// Sets up console logging and panic hooks for better error reporting in the browser.
/// Should be called once at application startup.
#[wasm_bindgen]
pub fn init_logs() {
    match log::set_logger(&DEFAULT_LOGGER) {
        Ok(_) => info!("Initialized console.logger"),
        Err(e) => error!("failed to set console.logger: {}", e),
    };
    console_error_panic_hook::set_once();
}

/// Updates the log level filter.
///
/// # Arguments
/// * `level` - Log level string: "off", "error", "warn", "info", "debug", or "trace".
///   Defaults to "info" if empty or null.
#[wasm_bindgen]
pub fn update_log_level(level: JsValue) -> Result<(), JsValue> {
    let level: Option<String> = serde_wasm_bindgen::from_value(level)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse log level: {}", e)))?;
    let level = sector_core::parse_log_level(level.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

/// Default slider values (angle 180°, 12 segments, radius 5), used for the reset button.
#[wasm_bindgen]
pub fn default_params() -> Result<JsValue, JsValue> {
    to_js(&Params::default())
}

/// Snaps free-form input onto the slider grid: clamped into range, whole degrees, half-unit radius.
#[wasm_bindgen]
pub fn clamp_params(params: JsValue) -> Result<JsValue, JsValue> {
    to_js(&params_from_js(params)?.clamped())
}

/// Computes both panels for the given parameters.
///
/// # Arguments
/// * `params` - `{ angle, segments, radius }`, angle in degrees.
/// * `samples` - Arc points per slice (default 30).
///
/// # Returns
/// A [`Decomposition`]: original slices, rearranged slices with their final width, and the plot
/// window of each panel. Throws if a parameter is out of range.
#[wasm_bindgen]
pub fn decompose(params: JsValue, samples: Option<usize>) -> Result<JsValue, JsValue> {
    let params = params_from_js(params)?;
    let decomposition = Decomposition::new(params, samples.unwrap_or(DEFAULT_SAMPLES))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&decomposition)
}
