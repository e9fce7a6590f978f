//! Shared helpers for WASM API operations
//!
//! Console logging, options/result conversion and error mapping used by the
//! JavaScript-facing functions.

use crate::error::SplitTextError;
use crate::options::RawOptions;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Options / Result Conversion
// ============================================================================

/// Read split options from JavaScript
///
/// Anything that is not a plain object (`undefined`, `null`, strings,
/// numbers, arrays) means defaults.
pub fn options_from_js(value: JsValue) -> Result<RawOptions, SplitTextError> {
    if !value.is_object() || js_sys::Array::is_array(&value) {
        return Ok(RawOptions::default());
    }

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| SplitTextError::InvalidOptions(e.to_string()))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Log a split failure and convert it for JavaScript
pub fn split_error(err: SplitTextError) -> JsValue {
    let msg = err.message();
    log_error(&msg);
    JsValue::from_str(&msg)
}
