//! Browser entry point: a Web Worker posts request objects to
//! [`calculate_path`] and posts the returned object back to the page.

use crate::worker::{PathResponse, RawKind, RawRequest, dispatch_raw_started, undecodable};
use instant::Instant;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

// Better panic messages in the browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn response_to_js(response: &PathResponse) -> JsValue {
    to_value(response).unwrap_or_else(|e| {
        JsValue::from_str(&format!("Failed to convert response to JS: {e}"))
    })
}

/// Traces the path described by a request object and returns the response object.
#[wasm_bindgen(js_name = calculatePath)]
pub fn calculate_path(message: JsValue) -> JsValue {
    let started = Instant::now();
    let response = match from_value::<RawRequest>(message.clone()) {
        Ok(raw) => dispatch_raw_started(started, raw),
        Err(e) => {
            let kind = from_value::<RawKind>(message).ok().and_then(|k| k.kind);
            undecodable(started, kind, e.to_string())
        },
    };
    response_to_js(&response)
}

/// Same as [`calculate_path`] for hosts that exchange JSON strings.
#[wasm_bindgen(js_name = calculatePathJson)]
pub fn calculate_path_json(message: &str) -> String {
    crate::worker::handle_message(message).to_json()
}
