//! WASM bindings for the restyle engine.
//!
//! Exposes `generate()` to JavaScript via wasm-bindgen. The browser UI
//! owns the whole lifecycle around it: injecting the returned CSS into a
//! live style element, resetting it, and replacing it wholesale on each
//! generation. Returns a JS object `{ css, tags }` or throws on an empty
//! prompt.

use restyle_engine::{validate_prompt, StaticTemplateEngine, StyleEngine};
use wasm_bindgen::prelude::*;

/// Generate a stylesheet for a style prompt.
///
/// Returns a JS object `{ css: string, tags: string[] }`. Throws a JS
/// error if the prompt is empty after trimming; any non-empty prompt
/// succeeds (unmatched prompts fall back to the default template).
#[wasm_bindgen]
pub fn generate(prompt: &str) -> Result<JsValue, JsError> {
    let prompt = validate_prompt(prompt).map_err(|e| JsError::new(&e.to_string()))?;

    let engine = StaticTemplateEngine::new();
    let css = engine.generate(prompt);

    let tags = js_sys::Array::new();
    for tag in engine.classify(prompt).iter() {
        tags.push(&JsValue::from_str(&tag.to_string()));
    }

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"css".into(), &css.into())
        .map_err(|_| JsError::new("Failed to set css property"))?;
    js_sys::Reflect::set(&js_obj, &"tags".into(), &tags.into())
        .map_err(|_| JsError::new("Failed to set tags property"))?;

    Ok(js_obj.into())
}

/// The canned suggestion prompts, as a JS string array.
#[wasm_bindgen]
pub fn suggestions() -> js_sys::Array {
    restyle_engine::SUGGESTIONS
        .iter()
        .map(|s| JsValue::from_str(s))
        .collect()
}

/// Get the engine version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
