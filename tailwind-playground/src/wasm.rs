//! WASM bindings for the preview contract.
//!
//! Lets a page build payloads and track the preview height in-process,
//! without the server. Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;

use crate::preview::PREVIEW_SANDBOX;
use crate::sync::HeightSync;

/// Build the isolated preview document for `source`.
#[wasm_bindgen(js_name = buildPayload)]
pub fn build_payload(source: &str) -> String {
    crate::preview::build_payload(source)
}

/// The `sandbox` attribute value every preview frame must carry.
#[wasm_bindgen(js_name = sandboxAttribute)]
pub fn sandbox_attribute() -> String {
    PREVIEW_SANDBOX.attribute_value()
}

/// Host-side height state, fed with `MessageEvent.data`.
#[wasm_bindgen]
pub struct HeightTracker {
    inner: HeightSync,
}

#[wasm_bindgen]
impl HeightTracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HeightTracker {
        HeightTracker {
            inner: HeightSync::default(),
        }
    }

    /// Returns whether the message was accepted. Values that cannot be read
    /// as JSON are ignored like any other malformed message.
    pub fn receive(&mut self, data: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(data) {
            Ok(value) => self.inner.receive(&value),
            Err(_) => false,
        }
    }

    /// The CSS `height` value, e.g. `"100%"` or `"532px"`.
    pub fn height(&self) -> String {
        self.inner.height().to_string()
    }

    #[wasm_bindgen(getter, js_name = minHeight)]
    pub fn min_height(&self) -> u32 {
        self.inner.min_height()
    }

    /// Pixels shown after the floor applies, or `undefined` before the first
    /// message.
    #[wasm_bindgen(js_name = renderedPx)]
    pub fn rendered_px(&self) -> Option<u32> {
        self.inner.rendered_px()
    }

    /// Back to the fill state, e.g. when the preview frame is remounted.
    pub fn reset(&mut self) {
        self.inner = HeightSync::new(self.inner.padding(), self.inner.min_height());
    }
}

impl Default for HeightTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Every catalog snippet as `{ title, category, code }` objects.
#[wasm_bindgen]
pub fn snippets() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(crate::snippets::CATALOG).map_err(|e| JsError::new(&e.to_string()))
}

/// Notice table keyed by notice name, for toasts.
#[wasm_bindgen]
pub fn notices() -> JsValue {
    let table = crate::notice::Notice::table_json();
    let out = js_sys::Object::new();
    if let Some(map) = table.as_object() {
        for (key, entry) in map {
            let item = js_sys::Object::new();
            for field in ["title", "description"] {
                let text = entry.get(field).and_then(|v| v.as_str()).unwrap_or_default();
                let _ = js_sys::Reflect::set(&item, &field.into(), &JsValue::from_str(text));
            }
            let failure = entry.get("failure").and_then(|v| v.as_bool()).unwrap_or(false);
            let _ = js_sys::Reflect::set(&item, &"failure".into(), &JsValue::from_bool(failure));
            let _ = js_sys::Reflect::set(&out, &JsValue::from_str(key), &item);
        }
    }
    out.into()
}
