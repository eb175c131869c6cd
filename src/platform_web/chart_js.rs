use js_sys::{Array, Function, JSON, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use crate::charts::{ChartBackend, ChartConfig};
use crate::error::{DeckError, DeckResult};

/// Forwards chart definitions to the page's global `Chart` constructor.
pub struct ChartJsBackend {
    document: Document,
    constructor: Function,
}

impl ChartJsBackend {
    pub fn from_global(document: Document) -> DeckResult<Self> {
        let unavailable = |reason: String| DeckError::Chart {
            mount_id: "*".to_owned(),
            reason,
        };
        let value = Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
            .map_err(|err| unavailable(format!("failed to read global `Chart`: {err:?}")))?;
        let constructor = value
            .dyn_into::<Function>()
            .map_err(|_| unavailable("global `Chart` is not a constructor".to_owned()))?;
        Ok(Self {
            document,
            constructor,
        })
    }
}

impl ChartBackend for ChartJsBackend {
    fn has_mount(&self, mount_id: &str) -> bool {
        self.document.get_element_by_id(mount_id).is_some()
    }

    fn render_chart(&mut self, mount_id: &str, config: &ChartConfig) -> DeckResult<()> {
        let chart_error = |reason: String| DeckError::Chart {
            mount_id: mount_id.to_owned(),
            reason,
        };
        let mount = self
            .document
            .get_element_by_id(mount_id)
            .ok_or_else(|| chart_error("mount point disappeared".to_owned()))?;
        let payload = serde_json::to_string(config)
            .map_err(|err| chart_error(format!("failed to serialize config: {err}")))?;
        let js_config = JSON::parse(&payload)
            .map_err(|err| chart_error(format!("failed to parse config: {err:?}")))?;
        let args = Array::of2(mount.as_ref(), &js_config);
        Reflect::construct(&self.constructor, &args)
            .map_err(|err| chart_error(format!("Chart constructor failed: {err:?}")))?;
        Ok(())
    }
}
