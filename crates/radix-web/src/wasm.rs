#![forbid(unsafe_code)]

use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::{WebError, WebPage};

fn js_error(err: WebError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_json(json: &str) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(json)
}

/// JS-facing page handle.
///
/// Inputs are JSON strings; outputs are parsed JS values so the page can
/// iterate commands and events directly.
#[wasm_bindgen]
pub struct RadixWeb {
    inner: WebPage,
    origin: Instant,
}

#[wasm_bindgen]
impl RadixWeb {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<RadixWeb, JsValue> {
        Ok(Self {
            inner: WebPage::new(config_json).map_err(js_error)?,
            origin: Instant::now(),
        })
    }

    #[wasm_bindgen(js_name = setPageHost)]
    pub fn set_page_host(&mut self, host: &str) {
        self.inner.set_page_host(host);
    }

    pub fn measure(&mut self, json: &str) -> Result<(), JsValue> {
        self.inner.measure(json).map_err(js_error)
    }

    pub fn register(&mut self, json: &str) -> Result<(), JsValue> {
        self.inner.register(json).map_err(js_error)
    }

    pub fn click(&mut self, json: &str) -> Result<bool, JsValue> {
        self.inner.click(json).map_err(js_error)
    }

    pub fn pointer(&mut self, json: &str) -> Result<bool, JsValue> {
        self.inner.pointer(json).map_err(js_error)
    }

    pub fn control(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.control(name).map_err(js_error)
    }

    #[wasm_bindgen(js_name = resizeModal)]
    pub fn resize_modal(&mut self, scale: f64) {
        self.inner.resize_modal(scale);
    }

    #[wasm_bindgen(js_name = selectScale)]
    pub fn select_scale(&mut self, index: u32) {
        self.inner.select_scale(index as usize);
    }

    #[wasm_bindgen(js_name = scrollTo)]
    pub fn scroll_to(&mut self, y: f64) {
        self.inner.scroll_to(y);
    }

    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(&mut self, json: &str) -> Result<(), JsValue> {
        self.inner.on_scroll(json).map_err(js_error)
    }

    #[wasm_bindgen(js_name = pageLoaded)]
    pub fn page_loaded(&mut self, preloader: u32) {
        self.inner.page_loaded(u64::from(preloader));
    }

    /// Advance by `dt_ms`. Returns whether anything is still running.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.inner.advance(dt_ms)
    }

    /// Advance to the current time. Call from `requestAnimationFrame`.
    pub fn frame(&mut self) -> bool {
        let now_ms = self.origin.elapsed().as_secs_f64() * 1000.0;
        self.inner.frame(now_ms)
    }

    #[wasm_bindgen(js_name = drainCommands)]
    pub fn drain_commands(&mut self) -> Result<JsValue, JsValue> {
        let json = self.inner.drain_commands_json().map_err(js_error)?;
        parse_json(&json)
    }

    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let json = self.inner.drain_events_json().map_err(js_error)?;
        parse_json(&json)
    }
}
