//! WebAssembly bindings.
//!
//! Exposes the histogram widget to JavaScript. The chart is drawn in Rust;
//! the page blits the returned RGBA pixels (or PNG) into its own canvas.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmHistogram } from 'histogram-widget';
//!
//! await init();
//!
//! const hist = new WasmHistogram(['A', 'B', 'C'], 400, 400, 'Emotivist beliefs');
//! hist.render(new Float64Array([12, 30, 7]));
//!
//! const ctx = document.getElementById('beliefs').getContext('2d');
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(hist.rgba()), 400, 400), 0, 0);
//! ```

use wasm_bindgen::prelude::*;

use crate::binning;
use crate::page::{Page, DEFAULT_ANCHOR_ID};
use crate::render::BarChartFactory;
use crate::widget::HistogramWidget;

fn to_js(err: crate::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"histogram-widget initialized".into());
}

/// A histogram widget owned by JavaScript.
#[wasm_bindgen]
pub struct WasmHistogram {
    page: Page,
    widget: HistogramWidget<BarChartFactory>,
}

#[wasm_bindgen]
impl WasmHistogram {
    /// Create a widget with all bins at zero.
    #[wasm_bindgen(constructor)]
    pub fn new(
        bins: js_sys::Array,
        width: u32,
        height: u32,
        series_label: &str,
    ) -> Result<WasmHistogram, JsValue> {
        let labels: Vec<String> = bins
            .iter()
            .map(|v| v.as_string().unwrap_or_else(|| format!("{v:?}")))
            .collect();

        let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
        let widget = {
            let mut anchor = page.anchor(DEFAULT_ANCHOR_ID).map_err(to_js)?;
            HistogramWidget::new(&mut anchor, BarChartFactory, labels, width, height, series_label)
                .map_err(to_js)?
        };
        Ok(Self { page, widget })
    }

    /// Overwrite bins `0..values.length` and redraw.
    pub fn render(&mut self, values: &[f64]) -> Result<(), JsValue> {
        self.widget
            .render(values.iter().copied().enumerate())
            .map_err(to_js)
    }

    /// Overwrite a single bin and redraw.
    pub fn render_at(&mut self, index: usize, value: f64) -> Result<(), JsValue> {
        self.widget.render([(index, value)]).map_err(to_js)
    }

    /// Reset every bin to zero.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.widget.reset().map_err(to_js)
    }

    /// Current bin values.
    pub fn values(&self) -> Vec<f64> {
        self.widget.values().to_vec()
    }

    /// Highlight the bar under a pointer position; returns the bin or -1.
    pub fn hover(&mut self, x: f32, y: f32) -> Result<i32, JsValue> {
        let hit = self.widget.hover(x, y).map_err(to_js)?;
        Ok(hit.map_or(-1, |bin| bin as i32))
    }

    /// Canvas pixels as tightly packed RGBA, ready for `ImageData`.
    pub fn rgba(&self) -> Result<Vec<u8>, JsValue> {
        let fb = self.widget.canvas().snapshot().map_err(to_js)?;
        Ok(fb.to_compact_pixels())
    }

    /// Canvas pixels as PNG.
    pub fn png(&self) -> Result<Vec<u8>, JsValue> {
        self.widget.canvas().to_png().map_err(to_js)
    }

    /// Markup of the mounted canvas element.
    pub fn html(&self) -> String {
        self.page.to_html()
    }
}

/// Count single-letter belief labels into `bins - 1` unit bins.
#[wasm_bindgen]
pub fn belief_counts(beliefs: js_sys::Array, bins: usize) -> Result<Vec<u32>, JsValue> {
    let labels: Vec<String> = beliefs.iter().filter_map(|v| v.as_string()).collect();
    binning::belief_counts(&labels, &binning::integer_edges(bins)).map_err(to_js)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
