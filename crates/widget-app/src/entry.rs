//! Browser entry points: auto-start from the host declaration, or an
//! explicit `mount` returning a teardown handle.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use widget_types::config::WidgetConfig;

use crate::app::WidgetApp;

const CANVAS_ID: &str = "chat_widget_canvas";

/// Handle returned from `mount`. Keeps teardown an explicit call
/// instead of an ambient global or implicit DOM-node removal.
#[wasm_bindgen]
pub struct WidgetHandle {
    runner: eframe::WebRunner,
}

#[wasm_bindgen]
impl WidgetHandle {
    /// Stop the widget and release its canvas.
    pub fn destroy(&self) {
        self.runner.destroy();
    }
}

/// Mount the widget onto a canvas element by id.
#[wasm_bindgen]
pub async fn mount(
    canvas_id: String,
    business_id: String,
    api_base: Option<String>,
) -> Result<WidgetHandle, JsValue> {
    let canvas = find_canvas(&canvas_id)?;
    run(canvas, business_id, api_base).await
}

/// Auto-start: runs once the host document is ready. A page without
/// the declared canvas simply doesn't start the widget — hosts using
/// `mount` directly land here too.
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chat widget loading...");

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No host document");
        return;
    };
    let Some(element) = document.get_element_by_id(CANVAS_ID) else {
        log::info!(
            "No element with id '{}'; waiting for an explicit mount()",
            CANVAS_ID
        );
        return;
    };

    let business_id = element
        .get_attribute("data-business-id")
        .unwrap_or_default();
    if business_id.is_empty() {
        log::error!("Widget canvas is missing the data-business-id declaration");
        return;
    }
    let api_base = element.get_attribute("data-api-base");

    let Ok(canvas) = element.dyn_into::<web_sys::HtmlCanvasElement>() else {
        log::error!("Widget element '{}' is not a canvas", CANVAS_ID);
        return;
    };

    match run(canvas, business_id, api_base).await {
        // The runner stays alive without the handle; dropping it here
        // does not tear the widget down.
        Ok(_handle) => log::info!("Chat widget mounted"),
        Err(e) => log::error!("Failed to start chat widget: {:?}", e),
    }
}

fn find_canvas(canvas_id: &str) -> Result<web_sys::HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No host document"))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("No element with the given id"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))
}

async fn run(
    canvas: web_sys::HtmlCanvasElement,
    business_id: String,
    api_base: Option<String>,
) -> Result<WidgetHandle, JsValue> {
    let mut config = WidgetConfig::new(business_id);
    if let Some(base) = api_base {
        config = config.with_api_base(base);
    }

    let runner = eframe::WebRunner::new();
    runner
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(WidgetApp::new(cc, config)))),
        )
        .await?;

    Ok(WidgetHandle { runner })
}
