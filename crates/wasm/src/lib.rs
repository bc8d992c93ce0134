mod dom;
mod page;
mod timer;

use folio_core::page::ContactForm;
use folio_core::svg::render_svg;
use folio_core::{PageConfig, compose_bar_chart, compose_geometric, compose_winter};
use folio_protocol::ViewportProfile;
use folio_protocol::viewport::COMPACT_BREAKPOINT;
use wasm_bindgen::prelude::*;

pub use dom::DomSurface;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Draw the scenes and attach every page behaviour using the default ids
/// and timings.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    page::install(PageConfig::default())
}

/// Like [`start`], with a JSON [`PageConfig`] overriding any defaults.
#[wasm_bindgen]
pub fn start_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config_json).map_err(|e| JsError::new(&e.to_string()))?;
    page::install(config)
}

/// The default configuration as JSON, for pages that want to tweak it.
#[wasm_bindgen]
pub fn config_defaults() -> Result<String, JsError> {
    serde_json::to_string(&PageConfig::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Static SVG markup of the skills chart for a viewport of the given width.
/// Bars are drawn at their final widths.
#[wasm_bindgen]
pub fn render_bar_chart_svg(viewport_width: f64) -> String {
    let profile = ViewportProfile::for_width(viewport_width, COMPACT_BREAKPOINT);
    let scene = compose_bar_chart(&folio_core::scenes::default_skills(), &profile);
    render_svg(&scene.settled())
}

#[wasm_bindgen]
pub fn render_winter_svg() -> String {
    render_svg(&compose_winter())
}

#[wasm_bindgen]
pub fn render_geometric_svg() -> String {
    render_svg(&compose_geometric())
}

/// Validate a contact submission. Rejects with the user-facing message of the
/// first failing rule.
#[wasm_bindgen]
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), JsError> {
    ContactForm::new(name, email, message)
        .validate()
        .map_err(|e| JsError::new(&e.to_string()))
}
