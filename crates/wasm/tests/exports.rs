#![cfg(target_arch = "wasm32")]

use folio_wasm::{
    config_defaults, render_bar_chart_svg, render_geometric_svg, render_winter_svg,
    validate_contact,
};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn chart_export_switches_layout_at_breakpoint() {
    assert!(render_bar_chart_svg(768.0).contains(r#"viewBox="0 0 800 560""#));
    assert!(render_bar_chart_svg(769.0).contains(r#"viewBox="0 0 800 500""#));
}

#[wasm_bindgen_test]
fn decorative_exports_are_svg_documents() {
    for svg in [render_winter_svg(), render_geometric_svg()] {
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }
}

#[wasm_bindgen_test]
fn contact_validation() {
    assert!(validate_contact("Ada", "ada@example.com", "Hello there, friend").is_ok());
    assert!(validate_contact("A", "ada@example.com", "Hello there, friend").is_err());
}

#[wasm_bindgen_test]
fn defaults_serialize() {
    let json = config_defaults().ok();
    assert!(json.is_some_and(|j| j.contains("\"bar_chart\":\"dataViz\"")));
}
