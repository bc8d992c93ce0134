//! Element construction helpers.

use folio_protocol::{AttrValue, Element};

/// Build an element with `attributes` set verbatim, in order.
///
/// No validation of tag names or attribute legality happens here; an invalid
/// combination only shows up when a surface renders it.
pub fn build<K, V>(tag: &str, attributes: impl IntoIterator<Item = (K, V)>) -> Element
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    let mut element = Element::new(tag);
    for (name, value) in attributes {
        element.set_attr(name, value);
    }
    element
}

/// `translate(x, y)` transform string.
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({x}, {y})")
}

/// `translate(x, y) scale(s)` transform string for template instances.
pub fn place(x: f64, y: f64, scale: f64) -> String {
    format!("translate({x}, {y}) scale({scale})")
}

/// `<use>` element referencing the template with id `template`.
pub fn instance(template: &str, transform: String) -> Element {
    Element::new("use")
        .attr("href", format!("#{template}"))
        .attr("transform", transform)
}
