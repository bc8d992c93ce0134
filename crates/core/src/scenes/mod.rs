//! Scene composers. Each returns a complete `<svg>` element tree; nothing
//! here touches a live surface.

pub mod bar_chart;
pub mod geometric;
pub mod winter;

pub use bar_chart::{BarChartScene, BarPlan, LabelFade, compose_bar_chart, default_skills};
pub use geometric::compose_geometric;
pub use winter::compose_winter;

use folio_protocol::Element;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root `<svg>` with a `width × height` coordinate space.
fn svg_root(width: f64, height: f64) -> Element {
    Element::new("svg")
        .attr("xmlns", SVG_NS)
        .attr("viewBox", format!("0 0 {width} {height}"))
        .attr("width", width)
        .attr("height", height)
}

/// `<linearGradient>` running from `(x1, y1)` to `(x2, y2)` with two stops of
/// `(color, opacity)`.
fn linear_gradient(
    id: &str,
    (x1, y1, x2, y2): (&str, &str, &str, &str),
    from: (&str, &str),
    to: (&str, &str),
) -> Element {
    let stop = |offset: &str, (color, opacity): (&str, &str)| {
        Element::new("stop")
            .attr("offset", offset)
            .attr("stop-color", color)
            .attr("stop-opacity", opacity)
    };
    Element::new("linearGradient")
        .attr("id", id)
        .attr("x1", x1)
        .attr("y1", y1)
        .attr("x2", x2)
        .attr("y2", y2)
        .child(stop("0%", from))
        .child(stop("100%", to))
}
