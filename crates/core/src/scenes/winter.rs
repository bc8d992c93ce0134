//! Decorative winter illustration: trees, a snowman and falling flakes.
//!
//! The scene has a fixed size and ignores the viewport entirely.

use folio_protocol::{AnimationDescriptor, Element, TransformKind};

use crate::builder::{build, instance, place, translate};
use crate::geometry::{triangle_points, wave_path};

use super::{linear_gradient, svg_root};

pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 600.0;

const GROUND_Y: f64 = 480.0;
const TREE_GREEN: &str = "#2f6b3c";
const BARK: &str = "#6b4226";
const SNOW_WHITE: &str = "#ffffff";
const SNOW_SHADE: &str = "#cfd8e3";
const COAL: &str = "#1a1a1a";
const CARROT: &str = "#f28c28";
const HAT_BAND: &str = "#d4502e";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlakeSize {
    Small,
    Large,
}

impl FlakeSize {
    fn template(self) -> &'static str {
        match self {
            FlakeSize::Small => "flake-small",
            FlakeSize::Large => "flake-large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlakeSpeed {
    Fast,
    Slow,
}

impl FlakeSpeed {
    fn duration_s(self) -> f64 {
        match self {
            FlakeSpeed::Fast => 3.0,
            FlakeSpeed::Slow => 5.0,
        }
    }
}

/// `(x, y, size, speed)` of every falling flake.
const FLAKES: [(f64, f64, FlakeSize, FlakeSpeed); 12] = [
    (60.0, -10.0, FlakeSize::Small, FlakeSpeed::Slow),
    (140.0, 40.0, FlakeSize::Large, FlakeSpeed::Fast),
    (210.0, -20.0, FlakeSize::Small, FlakeSpeed::Fast),
    (280.0, 80.0, FlakeSize::Large, FlakeSpeed::Slow),
    (350.0, 10.0, FlakeSize::Small, FlakeSpeed::Slow),
    (430.0, -30.0, FlakeSize::Large, FlakeSpeed::Fast),
    (500.0, 60.0, FlakeSize::Small, FlakeSpeed::Fast),
    (560.0, 0.0, FlakeSize::Large, FlakeSpeed::Slow),
    (620.0, 110.0, FlakeSize::Small, FlakeSpeed::Slow),
    (690.0, -15.0, FlakeSize::Large, FlakeSpeed::Fast),
    (740.0, 50.0, FlakeSize::Small, FlakeSpeed::Fast),
    (780.0, -5.0, FlakeSize::Small, FlakeSpeed::Slow),
];

/// `(x, y, scale)` of each tree instance; `y` is the trunk base.
const TREES: [(f64, f64, f64); 4] = [
    (90.0, 500.0, 1.0),
    (190.0, 510.0, 0.7),
    (640.0, 505.0, 1.1),
    (730.0, 515.0, 0.8),
];

const FLAKE_STAGGER_S: f64 = 0.3;

/// Build the winter scene. Pure and idempotent.
pub fn compose_winter() -> Element {
    let mut root = svg_root(WIDTH, HEIGHT)
        .child(defs())
        .child(build("rect", [("width", WIDTH), ("height", HEIGHT)]).attr("fill", "url(#sky)"))
        .child(
            Element::new("path")
                .attr(
                    "d",
                    format!("{} L {WIDTH} {HEIGHT} L 0 {HEIGHT} Z", wave_path(WIDTH, GROUND_Y, 0.0)),
                )
                .attr("fill", "url(#snow)"),
        );

    for &(x, y, scale) in &TREES {
        root = root.child(instance("tree", place(x, y, scale)));
    }

    root = root.child(snowman(420.0, 395.0));

    for (index, &(x, y, size, speed)) in FLAKES.iter().enumerate() {
        root = root.child(falling_flake(index, x, y, size, speed));
    }

    root
}

fn defs() -> Element {
    Element::new("defs")
        .child(linear_gradient(
            "sky",
            ("0%", "0%", "0%", "100%"),
            ("#0b1d3a", "1"),
            ("#3a6ea5", "1"),
        ))
        .child(linear_gradient(
            "snow",
            ("0%", "0%", "0%", "100%"),
            (SNOW_WHITE, "1"),
            ("#dfe9f3", "1"),
        ))
        .child(tree_template())
        .child(
            Element::new("circle")
                .attr("id", FlakeSize::Small.template())
                .attr("r", 2.0)
                .attr("fill", SNOW_WHITE),
        )
        .child(
            Element::new("circle")
                .attr("id", FlakeSize::Large.template())
                .attr("r", 4.0)
                .attr("fill", SNOW_WHITE)
                .attr("opacity", 0.9),
        )
}

/// A tree drawn around its trunk base at the origin.
fn tree_template() -> Element {
    let tier = |x: f64, y: f64, size: f64| {
        Element::new("polygon")
            .attr("points", triangle_points(x, y, size))
            .attr("fill", TREE_GREEN)
    };
    Element::new("g")
        .attr("id", "tree")
        .child(
            build("rect", [("x", -8.0), ("y", -20.0), ("width", 16.0), ("height", 20.0)])
                .attr("fill", BARK),
        )
        .child(tier(-40.0, -20.0, 80.0))
        .child(tier(-32.0, -55.0, 64.0))
        .child(tier(-24.0, -85.0, 48.0))
}

/// Snowman with its middle ball centred on `(x, y)`.
fn snowman(x: f64, y: f64) -> Element {
    let ball = |cy: f64, r: f64| {
        build("circle", [("cx", 0.0), ("cy", cy), ("r", r), ("stroke-width", 2.0)])
            .attr("fill", SNOW_WHITE)
            .attr("stroke", SNOW_SHADE)
    };
    let dot = |cx: f64, cy: f64, r: f64| {
        build("circle", [("cx", cx), ("cy", cy), ("r", r)]).attr("fill", COAL)
    };
    let arm = |x2: f64, y2: f64, side: f64| {
        build(
            "line",
            [
                ("x1", 38.0 * side),
                ("y1", -5.0),
                ("x2", x2),
                ("y2", y2),
                ("stroke-width", 4.0),
            ],
        )
        .attr("stroke", BARK)
        .attr("stroke-linecap", "round")
    };
    let block = |bx: f64, by: f64, w: f64, h: f64, fill: &str| {
        build("rect", [("x", bx), ("y", by), ("width", w), ("height", h)]).attr("fill", fill)
    };

    Element::new("g")
        .attr("id", "snowman")
        .attr("transform", translate(x, y))
        .child(ball(80.0, 55.0))
        .child(ball(0.0, 40.0))
        .child(ball(-60.0, 28.0))
        .child(dot(-10.0, -66.0, 3.0))
        .child(dot(10.0, -66.0, 3.0))
        .child(
            Element::new("polygon")
                .attr("points", "0,-58 22,-54 0,-50")
                .attr("fill", CARROT),
        )
        .child(dot(0.0, -12.0, 3.5))
        .child(dot(0.0, 2.0, 3.5))
        .child(dot(0.0, 16.0, 3.5))
        .child(arm(-90.0, -40.0, -1.0))
        .child(arm(90.0, -45.0, 1.0))
        .child(block(-32.0, -90.0, 64.0, 8.0, COAL))
        .child(block(-22.0, -130.0, 44.0, 42.0, COAL))
        .child(block(-22.0, -98.0, 44.0, 6.0, HAT_BAND))
}

fn falling_flake(index: usize, x: f64, y: f64, size: FlakeSize, speed: FlakeSpeed) -> Element {
    let fall = HEIGHT - y;
    // Tenths keep the delay an exact decimal (0.9, not 0.8999…).
    let delay = (index as f64 * FLAKE_STAGGER_S * 10.0).round() / 10.0;
    instance(size.template(), translate(x, y)).animate(
        AnimationDescriptor::transform(
            TransformKind::Translate,
            ["0,0".to_owned(), format!("0,{fall}")],
        )
        .duration(speed.duration_s())
        .delay(delay)
        .additive(),
    )
}
