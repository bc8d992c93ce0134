//! Geometric art: rotating rings, floating shapes and morphing waves on a
//! dark background.

use std::f64::consts::PI;

use folio_protocol::{AnimationDescriptor, Element, TransformKind};

use crate::builder::build;
use crate::geometry::{triangle_points, wave_path};

use super::{linear_gradient, svg_root};

pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 600.0;

const BACKGROUND: &str = "#1a1a1a";
const ORANGE: &str = "#d4502e";
const YELLOW: &str = "#f4d03f";
const RING_COUNT: u32 = 8;
const WAVE_COUNT: u32 = 3;

#[derive(Debug, Clone, Copy)]
enum Shape {
    Square,
    Triangle,
}

/// `(shape, x, y, size)` of the floating shapes.
static SHAPES: [(Shape, f64, f64, f64); 4] = [
    (Shape::Square, 100.0, 100.0, 60.0),
    (Shape::Square, 650.0, 450.0, 50.0),
    (Shape::Triangle, 150.0, 450.0, 40.0),
    (Shape::Triangle, 650.0, 100.0, 55.0),
];

/// Build the geometric scene. Pure and idempotent.
pub fn compose_geometric() -> Element {
    let defs = Element::new("defs")
        .child(linear_gradient(
            "grad1",
            ("0%", "0%", "100%", "100%"),
            (ORANGE, "1"),
            (YELLOW, "1"),
        ))
        .child(linear_gradient(
            "grad2",
            ("0%", "0%", "0%", "100%"),
            (YELLOW, "0.8"),
            (ORANGE, "0.8"),
        ));

    svg_root(WIDTH, HEIGHT)
        .child(defs)
        .child(
            build("rect", [("width", WIDTH), ("height", HEIGHT)]).attr("fill", BACKGROUND),
        )
        .with_children(rings())
        .with_children(floating_shapes())
        .with_children(waves())
}

fn rings() -> impl Iterator<Item = Element> {
    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0);
    (0..RING_COUNT).map(move |i| {
        let i = f64::from(i);
        build(
            "circle",
            [
                ("cx", cx),
                ("cy", cy),
                ("r", 50.0 + i * 30.0),
                ("stroke-width", 2.0),
                ("opacity", 1.0 - (i / f64::from(RING_COUNT)) * 0.7),
            ],
        )
        .attr("fill", "none")
        .attr("stroke", "url(#grad1)")
        .animate(AnimationDescriptor::spin(cx, cy).duration(10.0 + i * 2.0))
    })
}

fn floating_shapes() -> impl Iterator<Item = Element> {
    SHAPES
        .iter()
        .enumerate()
        .map(|(index, &(shape, x, y, size))| {
            let index = index as f64;
            match shape {
                Shape::Square => {
                    let (cx, cy) = (x + size / 2.0, y + size / 2.0);
                    build("rect", [("x", x), ("y", y), ("width", size), ("height", size)])
                        .attr("fill", "url(#grad2)")
                        .attr("transform", format!("rotate(45 {cx} {cy})"))
                        .animate(
                            AnimationDescriptor::transform(
                                TransformKind::Translate,
                                ["0,0", "0,-20", "0,0"],
                            )
                            .duration(3.0 + index * 0.5)
                            .additive(),
                        )
                }
                Shape::Triangle => Element::new("polygon")
                    .attr("points", triangle_points(x, y, size))
                    .attr("fill", "url(#grad1)")
                    .attr("opacity", 0.6)
                    .animate(AnimationDescriptor::spin(x, y).duration(8.0 + index)),
            }
        })
}

fn waves() -> impl Iterator<Item = Element> {
    (0..WAVE_COUNT).map(|i| {
        let y = HEIGHT - 150.0 + f64::from(i) * 30.0;
        let rest = wave_path(WIDTH, y, 0.0);
        let shifted = wave_path(WIDTH, y, PI);
        Element::new("path")
            .attr("d", rest.as_str())
            .attr("fill", "none")
            .attr("stroke", if i == 1 { YELLOW } else { ORANGE })
            .attr("stroke-width", 2.0)
            .attr("opacity", 0.3 + f64::from(i) * 0.2)
            .animate(
                AnimationDescriptor::attribute("d", [rest.clone(), shifted, rest])
                    .duration(4.0 + f64::from(i)),
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::{Keyframes, Repeat};

    #[test]
    fn rebuild_is_identical() {
        assert_eq!(compose_geometric(), compose_geometric());
    }

    #[test]
    fn eight_rings_each_spinning() {
        let scene = compose_geometric();
        let rings: Vec<&Element> = scene.children.iter().filter(|e| e.tag == "circle").collect();
        assert_eq!(rings.len(), 8);
        for (i, ring) in rings.iter().enumerate() {
            assert_eq!(ring.number_attr("r"), Some(50.0 + i as f64 * 30.0));
            assert_eq!(ring.animations.len(), 1);
            assert_eq!(ring.animations[0].duration_s, 10.0 + i as f64 * 2.0);
            assert_eq!(ring.animations[0].repeat, Repeat::Infinite);
        }
    }

    #[test]
    fn triangles_use_geometry_helper() {
        let scene = compose_geometric();
        let polygon = scene.children.iter().find(|e| e.tag == "polygon");
        assert_eq!(
            polygon.and_then(|p| p.get_attr("points")).map(ToString::to_string),
            Some(triangle_points(150.0, 450.0, 40.0))
        );
    }

    #[test]
    fn waves_morph_between_phases() {
        let scene = compose_geometric();
        let paths: Vec<&Element> = scene.children.iter().filter(|e| e.tag == "path").collect();
        assert_eq!(paths.len(), 3);
        let Keyframes::Values(values) = &paths[0].animations[0].keyframes else {
            unreachable!("wave animation uses keyframe values");
        };
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], values[2]);
        assert_ne!(values[0], values[1]);
    }

    #[test]
    fn squares_float_additively() {
        let scene = compose_geometric();
        let squares: Vec<&Element> = scene
            .children
            .iter()
            .filter(|e| e.tag == "rect" && !e.animations.is_empty())
            .collect();
        assert_eq!(squares.len(), 2);
        assert!(squares.iter().all(|s| s.animations[0].additive));
        assert_eq!(squares[1].animations[0].duration_s, 3.5);
    }
}
