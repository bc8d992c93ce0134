//! Point and path helpers for the hand-built illustrations.

use std::fmt::Write as _;

use folio_protocol::Point;

const WAVE_AMPLITUDE: f64 = 20.0;
const WAVE_FREQUENCY: f64 = 0.02;
const WAVE_STEP: usize = 10;

/// Vertices of an equilateral triangle with side `size` whose base starts
/// at `(x, y)` and runs right; the apex points up (towards smaller y).
pub fn triangle_vertices(x: f64, y: f64, size: f64) -> [Point; 3] {
    let height = size * 3.0_f64.sqrt() / 2.0;
    [
        Point::new(x, y),
        Point::new(x + size, y),
        Point::new(x + size / 2.0, y - height),
    ]
}

/// [`triangle_vertices`] formatted for a `<polygon points="…">` attribute.
pub fn triangle_points(x: f64, y: f64, size: f64) -> String {
    format_points(&triangle_vertices(x, y, size))
}

/// Format points as `x,y x,y …`.
pub fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sample `y + 20·sin(0.02·x + phase)` every 10 units from `x = 0` to
/// `width` (inclusive when `width` is a multiple of the step) and serialize
/// it as path data: a move-to at `(0, y)` followed by line-to commands.
///
/// A non-finite `width` yields the bare move-to.
pub fn wave_path(width: f64, y: f64, phase: f64) -> String {
    let mut path = format!("M 0 {y}");
    if !width.is_finite() {
        return path;
    }
    let mut i = 0usize;
    loop {
        let x = (i * WAVE_STEP) as f64;
        if x > width {
            break;
        }
        let wave_y = y + (x * WAVE_FREQUENCY + phase).sin() * WAVE_AMPLITUDE;
        let _ = write!(path, " L {x} {wave_y}");
        i += 1;
    }
    path
}
