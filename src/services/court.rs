//! Court geometry model.
//!
//! A regulation half-court in a hoop-centered frame, produced as an ordered
//! list of stroke primitives. The geometry is pure data with no statistical
//! dependency; it is built once and cached for the process lifetime, and
//! every vertex stays inside the frame so shot overlays align exactly.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::routes::court::{CourtShape, Stroke};

/// Chart frame, shared verbatim by the shot overlay.
pub const COURT_X_MIN: f64 = -250.0;
pub const COURT_X_MAX: f64 = 250.0;
pub const COURT_Y_MIN: f64 = -47.5;
pub const COURT_Y_MAX: f64 = 422.5;

const LINE_COLOR: &str = "#2c3e50";

const ARC_SEGMENTS: usize = 50;
const THREE_PT_SEGMENTS: usize = 100;
/// Arc radius of the three-point line.
const THREE_PT_RADIUS: f64 = 237.5;
/// Angle at which the three-point arc meets the corner verticals.
const THREE_PT_CUTOFF: f64 = 0.395;

/// The half-court primitives, in draw order.
pub fn court_shapes() -> &'static [CourtShape] {
    static COURT: OnceLock<Vec<CourtShape>> = OnceLock::new();
    COURT.get_or_init(build_court)
}

fn build_court() -> Vec<CourtShape> {
    let mut shapes = Vec::with_capacity(12);

    // Court outline
    shapes.push(CourtShape::Polyline {
        points: closed_rect(COURT_X_MIN, COURT_Y_MIN, COURT_X_MAX, COURT_Y_MAX),
        stroke: Stroke::solid(LINE_COLOR, 3.0),
    });

    // Hoop
    shapes.push(CourtShape::Circle {
        cx: 0.0,
        cy: 0.0,
        r: 7.5,
        stroke: Stroke::solid(LINE_COLOR, 2.0),
    });

    // Backboard
    shapes.push(CourtShape::Line {
        x0: -30.0,
        y0: -12.5,
        x1: 30.0,
        y1: -12.5,
        stroke: Stroke::solid(LINE_COLOR, 3.0),
    });

    // Paint (outer and inner boxes)
    shapes.push(CourtShape::Polyline {
        points: closed_rect(-80.0, COURT_Y_MIN, 80.0, 142.5),
        stroke: Stroke::solid(LINE_COLOR, 2.0),
    });
    shapes.push(CourtShape::Polyline {
        points: closed_rect(-60.0, COURT_Y_MIN, 60.0, 142.5),
        stroke: Stroke::solid(LINE_COLOR, 2.0),
    });

    // Free throw circle: solid upper arc, dashed lower arc
    shapes.push(CourtShape::Polyline {
        points: arc(0.0, 142.5, 60.0, 0.0, PI, ARC_SEGMENTS),
        stroke: Stroke::solid(LINE_COLOR, 2.0),
    });
    shapes.push(CourtShape::Polyline {
        points: arc(0.0, 142.5, 60.0, PI, 2.0 * PI, ARC_SEGMENTS),
        stroke: Stroke::dashed(LINE_COLOR, 2.0),
    });

    // Restricted area
    shapes.push(CourtShape::Polyline {
        points: arc(0.0, 0.0, 40.0, 0.0, PI, ARC_SEGMENTS),
        stroke: Stroke::solid(LINE_COLOR, 2.0),
    });

    // Three-point arc and corner verticals
    shapes.push(CourtShape::Polyline {
        points: arc(
            0.0,
            0.0,
            THREE_PT_RADIUS,
            THREE_PT_CUTOFF,
            PI - THREE_PT_CUTOFF,
            THREE_PT_SEGMENTS,
        ),
        stroke: Stroke::solid(LINE_COLOR, 2.0),
    });
    shapes.push(CourtShape::Line {
        x0: -220.0,
        y0: COURT_Y_MIN,
        x1: -220.0,
        y1: 92.5,
        stroke: Stroke::solid(LINE_COLOR, 2.0),
    });
    shapes.push(CourtShape::Line {
        x0: 220.0,
        y0: COURT_Y_MIN,
        x1: 220.0,
        y1: 92.5,
        stroke: Stroke::solid(LINE_COLOR, 2.0),
    });

    // Center court: only the lower half lies inside the frame, so the circle
    // is emitted as its lower semicircle.
    shapes.push(CourtShape::Polyline {
        points: arc(0.0, COURT_Y_MAX, 60.0, PI, 2.0 * PI, ARC_SEGMENTS),
        stroke: Stroke::solid(LINE_COLOR, 2.0),
    });

    shapes
}

/// Sample an arc of `segments` chords around (`cx`, `cy`).
fn arc(cx: f64, cy: f64, r: f64, theta0: f64, theta1: f64, segments: usize) -> Vec<[f64; 2]> {
    (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let theta = theta0 + t * (theta1 - theta0);
            [cx + r * theta.cos(), cy + r * theta.sin()]
        })
        .collect()
}

/// Axis-aligned rectangle as a closed five-point polyline.
fn closed_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<[f64; 2]> {
    vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]]
}
