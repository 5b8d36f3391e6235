use serde::{Deserialize, Serialize};

/// Dash pattern for a stroked primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeDash {
    Solid,
    Dash,
}

/// Stroke style shared by all court primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub dash: StrokeDash,
}

impl Stroke {
    pub fn solid(color: &str, width: f64) -> Self {
        Stroke {
            color: color.to_string(),
            width,
            dash: StrokeDash::Solid,
        }
    }

    pub fn dashed(color: &str, width: f64) -> Self {
        Stroke {
            color: color.to_string(),
            width,
            dash: StrokeDash::Dash,
        }
    }
}

/// One drawable court primitive in the hoop-centered frame.
///
/// Rectangles and arcs are expressed as polylines; the renderer never needs
/// more than line segments, circles, and point chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CourtShape {
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stroke: Stroke,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<[f64; 2]>,
        stroke: Stroke,
    },
}

/// Route function name constant
pub const GET_COURT_GEOMETRY: &str = "get_court_geometry";
