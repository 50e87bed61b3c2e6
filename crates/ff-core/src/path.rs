//! Connection curve geometry.

use crate::model::CanvasStep;
use kurbo::{Point, QuadBez};

/// Vertical lift of the control point, as a fraction of horizontal span.
pub const CONTROL_OFFSET_FACTOR: f64 = 0.3;

/// A quadratic curve from one step to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePath(QuadBez);

impl CurvePath {
    pub fn start(&self) -> Point {
        self.0.p0
    }

    pub fn control(&self) -> Point {
        self.0.p1
    }

    pub fn end(&self) -> Point {
        self.0.p2
    }

    pub fn as_quad(&self) -> QuadBez {
        self.0
    }

    /// SVG path data: `M fx fy Q cx cy, tx ty`.
    pub fn to_svg(&self) -> String {
        let QuadBez { p0, p1, p2 } = self.0;
        format!(
            "M {} {} Q {} {}, {} {}",
            p0.x, p0.y, p1.x, p1.y, p2.x, p2.y
        )
    }
}

/// Curve between two step positions. Pure; depends on positions only.
pub fn path_for(from: &CanvasStep, to: &CanvasStep) -> CurvePath {
    curve_between(from.position(), to.position())
}

/// Like [`path_for`], but tolerates missing endpoints.
pub fn path_between(from: Option<&CanvasStep>, to: Option<&CanvasStep>) -> Option<CurvePath> {
    Some(path_for(from?, to?))
}

pub(crate) fn curve_between(from: Point, to: Point) -> CurvePath {
    let mx = (from.x + to.x) / 2.0;
    let dy = (to.x - from.x).abs() * CONTROL_OFFSET_FACTOR;
    CurvePath(QuadBez::new(from, Point::new(mx, from.y - dy), to))
}
