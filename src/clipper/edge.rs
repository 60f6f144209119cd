//! Line/boundary intersection arithmetic.
//!
//! A segment's supporting line is described by [`Line`], which keeps the
//! vertical case apart from the slope/offset form so that no slope is ever
//! computed (or reused) for a segment with `dx == 0`.

use std::fmt;

use super::outcode::OutCode;
use super::window::ClipWindow;
use crate::math::Point;

/// One side of the clip window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Order in which violated edges are clipped.
    ///
    /// An endpoint is moved against exactly one edge per pass: the first
    /// entry of this table whose bit is set in its code. The remaining
    /// violations, if any, are handled on later passes.
    pub const PRIORITY: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub const fn code(self) -> OutCode {
        match self {
            Edge::Top => OutCode::TOP,
            Edge::Right => OutCode::RIGHT,
            Edge::Bottom => OutCode::BOTTOM,
            Edge::Left => OutCode::LEFT,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Top => write!(f, "TOP"),
            Edge::Right => write!(f, "RIGHT"),
            Edge::Bottom => write!(f, "BOTTOM"),
            Edge::Left => write!(f, "LEFT"),
        }
    }
}

/// Slope of the line through `p1` and `p2`. `None` for vertical lines.
pub fn slope(p1: Point, p2: Point) -> Option<f64> {
    if p1.x == p2.x {
        return None;
    }
    Some((p1.y as f64 - p2.y as f64) / (p1.x as f64 - p2.x as f64))
}

/// The `b` term of `y = m * x + b` for a line of slope `m` through `p`.
pub fn offset(p: Point, slope: f64) -> f64 {
    p.y as f64 - slope * p.x as f64
}

/// The supporting line of a segment, tagged by orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    /// `x = const`
    Vertical(i32),
    /// `y = slope * x + offset`
    NonVertical { slope: f64, offset: f64 },
}

impl Line {
    /// The line through two points. Coincident points count as vertical.
    pub fn through(p1: Point, p2: Point) -> Self {
        match slope(p1, p2) {
            Some(slope) => Line::NonVertical {
                slope,
                offset: offset(p1, slope),
            },
            None => Line::Vertical(p1.x),
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical(_))
    }

    /// Where the line crosses the horizontal line `y`.
    ///
    /// `None` for a horizontal line, which never crosses another one.
    pub fn x_at(&self, y: i32) -> Option<f64> {
        match *self {
            Line::Vertical(x) => Some(x as f64),
            Line::NonVertical { slope, .. } if slope == 0.0 => None,
            Line::NonVertical { slope, offset } => Some((y as f64 - offset) / slope),
        }
    }

    /// Where the line crosses the vertical line `x`.
    ///
    /// `None` for a vertical line.
    pub fn y_at(&self, x: i32) -> Option<f64> {
        match *self {
            Line::Vertical(_) => None,
            Line::NonVertical { slope, offset } => Some(slope * x as f64 + offset),
        }
    }

    /// The point an endpoint is moved to when clipped against `edge`.
    ///
    /// The result sits one unit inside the edge on the clipped axis. If the
    /// line crosses the edge strictly between the window's other two sides,
    /// the free-axis coordinate is nudged by one unit (vertical lines keep
    /// their x) and then held strictly inside the window, so the endpoint
    /// becomes inside in one step. If the crossing misses that span the
    /// endpoint is placed on the crossing itself, which leaves it outside on
    /// the free axis for the next pass. Returns `None` when the line runs
    /// parallel to the edge and never reaches it.
    pub fn crossing(&self, edge: Edge, window: &ClipWindow) -> Option<Point> {
        let nudge = if self.is_vertical() { 0.0 } else { 1.0 };

        match edge {
            Edge::Top => {
                let y = window.top() - 1;
                let x = self.x_at(y)?;
                let x = settle(x, x, window.left(), window.right());
                Some(Point::from_f64(x, y as f64))
            }
            Edge::Right => {
                let x = window.right() - 1;
                let y = self.y_at(x)?;
                let y = settle(y, y - 1.0, window.bottom(), window.top());
                Some(Point::from_f64(x as f64, y))
            }
            Edge::Bottom => {
                let x = self.x_at(window.bottom())?;
                let x = settle(x, x + nudge, window.left(), window.right());
                Some(Point::from_f64(x, (window.bottom() + 1) as f64))
            }
            Edge::Left => {
                let y = self.y_at(window.left())?;
                let y = settle(y, y + 1.0, window.bottom(), window.top());
                Some(Point::from_f64((window.left() + 1) as f64, y))
            }
        }
    }
}

/// Free-axis coordinate of a clipped endpoint.
///
/// `crossing` is where the line meets the edge, `nudged` the same value
/// shifted by the inset. Inside the open span `(low, high)` the nudged value
/// is held within `[low + 1, high - 1]`; outside it the crossing is kept.
fn settle(crossing: f64, nudged: f64, low: i32, high: i32) -> f64 {
    let (low, high) = (low as f64, high as f64);
    if crossing > low && crossing < high {
        // max/min rather than clamp: the range is empty for a window one unit wide.
        nudged.max(low + 1.0).min(high - 1.0)
    } else {
        crossing
    }
}
