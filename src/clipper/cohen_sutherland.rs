//! Cohen-Sutherland segment clipping.
//!
//! Each pass classifies both endpoints. A pass either accepts (both inside),
//! rejects (both outside a common edge), or moves every outside endpoint to
//! the boundary of its highest-priority violated edge and tries again.

use std::fmt;

use super::edge::Line;
use super::outcode::{encode, OutCode};
use super::window::ClipWindow;
use crate::math::Point;

/// Upper bound on clipping passes.
///
/// An endpoint whose crossing lies on an edge's span becomes inside in one
/// step, so a segment that enters the window settles within a few passes. A
/// segment that passes beside a corner can instead have both endpoints swap
/// places on every pass (each is moved onto the other's edge); it runs into
/// this bound and is reported as rejected.
pub const MAX_CLIP_PASSES: usize = 16;

/// An ordered pair of points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Segment {
    pub source: Point,
    pub destination: Point,
}

impl Segment {
    pub const fn new(source: Point, destination: Point) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn clip(&self, window: &ClipWindow) -> ClipResult {
        clip(self.source, self.destination, window)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Outcome of clipping a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClipResult {
    /// The visible part of the segment, strictly inside the window.
    Accepted { source: Point, destination: Point },
    /// No part of the segment is visible.
    Rejected,
}

impl ClipResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ClipResult::Accepted { .. })
    }

    pub fn segment(&self) -> Option<Segment> {
        match *self {
            ClipResult::Accepted {
                source,
                destination,
            } => Some(Segment::new(source, destination)),
            ClipResult::Rejected => None,
        }
    }
}

/// Moves `point` onto the first violated edge of `code`.
///
/// Returns `None` if the line can't reach that edge.
fn clip_point(point: Point, code: OutCode, line: &Line, window: &ClipWindow) -> Option<Point> {
    match code.first_violated() {
        Some(edge) => line.crossing(edge, window),
        None => Some(point),
    }
}

/// Clips the segment `source -> destination` against `window`.
///
/// Accepted endpoints never lie on a window boundary: anything that was
/// moved was moved one unit inside, and anything that wasn't moved was
/// already strictly inside.
pub fn clip(source: Point, destination: Point, window: &ClipWindow) -> ClipResult {
    let mut p1 = source;
    let mut p2 = destination;

    for pass in 0..MAX_CLIP_PASSES {
        let code1 = encode(p1, window);
        let code2 = encode(p2, window);

        if code1.is_inside() && code2.is_inside() {
            log::trace!("pass {pass}: accepted {p1} -> {p2}");
            return ClipResult::Accepted {
                source: p1,
                destination: p2,
            };
        }

        if code1.is_trivial_reject(code2) {
            log::trace!("pass {pass}: rejected, {p1} is {code1} and {p2} is {code2}");
            return ClipResult::Rejected;
        }

        // Endpoints move every pass, so the line is rebuilt from the current ones.
        let line = Line::through(p1, p2);

        let (Some(next1), Some(next2)) = (
            clip_point(p1, code1, &line, window),
            clip_point(p2, code2, &line, window),
        ) else {
            log::trace!("pass {pass}: {line:?} runs parallel to a violated edge");
            return ClipResult::Rejected;
        };

        log::trace!("pass {pass}: {p1} ({code1}) -> {next1}, {p2} ({code2}) -> {next2}");
        p1 = next1;
        p2 = next2;
    }

    log::trace!("no convergence after {MAX_CLIP_PASSES} passes for {source} -> {destination}");
    ClipResult::Rejected
}
