//! Region codes: which half-planes of the clip window a point violates.

use std::fmt;
use std::ops::BitOr;

use super::edge::Edge;
use super::window::ClipWindow;
use crate::math::Point;

/// A 4-bit mask over the TOP/RIGHT/BOTTOM/LEFT regions.
///
/// `CENTER` (no bits) means the point lies strictly inside the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OutCode(u8);

impl OutCode {
    pub const CENTER: Self = Self(0x0);
    pub const TOP: Self = Self(0x1);
    pub const RIGHT: Self = Self(0x2);
    pub const BOTTOM: Self = Self(0x4);
    pub const LEFT: Self = Self(0x8);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_inside(self) -> bool {
        self.0 == Self::CENTER.0
    }

    /// Both endpoints violate a common half-plane, so the segment between
    /// them cannot enter the window.
    #[inline]
    pub const fn is_trivial_reject(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// The edge this code is clipped against next, following
    /// [`Edge::PRIORITY`].
    pub fn first_violated(self) -> Option<Edge> {
        Edge::PRIORITY
            .into_iter()
            .find(|edge| self.contains(edge.code()))
    }
}

impl BitOr for OutCode {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl fmt::Display for OutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inside() {
            return write!(f, "CENTER");
        }
        let mut first = true;
        for edge in Edge::PRIORITY {
            if self.contains(edge.code()) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", edge)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Classifies `point` against `window`.
///
/// Comparisons are inclusive on every edge: a point lying exactly on a
/// boundary is outside, so clipped endpoints always end up strictly inside.
pub fn encode(point: Point, window: &ClipWindow) -> OutCode {
    let mut code = OutCode::CENTER;

    if point.y >= window.top() {
        code = code | OutCode::TOP;
    }
    if point.x >= window.right() {
        code = code | OutCode::RIGHT;
    }
    if point.y <= window.bottom() {
        code = code | OutCode::BOTTOM;
    }
    if point.x <= window.left() {
        code = code | OutCode::LEFT;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ClipWindow {
        ClipWindow::new(720, 1280, 360, 640).unwrap()
    }

    #[test]
    fn interior_point_is_center() {
        assert_eq!(encode(Point::new(960, 540), &window()), OutCode::CENTER);
        assert_eq!(encode(Point::new(641, 361), &window()), OutCode::CENTER);
        assert_eq!(encode(Point::new(1279, 719), &window()), OutCode::CENTER);
    }

    #[test]
    fn boundary_points_are_outside() {
        let w = window();
        assert_eq!(encode(Point::new(960, 720), &w), OutCode::TOP);
        assert_eq!(encode(Point::new(1280, 540), &w), OutCode::RIGHT);
        assert_eq!(encode(Point::new(960, 360), &w), OutCode::BOTTOM);
        assert_eq!(encode(Point::new(640, 540), &w), OutCode::LEFT);
        assert_eq!(
            encode(Point::new(640, 360), &w),
            OutCode::BOTTOM | OutCode::LEFT
        );
    }

    #[test]
    fn corner_regions_set_two_bits() {
        let w = window();
        assert_eq!(encode(Point::new(0, 0), &w), OutCode::BOTTOM | OutCode::LEFT);
        assert_eq!(
            encode(Point::new(2000, 1080), &w),
            OutCode::TOP | OutCode::RIGHT
        );
        assert_eq!(encode(Point::new(0, 1080), &w), OutCode::TOP | OutCode::LEFT);
    }

    #[test]
    fn center_iff_strictly_inside() {
        let w = window();
        for x in (600..1320).step_by(20) {
            for y in (320..760).step_by(20) {
                let strictly_inside = y < w.top() && x < w.right() && y > w.bottom() && x > w.left();
                assert_eq!(encode(Point::new(x, y), &w).is_inside(), strictly_inside);
            }
        }
    }

    #[test]
    fn trivial_reject_needs_a_shared_bit() {
        let bl = OutCode::BOTTOM | OutCode::LEFT;
        assert!(bl.is_trivial_reject(OutCode::BOTTOM));
        assert!(!OutCode::LEFT.is_trivial_reject(OutCode::RIGHT));
        assert!(!OutCode::CENTER.is_trivial_reject(bl));
    }

    #[test]
    fn first_violated_follows_priority() {
        assert_eq!(OutCode::CENTER.first_violated(), None);
        assert_eq!((OutCode::TOP | OutCode::LEFT).first_violated(), Some(Edge::Top));
        assert_eq!((OutCode::RIGHT | OutCode::BOTTOM).first_violated(), Some(Edge::Right));
        assert_eq!((OutCode::BOTTOM | OutCode::LEFT).first_violated(), Some(Edge::Bottom));
        assert_eq!(OutCode::LEFT.first_violated(), Some(Edge::Left));
    }

    #[test]
    fn display_names_regions() {
        assert_eq!(OutCode::CENTER.to_string(), "CENTER");
        assert_eq!((OutCode::LEFT | OutCode::TOP).to_string(), "TOP|LEFT");
        assert_eq!((OutCode::BOTTOM | OutCode::TOP).bits(), 0x5);
    }
}
