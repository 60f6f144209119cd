//! The axis-aligned rectangle segments are clipped against.

use std::fmt;

use thiserror::Error;

/// Malformed clip window bounds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipWindowError {
    #[error("clip window top ({top}) must be greater than bottom ({bottom})")]
    InvertedVertical { top: i32, bottom: i32 },
    #[error("clip window right ({right}) must be greater than left ({left})")]
    InvertedHorizontal { left: i32, right: i32 },
}

/// An axis-aligned clip window in world coordinates (y grows upward).
///
/// Always satisfies `top > bottom` and `right > left`; the only way to build
/// one is [`ClipWindow::new`], so the clipper never re-validates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClipWindow {
    top: i32,
    right: i32,
    bottom: i32,
    left: i32,
}

impl ClipWindow {
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Result<Self, ClipWindowError> {
        if top <= bottom {
            return Err(ClipWindowError::InvertedVertical { top, bottom });
        }
        if right <= left {
            return Err(ClipWindowError::InvertedHorizontal { left, right });
        }
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    pub fn height(&self) -> i64 {
        self.top as i64 - self.bottom as i64
    }
}

impl fmt::Display for ClipWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[top {}, right {}, bottom {}, left {}]",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_bounds() {
        let w = ClipWindow::new(720, 1280, 360, 640).unwrap();
        assert_eq!(w.top(), 720);
        assert_eq!(w.right(), 1280);
        assert_eq!(w.bottom(), 360);
        assert_eq!(w.left(), 640);
        assert_eq!(w.width(), 640);
        assert_eq!(w.height(), 360);
    }

    #[test]
    fn rejects_inverted_vertical_bounds() {
        assert_eq!(
            ClipWindow::new(360, 1280, 720, 640),
            Err(ClipWindowError::InvertedVertical {
                top: 360,
                bottom: 720
            })
        );
        // Zero height is also malformed.
        assert!(ClipWindow::new(10, 20, 10, 0).is_err());
    }

    #[test]
    fn rejects_inverted_horizontal_bounds() {
        let err = ClipWindow::new(720, 640, 360, 1280).unwrap_err();
        assert_eq!(
            err,
            ClipWindowError::InvertedHorizontal {
                left: 1280,
                right: 640
            }
        );
        assert_eq!(
            err.to_string(),
            "clip window right (640) must be greater than left (1280)"
        );
    }

    #[test]
    fn extreme_bounds_do_not_overflow_extent() {
        let w = ClipWindow::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN).unwrap();
        assert_eq!(w.width(), u32::MAX as i64);
    }
}
