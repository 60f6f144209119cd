//! Device (window pixel) to world coordinate translation.
//!
//! The world is a fixed logical space (`world_width` x `world_height`, y up)
//! drawn into the largest viewport of the same aspect ratio that fits the
//! window, anchored to the window's bottom-left corner. Device coordinates
//! have their origin at the top-left with y growing downward.

use crate::math::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
    world_width: u32,
    world_height: u32,
}

impl Viewport {
    /// Fits the world's aspect ratio into a `window_width` x `window_height`
    /// window.
    pub fn fit(window_width: u32, window_height: u32, world_width: u32, world_height: u32) -> Self {
        let (ww, wh) = (world_width.max(1) as u64, world_height.max(1) as u64);
        let (vw, vh) = (window_width as u64, window_height as u64);

        // Aspect ratios compared by cross-multiplication to stay exact.
        let (width, height) = if vw * wh > ww * vh {
            ((vh * ww / wh) as u32, window_height)
        } else {
            (window_width, (vw * wh / ww) as u32)
        };

        Self {
            width: width.max(1),
            height: height.max(1),
            world_width,
            world_height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the device point lies on the viewport.
    pub fn contains(&self, x: i32, y: i32, window_height: u32) -> bool {
        let from_bottom = window_height as i64 - y as i64;
        x >= 0 && x as i64 <= self.width as i64 && from_bottom >= 0 && from_bottom <= self.height as i64
    }

    /// Converts a device point to world coordinates.
    pub fn to_world(&self, x: i32, y: i32, window_height: u32) -> Point {
        let world_x = x as f64 * self.world_width as f64 / self.width as f64;
        let world_y =
            (window_height as f64 - y as f64) * self.world_height as f64 / self.height as f64;
        Point::from_f64(world_x, world_y)
    }

    /// The device rectangle `(x, y, width, height)` the world is presented in.
    pub fn dest_rect(&self, window_height: u32) -> (i32, i32, u32, u32) {
        let y = window_height as i32 - self.height as i32;
        (0, y, self.width, self.height)
    }
}
