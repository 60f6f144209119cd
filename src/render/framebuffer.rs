//! Owning ARGB8888 pixel buffer.
//!
//! Pixel coordinates have their origin at the top-left corner with rows
//! growing downward, matching the texture the window presents.

use std::path::Path;

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{ImageBuffer, Rgba};

use crate::colors;

/// Glyph cell size of the bitmap font, in unscaled pixels.
pub const GLYPH_SIZE: u32 = 8;

/// Number of pixels in a `width` x `height` buffer, computed without `u32` overflow.
pub fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![colors::BACKGROUND; pixel_count(width, height)],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Buffer index of (x, y), or None if out of bounds.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width).min(self.width as i32);
        let y1 = y.saturating_add(height).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// DDA line including both endpoints.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = x1 as i64 - x0 as i64;
        let dy = y1 as i64 - y0 as i64;

        let side_length = dx.abs().max(dy.abs());
        if side_length == 0 {
            self.set_pixel(x0, y0, color);
            return;
        }

        let x_increment = dx as f64 / side_length as f64;
        let y_increment = dy as f64 / side_length as f64;
        let mut current_x = x0 as f64;
        let mut current_y = y0 as f64;

        for _ in 0..=side_length {
            self.set_pixel(current_x.round() as i32, current_y.round() as i32, color);
            current_x += x_increment;
            current_y += y_increment;
        }
    }

    /// A line `thickness` pixels wide, grown across the line's minor axis.
    pub fn draw_thick_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: u32,
        color: u32,
    ) {
        let steep = (y1 as i64 - y0 as i64).abs() > (x1 as i64 - x0 as i64).abs();
        for i in 0..thickness.max(1) as i32 {
            let shift = i - (thickness as i32 - 1) / 2;
            if steep {
                self.draw_line(x0 + shift, y0, x1 + shift, y1, color);
            } else {
                self.draw_line(x0, y0 + shift, x1, y1 + shift, color);
            }
        }
    }

    /// Size in pixels of `text` drawn at `scale`.
    pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
        let cell = GLYPH_SIZE * scale;
        (text.chars().count() as u32 * cell, cell)
    }

    /// Draws `text` in the 8x8 bitmap font with its top-left corner at
    /// (x, y), each font pixel blown up to a `scale` x `scale` block.
    /// Characters the font lacks leave an empty cell.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, scale: u32, color: u32) {
        let scale = scale.max(1) as i32;
        let cell = GLYPH_SIZE as i32 * scale;

        for (i, ch) in text.chars().enumerate() {
            let Some(glyph) = BASIC_FONTS.get(ch) else {
                continue;
            };
            let origin_x = x + i as i32 * cell;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_SIZE as i32 {
                    // Bit 0 is the leftmost pixel.
                    if bits & (1 << col) != 0 {
                        self.fill_rect(
                            origin_x + col * scale,
                            y + row as i32 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
    }

    /// Returns the buffer as bytes (native-endian ARGB8888).
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    pub fn to_image(&self) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgba(colors::unpack_rgba(
                self.color_buffer[y as usize * self.width as usize + x as usize],
            ))
        })
    }

    /// Writes the buffer to an image file; the format follows the extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: u32 = 0xFFFF0000;

    #[test]
    fn set_and_get_pixel() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set_pixel(2, 1, RED);
        assert_eq!(fb.get_pixel(2, 1), Some(RED));
        assert_eq!(fb.get_pixel(0, 0), Some(colors::BACKGROUND));
        assert_eq!(fb.get_pixel(4, 0), None);
        assert_eq!(fb.get_pixel(-1, 0), None);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(5, 5, RED);
        fb.set_pixel(-3, 0, RED);
        assert!((0..2).all(|y| (0..2).all(|x| fb.get_pixel(x, y) == Some(colors::BACKGROUND))));
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.draw_line(1, 1, 8, 5, RED);
        assert_eq!(fb.get_pixel(1, 1), Some(RED));
        assert_eq!(fb.get_pixel(8, 5), Some(RED));
    }

    #[test]
    fn vertical_line_fills_a_column() {
        let mut fb = FrameBuffer::new(5, 5);
        fb.draw_line(2, 4, 2, 0, RED);
        for y in 0..5 {
            assert_eq!(fb.get_pixel(2, y), Some(RED));
        }
        assert_eq!(fb.get_pixel(1, 2), Some(colors::BACKGROUND));
    }

    #[test]
    fn thick_line_spans_rows() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.draw_thick_line(0, 5, 9, 5, 2, RED);
        assert_eq!(fb.get_pixel(4, 5), Some(RED));
        assert_eq!(fb.get_pixel(4, 6), Some(RED));
        assert_eq!(fb.get_pixel(4, 7), Some(colors::BACKGROUND));
    }

    #[test]
    fn fill_rect_is_clamped() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_rect(-2, 2, 10, 10, RED);
        assert_eq!(fb.get_pixel(0, 1), Some(colors::BACKGROUND));
        assert_eq!(fb.get_pixel(3, 3), Some(RED));
    }

    #[test]
    fn image_conversion_keeps_channels() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set_pixel(1, 0, 0xFF112233);
        let img = fb.to_image();
        assert_eq!(img.get_pixel(1, 0).0, [0x11, 0x22, 0x33, 0xFF]);
        assert_eq!(fb.as_bytes().len(), 8);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn pixel_count_does_not_wrap() {
        assert_eq!(pixel_count(1 << 16, 1 << 16), 1usize << 32);
        assert_eq!(pixel_count(u32::MAX, 2), u32::MAX as usize * 2);
    }

    #[test]
    fn text_stays_inside_its_cells() {
        let mut fb = FrameBuffer::new(64, 32);
        fb.draw_text(4, 4, "TOP", 2, RED);
        let (w, h) = FrameBuffer::text_size("TOP", 2);
        assert_eq!((w, h), (48, 16));

        let mut inside = 0;
        for y in 0..32 {
            for x in 0..64 {
                let in_box = (4..4 + w as i32).contains(&x) && (4..4 + h as i32).contains(&y);
                if fb.get_pixel(x, y) == Some(RED) {
                    assert!(in_box, "stray text pixel at ({x}, {y})");
                    inside += 1;
                }
            }
        }
        assert!(inside > 0);
    }

    #[test]
    fn unknown_characters_leave_a_gap() {
        let mut fb = FrameBuffer::new(16, 8);
        fb.draw_text(0, 0, "\u{E000}", 1, RED);
        assert!((0..8).all(|y| (0..16).all(|x| fb.get_pixel(x, y) == Some(colors::BACKGROUND))));
    }

    #[test]
    fn save_png_round_trips_dimensions() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.clear(colors::WHITE);
        let path = std::env::temp_dir().join("clipline_framebuffer_test.png");
        fb.save_png(&path).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (3, 2));
        let _ = std::fs::remove_file(path);
    }
}
