//! The demo scene: a clip window, its region grid, and the segments drawn
//! so far together with their clip results.

use crate::clipper::{ClipResult, ClipWindow, Edge, OutCode, Segment};
use crate::colors;
use crate::math::Point;
use crate::render::FrameBuffer;

const CLIPPED_LINE_WIDTH: u32 = 2;
const LABEL_SCALE: u32 = 2;

/// A user segment and what the clipper made of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClippedSegment {
    pub original: Segment,
    pub result: ClipResult,
}

pub struct Scene {
    clip_window: ClipWindow,
    world_width: u32,
    world_height: u32,
    segments: Vec<ClippedSegment>,
}

impl Scene {
    pub fn new(clip_window: ClipWindow, world_width: u32, world_height: u32) -> Self {
        Self {
            clip_window,
            world_width,
            world_height,
            segments: Vec::new(),
        }
    }

    pub fn clip_window(&self) -> &ClipWindow {
        &self.clip_window
    }

    pub fn segments(&self) -> &[ClippedSegment] {
        &self.segments
    }

    /// Clips `segment` against the scene's window and records both.
    pub fn add_segment(&mut self, segment: Segment) -> ClipResult {
        let result = segment.clip(&self.clip_window);
        match result.segment() {
            Some(clipped) => log::debug!("{segment} clipped to {clipped}"),
            None => log::debug!("{segment} rejected"),
        }
        self.segments.push(ClippedSegment {
            original: segment,
            result,
        });
        result
    }

    pub fn clear(&mut self) {
        log::debug!("cleared {} segments", self.segments.len());
        self.segments.clear();
    }

    /// Maps a world point (y up) to a framebuffer pixel (y down).
    fn to_pixel(&self, p: Point) -> (i32, i32) {
        (p.x, self.world_height as i32 - 1 - p.y)
    }

    fn draw_segment(&self, fb: &mut FrameBuffer, segment: Segment, width: u32, color: u32) {
        let (x0, y0) = self.to_pixel(segment.source);
        let (x1, y1) = self.to_pixel(segment.destination);
        fb.draw_thick_line(x0, y0, x1, y1, width, color);
    }

    fn draw_dividers(&self, fb: &mut FrameBuffer) {
        let w = &self.clip_window;
        let (max_x, max_y) = (self.world_width as i32 - 1, self.world_height as i32 - 1);

        for x in [w.left(), w.right()] {
            let (px, _) = self.to_pixel(Point::new(x, 0));
            fb.draw_line(px, 0, px, max_y, colors::DIVIDER);
        }
        for y in [w.bottom(), w.top()] {
            let (_, py) = self.to_pixel(Point::new(0, y));
            fb.draw_line(0, py, max_x, py, colors::DIVIDER);
        }
    }

    /// Centre of each labelled region in world coordinates: the window
    /// itself and the band beyond each edge.
    fn region_centers(&self) -> [(String, Point); 5] {
        let w = &self.clip_window;
        let mid = |a: i32, b: i32| ((a as i64 + b as i64) / 2) as i32;
        let (cx, cy) = (mid(w.left(), w.right()), mid(w.bottom(), w.top()));
        let (world_w, world_h) = (self.world_width as i32, self.world_height as i32);

        [
            (OutCode::CENTER.to_string(), Point::new(cx, cy)),
            (Edge::Top.to_string(), Point::new(cx, mid(w.top(), world_h))),
            (Edge::Right.to_string(), Point::new(mid(w.right(), world_w), cy)),
            (Edge::Bottom.to_string(), Point::new(cx, mid(0, w.bottom()))),
            (Edge::Left.to_string(), Point::new(mid(0, w.left()), cy)),
        ]
    }

    fn draw_labels(&self, fb: &mut FrameBuffer) {
        for (name, center) in self.region_centers() {
            let (text_w, text_h) = FrameBuffer::text_size(&name, LABEL_SCALE);
            let (px, py) = self.to_pixel(center);
            fb.draw_text(
                px - text_w as i32 / 2,
                py - text_h as i32 / 2,
                &name,
                LABEL_SCALE,
                colors::LABEL,
            );
        }
    }

    /// Draws the region grid and labels, every raw segment in white and every visible
    /// part in blue.
    pub fn render(&self, fb: &mut FrameBuffer) {
        fb.clear(colors::BACKGROUND);

        let w = &self.clip_window;
        let (left, top) = self.to_pixel(Point::new(w.left(), w.top()));
        fb.fill_rect(
            left,
            top,
            w.width().min(i32::MAX as i64) as i32,
            w.height().min(i32::MAX as i64) as i32,
            colors::WINDOW_FILL,
        );
        self.draw_dividers(fb);
        self.draw_labels(fb);

        for entry in &self.segments {
            self.draw_segment(fb, entry.original, 1, colors::WHITE);
        }
        for entry in &self.segments {
            if let Some(clipped) = entry.result.segment() {
                self.draw_segment(fb, clipped, CLIPPED_LINE_WIDTH, colors::BLUE);
            }
        }
    }
}
