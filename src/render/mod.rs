//! Software drawing for the demo: an owning pixel buffer and line drawing.

mod framebuffer;

pub use framebuffer::FrameBuffer;
