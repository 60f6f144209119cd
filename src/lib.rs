//! Cohen-Sutherland line clipping, with an interactive SDL2 demonstration.
//!
//! The [`clipper`] module is the core: a pure function that takes a segment
//! and an axis-aligned clip window and returns the visible part, if any.
//! The remaining modules are the demo around it (viewport mapping, a
//! software framebuffer, the scene, and with the `window` feature an SDL2
//! window).
//!
//! # Quick Start
//!
//! ```
//! use clipline::prelude::*;
//!
//! let window = ClipWindow::new(720, 1280, 360, 640)?;
//! let result = clip(Point::new(0, 0), Point::new(2000, 1080), &window);
//! assert!(result.is_accepted());
//! # Ok::<(), clipline::ClipWindowError>(())
//! ```

// Core
pub mod clipper;
pub mod math;

// Demo layers
pub mod colors;
pub mod config;
pub mod error;
pub mod render;
pub mod scene;
pub mod viewport;
#[cfg(feature = "window")]
pub mod window;

pub use clipper::{clip, ClipResult, ClipWindow, ClipWindowError, Segment};
pub use error::Error;
pub use math::Point;

/// Prelude module for convenient imports.
pub mod prelude {
    // Clipping
    pub use crate::clipper::{
        clip, encode, ClipResult, ClipWindow, ClipWindowError, Edge, Line, OutCode, Segment,
    };

    // Math
    pub use crate::math::Point;

    // Demo
    pub use crate::config::DemoConfig;
    pub use crate::render::FrameBuffer;
    pub use crate::scene::Scene;
    pub use crate::viewport::Viewport;
}
