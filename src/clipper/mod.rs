//! Line segment clipping against an axis-aligned window.
//!
//! - [`outcode`]: region codes and the trivial accept/reject tests.
//! - [`edge`]: supporting-line arithmetic and the edge priority table.
//! - [`cohen_sutherland`]: the iterative clipper built on the two above.
//!
//! The clipper is a pure function of its inputs: it neither renders nor
//! converts device coordinates, and keeps no state between calls.

pub mod cohen_sutherland;
pub mod edge;
pub mod outcode;
pub mod window;

pub use cohen_sutherland::{clip, ClipResult, Segment, MAX_CLIP_PASSES};
pub use edge::{Edge, Line};
pub use outcode::{encode, OutCode};
pub use window::{ClipWindow, ClipWindowError};
