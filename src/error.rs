use thiserror::Error;

use crate::clipper::ClipWindowError;
use crate::config::ConfigError;

/// Errors from the demo layers around the clipper.
///
/// Clipping itself never fails: a segment with no visible part is a
/// [`ClipResult::Rejected`](crate::clipper::ClipResult::Rejected) value.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    ClipWindow(#[from] ClipWindowError),
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),
    /// SDL2 reports failures as plain strings.
    #[error("sdl: {0}")]
    Sdl(String),
}

pub type Result<T> = std::result::Result<T, Error>;
