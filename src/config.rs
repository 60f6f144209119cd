//! Demo configuration.
//!
//! Defaults reproduce the classic layout: a 1920x1080 world split into a
//! 3x3 grid whose center cell is the clip window.

use std::path::PathBuf;

use thiserror::Error;

use crate::clipper::{ClipWindow, ClipWindowError};

pub const WINDOW_TITLE: &str = "Cohen Sutherland Algorithm Demonstration";
pub const WORLD_WIDTH: u32 = 1920;
pub const WORLD_HEIGHT: u32 = 1080;

pub const TOP_Y_BOUND: i32 = 720;
pub const RIGHT_X_BOUND: i32 = 1280;
pub const BOTTOM_Y_BOUND: i32 = 360;
pub const LEFT_X_BOUND: i32 = 640;

pub const WINDOW_ENV: &str = "CLIPLINE_WINDOW";
pub const SCREENSHOT_ENV: &str = "CLIPLINE_SCREENSHOT";
pub const DEFAULT_SCREENSHOT: &str = "clipline.png";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected 4 comma-separated bounds (top,right,bottom,left), got {found}")]
    BoundCount { var: &'static str, found: usize },
    #[error("{var}: invalid bound {value:?}")]
    InvalidBound { var: &'static str, value: String },
    #[error(transparent)]
    ClipWindow(#[from] ClipWindowError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    pub world_width: u32,
    pub world_height: u32,
    pub clip_window: ClipWindow,
    pub screenshot_path: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            clip_window: default_clip_window(),
            screenshot_path: PathBuf::from(DEFAULT_SCREENSHOT),
        }
    }
}

impl DemoConfig {
    /// Defaults overridden by `CLIPLINE_WINDOW` and `CLIPLINE_SCREENSHOT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(bounds) = std::env::var(WINDOW_ENV) {
            config.clip_window = parse_clip_window(WINDOW_ENV, &bounds)?;
            log::debug!("clip window from {WINDOW_ENV}: {}", config.clip_window);
        }
        if let Ok(path) = std::env::var(SCREENSHOT_ENV) {
            config.screenshot_path = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn default_clip_window() -> ClipWindow {
    match ClipWindow::new(TOP_Y_BOUND, RIGHT_X_BOUND, BOTTOM_Y_BOUND, LEFT_X_BOUND) {
        Ok(window) => window,
        Err(e) => unreachable!("default bounds are well formed: {e}"),
    }
}

/// Parses `"top,right,bottom,left"`.
pub fn parse_clip_window(var: &'static str, value: &str) -> Result<ClipWindow, ConfigError> {
    let bounds = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidBound {
                    var,
                    value: part.trim().to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match bounds[..] {
        [top, right, bottom, left] => Ok(ClipWindow::new(top, right, bottom, left)?),
        _ => Err(ConfigError::BoundCount {
            var,
            found: bounds.len(),
        }),
    }
}
