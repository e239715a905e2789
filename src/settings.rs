// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`.

use std::time::Duration;

// ============================================================================
// SURFACE SETTINGS
// ============================================================================
/// Surface side used until the container has been measured
const DEFAULT_SURFACE_SIDE: f64 = 810.0;

/// Padding between the container edge and the drawing surface
const CONTAINER_PADDING: f64 = 20.0;

/// Added back onto the padded container size so the field fills the space
const SURFACE_GROWTH: f64 = 10.0;

/// Minimum change in surface side before a resize is reported
const RESIZE_THRESHOLD: f64 = 0.5;

// ============================================================================
// EXPORT SETTINGS
// ============================================================================
/// Pause between showing the overlay and capturing the surface.
///
/// Only used when the render has not been acknowledged sooner.
const EXPORT_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Pixel density multiplier for exported images
const EXPORT_PIXEL_RATIO: f64 = 2.0;

/// JPEG quality (1-100)
const EXPORT_JPEG_QUALITY: u8 = 100;

/// File name stem for exported images
const EXPORT_FILE_STEM: &str = "cricket_field_strategy";

// ============================================================================
// WINDOW SETTINGS
// ============================================================================
const WINDOW_TITLE: &str = "Cricket Field Strategizer";
const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 900.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Drawing surface sizing
pub mod surface {
    /// Side length before the first layout pass
    pub const DEFAULT_SIDE: f64 = super::DEFAULT_SURFACE_SIDE;
    /// Container padding on each edge
    pub const PADDING: f64 = super::CONTAINER_PADDING;
    /// Growth applied after removing padding
    pub const GROWTH: f64 = super::SURFACE_GROWTH;
    /// Resize reporting threshold
    pub const RESIZE_THRESHOLD: f64 = super::RESIZE_THRESHOLD;
}

/// Image export settings
pub mod export {
    use std::time::Duration;

    /// Fallback wait before capture
    pub const SETTLE_DELAY: Duration = super::EXPORT_SETTLE_DELAY;
    /// Export resolution multiplier
    pub const PIXEL_RATIO: f64 = super::EXPORT_PIXEL_RATIO;
    /// JPEG encoder quality
    pub const JPEG_QUALITY: u8 = super::EXPORT_JPEG_QUALITY;
    /// Exported file name without extension
    pub const FILE_STEM: &str = super::EXPORT_FILE_STEM;
}

/// Main window settings
pub mod window {
    pub const TITLE: &str = super::WINDOW_TITLE;
    pub const WIDTH: f64 = super::WINDOW_WIDTH;
    pub const HEIGHT: f64 = super::WINDOW_HEIGHT;
}
