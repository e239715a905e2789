// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Image export: overlay sequencing, capture, encoding and saving

pub mod capture;
pub mod saver;
pub mod session;

use std::fmt;
use std::path::PathBuf;

use crate::settings;

pub use capture::{CaptureRequest, CaptureSurface, CapturedImage, SceneSurface, SurfaceHandle};
pub use saver::{DialogSaver, DirectorySaver, ImageSaver};
pub use session::ExportSession;

/// Encoded image format for a download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Name the downloaded file is given
    pub fn file_name(self) -> String {
        format!("{}.{}", settings::export::FILE_STEM, self.extension())
    }

    /// Short name used on buttons
    pub fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPG",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that end a single export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("drawing surface has not been measured yet")]
    SurfaceNotReady,
    #[error("an export is already in progress")]
    InProgress,
    #[error("overlay has not been rendered yet")]
    NotSettled,
    #[error("no export is pending")]
    NoExportPending,
    #[error("drawing surface is empty")]
    EmptySurface,
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to save image: {0:#}")]
    Save(anyhow::Error),
}

/// How a completed export ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    /// The save dialog was dismissed
    Cancelled,
}
