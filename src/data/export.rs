// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Download requests for AppState

use std::time::Instant;

use super::{AppState, Notice, NoticeKind};
use crate::export::{ExportError, ExportFormat, ExportOutcome, SceneSurface};

const NOT_READY: &str = "Canvas is not ready for download.";
const BUSY: &str = "An image is already being generated.";
const GENERATING: &str = "Generating image...";
const SAVED: &str = "Image downloaded successfully!";
const CANCELLED: &str = "Download cancelled.";
const FAILED: &str = "Failed to generate image. Please try again.";

impl AppState {
    /// Start downloading the field in `format`
    pub fn request_export(&mut self, format: ExportFormat) {
        self.request_export_at(format, Instant::now());
    }

    /// The canvas has painted with the overlay visible
    pub fn overlay_rendered(&mut self) {
        self.export.acknowledge_render();
        self.complete_export_at(Instant::now());
    }

    /// The fallback settle delay has passed
    pub fn settle_elapsed(&mut self) {
        self.complete_export_at(Instant::now());
    }

    pub(crate) fn request_export_at(&mut self, format: ExportFormat, now: Instant) {
        match self.export.begin(self.surface, format, now) {
            Ok(()) => self.notice = Some(Notice::new(NoticeKind::Loading, GENERATING)),
            Err(ExportError::SurfaceNotReady) => {
                tracing::warn!("Download requested before the canvas was measured");
                self.notice = Some(Notice::new(NoticeKind::Error, NOT_READY));
            }
            Err(err) => {
                tracing::warn!("Download rejected: {}", err);
                self.notice = Some(Notice::new(NoticeKind::Error, BUSY));
            }
        }
    }

    pub(crate) fn complete_export_at(&mut self, now: Instant) {
        let Some(handle) = self.export.pending_surface() else {
            return;
        };
        let surface = SceneSurface::new(self.store.get(), handle);
        let notice = match self.export.finish(now, &surface, self.saver.as_ref()) {
            Ok(ExportOutcome::Saved(_)) => Notice::new(NoticeKind::Success, SAVED),
            Ok(ExportOutcome::Cancelled) => Notice::new(NoticeKind::Info, CANCELLED),
            Err(ExportError::NotSettled | ExportError::NoExportPending) => return,
            Err(_) => Notice::new(NoticeKind::Error, FAILED),
        };
        self.notice = Some(notice);
    }
}
