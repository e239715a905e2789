// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` owns the strategy store, the measured drawing surface, the
//! export session and window metadata. Every UI rebuild reads from
//! `AppState`; mutations happen in event callbacks. Sub-modules split the
//! methods by domain: strategy editing and image export.

mod editing;
mod export;
mod store;

pub use store::StrategyStore;

use crate::export::{DialogSaver, ExportSession, ImageSaver, SurfaceHandle};
use xilem::WindowId;

/// Severity of a status notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Loading,
    Info,
    Success,
    Error,
}

/// Status line shown under the export buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Main application state
pub struct AppState {
    /// The editable strategy
    pub store: StrategyStore,

    /// Drawing surface, once the canvas has been laid out
    pub surface: Option<SurfaceHandle>,

    /// Overlay and capture sequencing for downloads
    pub export: ExportSession,

    /// Latest export status
    pub notice: Option<Notice>,

    /// Text of the custom overs input, which may not parse
    pub custom_overs_input: String,

    /// Where downloads are written
    saver: Box<dyn ImageSaver + Send + Sync>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    /// Create the state for a fresh session
    pub fn new() -> Self {
        Self::with_saver(Box::new(DialogSaver))
    }

    /// Create the state with a custom download destination
    pub fn with_saver(saver: Box<dyn ImageSaver + Send + Sync>) -> Self {
        Self {
            store: StrategyStore::default(),
            surface: None,
            export: ExportSession::new(),
            notice: None,
            custom_overs_input: String::new(),
            saver,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Whether the canvas should draw the export overlay
    pub fn overlay_visible(&self) -> bool {
        self.export.overlay_visible()
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
