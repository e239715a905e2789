// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Export sequencing.
//!
//! An export shows the info overlay, waits for it to be rendered, captures
//! the surface, saves the image and hides the overlay again:
//!
//! ```text
//! Idle --begin--> Settling --(ack | delay)--> Capturing --> Idle
//! ```
//!
//! Timing is passed in as `Instant`s so the sequence can be driven by the
//! UI (render acknowledgement or the fallback timer task) and by tests alike.
//! `finish` returns to `Idle` on every path once it has started capturing.

use std::time::{Duration, Instant};

use super::{
    CaptureRequest, CaptureSurface, ExportError, ExportFormat, ExportOutcome, ImageSaver,
    SurfaceHandle,
};
use crate::settings;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Settling {
        format: ExportFormat,
        surface: SurfaceHandle,
        started: Instant,
        acknowledged: bool,
    },
    Capturing {
        format: ExportFormat,
    },
}

/// Export state machine owned by the app state
#[derive(Debug, Clone)]
pub struct ExportSession {
    phase: Phase,
    settle_delay: Duration,
}

impl ExportSession {
    pub fn new() -> Self {
        Self::with_settle_delay(settings::export::SETTLE_DELAY)
    }

    pub fn with_settle_delay(settle_delay: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            settle_delay,
        }
    }

    /// Start an export: the overlay becomes visible until the export ends
    pub fn begin(
        &mut self,
        surface: Option<SurfaceHandle>,
        format: ExportFormat,
        now: Instant,
    ) -> Result<(), ExportError> {
        let Some(surface) = surface else {
            return Err(ExportError::SurfaceNotReady);
        };
        if self.in_progress() {
            return Err(ExportError::InProgress);
        }
        tracing::info!("Starting {} export of {}px surface", format, surface.side);
        self.phase = Phase::Settling {
            format,
            surface,
            started: now,
            acknowledged: false,
        };
        Ok(())
    }

    /// The surface has rendered with the overlay visible
    pub fn acknowledge_render(&mut self) {
        if let Phase::Settling { acknowledged, .. } = &mut self.phase {
            tracing::debug!("Overlay render acknowledged");
            *acknowledged = true;
        }
    }

    /// True once capture may happen
    pub fn is_settled(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Settling {
                started,
                acknowledged,
                ..
            } => acknowledged || now.saturating_duration_since(started) >= self.settle_delay,
            _ => false,
        }
    }

    /// Waiting for the overlay to render
    pub fn is_settling(&self) -> bool {
        matches!(self.phase, Phase::Settling { .. })
    }

    pub fn in_progress(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Whether the surface should currently draw the info overlay
    pub fn overlay_visible(&self) -> bool {
        self.in_progress()
    }

    /// Format of the export in flight
    pub fn pending_format(&self) -> Option<ExportFormat> {
        match self.phase {
            Phase::Idle => None,
            Phase::Settling { format, .. } | Phase::Capturing { format } => Some(format),
        }
    }

    /// Surface measured when the pending export began
    pub fn pending_surface(&self) -> Option<SurfaceHandle> {
        match self.phase {
            Phase::Settling { surface, .. } => Some(surface),
            _ => None,
        }
    }

    /// Capture, encode and save the pending export
    ///
    /// Refused without a state change when nothing is pending or the overlay
    /// has not settled. Otherwise the session is back to `Idle` when this
    /// returns, whatever the outcome.
    pub fn finish(
        &mut self,
        now: Instant,
        surface: &dyn CaptureSurface,
        saver: &dyn ImageSaver,
    ) -> Result<ExportOutcome, ExportError> {
        let format = match self.phase {
            Phase::Idle | Phase::Capturing { .. } => return Err(ExportError::NoExportPending),
            Phase::Settling { .. } if !self.is_settled(now) => {
                return Err(ExportError::NotSettled);
            }
            Phase::Settling { format, .. } => format,
        };

        self.phase = Phase::Capturing { format };
        let result = self.capture_and_save(format, surface, saver);
        self.phase = Phase::Idle;

        match &result {
            Ok(ExportOutcome::Saved(path)) => tracing::info!("Export saved to {}", path.display()),
            Ok(ExportOutcome::Cancelled) => tracing::info!("Export cancelled"),
            Err(err) => tracing::error!("Export failed: {}", err),
        }
        result
    }

    fn capture_and_save(
        &self,
        format: ExportFormat,
        surface: &dyn CaptureSurface,
        saver: &dyn ImageSaver,
    ) -> Result<ExportOutcome, ExportError> {
        let request = CaptureRequest::new(format, self.overlay_visible());
        let image = surface.capture(&request)?;
        match saver.save(&image).map_err(ExportError::Save)? {
            Some(path) => Ok(ExportOutcome::Saved(path)),
            None => Ok(ExportOutcome::Cancelled),
        }
    }
}

impl Default for ExportSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StrategyStore;
    use crate::export::{CapturedImage, DirectorySaver, SceneSurface};
    use crate::model::{MarkerId, Strategy, StrategyField};
    use std::cell::{Cell, RefCell};
    use std::path::PathBuf;
    use std::sync::Arc;

    const SURFACE: Option<SurfaceHandle> = Some(SurfaceHandle { side: 200.0 });

    /// Records the overlay flag each capture saw
    #[derive(Default)]
    struct FakeSurface {
        fail: bool,
        overlay_seen: RefCell<Vec<bool>>,
    }

    impl CaptureSurface for FakeSurface {
        fn capture(&self, request: &CaptureRequest) -> Result<CapturedImage, ExportError> {
            self.overlay_seen.borrow_mut().push(request.overlay_visible);
            if self.fail {
                return Err(ExportError::EmptySurface);
            }
            Ok(CapturedImage {
                format: request.format,
                width: 1,
                height: 1,
                bytes: vec![0],
            })
        }
    }

    enum SaveBehavior {
        Save,
        Cancel,
        Fail,
    }

    struct FakeSaver {
        behavior: SaveBehavior,
        calls: Cell<usize>,
    }

    impl FakeSaver {
        fn new(behavior: SaveBehavior) -> Self {
            Self {
                behavior,
                calls: Cell::new(0),
            }
        }
    }

    impl ImageSaver for FakeSaver {
        fn save(&self, image: &CapturedImage) -> anyhow::Result<Option<PathBuf>> {
            self.calls.set(self.calls.get() + 1);
            match self.behavior {
                SaveBehavior::Save => Ok(Some(PathBuf::from(image.format.file_name()))),
                SaveBehavior::Cancel => Ok(None),
                SaveBehavior::Fail => anyhow::bail!("permission denied"),
            }
        }
    }

    fn settled_session(format: ExportFormat) -> (ExportSession, Instant) {
        let mut session = ExportSession::new();
        let start = Instant::now();
        session.begin(SURFACE, format, start).unwrap();
        (session, start + Duration::from_millis(50))
    }

    #[test]
    fn unmeasured_surface_is_refused() {
        let mut session = ExportSession::new();
        let result = session.begin(None, ExportFormat::Png, Instant::now());
        assert!(matches!(result, Err(ExportError::SurfaceNotReady)));
        assert!(!session.overlay_visible());
    }

    #[test]
    fn second_export_is_rejected_while_in_flight() {
        let mut session = ExportSession::new();
        let now = Instant::now();
        session.begin(SURFACE, ExportFormat::Png, now).unwrap();
        let result = session.begin(SURFACE, ExportFormat::Jpeg, now);
        assert!(matches!(result, Err(ExportError::InProgress)));
        assert_eq!(session.pending_format(), Some(ExportFormat::Png));
    }

    #[test]
    fn capture_waits_for_settle_delay() {
        let mut session = ExportSession::new();
        let start = Instant::now();
        session.begin(SURFACE, ExportFormat::Png, start).unwrap();
        assert!(session.overlay_visible());

        let surface = FakeSurface::default();
        let saver = FakeSaver::new(SaveBehavior::Save);
        let early = session.finish(start + Duration::from_millis(10), &surface, &saver);
        assert!(matches!(early, Err(ExportError::NotSettled)));
        assert!(session.overlay_visible());
        assert!(surface.overlay_seen.borrow().is_empty());

        let outcome = session
            .finish(start + Duration::from_millis(50), &surface, &saver)
            .unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Saved(PathBuf::from("cricket_field_strategy.png"))
        );
        assert!(!session.overlay_visible());
    }

    #[test]
    fn acknowledged_render_settles_early() {
        let mut session = ExportSession::new();
        let start = Instant::now();
        session.begin(SURFACE, ExportFormat::Jpeg, start).unwrap();
        assert!(!session.is_settled(start));
        session.acknowledge_render();
        assert!(session.is_settled(start));
    }

    #[test]
    fn overlay_is_visible_during_capture() {
        let (mut session, now) = settled_session(ExportFormat::Png);
        let surface = FakeSurface::default();
        session
            .finish(now, &surface, &FakeSaver::new(SaveBehavior::Save))
            .unwrap();
        assert_eq!(*surface.overlay_seen.borrow(), vec![true]);
    }

    #[test]
    fn capture_failure_still_hides_overlay() {
        let (mut session, now) = settled_session(ExportFormat::Png);
        let surface = FakeSurface {
            fail: true,
            ..FakeSurface::default()
        };
        let saver = FakeSaver::new(SaveBehavior::Save);
        let result = session.finish(now, &surface, &saver);
        assert!(matches!(result, Err(ExportError::EmptySurface)));
        assert_eq!(saver.calls.get(), 0);
        assert!(!session.overlay_visible());
    }

    #[test]
    fn save_failure_and_cancel_hide_overlay() {
        let (mut session, now) = settled_session(ExportFormat::Jpeg);
        let result = session.finish(now, &FakeSurface::default(), &FakeSaver::new(SaveBehavior::Fail));
        assert!(matches!(result, Err(ExportError::Save(_))));
        assert!(!session.in_progress());

        let (mut session, now) = settled_session(ExportFormat::Jpeg);
        let result = session.finish(now, &FakeSurface::default(), &FakeSaver::new(SaveBehavior::Cancel));
        assert_eq!(result.unwrap(), ExportOutcome::Cancelled);
        assert!(!session.in_progress());
    }

    #[test]
    fn finishing_twice_reports_nothing_pending() {
        let (mut session, now) = settled_session(ExportFormat::Png);
        let surface = FakeSurface::default();
        let saver = FakeSaver::new(SaveBehavior::Save);
        session.finish(now, &surface, &saver).unwrap();
        let again = session.finish(now, &surface, &saver);
        assert!(matches!(again, Err(ExportError::NoExportPending)));
        assert_eq!(saver.calls.get(), 1);
    }

    #[test]
    fn exports_strategy_into_directory() {
        let mut store = StrategyStore::default();
        store.set_field(StrategyField::ScenarioNotes(
            "Attack the cover gap\nBowl full and straight".to_string(),
        ));
        let slip = MarkerId::fielder(1).unwrap();
        let strategy: Arc<Strategy> = store.set_marker_position(slip, 120.0, 140.0);

        let handle = SurfaceHandle { side: 300.0 };
        let mut session = ExportSession::new();
        let start = Instant::now();
        session.begin(Some(handle), ExportFormat::Png, start).unwrap();
        session.acknowledge_render();

        let dir = tempfile::tempdir().unwrap();
        let outcome = session
            .finish(
                start,
                &SceneSurface::new(strategy, handle),
                &DirectorySaver::new(dir.path()),
            )
            .unwrap();

        let expected = dir.path().join("cricket_field_strategy.png");
        assert_eq!(outcome, ExportOutcome::Saved(expected.clone()));
        let written = image::open(&expected).unwrap();
        assert_eq!((written.width(), written.height()), (600, 600));
        assert!(!session.overlay_visible());
    }
}
