// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Main window content: title, field canvas and control panel.
//!
//! While an export is waiting for the overlay to settle, the content is
//! forked with a timer task that posts [`SettleElapsed`] after the settle
//! delay. The canvas usually acknowledges the overlay sooner; whichever
//! arrives first completes the export and the other is ignored.

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::core::fork;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, FlexExt, flex_col, flex_row, label, task_raw};

use crate::components::{CanvasAction, control_panel, field_canvas};
use crate::data::AppState;
use crate::settings;
use crate::theme;

/// Gap between the canvas and the control panel
const CONTENT_GAP: f64 = 12.0;

/// Message posted when the fallback settle delay has passed
#[derive(Debug, Clone, Copy)]
pub struct SettleElapsed;

/// The whole window
pub fn strategizer(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let content = flex_col((
        label(settings::window::TITLE)
            .text_size(24.0)
            .color(theme::text::PRIMARY),
        flex_row((
            field_canvas(
                state.store.get(),
                state.overlay_visible(),
                |state: &mut AppState, action| match action {
                    CanvasAction::Resized { side } => state.surface_resized(side),
                    CanvasAction::MarkerMoved { id, position } => state.move_marker(id, position),
                    CanvasAction::OverlayRendered => state.overlay_rendered(),
                },
            )
            .flex(1.0),
            control_panel(state),
        ))
        .gap(CONTENT_GAP.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .flex(1.0),
    ))
    .gap(CONTENT_GAP.px())
    .cross_axis_alignment(CrossAxisAlignment::Fill)
    .padding(CONTENT_GAP)
    .background_color(theme::app::BACKGROUND);

    // Fallback timer for the export overlay
    let settle_timer = state.export.is_settling().then(|| {
        task_raw(
            |proxy| async move {
                xilem::tokio::time::sleep(settings::export::SETTLE_DELAY).await;
                if proxy.message(SettleElapsed).is_err() {
                    tracing::debug!("Settle timer finished after the export ended");
                }
            },
            |state: &mut AppState, _msg: SettleElapsed| {
                state.settle_elapsed();
            },
        )
    });

    fork(content, settle_timer)
}
