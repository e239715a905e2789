// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Strategy edits and surface measurement for AppState

use std::num::NonZeroU32;

use kurbo::Point;

use super::AppState;
use crate::export::SurfaceHandle;
use crate::model::{MarkerId, MatchFormat, StrategyField};

impl AppState {
    /// Replace one scalar attribute of the strategy
    pub fn set_field(&mut self, field: StrategyField) {
        if let StrategyField::MatchFormat(format) = &field
            && *format != MatchFormat::Custom
        {
            self.custom_overs_input.clear();
        }
        self.store.set_field(field);
    }

    /// Handle text typed into the custom overs input
    ///
    /// Empty input clears the count. Input that is not a positive whole
    /// number is kept in the text box but leaves the stored count alone.
    pub fn set_custom_overs_text(&mut self, text: String) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.store.set_field(StrategyField::CustomOvers(None));
        } else {
            match trimmed.parse::<NonZeroU32>() {
                Ok(overs) => {
                    self.store.set_field(StrategyField::CustomOvers(Some(overs)));
                }
                Err(_) => tracing::debug!("Ignoring custom overs input {:?}", trimmed),
            }
        }
        self.custom_overs_input = text;
    }

    /// A marker was dropped at `position`
    pub fn move_marker(&mut self, id: MarkerId, position: Point) {
        self.store.set_marker_position(id, position.x, position.y);
    }

    pub fn rename_marker(&mut self, id: MarkerId, name: String) {
        self.store.set_marker_name(id, name);
    }

    pub fn reset_markers(&mut self) {
        self.store.reset_markers();
    }

    /// The canvas measured a new surface side
    pub fn surface_resized(&mut self, side: f64) {
        tracing::info!("Drawing surface resized to {:.0}px", side);
        self.surface = (side > 0.0).then_some(SurfaceHandle { side });
    }
}
