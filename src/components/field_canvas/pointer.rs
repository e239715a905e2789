// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for FieldCanvasWidget

use kurbo::Point;
use masonry::core::{EventCtx, PointerState};

use super::{CanvasAction, FieldCanvasWidget, MarkerDrag};
use crate::field::marker_at;
use crate::model::MarkerId;

impl MarkerDrag {
    /// Grab the marker at `marker_position` with the pointer at `local`
    pub(super) fn grab(id: MarkerId, marker_position: Point, local: Point) -> Self {
        Self {
            id,
            grab_offset: marker_position - FieldCanvasWidget::to_surface(local),
            position: marker_position,
        }
    }

    /// Move the marker so it keeps its offset from the pointer at `local`
    pub(super) fn follow(&mut self, local: Point) {
        self.position = FieldCanvasWidget::to_surface(local) + self.grab_offset;
    }
}

impl FieldCanvasWidget {
    /// Start dragging the fielder under the pointer, if any
    pub(super) fn handle_pointer_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let local = ctx.local_position(state.position);
        let pos = Self::to_surface(local);
        let Some(id) = marker_at(&self.strategy, pos) else {
            return;
        };
        let Some(marker) = self.strategy.fielder(id) else {
            return;
        };

        tracing::debug!("Drag start on {} at ({:.1}, {:.1})", id, pos.x, pos.y);
        ctx.capture_pointer();
        self.drag = Some(MarkerDrag::grab(id, marker.position, local));
        ctx.set_handled();
    }

    /// Move the dragged fielder, keeping the grab offset
    pub(super) fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, current: &PointerState) {
        let Some(drag) = &mut self.drag else {
            return;
        };
        drag.follow(ctx.local_position(current.position));
        ctx.request_render();
    }

    /// Drop the dragged fielder and report where it landed
    pub(super) fn handle_pointer_up(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let Some(mut drag) = self.drag.take() else {
            return;
        };
        drag.follow(ctx.local_position(state.position));

        tracing::debug!(
            "Drag end: {} dropped at ({:.1}, {:.1})",
            drag.id,
            drag.position.x,
            drag.position.y
        );
        ctx.release_pointer();
        ctx.submit_action::<CanvasAction>(CanvasAction::MarkerMoved {
            id: drag.id,
            position: drag.position,
        });
        ctx.request_render();
    }

    /// Abandon the drag; the marker snaps back to its stored position
    pub(super) fn handle_pointer_cancel(&mut self, ctx: &mut EventCtx<'_>) {
        if self.drag.take().is_some() {
            tracing::debug!("Drag cancelled");
            ctx.request_render();
        }
    }
}
