// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for FieldCanvasWidget

use super::{CanvasAction, FieldCanvasWidget};
use crate::model::Strategy;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a field canvas view for a strategy snapshot
///
/// The callback receives every [`CanvasAction`] the widget emits: surface
/// resizes, marker drops and overlay render acknowledgements.
pub fn field_canvas<State, F>(
    strategy: Arc<Strategy>,
    overlay_visible: bool,
    on_action: F,
) -> FieldCanvasView<State, F>
where
    F: Fn(&mut State, CanvasAction),
{
    FieldCanvasView {
        strategy,
        overlay_visible,
        on_action,
        phantom: PhantomData,
    }
}

/// The Xilem View for FieldCanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct FieldCanvasView<State, F> {
    strategy: Arc<Strategy>,
    overlay_visible: bool,
    on_action: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for FieldCanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, CanvasAction) + 'static> View<State, (), ViewCtx>
    for FieldCanvasView<State, F>
{
    type Element = Pod<FieldCanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = FieldCanvasWidget::new(self.strategy.clone(), self.overlay_visible);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        let mut widget = element.downcast::<FieldCanvasWidget>();

        // Snapshots are immutable, so pointer equality means nothing changed
        if !Arc::ptr_eq(&self.strategy, &prev.strategy) {
            widget.widget.strategy = self.strategy.clone();
            widget.ctx.request_render();
        }

        if self.overlay_visible != prev.overlay_visible {
            tracing::debug!(
                "[FieldCanvasView::rebuild] overlay {}",
                if self.overlay_visible { "shown" } else { "hidden" }
            );
            widget.widget.set_overlay_visible(self.overlay_visible);
            // Layout reports the overlay back once it is part of the frame
            widget.ctx.request_layout();
            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
        // No cleanup needed
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<CanvasAction>() {
            Some(action) => {
                tracing::debug!("[FieldCanvasView::message] {:?}", action);
                (self.on_action)(app_state, *action);
                // Propagate to the root so the panel and notices rebuild
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
