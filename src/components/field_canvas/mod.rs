// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Field canvas widget - draws the field and lets fielders be dragged

mod paint;
mod pointer;
mod view;

pub use view::field_canvas;

use std::sync::Arc;

use kurbo::{Point, Size, Vec2};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, RegisterCtx,
    TextEvent, Update, UpdateCtx, Widget,
};
use masonry::vello::Scene;

use crate::field::{FieldLayout, surface_side};
use crate::model::{MarkerId, Strategy};
use crate::render::TextLayouter;
use crate::settings;

/// Action emitted by the field canvas
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasAction {
    /// The square drawing surface was measured at a new side length
    Resized { side: f64 },
    /// A fielder was dropped
    MarkerMoved { id: MarkerId, position: Point },
    /// The overlay has been handed to the painter
    OverlayRendered,
}

/// A fielder being dragged
#[derive(Debug, Clone, Copy)]
pub(super) struct MarkerDrag {
    pub id: MarkerId,
    /// Marker center minus the pointer position at press time
    pub grab_offset: Vec2,
    /// Live marker position in surface coordinates
    pub position: Point,
}

/// The field diagram widget
pub struct FieldCanvasWidget {
    pub(super) strategy: Arc<Strategy>,
    pub(super) overlay_visible: bool,
    overlay_reported: bool,
    pub(super) layout: FieldLayout,
    reported_side: Option<f64>,
    pub(super) drag: Option<MarkerDrag>,
    pub(super) text: TextLayouter,
}

impl FieldCanvasWidget {
    pub fn new(strategy: Arc<Strategy>, overlay_visible: bool) -> Self {
        Self {
            strategy,
            overlay_visible,
            overlay_reported: false,
            layout: FieldLayout::default(),
            reported_side: None,
            drag: None,
            text: TextLayouter::new(),
        }
    }

    /// Offset of the drawing surface inside the widget
    pub(super) fn surface_origin() -> Vec2 {
        Vec2::new(settings::surface::PADDING, settings::surface::PADDING)
    }

    /// Convert widget-local coordinates to surface coordinates
    pub(super) fn to_surface(local: Point) -> Point {
        local - Self::surface_origin()
    }

    pub(super) fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
        if !visible {
            self.overlay_reported = false;
        }
    }

    fn report_resize(&mut self, ctx: &mut LayoutCtx<'_>, side: f64) {
        let changed = self
            .reported_side
            .is_none_or(|last| (last - side).abs() > settings::surface::RESIZE_THRESHOLD);
        if changed {
            self.reported_side = Some(side);
            ctx.submit_action::<CanvasAction>(CanvasAction::Resized { side });
        }
    }
}

impl Widget for FieldCanvasWidget {
    type Action = CanvasAction;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        let size = bc.max();
        let side = surface_side(size);
        self.layout = FieldLayout::for_width(side);
        self.report_resize(ctx, side);

        if self.overlay_visible && !self.overlay_reported {
            self.overlay_reported = true;
            ctx.submit_action::<CanvasAction>(CanvasAction::OverlayRendered);
        }
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.paint_background(scene, ctx.size());
        self.paint_field(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_down(ctx, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_up(ctx, state);
            }

            PointerEvent::Cancel(_) => {
                self.handle_pointer_cancel(ctx);
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        _ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &TextEvent,
    ) {
        // No text handling needed
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!(
            "Cricket field: {}",
            self.strategy.placement_display_name()
        ));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
