// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for FieldCanvasWidget

use kurbo::{Affine, Size};
use masonry::util::fill_color;
use masonry::vello::Scene;

use super::FieldCanvasWidget;
use crate::field::{DragPreview, FieldScene};
use crate::render::paint_field;
use crate::theme;

impl FieldCanvasWidget {
    pub(super) fn paint_background(&self, scene: &mut Scene, canvas_size: Size) {
        fill_color(scene, &canvas_size.to_rect(), theme::app::BACKGROUND);
    }

    /// Paint the surface, with the dragged marker at its live position
    pub(super) fn paint_field(&mut self, scene: &mut Scene) {
        if self.layout.side <= 0.0 {
            return;
        }
        let drag = self.drag.map(|drag| DragPreview {
            id: drag.id,
            position: drag.position,
        });
        let field = FieldScene::build(self.layout, &self.strategy, self.overlay_visible, drag);
        let transform = Affine::translate(Self::surface_origin());
        paint_field(scene, &field, transform, &mut self.text);
    }
}
