// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint a field scene into a Vello scene for the interactive canvas

use kurbo::Affine;
use masonry::core::render_text;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Fill};

use super::text::{TEXT_SHADOW_OFFSET, TextLayouter};
use crate::field::{FieldScene, SceneItem};

/// Paint every item of `field` with `transform` applied
pub fn paint_field(
    scene: &mut Scene,
    field: &FieldScene,
    transform: Affine,
    text: &mut TextLayouter,
) {
    for item in &field.items {
        match item {
            SceneItem::Fill { shape, color, .. } => {
                scene.fill(
                    Fill::NonZero,
                    transform,
                    &Brush::Solid(*color),
                    None,
                    &shape.to_path(),
                );
            }
            SceneItem::Stroke {
                shape,
                color,
                style,
                ..
            } => {
                scene.stroke(
                    &style.to_kurbo(),
                    transform,
                    &Brush::Solid(*color),
                    None,
                    &shape.to_path(),
                );
            }
            SceneItem::Text { text: item, .. } => {
                let layout = text.layout(item);
                let origin = transform * Affine::translate(item.origin.to_vec2());
                if let Some(shadow) = item.shadow {
                    render_text(
                        scene,
                        origin * Affine::translate(TEXT_SHADOW_OFFSET),
                        &layout,
                        &[Brush::Solid(shadow)],
                        false,
                    );
                }
                render_text(scene, origin, &layout, &[Brush::Solid(item.color)], false);
            }
        }
    }
}
