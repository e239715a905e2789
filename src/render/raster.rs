// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Software rasterization of a field scene for image export.
//!
//! The export path renders off-screen with `vello_cpu`, so capture does not
//! depend on the GPU surface the canvas is presented on. Shapes and glyph
//! runs are replayed from the same [`FieldScene`] the canvas paints.

use image::RgbaImage;
use kurbo::Affine;
use masonry::core::BrushIndex;
use parley::{Layout, PositionedLayoutItem};
use peniko::Color;
use vello_common::glyph::Glyph;
use vello_cpu::{Pixmap, RenderContext};

use super::text::{TEXT_SHADOW_OFFSET, TextLayouter};
use crate::field::{FieldScene, SceneItem};

/// Rasterize `field` at `pixel_ratio` device pixels per surface pixel
///
/// Returns `None` when the scaled surface would be empty or larger than the
/// rasterizer supports.
pub fn rasterize(
    field: &FieldScene,
    pixel_ratio: f64,
    text: &mut TextLayouter,
) -> Option<RgbaImage> {
    let side = device_side(field.layout.side, pixel_ratio)?;
    tracing::debug!(
        "Rasterizing {}x{} surface at {}x ({}px)",
        field.layout.side,
        field.layout.side,
        pixel_ratio,
        side
    );

    let base = Affine::scale(pixel_ratio);
    let mut ctx = RenderContext::new(side, side);

    for item in &field.items {
        match item {
            SceneItem::Fill { shape, color, .. } => {
                ctx.set_transform(base);
                ctx.set_paint(*color);
                ctx.fill_path(&shape.to_path());
            }
            SceneItem::Stroke {
                shape,
                color,
                style,
                ..
            } => {
                ctx.set_transform(base);
                ctx.set_paint(*color);
                ctx.set_stroke(style.to_kurbo());
                ctx.stroke_path(&shape.to_path());
            }
            SceneItem::Text { text: item, .. } => {
                let layout = text.layout(item);
                let origin = base * Affine::translate(item.origin.to_vec2());
                if let Some(shadow) = item.shadow {
                    fill_layout(
                        &mut ctx,
                        &layout,
                        origin * Affine::translate(TEXT_SHADOW_OFFSET),
                        shadow,
                    );
                }
                fill_layout(&mut ctx, &layout, origin, item.color);
            }
        }
    }

    let mut pixmap = Pixmap::new(side, side);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    let pixels = pixmap.take_unpremultiplied();
    let mut bytes = Vec::with_capacity(pixels.len() * 4);
    for p in pixels {
        bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    RgbaImage::from_raw(u32::from(side), u32::from(side), bytes)
}

/// Device pixel side length for a surface side at `pixel_ratio`
pub fn device_side(side: f64, pixel_ratio: f64) -> Option<u16> {
    let scaled = (side * pixel_ratio).round();
    if scaled >= 1.0 && scaled <= f64::from(u16::MAX) {
        Some(scaled as u16)
    } else {
        None
    }
}

/// Fill every glyph run of `layout` with a solid color
fn fill_layout(ctx: &mut RenderContext, layout: &Layout<BrushIndex>, transform: Affine, color: Color) {
    ctx.set_transform(transform);
    ctx.set_paint(color);
    for line in layout.lines() {
        for item in line.items() {
            let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                continue;
            };
            let run = glyph_run.run();
            let mut x = glyph_run.offset();
            let y = glyph_run.baseline();
            let glyphs = glyph_run.glyphs().map(|g| {
                let glyph = Glyph {
                    id: g.id.into(),
                    x: x + g.x,
                    y: y - g.y,
                };
                x += g.advance;
                glyph
            });

            let skew = run
                .synthesis()
                .skew()
                .map(|angle| Affine::skew(f64::from(angle).to_radians().tan(), 0.0))
                .unwrap_or(Affine::IDENTITY);
            ctx.glyph_run(run.font())
                .font_size(run.font_size())
                .glyph_transform(skew)
                .fill_glyphs(glyphs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldLayout;
    use crate::model::Strategy;
    use crate::theme;

    fn assert_near(pixel: &image::Rgba<u8>, color: Color) {
        let expected = color.to_rgba8();
        let [r, g, b, a] = pixel.0;
        for (got, want) in [(r, expected.r), (g, expected.g), (b, expected.b), (a, expected.a)] {
            assert!(
                got.abs_diff(want) <= 2,
                "pixel {:?} is not close to {:?}",
                pixel.0,
                expected
            );
        }
    }

    #[test]
    fn device_side_scales_and_rejects_empty() {
        assert_eq!(device_side(810.0, 2.0), Some(1620));
        assert_eq!(device_side(0.0, 2.0), None);
        assert_eq!(device_side(40_000.0, 2.0), None);
    }

    #[test]
    fn rasterizes_at_double_density() {
        let field = FieldScene::build(FieldLayout::for_width(100.0), &Strategy::default(), false, None);
        let image = rasterize(&field, 2.0, &mut TextLayouter::new()).unwrap();
        assert_eq!(image.dimensions(), (200, 200));

        // Pitch at the center, grass beside it, transparent corners
        assert_near(image.get_pixel(100, 100), theme::field::PITCH);
        assert_near(image.get_pixel(140, 100), theme::field::GRASS);
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
    }
}
