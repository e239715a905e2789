// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Text layout shared by the on-screen painter and the export rasterizer

use kurbo::Vec2;
use masonry::core::{BrushIndex, StyleProperty};
use parley::{
    Alignment, AlignmentOptions, FontContext, FontFamily, FontStack, FontStyle, FontWeight,
    GenericFamily, Layout, LayoutContext,
};

use crate::field::{TextAlign, TextItem};

/// Offset of the soft shadow drawn behind overlay text
pub const TEXT_SHADOW_OFFSET: Vec2 = Vec2::new(1.0, 1.0);

/// Owns the font and layout contexts so repeated layouts reuse font data
pub struct TextLayouter {
    font_cx: FontContext,
    layout_cx: LayoutContext<BrushIndex>,
}

impl TextLayouter {
    pub fn new() -> Self {
        Self {
            font_cx: FontContext::default(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// Lay out one text item, wrapped and aligned as the item asks
    ///
    /// The single brush slot is `BrushIndex(0)`; painters supply the color.
    pub fn layout(&mut self, item: &TextItem) -> Layout<BrushIndex> {
        let text = item.content.as_str();
        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(item.font_size as f32));
        builder.push_default(StyleProperty::FontStack(FontStack::Single(
            FontFamily::Generic(GenericFamily::SansSerif),
        )));
        builder.push_default(StyleProperty::Brush(BrushIndex(0)));
        if item.bold {
            builder.push_default(StyleProperty::FontWeight(FontWeight::BOLD));
        }
        if item.italic {
            builder.push_default(StyleProperty::FontStyle(FontStyle::Italic));
        }

        let mut layout = builder.build(text);
        let wrap_width = item.wrap_width.map(|w| w as f32);
        layout.break_all_lines(wrap_width);
        let alignment = match item.align {
            TextAlign::Start => Alignment::Start,
            TextAlign::Center => Alignment::Center,
        };
        layout.align(wrap_width, alignment, AlignmentOptions::default());
        layout
    }
}

impl Default for TextLayouter {
    fn default() -> Self {
        Self::new()
    }
}
