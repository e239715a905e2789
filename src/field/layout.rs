// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Proportional field geometry.
//!
//! Every shape on the diagram is derived from the surface width alone. The
//! surface is always square, so re-deriving the layout after a resize is a
//! single call to [`FieldLayout::for_width`].

use kurbo::{Line, Point, Rect, Size, Vec2};

use crate::settings;
use crate::theme::size;

/// Side length of the square drawing surface for a container of `container`
pub fn surface_side(container: Size) -> f64 {
    let padding = settings::surface::PADDING * 2.0;
    let available = (container.width - padding).min(container.height - padding);
    (available + settings::surface::GROWTH).max(0.0)
}

/// Derived geometry for one surface width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    /// Surface side (width and height)
    pub side: f64,
    pub center: Point,
    pub field_radius: f64,
    pub boundary_radius: f64,
    pub pitch_length: f64,
    pub pitch_width: f64,
    pub wicketkeeper: Point,
    pub bowler: Point,
}

impl FieldLayout {
    pub fn for_width(width: f64) -> Self {
        let center = Point::new(width / 2.0, width / 2.0);
        let field_radius = width * size::FIELD_RADIUS_RATIO;
        let pitch_length = field_radius * size::PITCH_LENGTH_RATIO;
        let pitch_width = field_radius * size::PITCH_WIDTH_RATIO;
        let fixed_offset =
            Vec2::new(0.0, pitch_length / 2.0 + field_radius * size::FIXED_MARKER_GAP_RATIO);

        Self {
            side: width,
            center,
            field_radius,
            boundary_radius: field_radius * size::BOUNDARY_RATIO,
            pitch_length,
            pitch_width,
            wicketkeeper: center + fixed_offset,
            bowler: center - fixed_offset,
        }
    }

    /// Surface bounds in surface coordinates
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.side, self.side)
    }

    /// Vertical pitch rectangle centered on the field
    pub fn pitch_rect(&self) -> Rect {
        Rect::from_center_size(self.center, (self.pitch_width, self.pitch_length))
    }

    /// Popping creases near each end of the pitch
    pub fn creases(&self) -> [Line; 2] {
        let pitch = self.pitch_rect();
        let inset = self.pitch_length * size::CREASE_INSET_RATIO;
        [
            Line::new((pitch.x0, pitch.y0 + inset), (pitch.x1, pitch.y0 + inset)),
            Line::new((pitch.x0, pitch.y1 - inset), (pitch.x1, pitch.y1 - inset)),
        ]
    }

    /// Top-left corner of the boundary caption
    pub fn boundary_caption_origin(&self) -> Point {
        Point::new(
            self.center.x + self.boundary_radius - size::BOUNDARY_CAPTION_INSET,
            self.center.y - 10.0,
        )
    }

    /// Height of the notes panel for the given number of lines
    pub fn notes_panel_height(lines: usize) -> f64 {
        lines as f64 * size::NOTES_LINE_HEIGHT + size::NOTES_PADDING * 2.0
    }

    /// Notes panel rectangle anchored to the bottom of the surface
    pub fn notes_panel_rect(&self, lines: usize) -> Rect {
        let margin = size::OVERLAY_MARGIN;
        let height = Self::notes_panel_height(lines);
        let origin = Point::new(margin, self.side - margin - height);
        Rect::from_origin_size(origin, (self.side - margin * 2.0, height))
    }
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self::for_width(settings::surface::DEFAULT_SIDE)
    }
}
