// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Field scene: the display list for one frame of the field diagram.
//!
//! The scene is built from a [`FieldLayout`], a strategy snapshot and the
//! overlay flag. It is plain data, so the interactive canvas (Vello) and the
//! export rasterizer (Vello CPU) paint exactly the same items, and tests can
//! inspect what would be drawn without a GPU or a font stack.

use kurbo::{BezPath, Circle, Line, Point, Rect, RoundedRect, Shape as _, Vec2};
use peniko::Color;

use super::layout::FieldLayout;
use crate::model::{MarkerId, Strategy};
use crate::theme;
use crate::theme::size;

/// What a scene item depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRole {
    FieldShadow,
    Field,
    Boundary,
    BoundaryCaption,
    Pitch,
    Crease,
    Wicketkeeper,
    Bowler,
    Fielder(MarkerId),
    InfoBlock,
    NotesPanel,
}

impl SceneRole {
    /// True for items that only exist while the overlay is visible
    pub fn is_overlay(self) -> bool {
        matches!(
            self,
            Self::BoundaryCaption | Self::InfoBlock | Self::NotesPanel
        )
    }
}

/// Geometry of a filled or stroked item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneShape {
    Circle(Circle),
    Rect(RoundedRect),
    Line(Line),
}

impl SceneShape {
    /// Flatten to a path for the painters
    pub fn to_path(&self) -> BezPath {
        const TOLERANCE: f64 = 0.1;
        match self {
            Self::Circle(c) => c.to_path(TOLERANCE),
            Self::Rect(r) => r.to_path(TOLERANCE),
            Self::Line(l) => l.to_path(TOLERANCE),
        }
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle(c) => c.bounding_box(),
            Self::Rect(r) => r.rect(),
            Self::Line(l) => l.bounding_box(),
        }
    }
}

/// Stroke parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    /// Dash on/off lengths
    pub dash: Option<[f64; 2]>,
}

impl StrokeStyle {
    pub fn solid(width: f64) -> Self {
        Self { width, dash: None }
    }

    pub fn to_kurbo(self) -> kurbo::Stroke {
        let stroke = kurbo::Stroke::new(self.width);
        match self.dash {
            Some(pattern) => stroke.with_dashes(0.0, pattern),
            None => stroke,
        }
    }
}

/// Horizontal text placement inside the wrap width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

/// A run of text anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub content: String,
    pub origin: Point,
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
    /// Word-wrap width; `None` lays the text out on as few lines as it has
    pub wrap_width: Option<f64>,
    pub align: TextAlign,
    /// Color of a soft shadow drawn behind the text
    pub shadow: Option<Color>,
}

impl TextItem {
    fn new(content: impl Into<String>, origin: Point, font_size: f64, color: Color) -> Self {
        Self {
            content: content.into(),
            origin,
            font_size,
            bold: false,
            italic: false,
            color,
            wrap_width: None,
            align: TextAlign::Start,
            shadow: None,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn wrapped(mut self, width: f64, align: TextAlign) -> Self {
        self.wrap_width = Some(width);
        self.align = align;
        self
    }

    fn shadowed(mut self, color: Color) -> Self {
        self.shadow = Some(color);
        self
    }
}

/// One drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItem {
    Fill {
        role: SceneRole,
        shape: SceneShape,
        color: Color,
    },
    Stroke {
        role: SceneRole,
        shape: SceneShape,
        color: Color,
        style: StrokeStyle,
    },
    Text {
        role: SceneRole,
        text: TextItem,
    },
}

impl SceneItem {
    pub fn role(&self) -> SceneRole {
        match self {
            Self::Fill { role, .. } | Self::Stroke { role, .. } | Self::Text { role, .. } => *role,
        }
    }
}

/// A marker being dragged, drawn at its live position instead of the stored one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPreview {
    pub id: MarkerId,
    pub position: Point,
}

/// Display list for the whole surface, in painting order
#[derive(Debug, Clone, PartialEq)]
pub struct FieldScene {
    pub layout: FieldLayout,
    pub items: Vec<SceneItem>,
}

impl FieldScene {
    pub fn build(
        layout: FieldLayout,
        strategy: &Strategy,
        overlay_visible: bool,
        drag: Option<DragPreview>,
    ) -> Self {
        let mut scene = Self {
            layout,
            items: Vec::new(),
        };

        scene.push_field();
        if overlay_visible {
            scene.push_boundary_caption();
        }
        scene.push_pitch();

        scene.push_marker(
            SceneRole::Wicketkeeper,
            layout.wicketkeeper,
            theme::marker::WICKETKEEPER,
            strategy.wicketkeeper_display_name(),
        );
        scene.push_marker(
            SceneRole::Bowler,
            layout.bowler,
            theme::marker::BOWLER,
            strategy.bowler_display_name(),
        );

        for fielder in &strategy.fielders {
            let position = match drag {
                Some(preview) if preview.id == fielder.id => preview.position,
                _ => fielder.position,
            };
            scene.push_marker(
                SceneRole::Fielder(fielder.id),
                position,
                theme::marker::FIELDER,
                fielder.display_name(),
            );
        }

        if overlay_visible {
            scene.push_info_block(strategy);
            if strategy.has_notes() {
                scene.push_notes_panel(strategy);
            }
        }

        scene
    }

    /// Items with the given role, in painting order
    pub fn items_with_role(&self, role: SceneRole) -> impl Iterator<Item = &SceneItem> {
        self.items.iter().filter(move |item| item.role() == role)
    }

    pub fn has_overlay(&self) -> bool {
        self.items.iter().any(|item| item.role().is_overlay())
    }

    fn fill(&mut self, role: SceneRole, shape: SceneShape, color: Color) {
        self.items.push(SceneItem::Fill { role, shape, color });
    }

    fn stroke(&mut self, role: SceneRole, shape: SceneShape, color: Color, style: StrokeStyle) {
        self.items.push(SceneItem::Stroke {
            role,
            shape,
            color,
            style,
        });
    }

    fn text(&mut self, role: SceneRole, text: TextItem) {
        self.items.push(SceneItem::Text { role, text });
    }

    fn push_field(&mut self) {
        let layout = self.layout;
        let shadow_center = layout.center + Vec2::new(0.0, size::FIELD_SHADOW_OFFSET);
        self.fill(
            SceneRole::FieldShadow,
            SceneShape::Circle(Circle::new(shadow_center, layout.field_radius)),
            theme::field::SHADOW,
        );
        self.fill(
            SceneRole::Field,
            SceneShape::Circle(Circle::new(layout.center, layout.field_radius)),
            theme::field::GRASS,
        );
        self.stroke(
            SceneRole::Boundary,
            SceneShape::Circle(Circle::new(layout.center, layout.boundary_radius)),
            theme::field::LINES,
            StrokeStyle {
                width: size::BOUNDARY_STROKE_WIDTH,
                dash: Some(size::BOUNDARY_DASH),
            },
        );
    }

    fn push_boundary_caption(&mut self) {
        let origin = self.layout.boundary_caption_origin();
        self.text(
            SceneRole::BoundaryCaption,
            TextItem::new(
                "Boundary",
                origin,
                size::BOUNDARY_CAPTION_FONT_SIZE,
                theme::overlay::TEXT,
            )
            .italic(),
        );
    }

    fn push_pitch(&mut self) {
        let pitch = RoundedRect::from_rect(self.layout.pitch_rect(), 0.0);
        self.fill(SceneRole::Pitch, SceneShape::Rect(pitch), theme::field::PITCH);
        self.stroke(
            SceneRole::Pitch,
            SceneShape::Rect(pitch),
            theme::field::LINES,
            StrokeStyle::solid(size::PITCH_STROKE_WIDTH),
        );
        for crease in self.layout.creases() {
            self.stroke(
                SceneRole::Crease,
                SceneShape::Line(crease),
                theme::field::LINES,
                StrokeStyle::solid(size::CREASE_STROKE_WIDTH),
            );
        }
    }

    fn push_marker(&mut self, role: SceneRole, at: Point, color: Color, name: &str) {
        self.fill(
            role,
            SceneShape::Circle(Circle::new(at, size::MARKER_RADIUS)),
            color,
        );
        let label_box = marker_label_box(at);
        self.text(
            role,
            TextItem::new(
                name,
                label_box.origin(),
                size::MARKER_FONT_SIZE,
                theme::marker::TEXT,
            )
            .wrapped(label_box.width(), TextAlign::Center),
        );
    }

    fn push_info_block(&mut self, strategy: &Strategy) {
        let margin = size::OVERLAY_MARGIN;
        let title = strategy.placement_display_name();
        self.text(
            SceneRole::InfoBlock,
            TextItem::new(
                title,
                Point::new(margin, margin),
                size::TITLE_FONT_SIZE,
                theme::overlay::TEXT,
            )
            .bold()
            .shadowed(theme::overlay::TEXT_SHADOW),
        );

        let lines = [
            format!("Team: {}", strategy.team_display_name()),
            format!("Batsman: {}", strategy.batsman_hand),
            format!("Bowler Type: {}", strategy.bowler_type),
            format!("Format: {}", strategy.match_info()),
            format!("Strategy: {}", strategy.field_style),
        ];
        for (i, line) in lines.into_iter().enumerate() {
            let y = margin + size::INFO_FIRST_LINE + i as f64 * size::INFO_LINE_STEP;
            self.text(
                SceneRole::InfoBlock,
                TextItem::new(
                    line,
                    Point::new(margin, y),
                    size::INFO_FONT_SIZE,
                    theme::overlay::TEXT,
                ),
            );
        }
    }

    fn push_notes_panel(&mut self, strategy: &Strategy) {
        let panel = self.layout.notes_panel_rect(strategy.notes_line_count());
        let padding = size::NOTES_PADDING;

        self.fill(
            SceneRole::NotesPanel,
            SceneShape::Rect(RoundedRect::from_rect(panel, size::NOTES_CORNER_RADIUS)),
            theme::overlay::NOTES_PANEL,
        );
        self.text(
            SceneRole::NotesPanel,
            TextItem::new(
                "Scenario Notes:",
                panel.origin() + Vec2::new(padding, padding),
                size::NOTES_HEADING_FONT_SIZE,
                theme::overlay::TEXT,
            )
            .bold(),
        );
        self.text(
            SceneRole::NotesPanel,
            TextItem::new(
                strategy.scenario_notes.clone(),
                panel.origin() + Vec2::new(padding, padding + size::NOTES_LINE_HEIGHT),
                size::NOTES_FONT_SIZE,
                theme::overlay::TEXT,
            )
            .wrapped(panel.width() - padding * 2.0, TextAlign::Start),
        );
    }
}

/// Box the name label of a marker centered at `at` is laid out in
///
/// The height covers a single line; longer names wrap below it.
pub fn marker_label_box(at: Point) -> Rect {
    let radius = size::MARKER_RADIUS;
    let origin = Point::new(at.x - radius * 2.0, at.y + radius + size::MARKER_LABEL_GAP);
    Rect::from_origin_size(origin, (radius * 4.0, size::MARKER_FONT_SIZE * 1.25))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MatchFormat, StrategyField};
    use std::num::NonZeroU32;

    fn texts(scene: &FieldScene, role: SceneRole) -> Vec<String> {
        scene
            .items_with_role(role)
            .filter_map(|item| match item {
                SceneItem::Text { text, .. } => Some(text.content.clone()),
                _ => None,
            })
            .collect()
    }

    fn notes_strategy() -> Strategy {
        Strategy {
            scenario_notes: "Attack the cover gap\nBowl full and straight".to_string(),
            ..Strategy::default()
        }
    }

    #[test]
    fn overlay_off_has_no_overlay_items() {
        let scene = FieldScene::build(FieldLayout::for_width(600.0), &notes_strategy(), false, None);
        assert!(!scene.has_overlay());
        assert_eq!(scene.items_with_role(SceneRole::InfoBlock).count(), 0);
        assert_eq!(scene.items_with_role(SceneRole::BoundaryCaption).count(), 0);
        assert_eq!(scene.items_with_role(SceneRole::NotesPanel).count(), 0);
    }

    #[test]
    fn overlay_on_sizes_notes_panel_by_line_count() {
        let layout = FieldLayout::for_width(600.0);
        let scene = FieldScene::build(layout, &notes_strategy(), true, None);

        let panel = scene
            .items_with_role(SceneRole::NotesPanel)
            .find_map(|item| match item {
                SceneItem::Fill { shape, .. } => Some(shape.bounding_box()),
                _ => None,
            })
            .expect("notes panel should be drawn");
        assert_eq!(panel.height(), 60.0);
        assert_eq!(panel.width(), 580.0);
        assert_eq!(panel.y1, 590.0);

        let notes = texts(&scene, SceneRole::NotesPanel);
        assert_eq!(notes[0], "Scenario Notes:");
        assert_eq!(notes[1], "Attack the cover gap\nBowl full and straight");
    }

    #[test]
    fn blank_notes_skip_the_panel() {
        let strategy = Strategy {
            scenario_notes: "   ".to_string(),
            ..Strategy::default()
        };
        let scene = FieldScene::build(FieldLayout::for_width(600.0), &strategy, true, None);
        assert_eq!(scene.items_with_role(SceneRole::NotesPanel).count(), 0);
        assert!(scene.items_with_role(SceneRole::InfoBlock).count() > 0);
    }

    #[test]
    fn info_block_lists_metadata() {
        let mut strategy = Strategy::default();
        StrategyField::MatchFormat(MatchFormat::Custom).apply(&mut strategy);
        StrategyField::CustomOvers(NonZeroU32::new(15)).apply(&mut strategy);
        strategy.team_name.clear();

        let scene = FieldScene::build(FieldLayout::for_width(600.0), &strategy, true, None);
        assert_eq!(
            texts(&scene, SceneRole::InfoBlock),
            vec![
                "My Cricket Strategy",
                "Team: N/A",
                "Batsman: Right-Handed",
                "Bowler Type: Right-Arm Fast",
                "Format: 15 Overs (Custom)",
                "Strategy: Standard",
            ]
        );
        assert_eq!(texts(&scene, SceneRole::BoundaryCaption), vec!["Boundary"]);
    }

    #[test]
    fn every_marker_is_drawn() {
        let strategy = Strategy::default();
        let scene = FieldScene::build(FieldLayout::for_width(810.0), &strategy, false, None);
        for fielder in &strategy.fielders {
            let circle = scene
                .items_with_role(SceneRole::Fielder(fielder.id))
                .find_map(|item| match item {
                    SceneItem::Fill {
                        shape: SceneShape::Circle(c),
                        ..
                    } => Some(*c),
                    _ => None,
                })
                .unwrap();
            assert_eq!(circle.center, fielder.position);
            assert_eq!(circle.radius, 8.0);
            assert_eq!(
                texts(&scene, SceneRole::Fielder(fielder.id)),
                vec![fielder.name.clone()]
            );
        }
        assert_eq!(texts(&scene, SceneRole::Wicketkeeper), vec!["WK"]);
        assert_eq!(texts(&scene, SceneRole::Bowler), vec!["Bowler"]);
    }

    #[test]
    fn drag_preview_overrides_stored_position() {
        let strategy = Strategy::default();
        let id = strategy.fielders[4].id;
        let preview = DragPreview {
            id,
            position: Point::new(-20.0, 900.0),
        };
        let scene = FieldScene::build(FieldLayout::for_width(810.0), &strategy, false, Some(preview));
        let moved = scene
            .items_with_role(SceneRole::Fielder(id))
            .any(|item| matches!(item, SceneItem::Fill { shape: SceneShape::Circle(c), .. } if c.center == preview.position));
        assert!(moved);
    }

    #[test]
    fn boundary_is_dashed() {
        let scene = FieldScene::build(FieldLayout::for_width(400.0), &Strategy::default(), false, None);
        let style = scene
            .items_with_role(SceneRole::Boundary)
            .find_map(|item| match item {
                SceneItem::Stroke { style, .. } => Some(*style),
                _ => None,
            })
            .unwrap();
        assert_eq!(style.dash, Some([10.0, 5.0]));
    }
}
