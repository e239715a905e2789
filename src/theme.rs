// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a light to dark gradient
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0xff, 0xff, 0xff);
const BASE_B: Color = Color::from_rgb8(0xf5, 0xf5, 0xf5);
const BASE_C: Color = Color::from_rgb8(0xd9, 0xd9, 0xd9);
const BASE_D: Color = Color::from_rgb8(0x55, 0x55, 0x55);
const BASE_E: Color = Color::from_rgb8(0x33, 0x33, 0x33);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_A;

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_E;
const SECONDARY_UI_TEXT: Color = BASE_D;

// ============================================================================
// CONTROL PANEL
// ============================================================================
const PANEL_BACKGROUND: Color = BASE_A;
const PANEL_OUTLINE: Color = BASE_C;
const OPTION_UNSELECTED: Color = BASE_B;
const OPTION_SELECTED: Color = Color::from_rgb8(0x16, 0x77, 0xff);
const OPTION_SELECTED_TEXT: Color = BASE_A;
const PRIMARY_BUTTON: Color = Color::from_rgb8(0x16, 0x77, 0xff);
const NOTICE_SUCCESS: Color = Color::from_rgb8(0x52, 0xc4, 0x1a);
const NOTICE_ERROR: Color = Color::from_rgb8(0xff, 0x4d, 0x4f);

// ============================================================================
// FIELD DIAGRAM
// ============================================================================
const FIELD_GRASS: Color = Color::from_rgb8(0x8b, 0xc3, 0x4a);
const FIELD_SHADOW: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0x33);
const FIELD_LINES: Color = BASE_A;
const PITCH_SOIL: Color = Color::from_rgb8(0xc7, 0xac, 0x75);

const WICKETKEEPER: Color = Color::from_rgb8(0x18, 0x90, 0xff);
const BOWLER: Color = Color::from_rgb8(0xff, 0x4d, 0x4f);
const FIELDER: Color = Color::from_rgb8(0x72, 0x2e, 0xd1);
const MARKER_TEXT: Color = BASE_A;

const OVERLAY_TEXT: Color = BASE_A;
const OVERLAY_TEXT_SHADOW: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0xb0);
const NOTES_PANEL: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0x80);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Global application background color
pub mod app {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
}

/// Colors for UI text
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
}

/// Colors for the control panel
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
    /// Choice button background when not chosen
    pub const OPTION: Color = super::OPTION_UNSELECTED;
    /// Choice button background when chosen
    pub const OPTION_SELECTED: Color = super::OPTION_SELECTED;
    pub const OPTION_SELECTED_TEXT: Color = super::OPTION_SELECTED_TEXT;
    pub const PRIMARY_BUTTON: Color = super::PRIMARY_BUTTON;
    pub const NOTICE_SUCCESS: Color = super::NOTICE_SUCCESS;
    pub const NOTICE_ERROR: Color = super::NOTICE_ERROR;
}

/// Colors for the field diagram
pub mod field {
    use super::Color;
    pub const GRASS: Color = super::FIELD_GRASS;
    pub const SHADOW: Color = super::FIELD_SHADOW;
    /// Boundary rope, pitch outline and creases
    pub const LINES: Color = super::FIELD_LINES;
    pub const PITCH: Color = super::PITCH_SOIL;
}

/// Colors for fixed and movable markers
pub mod marker {
    use super::Color;
    pub const WICKETKEEPER: Color = super::WICKETKEEPER;
    pub const BOWLER: Color = super::BOWLER;
    pub const FIELDER: Color = super::FIELDER;
    pub const TEXT: Color = super::MARKER_TEXT;
}

/// Colors for export overlay content
pub mod overlay {
    use super::Color;
    pub const TEXT: Color = super::OVERLAY_TEXT;
    pub const TEXT_SHADOW: Color = super::OVERLAY_TEXT_SHADOW;
    pub const NOTES_PANEL: Color = super::NOTES_PANEL;
}

/// Sizes for rendering
pub mod size {
    // ===== Field =====
    /// Main field radius as a fraction of the surface width
    pub const FIELD_RADIUS_RATIO: f64 = 0.49;
    /// Pitch length as a fraction of the field radius
    pub const PITCH_LENGTH_RATIO: f64 = 0.6;
    /// Pitch width as a fraction of the field radius
    pub const PITCH_WIDTH_RATIO: f64 = 0.1;
    /// Boundary ring radius as a fraction of the field radius
    pub const BOUNDARY_RATIO: f64 = 0.95;
    /// Gap between pitch end and fixed markers, as a fraction of the field radius
    pub const FIXED_MARKER_GAP_RATIO: f64 = 0.1;
    /// Crease inset as a fraction of the pitch length
    pub const CREASE_INSET_RATIO: f64 = 0.1;

    pub const BOUNDARY_STROKE_WIDTH: f64 = 2.0;
    pub const BOUNDARY_DASH: [f64; 2] = [10.0, 5.0];
    pub const PITCH_STROKE_WIDTH: f64 = 0.5;
    pub const CREASE_STROKE_WIDTH: f64 = 1.0;
    /// Offset of the field drop shadow
    pub const FIELD_SHADOW_OFFSET: f64 = 5.0;

    // ===== Markers =====
    pub const MARKER_RADIUS: f64 = 8.0;
    pub const MARKER_FONT_SIZE: f64 = 10.0;
    /// Gap between marker circle and its name
    pub const MARKER_LABEL_GAP: f64 = 2.0;

    // ===== Overlay =====
    pub const OVERLAY_MARGIN: f64 = 10.0;
    pub const TITLE_FONT_SIZE: f64 = 24.0;
    pub const INFO_FONT_SIZE: f64 = 16.0;
    pub const INFO_FIRST_LINE: f64 = 30.0;
    pub const INFO_LINE_STEP: f64 = 20.0;
    pub const BOUNDARY_CAPTION_FONT_SIZE: f64 = 14.0;
    /// Caption inset from the boundary ring's right edge
    pub const BOUNDARY_CAPTION_INSET: f64 = 80.0;
    pub const NOTES_LINE_HEIGHT: f64 = 20.0;
    pub const NOTES_PADDING: f64 = 10.0;
    pub const NOTES_HEADING_FONT_SIZE: f64 = 16.0;
    pub const NOTES_FONT_SIZE: f64 = 14.0;
    pub const NOTES_CORNER_RADIUS: f64 = 5.0;

    // ===== UI Layout =====
    /// Width of the control panel
    pub const CONTROL_PANEL_WIDTH: f64 = 350.0;
    /// Padding inside the control panel
    pub const CONTROL_PANEL_PADDING: f64 = 16.0;
    /// Border thickness for panels and buttons
    pub const BORDER_WIDTH: f64 = 1.0;
    /// Rounded corner radius for panels and buttons
    pub const PANEL_RADIUS: f64 = 6.0;
}
