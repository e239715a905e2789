// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the Cricket Field Strategizer

pub mod control_panel;
pub mod field_canvas;

// Re-export commonly used widget views and types
pub use control_panel::control_panel;
pub use field_canvas::{CanvasAction, field_canvas};
