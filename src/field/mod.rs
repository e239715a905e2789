// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Field diagram geometry, display list and hit testing

pub mod hit_test;
pub mod layout;
pub mod scene;

pub use hit_test::marker_at;
pub use layout::{FieldLayout, surface_side};
pub use scene::{DragPreview, FieldScene, SceneItem, SceneRole, SceneShape, TextAlign, TextItem};
