// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Painters for the field scene

pub mod raster;
pub mod text;
pub mod vello;

pub use raster::rasterize;
pub use text::TextLayouter;
pub use vello::paint_field;
