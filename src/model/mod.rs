// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Strategy model: fielding layout metadata and movable markers

pub mod marker;
pub mod strategy;

pub use marker::{FIELDER_COUNT, Marker, MarkerId, default_markers};
pub use strategy::{
    BattingHand, BowlerType, FieldStyle, MatchFormat, Strategy, StrategyField,
};
