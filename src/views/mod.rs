// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Top-level views

mod strategizer;

pub use strategizer::strategizer;
