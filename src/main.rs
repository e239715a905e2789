// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Cricket Field Strategizer: a fielding layout editor built with Xilem

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    fieldstrategizer::run(EventLoop::with_user_event())
}
