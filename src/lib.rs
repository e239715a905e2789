// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Cricket Field Strategizer: a fielding layout editor built with Xilem
//!
//! The model, field geometry, renderers and export pipeline are public so
//! a strategy can be rasterized and saved without opening a window.

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
pub mod data;
pub mod export;
pub mod field;
pub mod model;
pub mod render;
mod settings;
mod theme;
mod views;

use data::AppState;
use views::strategizer;

/// Entry point for the Cricket Field Strategizer application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fieldstrategizer=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap())
                .add_directive("wgpu_core=warn".parse().unwrap())
                .add_directive("wgpu_hal=warn".parse().unwrap()),
        )
        .init();

    let app = Xilem::new(AppState::new(), app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Build the single window
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(settings::window::WIDTH, settings::window::HEIGHT);
    let window_view = window(state.main_window_id, settings::window::TITLE, strategizer(state));
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
