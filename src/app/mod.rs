// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Application entry point wiring logging and egui/eframe to launch the registration UI.

use eframe::egui;
use egui_phosphor::Variant;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, WINDOW_MIN_SIZE, WINDOW_SIZE};
use crate::ui::RegistrationApp;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    tracing::info!("starting registration desk");
    eframe::run_native(
        "Tournament Registration",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(RegistrationApp::default()))
        }),
    )
}
