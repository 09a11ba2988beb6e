//! SlideDeck - AI Slide Deck Generator
//!
//! A desktop application that turns a topic and a handful of reference files
//! into a slide presentation.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use slidedeck::app::App;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("slidedeck=info".parse().unwrap()))
        .init();

    info!("Starting SlideDeck v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = slidedeck::storage::init_storage() {
        tracing::error!("Failed to initialize storage: {}", e);
    }

    // Launch Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("SlideDeck")
                    .with_inner_size(LogicalSize::new(1200.0, 800.0)),
            ),
        )
        .launch(App);
}
