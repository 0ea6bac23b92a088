//! Articulated robot horse viewer.
//!
//! Tab / Shift+Tab select a joint, Left/Right rotate it, R resets the pose,
//! Escape quits.

mod app;
mod config;
mod horse;
mod joint;

use figura_engine::device::GpuInit;
use figura_engine::logging::{LoggingConfig, init_logging};
use figura_engine::window::Runtime;

use crate::app::HorseApp;
use crate::config::HorseConfig;

fn main() {
    init_logging(LoggingConfig::default());

    let config = HorseConfig::default();
    let window = config.window.clone();
    let app = HorseApp::new(config);

    if let Err(e) = Runtime::run(window, GpuInit::default(), app) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
