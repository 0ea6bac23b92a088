//! Ground-plane grid viewer.
//!
//! Up/Down dolly the camera along its viewing diagonal, Escape quits.

mod app;
mod config;
mod dolly;
mod grid;

use figura_engine::device::GpuInit;
use figura_engine::logging::{LoggingConfig, init_logging};
use figura_engine::window::Runtime;

use crate::app::GridApp;
use crate::config::GridConfig;

fn main() {
    init_logging(LoggingConfig::default());

    let config = GridConfig::default();
    let window = config.window.clone();
    let app = GridApp::new(config);

    if let Err(e) = Runtime::run(window, GpuInit::default(), app) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
