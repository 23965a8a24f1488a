//! Gridline Studio: renders the demo box grid and lets the user pan and zoom
//! it with the mouse wheel.
//!
//! - wheel pans, Ctrl/Cmd + wheel zooms at the cursor (Alt for finer steps)
//! - Ctrl/Alt/Cmd + click resets the view
//! - Space toggles the orbit animation, Escape stops it

mod app;
mod config;
mod scene;

use anyhow::{Context, Result};

use gridline_engine::device::GpuInit;
use gridline_engine::logging::init_logging;
use gridline_engine::window::Runtime;

use app::StudioContext;
use config::StudioConfig;

fn run(config: StudioConfig) -> Result<()> {
    let runtime = config.runtime();
    let studio = StudioContext::new(config).context("failed to set up the scene")?;
    Runtime::run(runtime, GpuInit::default(), studio)
}

fn main() {
    let config = StudioConfig::default();
    init_logging(config.logging.clone());

    if let Err(e) = run(config) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
