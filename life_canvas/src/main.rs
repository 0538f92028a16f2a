// main.rs - Conway's Game of Life on a torus, painted at a fixed frame rate
// Simulation lives in the `life` crate; this binary owns the window and the timer.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use life::Life;

mod config;    // Startup configuration
mod render;    // Grid -> rectangles
mod schedule;  // Repeating tick source
mod ui;        // eframe::App impl

use config::CanvasConfig;
use render::Palette;
use schedule::Scheduler;

/// Space above the canvas for the Restart button.
const CONTROLS_HEIGHT: f32 = 40.0;
/// Panel padding around the canvas.
const MARGIN: f32 = 16.0;

fn main() -> Result<()> {
    init_tracing();

    let config = CanvasConfig::default();
    let (dims, period) = config.validate().context("invalid canvas configuration")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start timer runtime")?;

    info!(
        width = config.width,
        height = config.height,
        cell_size = config.cell_size,
        fps = config.fps,
        rows = dims.rows(),
        cols = dims.cols(),
        "Starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.width as f32 + MARGIN,
                config.height as f32 + CONTROLS_HEIGHT + MARGIN,
            ])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let notify: schedule::Notify = Arc::new(move || ctx.request_repaint());
            let mut scheduler = Scheduler::new(runtime.handle().clone(), period, notify);
            scheduler.start();
            Box::new(LifeApp {
                config,
                palette: Palette::default(),
                life: Life::new(dims, rand::rng()),
                scheduler,
                _runtime: runtime,
            })
        }),
    )
    .map_err(|e| anyhow!("window failed: {e}"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// Window state: the simulation plus the timer that drives it.
pub struct LifeApp {
    config: CanvasConfig,
    palette: Palette,
    life: Life<ThreadRng>,
    scheduler: Scheduler,
    // Declared last so the scheduler is dropped (and its task aborted) first
    _runtime: tokio::runtime::Runtime,
}

impl LifeApp {
    fn restart(&mut self) {
        restart(&mut self.scheduler, &mut self.life);
    }
}

/// Cancels the running schedule, reseeds, then starts a new schedule.
/// No tick of the old schedule can reach the reseeded grid.
fn restart<R: Rng>(scheduler: &mut Scheduler, life: &mut Life<R>) -> u64 {
    let previous = scheduler.active_id();
    scheduler.stop();
    life.restart();
    let id = scheduler.start();
    info!(?previous, schedule = id, "Restart requested");
    id
}
