#![warn(clippy::all)]

use anyhow::anyhow;
use clap::Parser;
use lifecanvas::{Config, Settings};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Conway's Game of Life; click or drag over the field to bring cells to life.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Side of a cell in pixels
    #[arg(long, default_value_t = Config::CELL_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    cell_size: u32,

    /// Delay between generations in milliseconds
    #[arg(long, default_value_t = Config::INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,

    /// Fill the initial field randomly with this share of alive cells
    #[arg(long, value_parser = parse_fill_rate)]
    fill_rate: Option<f64>,

    /// Seed for the random fill
    #[arg(long)]
    seed: Option<u64>,

    /// Initial window width
    #[arg(long, default_value_t = Config::WINDOW_SIZE[0])]
    width: f32,

    /// Initial window height
    #[arg(long, default_value_t = Config::WINDOW_SIZE[1])]
    height: f32,
}

fn parse_fill_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("{rate} is not between 0.0 and 1.0"))
    }
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            cell_size: self.cell_size,
            interval: Duration::from_millis(self.interval_ms),
            fill_rate: self.fill_rate,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let settings = cli.settings();
    tracing::info!(?settings, "launching");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(cli.width, cli.height))
            .with_min_inner_size(vec2(Config::MIN_WINDOW_SIZE[0], Config::MIN_WINDOW_SIZE[1])),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(lifecanvas::App::new(&cc.egui_ctx, settings)))),
    )
    .map_err(|e| anyhow!("failed to run the window: {e}"))
}
