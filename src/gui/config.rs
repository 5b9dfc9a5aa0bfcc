use crate::Palette;
use eframe::egui::Color32;
use std::time::Duration;

pub struct Config;

impl Config {
    pub const CELL_SIZE: u32 = 25;
    pub const INTERVAL_MS: u64 = 1000;
    pub const CLICK_DEBOUNCE: Duration = Duration::from_millis(200);

    pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(0x10, 0x10, 0x10);
    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
    pub const GRID_COLOR: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
    pub const GRID_LINE_WIDTH: f32 = 1.;

    pub const WINDOW_SIZE: [f32; 2] = [1280., 800.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [320., 240.];

    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BUTTON_STROKE_WIDTH: f32 = 2.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::from_rgb(0x20, 0x20, 0x20);
    pub const CONTROL_MARGIN: f32 = 8.;

    pub const PALETTE: Palette = Palette {
        alive: Self::ALIVE_COLOR,
        dead: Self::DEAD_COLOR,
    };
}

/// Runtime options of a simulation window.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub cell_size: u32,
    pub interval: Duration, // Delay between generations.
    pub fill_rate: Option<f64>, // Random initial fill; blank field if `None`.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: Config::CELL_SIZE,
            interval: Duration::from_millis(Config::INTERVAL_MS),
            fill_rate: None,
            seed: None,
        }
    }
}
