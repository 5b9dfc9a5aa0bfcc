mod app;
mod canvas;
mod config;
mod draw;
mod input;

pub use app::App;
pub use canvas::Canvas;
pub use config::{Config, Settings};
pub use input::ClickDebouncer;
