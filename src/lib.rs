mod automaton;
mod driver;
mod gui;

pub use automaton::{line_samples, next_state, Automaton, Cell, GridError};
pub use driver::{Driver, FrameHandle, Palette, Renderer, RunState, Scheduler};
pub use gui::{App, Canvas, ClickDebouncer, Config, Settings};
