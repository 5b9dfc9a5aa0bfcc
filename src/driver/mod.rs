mod renderer;
mod scheduler;
#[cfg(test)]
mod tests;

pub use renderer::Renderer;
pub use scheduler::{FrameHandle, Scheduler};

use crate::{Automaton, Cell};
use eframe::egui::Color32;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Colours of alive and dead cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
}

/// Runs the simulation loop and forwards pointer input to the field.
///
/// The loop is driven from outside by calling [`Driver::tick`] with the
/// current time; a frame runs only when the scheduled one is due.
pub struct Driver<R: Renderer> {
    life: Automaton,
    renderer: R,
    palette: Palette,
    interval: Duration, // Delay between two generations.
    state: RunState,
    scheduler: Scheduler,
    pending: Option<FrameHandle>, // At most one frame is ever queued.
}

impl<R: Renderer> Driver<R> {
    pub fn new(life: Automaton, renderer: R, palette: Palette, interval: Duration) -> Self {
        Self {
            life,
            renderer,
            palette,
            interval,
            state: RunState::Paused,
            scheduler: Scheduler::new(),
            pending: None,
        }
    }

    /// Draw the initial field and start the loop; the first frame is due at `now`.
    pub fn init(&mut self, now: Instant) {
        let (cols, rows) = self.life.size();
        info!(cols, rows, interval = ?self.interval, "starting simulation");
        self.redraw();
        self.state = RunState::Running;
        self.schedule(now);
    }

    pub fn play(&mut self, now: Instant) {
        if self.state == RunState::Running {
            return;
        }
        info!(generation = self.life.generation(), "play");
        self.state = RunState::Running;
        self.schedule(now);
    }

    pub fn pause(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if self.state == RunState::Running {
            info!(generation = self.life.generation(), "pause");
        }
        self.state = RunState::Paused;
    }

    /// Stop the loop, kill every cell and draw the empty field.
    pub fn clear(&mut self) {
        if self.state == RunState::Running {
            self.pause();
        }
        self.life.clear();
        self.redraw();
        info!("cleared field");
    }

    /// Run the scheduled frame if it is due. Returns whether a frame ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(handle) = self.scheduler.poll(now) else {
            return false;
        };
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;

        self.renderer.clear();
        self.life.step();
        self.draw_cells();
        self.renderer.draw_grid();

        if self.state == RunState::Running {
            self.schedule(now + self.interval);
        }
        true
    }

    /// Bring the cell under a click to life and repaint it.
    pub fn click(&mut self, px: f32, py: f32) {
        if let Some((col, row)) = self.life.activate_point(px, py) {
            self.draw_cell(col, row);
        }
    }

    /// Bring every cell along a drag to life and repaint them.
    pub fn drag(&mut self, start: (f32, f32), end: (f32, f32)) {
        for (col, row) in self.life.activate_line(start, end) {
            self.draw_cell(col, row);
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.life.generation()
    }

    pub fn automaton(&self) -> &Automaton {
        &self.life
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// When the next frame is due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    fn schedule(&mut self, at: Instant) {
        if let Some(old) = self.pending.take() {
            self.scheduler.cancel(old);
        }
        self.pending = Some(self.scheduler.schedule(at));
        debug!(handle = ?self.pending, "scheduled frame");
    }

    fn redraw(&mut self) {
        self.renderer.clear();
        self.draw_cells();
        self.renderer.draw_grid();
    }

    fn draw_cells(&mut self) {
        let side = self.life.cell_size() as f32;
        for (_, _, cell) in self.life.cells() {
            fill_cell(&mut self.renderer, &self.palette, side, cell);
        }
    }

    fn draw_cell(&mut self, col: usize, row: usize) {
        let side = self.life.cell_size() as f32;
        if let Some(cell) = self.life.cell(col, row) {
            fill_cell(&mut self.renderer, &self.palette, side, cell);
        }
    }
}

fn fill_cell(renderer: &mut impl Renderer, palette: &Palette, side: f32, cell: &Cell) {
    let (x, y) = cell.position();
    let color = if cell.is_alive() {
        palette.alive
    } else {
        palette.dead
    };
    renderer.fill_rect(x as f32, y as f32, side, side, color);
}
