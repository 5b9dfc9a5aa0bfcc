mod cell;
mod paint;

pub use cell::Cell;
pub use paint::line_samples;

use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised when a field cannot be constructed or configured.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {cols}x{rows}")]
    EmptyGrid { cols: usize, rows: usize },
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("grid of {cols}x{rows} cells does not fit into pixel coordinates")]
    TooLarge { cols: usize, rows: usize },
    #[error("viewport {width}x{height} must have finite positive dimensions")]
    InvalidViewport { width: f32, height: f32 },
    #[error("fill rate {0} must be between 0.0 and 1.0")]
    InvalidFillRate(f64),
}

/// B3/S23: birth on exactly three neighbours, survival on two or three.
pub fn next_state(is_alive: bool, alive_neighbours: u8) -> bool {
    match (is_alive, alive_neighbours) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

/// Conway's Game of Life on a fixed, bounded field.
///
/// Cells outside the field count as permanently dead, so the border cells
/// evolve like every other cell but nothing wraps around.
pub struct Automaton {
    cells: Vec<Cell>, // row-major
    cols: usize,
    rows: usize,
    cell_size: u32, // Side of a cell in pixels.
    generation: u64,
}

impl Automaton {
    /// Create a blank field of `cols x rows` cells.
    pub fn new(cols: usize, rows: usize, cell_size: u32) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::EmptyGrid { cols, rows });
        }
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        let fits = |n: usize| {
            (n as u64)
                .checked_mul(cell_size as u64)
                .is_some_and(|px| px <= u32::MAX as u64)
        };
        if !fits(cols) || !fits(rows) {
            return Err(GridError::TooLarge { cols, rows });
        }

        let cells = (0..rows)
            .flat_map(|row| {
                (0..cols).map(move |col| {
                    Cell::new((col as u32 * cell_size, row as u32 * cell_size), false)
                })
            })
            .collect();
        debug!(cols, rows, cell_size, "created field");
        Ok(Self {
            cells,
            cols,
            rows,
            cell_size,
            generation: 0,
        })
    }

    /// Create a field covering a `width x height` pixel viewport.
    ///
    /// A partially visible cell at the right or bottom edge still gets its
    /// own column or row.
    pub fn from_viewport(width: f32, height: f32, cell_size: u32) -> Result<Self, GridError> {
        let valid = |v: f32| v.is_finite() && v > 0.;
        if !valid(width) || !valid(height) {
            return Err(GridError::InvalidViewport { width, height });
        }
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        let cols = (width / cell_size as f32).ceil() as usize;
        let rows = (height / cell_size as f32).ceil() as usize;
        Self::new(cols, rows, cell_size)
    }

    /// Fill the field randomly; each cell is alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) -> Result<(), GridError> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(GridError::InvalidFillRate(fill_rate));
        }
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells.iter_mut() {
            let state = rng.gen_bool(fill_rate);
            cell.is_alive = state;
            cell.next_is_alive = state;
        }
        debug!(?seed, fill_rate, population = self.population(), "randomized field");
        Ok(())
    }

    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive).count()
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            Some(&self.cells[col + row * self.cols])
        } else {
            None
        }
    }

    pub fn is_alive(&self, col: usize, row: usize) -> bool {
        self.cell(col, row).is_some_and(Cell::is_alive)
    }

    /// Set the state of a cell; coordinates outside the field are ignored.
    pub fn set_alive(&mut self, col: usize, row: usize, state: bool) {
        if col < self.cols && row < self.rows {
            self.cells[col + row * self.cols].is_alive = state;
        }
    }

    /// Iterate over `(col, row, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % cols, i / cols, cell))
    }

    /// Kill every cell. The generation counter is kept.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.is_alive = false;
            cell.next_is_alive = false;
        }
    }

    pub fn alive_neighbours(&self, col: usize, row: usize) -> u8 {
        let mut count = 0;
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (Some(x), Some(y)) = (col.checked_add_signed(dx), row.checked_add_signed(dy))
                else {
                    continue;
                };
                if self.is_alive(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// First pass of a generation: fill `next_is_alive` of every cell.
    ///
    /// Only `is_alive` is read here, so the result depends on the current
    /// generation alone.
    pub fn compute_next(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let neibs = self.alive_neighbours(col, row);
                let cell = &mut self.cells[col + row * self.cols];
                cell.next_is_alive = next_state(cell.is_alive, neibs);
            }
        }
    }

    /// Second pass of a generation: make the computed states current.
    pub fn commit(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.commit();
        }
        self.generation += 1;
    }

    /// Advance the field by one generation.
    pub fn step(&mut self) {
        self.compute_next();
        self.commit();
        trace!(
            generation = self.generation,
            population = self.population(),
            "computed generation"
        );
    }
}
