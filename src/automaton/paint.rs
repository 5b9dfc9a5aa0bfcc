use super::Automaton;
use tracing::debug;

/// Points along the segment from `start` to `end`, no further apart than `spacing`.
///
/// Yields `ceil(length / spacing) + 1` points, the first being `start` and
/// the last being `end`. A degenerate segment yields only `start`.
pub fn line_samples(
    start: (f32, f32),
    end: (f32, f32),
    spacing: f32,
) -> impl Iterator<Item = (f32, f32)> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length = dx.hypot(dy);
    let count = if length.is_finite() && spacing.is_finite() && spacing > 0. {
        (length / spacing).ceil() as usize
    } else {
        0
    };
    (0..=count).map(move |i| {
        if count == 0 {
            return start;
        }
        let (i, n) = (i as f32, count as f32);
        (start.0 + dx * i / n, start.1 + dy * i / n)
    })
}

/// Liang-Barsky clipping of a segment to the rectangle `[0, width] x [0, height]`.
///
/// Returns `None` if the segment misses the rectangle or has a non-finite end.
fn clip_segment(
    start: (f32, f32),
    end: (f32, f32),
    width: f64,
    height: f64,
) -> Option<((f32, f32), (f32, f32))> {
    if ![start.0, start.1, end.0, end.1].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (x0, y0) = (start.0 as f64, start.1 as f64);
    let (dx, dy) = (end.0 as f64 - x0, end.1 as f64 - y0);
    let (mut t0, mut t1) = (0f64, 1f64);
    for (p, q) in [(-dx, x0), (dx, width - x0), (-dy, y0), (dy, height - y0)] {
        if p == 0. {
            if q < 0. {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0. {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let at = |t: f64| {
        (
            (x0 + dx * t).clamp(0., width) as f32,
            (y0 + dy * t).clamp(0., height) as f32,
        )
    };
    Some((at(t0), at(t1)))
}

impl Automaton {
    /// The cell whose square `[x, x + cell_size) x [y, y + cell_size)` contains the point.
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        let side = self.cell_size as f32;
        let index = |v: f32, len: usize| {
            if !v.is_finite() || v < 0. {
                return None;
            }
            let i = (v / side).floor() as usize;
            (i < len).then_some(i)
        };
        Some((index(px, self.cols)?, index(py, self.rows)?))
    }

    /// Bring the cell under the point to life.
    ///
    /// Clicking never kills a cell. Returns the activated cell, if any.
    pub fn activate_point(&mut self, px: f32, py: f32) -> Option<(usize, usize)> {
        let (col, row) = self.cell_at(px, py)?;
        self.set_alive(col, row, true);
        debug!(col, row, "activated cell");
        Some((col, row))
    }

    /// Bring to life every cell crossed by the drag from `start` to `end`.
    ///
    /// The part of the path inside the field is sampled every `cell_size`
    /// pixels. Returns the distinct cells hit, in path order.
    pub fn activate_line(&mut self, start: (f32, f32), end: (f32, f32)) -> Vec<(usize, usize)> {
        let mut hit: Vec<(usize, usize)> = vec![];
        let side = self.cell_size as f64;
        let (width, height) = (self.cols as f64 * side, self.rows as f64 * side);
        let Some((from, to)) = clip_segment(start, end, width, height) else {
            debug!(?start, ?end, "drag outside the field");
            return hit;
        };
        for (x, y) in line_samples(from, to, self.cell_size as f32) {
            if let Some(pos) = self.cell_at(x, y) {
                if !hit.contains(&pos) {
                    hit.push(pos);
                }
            }
        }
        for &(col, row) in &hit {
            self.set_alive(col, row, true);
        }
        debug!(?start, ?end, cells = hit.len(), "activated line");
        hit
    }
}
