use super::Config;
use crate::Renderer;
use eframe::egui::{pos2, vec2, Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2};

/// Retained drawing surface: shapes stay until the next `clear`, like an
/// HTML canvas, and are replayed into egui every frame.
pub struct Canvas {
    size: Vec2,
    cell_size: f32,
    shapes: Vec<Shape>,
}

impl Canvas {
    /// Create a canvas of `size` pixels already filled with the background colour.
    pub fn new(size: Vec2, cell_size: f32) -> Self {
        let mut canvas = Self {
            size,
            cell_size,
            shapes: vec![],
        };
        canvas.clear();
        canvas
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Replay the display list with the canvas's top left corner at `origin`.
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        painter.extend(self.shapes.iter().cloned().map(|mut shape| {
            shape.translate(offset);
            shape
        }));
    }

    fn line(&mut self, from: Pos2, to: Pos2) {
        self.shapes.push(Shape::line_segment(
            [from, to],
            Stroke::new(Config::GRID_LINE_WIDTH, Config::GRID_COLOR),
        ));
    }
}

impl Renderer for Canvas {
    fn clear(&mut self) {
        self.shapes.clear();
        self.shapes.push(Shape::rect_filled(
            Rect::from_min_size(Pos2::ZERO, self.size),
            0.,
            Config::BACKGROUND_COLOR,
        ));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color32) {
        self.shapes.push(Shape::rect_filled(
            Rect::from_min_size(pos2(x, y), vec2(width, height)),
            0.,
            color,
        ));
    }

    fn draw_grid(&mut self) {
        if self.cell_size <= 0. {
            return;
        }
        let (w, h) = (self.size.x, self.size.y);
        let mut x = self.cell_size;
        while x < w {
            self.line(pos2(x, 0.), pos2(x, h));
            x += self.cell_size;
        }
        let mut y = self.cell_size;
        while y < h {
            self.line(pos2(0., y), pos2(w, y));
            y += self.cell_size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Canvas;
    use crate::{Config, Renderer};
    use eframe::egui::{vec2, Color32, Shape};

    #[test]
    fn test_starts_with_background() {
        let canvas = Canvas::new(vec2(100., 50.), 25.);
        assert_eq!(canvas.shapes().len(), 1);
        assert!(matches!(
            &canvas.shapes()[0],
            Shape::Rect(r) if r.fill == Config::BACKGROUND_COLOR && r.rect.width() == 100.
        ));
    }

    #[test]
    fn test_grid_lines_at_cell_boundaries() {
        let mut canvas = Canvas::new(vec2(100., 50.), 25.);
        canvas.draw_grid();
        let lines = canvas
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::LineSegment { points, .. } => Some(*points),
                _ => None,
            })
            .collect::<Vec<_>>();
        // three vertical lines and one horizontal
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0][0].x, 25.);
        assert_eq!(lines[2][0].x, 75.);
        assert_eq!(lines[3][0].y, 25.);
        assert_eq!(lines[3][1].x, 100.);
    }

    #[test]
    fn test_clear_drops_previous_drawing() {
        let mut canvas = Canvas::new(vec2(100., 100.), 25.);
        canvas.fill_rect(0., 0., 25., 25., Color32::WHITE);
        canvas.fill_rect(25., 0., 25., 25., Color32::WHITE);
        assert_eq!(canvas.shapes().len(), 3);
        canvas.clear();
        assert_eq!(canvas.shapes().len(), 1);
    }
}
