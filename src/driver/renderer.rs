use eframe::egui::Color32;

/// Drawing surface the driver paints the field onto.
pub trait Renderer {
    /// Wipe the surface back to its background colour.
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color32);

    /// Overlay faint lines at every cell boundary.
    fn draw_grid(&mut self);
}
