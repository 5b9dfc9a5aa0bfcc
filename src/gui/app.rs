use super::{Canvas, ClickDebouncer, Config, Settings};
use crate::{Automaton, Driver, GridError};
use eframe::egui::{CentralPanel, Context, Frame, Margin, Rect, TopBottomPanel, Vec2, Visuals};
use std::time::Instant;
use tracing::{error, info};

pub struct App {
    pub(super) settings: Settings,
    pub(super) driver: Option<Driver<Canvas>>, // Created on the first frame, once the viewport is known.
    pub(super) clicks: ClickDebouncer,          // Clicks are applied after a quiet period.
    pub(super) drag_origin: Option<(f32, f32)>, // Field-local position where the current drag began.
    pub(super) failure: Option<GridError>,      // Why the field could not be created.
    pub(super) field_rect: Option<Rect>,        // Part of the window displaying the field.
}

impl App {
    pub fn new(ctx: &Context, settings: Settings) -> Self {
        ctx.set_visuals(Visuals::dark());
        Self {
            settings,
            driver: None,
            clicks: ClickDebouncer::new(Config::CLICK_DEBOUNCE),
            drag_origin: None,
            failure: None,
            field_rect: None,
        }
    }

    /// Build the field for a viewport of `size` pixels and start the loop.
    pub(super) fn start(&mut self, size: Vec2, now: Instant) {
        match self.create_driver(size) {
            Ok(mut driver) => {
                driver.init(now);
                self.driver = Some(driver);
                self.failure = None;
            }
            Err(err) => {
                if self.failure.as_ref() != Some(&err) {
                    error!(%err, "cannot create the field");
                }
                self.failure = Some(err);
            }
        }
    }

    fn create_driver(&self, size: Vec2) -> Result<Driver<Canvas>, GridError> {
        let cell_size = self.settings.cell_size;
        let mut life = Automaton::from_viewport(size.x, size.y, cell_size)?;
        if let Some(fill_rate) = self.settings.fill_rate {
            life.randomize(self.settings.seed, fill_rate)?;
        }
        let (cols, rows) = life.size();
        info!(width = size.x, height = size.y, cols, rows, "field sized to viewport");

        let canvas = Canvas::new(size, cell_size as f32);
        Ok(Driver::new(
            life,
            canvas,
            Config::PALETTE,
            self.settings.interval,
        ))
    }

    /// Lay out one frame: the control strip on top, the field below it.
    pub(super) fn show(&mut self, ctx: &Context, now: Instant) {
        TopBottomPanel::top("controls")
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::CONTROL_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                self.draw_controls(ui, now);
            });

        // full-window field
        CentralPanel::default()
            .frame(Frame::none().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| {
                self.draw_field(ui, now);
            });

        self.request_repaint(ctx, now);
    }

    /// Ask egui to wake up when the next frame or debounced click is due.
    fn request_repaint(&self, ctx: &Context, now: Instant) {
        let frame = self.driver.as_ref().and_then(Driver::next_deadline);
        let click = self.clicks.deadline();
        let deadline = match (frame, click) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        if let Some(at) = deadline {
            ctx.request_repaint_after(at.saturating_duration_since(now));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx, Instant::now());
    }
}
