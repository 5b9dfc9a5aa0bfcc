use super::{App, Config};
use eframe::egui::{Button, RichText, Sense, Stroke, Ui};
use std::time::Instant;
use tracing::debug;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    pub(super) fn draw_controls(&mut self, ui: &mut Ui, now: Instant) {
        ui.horizontal(|ui| {
            let Some(driver) = self.driver.as_mut() else {
                ui.label(Self::new_text("Starting..."));
                return;
            };

            // only the button for the other state is shown
            if driver.is_running() {
                if ui.add(Self::new_button("Pause")).clicked() {
                    driver.pause();
                }
            } else if ui.add(Self::new_button("Play")).clicked() {
                driver.play(now);
            }

            if ui.add(Self::new_button("Clear")).clicked() {
                driver.clear();
            }

            ui.separator();
            ui.label(Self::new_text(&format!(
                "Generation: {}",
                driver.generation()
            )));
            ui.label(Self::new_text(&format!(
                "Population: {}",
                driver.automaton().population()
            )));
        });
    }

    pub(super) fn draw_field(&mut self, ui: &mut Ui, now: Instant) {
        let size = ui.available_size();
        if self.driver.is_none() {
            self.start(size, now);
        }
        let Some(driver) = self.driver.as_mut() else {
            if let Some(err) = &self.failure {
                ui.label(Self::new_text(&format!("Cannot create the field: {}", err)));
            }
            return;
        };

        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        self.field_rect.replace(response.rect);
        let origin = response.rect.min;
        let local = |p: eframe::egui::Pos2| (p.x - origin.x, p.y - origin.y);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.clicks.push(local(pos), now);
            }
        }
        if response.drag_started() {
            self.drag_origin = ui.input(|i| i.pointer.press_origin()).map(local);
        }
        if response.drag_stopped() {
            let end = response
                .interact_pointer_pos()
                .or_else(|| ui.input(|i| i.pointer.latest_pos()));
            if let (Some(start), Some(end)) = (self.drag_origin.take(), end) {
                debug!(?start, end = ?local(end), "drag");
                driver.drag(start, local(end));
            }
        }
        if let Some((x, y)) = self.clicks.poll(now) {
            driver.click(x, y);
        }

        driver.tick(now);
        driver.renderer().paint(&painter, origin);
    }
}
