use super::{cell_at, Action, App, Config};
use crate::{Command, PlaybackState};
use eframe::egui::{
    load::SizedTexture, vec2, Align2, Button, Context, Frame, Image, RichText, Sense, Stroke, Ui,
    Vec2, Window,
};

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

    pub(super) fn draw_status(&self, ui: &mut Ui) {
        let state = match self.session.state() {
            PlaybackState::Idle => "Paused",
            PlaybackState::Running => "Running",
        };
        let grid = self.session.grid();
        let history = match self.session.history().position() {
            Some((index, total)) => format!("Pattern {index} of {total}"),
            None => "No saved patterns".to_string(),
        };

        ui.horizontal(|ui| {
            ui.label(Self::new_text(state));
            ui.separator();
            ui.label(Self::new_text(&format!(
                "Generation: {}",
                self.session.playback().generation()
            )));
            ui.separator();
            ui.label(Self::new_text(&format!(
                "Population: {} / {}",
                grid.population(),
                grid.dimensions().area()
            )));
            ui.separator();
            ui.label(Self::new_text(&history));
        });
        ui.label(
            RichText::new(Config::KEY_HELP)
                .color(Config::TEXT_COLOR)
                .size(Config::HELP_TEXT_SIZE),
        );
    }

    /// Draws the field; a click on it toggles the cell under the pointer.
    pub(super) fn draw_field(&mut self, ui: &mut Ui) -> Option<Action> {
        let dims = self.session.grid().dimensions();
        let size = vec2(
            dims.cols as f32 * Config::CELL_SIZE,
            dims.rows as f32 * Config::CELL_SIZE,
        );
        let source = SizedTexture::new(self.field.id(), size);
        let response = ui.add(Image::from_texture(source).sense(Sense::click()));

        if !response.clicked() {
            return None;
        }
        let pos = response.interact_pointer_pos()?;
        let (row, col) = cell_at(response.rect, pos, dims)?;
        Some(Action::Session(Command::ToggleCell { row, col }))
    }

    pub(super) fn draw_dialog(&mut self, ctx: &Context) -> Vec<Action> {
        let mut actions = vec![];
        if !self.dialog_open {
            return actions;
        }

        let mut open = true;
        Window::new("Clear history")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .frame(Frame::window(&ctx.style()).fill(Config::PANEL_COLOR))
            .show(ctx, |ui| {
                ui.label(Self::new_text("Delete all saved patterns?"));
                ui.add_space(Config::STATUS_MARGIN);
                ui.horizontal(|ui| {
                    if ui.add(Self::new_button("Accept")).clicked() {
                        actions.push(Action::Session(Command::ClearHistory));
                        actions.push(Action::HideDialog);
                    }
                    if ui.add(Self::new_button("Cancel")).clicked() {
                        actions.push(Action::HideDialog);
                    }
                });
            });

        if !open {
            actions.push(Action::HideDialog);
        }
        actions
    }
}
