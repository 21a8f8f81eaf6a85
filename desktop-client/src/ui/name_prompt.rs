use common::id_generator::generate_player_name;
use common::{MAX_PLAYER_NAME_LENGTH, PlayerName};
use eframe::egui;

use super::colors;

pub struct NamePrompt {
    name: String,
    error: Option<String>,
    focus_requested: bool,
}

impl NamePrompt {
    pub fn new(last_player_name: Option<String>) -> Self {
        Self {
            name: last_player_name.unwrap_or_default(),
            error: None,
            focus_requested: false,
        }
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    /// Draws the prompt and returns the name once the player confirms it.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let mut submitted = None;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("Snake");
            ui.add_space(20.0);
            ui.label("Enter your name:");
            ui.add_space(10.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.name)
                    .hint_text("Player name")
                    .char_limit(MAX_PLAYER_NAME_LENGTH)
                    .desired_width(200.0),
            );

            if !self.focus_requested {
                response.request_focus();
                self.focus_requested = true;
            }
            if response.changed() {
                self.error = None;
            }

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(15.0);

            let validation = PlayerName::new(&self.name);
            let mut start_clicked = false;
            ui.horizontal(|ui| {
                if ui.button("Random").clicked() {
                    self.name = generate_player_name();
                    self.error = None;
                }
                start_clicked = ui
                    .add_enabled(validation.is_ok(), egui::Button::new("Start (Enter)"))
                    .clicked();
            });

            if validation.is_ok() && (enter_pressed || start_clicked) {
                submitted = Some(self.name.clone());
            }

            ui.add_space(5.0);
            let message = self
                .error
                .clone()
                .or_else(|| validation.err().filter(|_| !self.name.is_empty()));
            if let Some(message) = message {
                ui.label(egui::RichText::new(message).color(colors::GAME_OVER_TEXT).small());
            } else {
                ui.label(
                    egui::RichText::new(format!("Up to {} characters", MAX_PLAYER_NAME_LENGTH))
                        .color(colors::HINT_TEXT)
                        .small(),
                );
            }
        });

        submitted
    }
}
