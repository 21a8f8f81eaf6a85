use common::games::snake::{FieldSize, Point, SessionCommand, SessionPhase, SnakeSession};
use eframe::egui;

use super::colors;

const MAX_CELL_SIZE: f32 = 24.0;
const MIN_CELL_SIZE: f32 = 4.0;

fn cell_size_for(available: egui::Vec2, field: FieldSize) -> f32 {
    let by_width = available.x / field.width as f32;
    let by_height = available.y / field.height as f32;
    by_width.min(by_height).clamp(MIN_CELL_SIZE, MAX_CELL_SIZE).floor()
}

fn cell_rect(origin: egui::Pos2, cell_size: f32, point: Point) -> egui::Rect {
    let min = origin + egui::vec2(point.x as f32 * cell_size, point.y as f32 * cell_size);
    egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size)).shrink(1.0)
}

fn render_hud(ui: &mut egui::Ui, session: &SnakeSession) {
    let state = session.game_state();
    let player_name = session.player_name().map(|name| name.as_str()).unwrap_or("-");

    ui.horizontal(|ui| {
        ui.label(format!("Player: {}", player_name));
        ui.separator();
        ui.label(format!("Score: {}", state.score));
        ui.separator();
        ui.label(format!("Speed: {}", state.speed()));
    });

    match session.phase() {
        SessionPhase::GameOver => {
            ui.heading(egui::RichText::new("Game over!").color(colors::GAME_OVER_TEXT));
        }
        SessionPhase::Paused => {
            ui.heading(egui::RichText::new("Paused").color(colors::PAUSED_TEXT));
        }
        SessionPhase::AwaitingName | SessionPhase::Running => {
            ui.heading(" ");
        }
    }
}

fn render_board(ui: &mut egui::Ui, session: &SnakeSession) {
    let state = session.game_state();
    let field = state.field_size();
    let reserved_for_controls = egui::vec2(0.0, 70.0);
    let cell_size = cell_size_for(ui.available_size() - reserved_for_controls, field);
    let board_size = egui::vec2(field.width as f32 * cell_size, field.height as f32 * cell_size);

    let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, colors::BOARD_BACKGROUND);

    if let Some(food) = state.food {
        painter.rect_filled(cell_rect(rect.min, cell_size, food), 2.0, colors::FOOD);
    }

    let head = state.snake.head();
    for segment in state.snake.segments() {
        let color = if *segment == head {
            colors::SNAKE_HEAD
        } else {
            colors::SNAKE_BODY
        };
        painter.rect_filled(cell_rect(rect.min, cell_size, *segment), 2.0, color);
    }
}

/// Draws the running game and returns the command of a clicked control button.
pub fn show(ui: &mut egui::Ui, session: &SnakeSession) -> Option<SessionCommand> {
    let mut command = None;

    ui.vertical_centered(|ui| {
        render_hud(ui, session);
        ui.add_space(5.0);
        render_board(ui, session);
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            let pause_label = if session.phase() == SessionPhase::Paused {
                "Resume"
            } else {
                "Pause"
            };
            let can_pause = session.phase() != SessionPhase::GameOver;
            let pause = ui.add_enabled(can_pause, egui::Button::new(pause_label));
            if pause.clicked() {
                pause.surrender_focus();
                command = Some(SessionCommand::TogglePause);
            }

            let restart = ui.button("Restart");
            if restart.clicked() {
                restart.surrender_focus();
                command = Some(SessionCommand::Restart);
            }
        });

        ui.label(
            egui::RichText::new("Arrows / WASD to move, Space to pause, R to restart")
                .color(colors::HINT_TEXT)
                .small(),
        );
    });

    command
}
