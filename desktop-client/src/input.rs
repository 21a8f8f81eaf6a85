use common::games::snake::{Direction, SessionCommand};
use eframe::egui;

pub fn command_for_key(key: egui::Key) -> Option<SessionCommand> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(SessionCommand::Turn(Direction::Up)),
        egui::Key::ArrowDown | egui::Key::S => Some(SessionCommand::Turn(Direction::Down)),
        egui::Key::ArrowLeft | egui::Key::A => Some(SessionCommand::Turn(Direction::Left)),
        egui::Key::ArrowRight | egui::Key::D => Some(SessionCommand::Turn(Direction::Right)),
        egui::Key::Space => Some(SessionCommand::TogglePause),
        egui::Key::R => Some(SessionCommand::Restart),
        _ => None,
    }
}

/// Key presses of this frame, in the order they happened. Auto-repeat is
/// ignored so holding a key does not toggle pause over and over.
pub fn collect_commands(ctx: &egui::Context) -> Vec<SessionCommand> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => command_for_key(*key),
                _ => None,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_map_to_same_turns() {
        let pairs = [
            (egui::Key::ArrowUp, egui::Key::W),
            (egui::Key::ArrowDown, egui::Key::S),
            (egui::Key::ArrowLeft, egui::Key::A),
            (egui::Key::ArrowRight, egui::Key::D),
        ];

        for (arrow, letter) in pairs {
            assert!(command_for_key(arrow).is_some());
            assert_eq!(command_for_key(arrow), command_for_key(letter));
        }
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for_key(egui::Key::Space), Some(SessionCommand::TogglePause));
        assert_eq!(command_for_key(egui::Key::R), Some(SessionCommand::Restart));
        assert_eq!(command_for_key(egui::Key::Q), None);
    }

    #[test]
    fn test_events_are_read_in_order() {
        let ctx = egui::Context::default();
        let key_event = |key| egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        let mut raw_input = egui::RawInput::default();
        raw_input.events = vec![
            key_event(egui::Key::ArrowUp),
            key_event(egui::Key::ArrowLeft),
            egui::Event::Key {
                key: egui::Key::Space,
                physical_key: None,
                pressed: false,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            },
        ];

        let mut commands = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            commands = collect_commands(ctx);
        });

        assert_eq!(
            commands,
            vec![
                SessionCommand::Turn(Direction::Up),
                SessionCommand::Turn(Direction::Left),
            ]
        );
    }
}
