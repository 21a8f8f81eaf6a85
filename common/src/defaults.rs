use crate::games::snake::{Direction, GameSettings};

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            start_x: 9,
            start_y: 9,
            start_direction: Direction::Right,
            initial_tick_interval_ms: 120,
            tick_decrement_ms: 3,
            min_tick_interval_ms: 40,
        }
    }
}
