use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Direction, FieldSize, Point};

/// Field geometry, starting position and speed tuning for a single-player game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub start_x: usize,
    pub start_y: usize,
    pub start_direction: Direction,
    pub initial_tick_interval_ms: u64,
    pub tick_decrement_ms: u64,
    pub min_tick_interval_ms: u64,
}

impl GameSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }

    pub fn start_position(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn initial_tick_interval(&self) -> Duration {
        Duration::from_millis(self.initial_tick_interval_ms)
    }

    pub fn min_tick_interval(&self) -> Duration {
        Duration::from_millis(self.min_tick_interval_ms)
    }

    pub fn tick_decrement(&self) -> Duration {
        Duration::from_millis(self.tick_decrement_ms)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 5 || self.field_width > 100 {
            return Err("Field width must be between 5 and 100".to_string());
        }
        if self.field_height < 5 || self.field_height > 100 {
            return Err("Field height must be between 5 and 100".to_string());
        }
        if !self.field_size().contains(self.start_position()) {
            return Err("Start position must be inside the field".to_string());
        }
        if self.initial_tick_interval_ms < 10 || self.initial_tick_interval_ms > 5000 {
            return Err("Initial tick interval must be between 10ms and 5000ms".to_string());
        }
        if self.min_tick_interval_ms == 0 || self.min_tick_interval_ms > self.initial_tick_interval_ms {
            return Err("Minimum tick interval must be between 1ms and the initial interval".to_string());
        }
        if self.tick_decrement_ms > self.initial_tick_interval_ms {
            return Err("Tick decrement must not exceed the initial interval".to_string());
        }
        Ok(())
    }
}
