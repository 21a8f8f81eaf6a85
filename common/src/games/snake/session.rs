use std::time::Duration;

use crate::{PlayerName, log};
use crate::games::SessionRng;
use super::game_state::{SnakeGameState, TickOutcome};
use super::settings::GameSettings;
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingName,
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Direction),
    TogglePause,
    Restart,
}

/// Final result of a game, produced once when the snake runs into itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub player_name: PlayerName,
    pub score: u32,
}

pub struct SnakeSession {
    phase: SessionPhase,
    player_name: Option<PlayerName>,
    game_state: SnakeGameState,
    settings: GameSettings,
    rng: SessionRng,
}

impl SnakeSession {
    pub fn new(settings: GameSettings, mut rng: SessionRng) -> Self {
        let game_state = SnakeGameState::new(settings.clone(), &mut rng);
        Self {
            phase: SessionPhase::AwaitingName,
            player_name: None,
            game_state,
            settings,
            rng,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn player_name(&self) -> Option<&PlayerName> {
        self.player_name.as_ref()
    }

    pub fn game_state(&self) -> &SnakeGameState {
        &self.game_state
    }

    pub fn tick_interval(&self) -> Duration {
        self.game_state.tick_interval
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Leaves `AwaitingName` and starts the first game. Later calls are rejected,
    /// the name is fixed for the lifetime of the session.
    pub fn submit_name(&mut self, name: &str) -> Result<(), String> {
        if self.phase != SessionPhase::AwaitingName {
            return Err("Player name is already set".to_string());
        }

        let player_name = PlayerName::new(name)?;
        log!("Player {} joined (seed {})", player_name, self.rng.seed());
        self.player_name = Some(player_name);
        self.phase = SessionPhase::Running;
        Ok(())
    }

    pub fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Turn(direction) => self.change_direction(direction),
            SessionCommand::TogglePause => self.toggle_pause(),
            SessionCommand::Restart => self.reset(),
        }
    }

    pub fn change_direction(&mut self, direction: Direction) {
        if matches!(self.phase, SessionPhase::Running | SessionPhase::Paused) {
            self.game_state.change_direction(direction);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            SessionPhase::Running => SessionPhase::Paused,
            SessionPhase::Paused => SessionPhase::Running,
            _ => return,
        };
        log!("Session {:?}", self.phase);
    }

    /// Advances the game by one step. Returns the final result on the tick that
    /// ends the game and `None` otherwise, including when not running.
    pub fn tick(&mut self) -> Option<GameOver> {
        if self.phase != SessionPhase::Running {
            return None;
        }

        match self.game_state.tick(&mut self.rng) {
            TickOutcome::Moved | TickOutcome::Ate { .. } => None,
            TickOutcome::Collided { at } => {
                self.phase = SessionPhase::GameOver;
                let player_name = self.player_name.clone()?;
                log!(
                    "Game over for {} at ({}, {}) with score {}",
                    player_name,
                    at.x,
                    at.y,
                    self.game_state.score
                );
                Some(GameOver {
                    player_name,
                    score: self.game_state.score,
                })
            }
        }
    }

    pub fn reset(&mut self) {
        if self.phase == SessionPhase::AwaitingName {
            return;
        }

        self.game_state = SnakeGameState::new(self.settings.clone(), &mut self.rng);
        self.phase = SessionPhase::Running;
        log!("New game started");
    }
}
