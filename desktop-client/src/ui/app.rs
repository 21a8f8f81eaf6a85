use std::time::{Duration, Instant};
use common::games::SessionRng;
use common::games::snake::{GameOver, GameSettings, SessionCommand, SessionPhase, SnakeSession};
use common::log;
use eframe::egui;

use crate::config::{ClientConfigManager, Config};
use crate::input;
use crate::score_submitter::ScoreSubmitter;
use crate::tick_clock::{MAX_TICKS_PER_FRAME, TickClock};
use super::{game_view, name_prompt::NamePrompt};

const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

/// Session plus the clock that drives it. Kept apart from the window so the
/// tick scheduling can run without a UI context.
struct GameLoop {
    session: SnakeSession,
    clock: TickClock,
}

impl GameLoop {
    fn new(settings: GameSettings, rng: SessionRng) -> Self {
        Self {
            session: SnakeSession::new(settings, rng),
            clock: TickClock::new(),
        }
    }

    fn apply(&mut self, command: SessionCommand) {
        self.session.handle_command(command);
    }

    /// Runs the ticks that became due by `now`. Stops at the tick that ends
    /// the game so the result is reported exactly once.
    fn advance(&mut self, now: Instant) -> Option<GameOver> {
        if !self.session.is_running() {
            self.clock.reset();
            return None;
        }

        self.clock.advance(now);
        for _ in 0..MAX_TICKS_PER_FRAME {
            if !self.clock.try_consume(self.session.tick_interval()) {
                return None;
            }
            if let Some(game_over) = self.session.tick() {
                self.clock.reset();
                return Some(game_over);
            }
        }
        self.clock.discard_backlog(self.session.tick_interval());
        None
    }

    fn next_repaint(&self) -> Duration {
        if self.session.is_running() {
            self.clock.time_until_next(self.session.tick_interval())
        } else {
            IDLE_REPAINT_INTERVAL
        }
    }
}

pub struct SnakeApp {
    game: GameLoop,
    name_prompt: NamePrompt,
    submitter: ScoreSubmitter,
    config_manager: ClientConfigManager,
    config: Config,
}

impl SnakeApp {
    pub fn new(
        config_manager: ClientConfigManager,
        config: Config,
        rng: SessionRng,
        submitter: ScoreSubmitter,
    ) -> Self {
        Self {
            game: GameLoop::new(config.game.clone(), rng),
            name_prompt: NamePrompt::new(config.last_player_name.clone()),
            submitter,
            config_manager,
            config,
        }
    }

    fn remember_player_name(&mut self) {
        let Some(player_name) = self.game.session.player_name() else {
            return;
        };
        self.config.last_player_name = Some(player_name.to_string());
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log!("Failed to save player name: {}", e);
        }
    }

    fn show_name_prompt(&mut self, ui: &mut egui::Ui) {
        let Some(name) = self.name_prompt.show(ui) else {
            return;
        };
        match self.game.session.submit_name(&name) {
            Ok(()) => self.remember_player_name(),
            Err(e) => self.name_prompt.set_error(e),
        }
    }

    fn show_game(&mut self, ui: &mut egui::Ui) {
        if let Some(command) = game_view::show(ui, &self.game.session) {
            self.game.apply(command);
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.game.session.phase() != SessionPhase::AwaitingName {
            for command in input::collect_commands(ctx) {
                self.game.apply(command);
            }
        }

        if let Some(game_over) = self.game.advance(Instant::now()) {
            self.submitter.submit(&game_over);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.game.session.phase() == SessionPhase::AwaitingName {
                self.show_name_prompt(ui);
            } else {
                self.show_game(ui);
            }
        });

        ctx.request_repaint_after(self.game.next_repaint());
    }
}
