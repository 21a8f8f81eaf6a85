mod game_state;
mod session;
mod settings;
mod snake;
mod types;

pub use game_state::{SnakeGameState, TickOutcome};
pub use session::{GameOver, SessionCommand, SessionPhase, SnakeSession};
pub use settings::GameSettings;
pub use snake::Snake;
pub use types::{Direction, FieldSize, Point};
