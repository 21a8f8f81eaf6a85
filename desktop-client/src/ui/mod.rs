mod app;
mod colors;
mod game_view;
mod name_prompt;

pub use app::SnakeApp;
