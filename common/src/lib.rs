pub mod api;
pub mod config;
pub mod games;
pub mod id_generator;
pub mod identifiers;
pub mod logger;
mod defaults;

pub use api::{ErrorResponse, SCORE_ENDPOINT, SubmitScoreRequest, SubmitScoreResponse};
pub use identifiers::*;
