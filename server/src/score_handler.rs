use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{ErrorResponse, SubmitScoreResponse, log};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::score_store::{ScoreRecord, ScoreStore};
use crate::web_server::WebServerState;

/// Request body as it arrives. Field types are not checked here: anything
/// present is handed to storage, which decides whether it fits the table.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingScore {
    #[serde(default)]
    pub player_name: Value,
    #[serde(default)]
    pub score: Value,
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn name_to_text(name: Value) -> String {
    match name {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Player name and score must not be empty")]
    MissingFields,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Failed to save score, please try again")]
    Storage,
}

impl SubmitError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::MissingFields | SubmitError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            SubmitError::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl TryFrom<IncomingScore> for ScoreRecord {
    type Error = SubmitError;

    fn try_from(incoming: IncomingScore) -> Result<Self, Self::Error> {
        if is_falsy(&incoming.player_name) || incoming.score.is_null() {
            return Err(SubmitError::MissingFields);
        }
        Ok(ScoreRecord {
            player_name: name_to_text(incoming.player_name),
            score: incoming.score,
        })
    }
}

pub async fn submit_score<S: ScoreStore>(
    State(state): State<WebServerState<S>>,
    payload: Result<Json<IncomingScore>, JsonRejection>,
) -> Result<Json<SubmitScoreResponse>, SubmitError> {
    let Json(incoming) = payload.map_err(|rejection| {
        log!("Rejected score submission: {}", rejection.body_text());
        SubmitError::MalformedBody(rejection.body_text())
    })?;

    let record = ScoreRecord::try_from(incoming).inspect_err(|e| {
        log!("Rejected score submission: {}", e);
    })?;

    if let Err(e) = state.store.insert(&record).await {
        log!(
            "Failed to save score {} for {}: {}",
            record.score,
            record.player_name,
            e
        );
        return Err(SubmitError::Storage);
    }

    log!("Saved score {} for {}", record.score, record.player_name);
    Ok(Json(SubmitScoreResponse {
        success: true,
        message: "Score saved".to_string(),
    }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
