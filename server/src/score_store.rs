use std::future::Future;
use serde_json::Value;
use sqlx::PgPool;
use thiserror::Error;

/// The score is bound as text and cast by Postgres, so whatever the client sent
/// is stored if and only if Postgres accepts it as NUMERIC.
const INSERT_SCORE_SQL: &str =
    "INSERT INTO public.player_score (player_name, score) VALUES ($1, $2::numeric)";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Score is null")]
    NullScore,
}

/// One finished game as accepted by the endpoint. Rows are only ever appended.
/// The score keeps its JSON form, its type is only checked by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: Value,
}

/// Text handed to the `::numeric` cast. Strings go through unquoted, so `"10"`
/// is stored as 10 and `"ten"` fails in the database.
pub fn score_as_numeric_text(score: &Value) -> Result<String, StoreError> {
    match score {
        Value::Null => Err(StoreError::NullScore),
        Value::String(text) => Ok(text.clone()),
        other => Ok(other.to_string()),
    }
}

pub trait ScoreStore: Clone + Send + Sync + 'static {
    fn insert(&self, record: &ScoreRecord) -> impl Future<Output = Result<(), StoreError>> + Send;
}

#[derive(Clone)]
pub struct PgScoreStore {
    pool: PgPool,
}

impl PgScoreStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ScoreStore for PgScoreStore {
    async fn insert(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        let score = score_as_numeric_text(&record.score)?;

        // The pool hands out a connection for this statement and takes it back
        // when the future completes, whether it succeeded or not.
        sqlx::query(INSERT_SCORE_SQL)
            .bind(&record.player_name)
            .bind(score)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
