use std::thread::JoinHandle;
use common::games::snake::GameOver;
use common::{ErrorResponse, SubmitScoreRequest, SubmitScoreResponse, log};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::ServerConfig;

#[derive(Debug, PartialEq)]
pub enum SubmissionOutcome {
    Saved(SubmitScoreResponse),
    Rejected { status: u16, error: String },
    Failed(String),
}

pub async fn post_score(
    client: &reqwest::Client,
    url: &str,
    request: &SubmitScoreRequest,
) -> SubmissionOutcome {
    let response = match client.post(url).json(request).send().await {
        Ok(response) => response,
        Err(e) => return SubmissionOutcome::Failed(e.to_string()),
    };

    let status = response.status();
    if status.is_success() {
        return match response.json::<SubmitScoreResponse>().await {
            Ok(body) => SubmissionOutcome::Saved(body),
            Err(e) => SubmissionOutcome::Failed(format!("Unexpected response body: {}", e)),
        };
    }

    let error = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    SubmissionOutcome::Rejected {
        status: status.as_u16(),
        error,
    }
}

fn log_outcome(request: &SubmitScoreRequest, outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Saved(response) => log!(
            "Score {} for {} saved: {}",
            request.score,
            request.player_name,
            response.message
        ),
        SubmissionOutcome::Rejected { status, error } => log!(
            "Score {} for {} rejected ({}): {}",
            request.score,
            request.player_name,
            status,
            error
        ),
        SubmissionOutcome::Failed(e) => log!(
            "Score {} for {} not submitted: {}",
            request.score,
            request.player_name,
            e
        ),
    }
}

async fn run_submission_loop(
    client: reqwest::Client,
    url: String,
    mut rx: mpsc::UnboundedReceiver<SubmitScoreRequest>,
) {
    let mut in_flight = JoinSet::new();

    while let Some(request) = rx.recv().await {
        let client = client.clone();
        let url = url.clone();
        in_flight.spawn(async move {
            let outcome = post_score(&client, &url, &request).await;
            log_outcome(&request, &outcome);
        });

        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}
}

/// Sends finished games to the score server from a dedicated thread so the
/// UI never waits on the network. Dropping the submitter lets pending
/// requests finish, bounded by the request timeout.
pub struct ScoreSubmitter {
    tx: Option<mpsc::UnboundedSender<SubmitScoreRequest>>,
    worker: Option<JoinHandle<()>>,
}

impl ScoreSubmitter {
    pub fn start(config: &ServerConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;
        let url = config.score_url();
        let (tx, rx) = mpsc::unbounded_channel();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| format!("Failed to create runtime: {}", e))?;

        let worker = std::thread::Builder::new()
            .name("score-submitter".to_string())
            .spawn(move || runtime.block_on(run_submission_loop(client, url, rx)))
            .map_err(|e| format!("Failed to start submitter thread: {}", e))?;

        log!("Score submitter started for {}", config.score_url());
        Ok(Self {
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    pub fn submit(&self, game_over: &GameOver) {
        let request = SubmitScoreRequest {
            player_name: game_over.player_name.to_string(),
            score: game_over.score,
        };

        let Some(tx) = &self.tx else {
            return;
        };
        if tx.send(request).is_err() {
            log!("Score submitter is not running, score {} dropped", game_over.score);
        }
    }
}

impl Drop for ScoreSubmitter {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            log!("Score submitter thread panicked");
        }
    }
}
