use crate::models::RankingSubmission;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("submission request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Delivery acknowledgment level.
///
/// `Assumed` covers response-opaque transports: the request left without
/// a transport error and the remote write is taken on faith. `Confirmed`
/// is reserved for sinks that can read a positive acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkAck {
    Assumed,
    Confirmed,
}

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, submission: &RankingSubmission) -> Result<SinkAck, SinkError>;
}

/// POSTs each submission to a webhook that appends it as one spreadsheet
/// row. The webhook echoes `{success: bool}`, but this transport treats
/// the response as opaque: completing without a transport error is the
/// only success signal.
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl SubmissionSink for WebhookSink {
    async fn submit(&self, submission: &RankingSubmission) -> Result<SinkAck, SinkError> {
        self.client.post(&self.url).json(submission).send().await?;
        Ok(SinkAck::Assumed)
    }
}

/// Records submissions locally; stands in when no webhook is configured.
#[derive(Default)]
pub struct MemorySink {
    recorded: Mutex<Vec<RankingSubmission>>,
}

impl MemorySink {
    pub async fn recorded(&self) -> Vec<RankingSubmission> {
        self.recorded.lock().await.clone()
    }
}

#[async_trait]
impl SubmissionSink for MemorySink {
    async fn submit(&self, submission: &RankingSubmission) -> Result<SinkAck, SinkError> {
        info!(
            day = submission.day,
            session = %submission.session_id,
            "recording submission in memory"
        );
        self.recorded.lock().await.push(submission.clone());
        Ok(SinkAck::Confirmed)
    }
}
