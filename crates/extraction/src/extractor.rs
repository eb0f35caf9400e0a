use async_trait::async_trait;
use thiserror::Error;

use crate::ExtractedInsights;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("extraction task failed: {0}")]
    TaskFailed(String),

    #[error("task still running after {0} status polls")]
    PollTimeout(usize),

    #[error("client is not connected")]
    NotConnected,
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

/// An extraction backend with an explicit session lifecycle.
#[async_trait]
pub trait InsightExtractor: Send + Sync {
    /// Set up the remote session (agent and task registration).
    async fn connect(&mut self) -> Result<()>;

    /// Run one paper's text through the extraction task.
    async fn extract(&self, paper_text: &str) -> Result<ExtractedInsights>;

    /// Tear the session down. Idempotent.
    async fn close(&mut self) -> Result<()>;
}
