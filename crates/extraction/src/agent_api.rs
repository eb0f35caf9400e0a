use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::extractor::{ExtractionError, InsightExtractor, Result};
use crate::ExtractedInsights;

#[derive(Clone, Debug)]
pub struct AgentTaskConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub agent_name: String,
    pub agent_about: String,
    /// Task definition forwarded verbatim to the API. The prompt content
    /// is owned by the caller, not this crate.
    pub task: serde_json::Value,
    pub poll_interval: Duration,
    pub max_polls: usize,
}

impl AgentTaskConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: "o1-preview".to_string(),
            agent_name: "Research Insights Agent".to_string(),
            agent_about: "Extracts research questions, claims, and evidence from papers."
                .to_string(),
            task: serde_json::Value::Null,
            poll_interval: Duration::from_secs(1),
            max_polls: 120,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_task(mut self, task: serde_json::Value) -> Self {
        self.task = task;
        self
    }
}

/// Client for an agents/tasks extraction API: register an agent and a
/// task once, then run one execution per paper and poll it to completion.
pub struct AgentTaskExtractor {
    cfg: AgentTaskConfig,
    client: reqwest::Client,
    session: Option<Session>,
}

struct Session {
    agent_id: String,
    task_id: String,
}

#[derive(Deserialize)]
struct CreatedResource {
    id: String,
}

#[derive(Deserialize)]
struct ExecutionStatus {
    status: String,
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AgentTaskExtractor {
    pub fn new(cfg: AgentTaskConfig) -> Self {
        Self {
            cfg,
            client: reqwest::Client::new(),
            session: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.cfg.base_url.trim_end_matches('/'), path)
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<CreatedResource> {
        let resp = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.cfg.api_key)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl InsightExtractor for AgentTaskExtractor {
    async fn connect(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Ok(());
        }

        let agent = self
            .post_json(
                "/agents",
                &serde_json::json!({
                    "name": self.cfg.agent_name,
                    "model": self.cfg.model,
                    "about": self.cfg.agent_about,
                }),
            )
            .await?;
        info!(agent_id = %agent.id, "extraction agent registered");

        let task = self
            .post_json(&format!("/agents/{}/tasks", agent.id), &self.cfg.task)
            .await?;
        info!(task_id = %task.id, "extraction task created");

        self.session = Some(Session {
            agent_id: agent.id,
            task_id: task.id,
        });
        Ok(())
    }

    async fn extract(&self, paper_text: &str) -> Result<ExtractedInsights> {
        let session = self.session.as_ref().ok_or(ExtractionError::NotConnected)?;

        let execution = self
            .post_json(
                &format!("/tasks/{}/executions", session.task_id),
                &serde_json::json!({ "input": { "research_text": paper_text } }),
            )
            .await?;

        for _ in 0..self.cfg.max_polls {
            let status: ExecutionStatus = self
                .client
                .get(self.url(&format!("/executions/{}", execution.id)))
                .bearer_auth(&self.cfg.api_key)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            match status.status.as_str() {
                "succeeded" => {
                    let raw = status.output.unwrap_or_default();
                    let insights = ExtractedInsights::from_model_output(&raw);
                    if let Some(e) = &insights.error {
                        warn!(error = %e, "task output did not parse, storing error record");
                    }
                    return Ok(insights);
                }
                "failed" => {
                    return Err(ExtractionError::TaskFailed(
                        status.error.unwrap_or_else(|| "unknown".to_string()),
                    ))
                }
                other => {
                    info!(status = %other, "extraction still running");
                    tokio::time::sleep(self.cfg.poll_interval).await;
                }
            }
        }

        Err(ExtractionError::PollTimeout(self.cfg.max_polls))
    }

    async fn close(&mut self) -> Result<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        self.client
            .delete(self.url(&format!("/agents/{}", session.agent_id)))
            .bearer_auth(&self.cfg.api_key)
            .send()
            .await?
            .error_for_status()?;
        info!(agent_id = %session.agent_id, "extraction agent released");
        Ok(())
    }
}
