//! AI extraction client for research-paper insights.
//!
//! The backend is a black box: an agents/tasks HTTP API that turns raw
//! paper text into structured insights. The session is an explicitly
//! constructed, injectable object (construct, `connect`, use, `close`)
//! rather than ambient module state.

mod agent_api;
mod extractor;
mod schema;

pub use agent_api::{AgentTaskConfig, AgentTaskExtractor};
pub use extractor::{ExtractionError, InsightExtractor, Result};
pub use schema::ExtractedInsights;
