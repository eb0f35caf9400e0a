use discourse::PaperRecord;
use serde::{Deserialize, Serialize};

/// Structured insights returned by the extraction task for one paper.
///
/// Model output is unreliable: all fields default, and unparseable output
/// becomes a record carrying `error` with empty collections; the caller
/// stores what it got instead of aborting the batch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExtractedInsights {
    #[serde(default)]
    pub research_question: String,
    #[serde(default)]
    pub claims: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub claim_with_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractedInsights {
    /// Parse raw model output, tolerating a ```json fence wrapper.
    pub fn from_model_output(raw: &str) -> Self {
        let mut cleaned = raw.trim();
        if let Some(rest) = cleaned.strip_prefix("```json") {
            cleaned = rest;
        }
        if let Some(rest) = cleaned.strip_suffix("```") {
            cleaned = rest;
        }

        match serde_json::from_str(cleaned.trim()) {
            Ok(parsed) => parsed,
            Err(e) => Self {
                research_question: "Error parsing response".to_string(),
                claim_with_context: Some("Error parsing response".to_string()),
                error: Some(e.to_string()),
                ..Self::default()
            },
        }
    }

    /// Attach the source filename the caller knows and the model does not.
    pub fn into_record(self, filename: impl Into<String>) -> PaperRecord {
        PaperRecord {
            filename: filename.into(),
            research_question: self.research_question,
            claims: self.claims,
            evidence: self.evidence,
            claim_with_context: self.claim_with_context,
        }
    }
}
