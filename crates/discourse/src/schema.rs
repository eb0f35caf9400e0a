use serde::{Deserialize, Serialize};

/// One processed paper: the extraction pipeline's structured output with
/// the source filename injected by the caller.
///
/// Extraction output is unreliable, so every field defaults: a record
/// with missing keys parses and degrades instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub research_question: String,
    #[serde(default)]
    pub claims: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_with_context: Option<String>,
}

impl PaperRecord {
    pub fn new(filename: impl Into<String>, research_question: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            research_question: research_question.into(),
            claims: Vec::new(),
            evidence: Vec::new(),
            claim_with_context: None,
        }
    }

    pub fn with_claim(mut self, claim: impl Into<String>) -> Self {
        self.claims.push(claim.into());
        self
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence.push(evidence.into());
        self
    }
}

/// Evidence found in another paper, tagged with where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceEntry {
    pub paper: String,
    pub evidence: String,
}

/// A claim linked to topically related evidence in other papers.
/// Recomputed fresh on every request; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReference {
    pub source_paper: String,
    pub claim: String,
    pub supporting_evidence: Vec<EvidenceEntry>,
    pub contradicting_evidence: Vec<EvidenceEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Question,
    Claim,
    Evidence,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Addresses,
    Supports,
    Contradicts,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    pub paper: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscourseGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
