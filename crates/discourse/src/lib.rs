//! Claim–evidence cross-referencing and discourse-graph construction.
//!
//! Takes the structured records the extraction pipeline produces per paper
//! and links them across papers: topic classification, supporting vs.
//! contradicting evidence, and a question/claim/evidence graph for
//! visualization.

pub mod crossref;
pub mod graph;
pub mod polarity;
pub mod schema;
pub mod topics;

pub use crossref::CrossReferencer;
pub use graph::{GraphBuilder, NodeIdentity};
pub use polarity::ContradictionMarkers;
pub use schema::{
    CrossReference, DiscourseGraph, Edge, EdgeKind, EvidenceEntry, Node, NodeKind, PaperRecord,
};
pub use topics::TopicLexicon;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscourseError {
    #[error("record {record} is missing required field `{field}`")]
    MissingField { record: usize, field: &'static str },
}

pub type Result<T> = std::result::Result<T, DiscourseError>;
