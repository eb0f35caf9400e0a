use std::collections::HashMap;

use crate::crossref::CrossReferencer;
use crate::schema::{DiscourseGraph, Edge, EdgeKind, Node, NodeKind, PaperRecord};
use crate::{DiscourseError, Result};

/// How claim/evidence text maps to node identity across papers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeIdentity {
    /// Byte-identical text aliases to a single node, last writer wins.
    /// This is the historical behavior existing graph consumers depend on;
    /// it stays the default.
    #[default]
    ByText,
    /// Identical text in different papers stays distinct.
    ByPaperAndText,
}

/// Assembles the question/claim/evidence graph for a set of papers.
///
/// The graph is rebuilt from scratch on every call: no incremental
/// update, no caching. Node ids are assigned by a single counter in input
/// order, so identical input yields an identical graph.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    referencer: CrossReferencer,
    identity: NodeIdentity,
}

impl GraphBuilder {
    pub fn new(referencer: CrossReferencer) -> Self {
        Self {
            referencer,
            identity: NodeIdentity::default(),
        }
    }

    pub fn with_identity(mut self, identity: NodeIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Pass 1 creates one question node per paper plus claim and evidence
    /// nodes with `addresses` edges from question to claim. Pass 2 reruns the
    /// cross-referencer and adds `supports`/`contradicts` edges
    /// from evidence to claim. A cross-reference whose claim text is absent from
    /// the node map is skipped whole; an absent evidence text drops just
    /// that edge. Both silently; inconsistent input is tolerated, not
    /// reported.
    pub fn build(&self, papers: &[PaperRecord]) -> Result<DiscourseGraph> {
        for (record, paper) in papers.iter().enumerate() {
            if paper.filename.is_empty() {
                return Err(DiscourseError::MissingField {
                    record,
                    field: "filename",
                });
            }
        }

        let mut graph = DiscourseGraph::default();
        let mut node_map: HashMap<(Option<String>, String), usize> = HashMap::new();
        let mut next_id = 0usize;

        for paper in papers {
            let question_id = next_id;
            graph.nodes.push(Node {
                id: question_id,
                kind: NodeKind::Question,
                label: paper.research_question.clone(),
                paper: paper.filename.clone(),
            });
            next_id += 1;

            for claim in &paper.claims {
                graph.nodes.push(Node {
                    id: next_id,
                    kind: NodeKind::Claim,
                    label: claim.clone(),
                    paper: paper.filename.clone(),
                });
                node_map.insert(self.node_key(&paper.filename, claim), next_id);
                graph.edges.push(Edge {
                    source: question_id,
                    target: next_id,
                    kind: EdgeKind::Addresses,
                });
                next_id += 1;
            }

            for evidence in &paper.evidence {
                graph.nodes.push(Node {
                    id: next_id,
                    kind: NodeKind::Evidence,
                    label: evidence.clone(),
                    paper: paper.filename.clone(),
                });
                node_map.insert(self.node_key(&paper.filename, evidence), next_id);
                next_id += 1;
            }
        }

        for reference in self.referencer.build(papers) {
            let claim_key = self.node_key(&reference.source_paper, &reference.claim);
            let Some(&claim_id) = node_map.get(&claim_key) else {
                continue;
            };

            for entry in &reference.supporting_evidence {
                if let Some(&evidence_id) = node_map.get(&self.node_key(&entry.paper, &entry.evidence)) {
                    graph.edges.push(Edge {
                        source: evidence_id,
                        target: claim_id,
                        kind: EdgeKind::Supports,
                    });
                }
            }
            for entry in &reference.contradicting_evidence {
                if let Some(&evidence_id) = node_map.get(&self.node_key(&entry.paper, &entry.evidence)) {
                    graph.edges.push(Edge {
                        source: evidence_id,
                        target: claim_id,
                        kind: EdgeKind::Contradicts,
                    });
                }
            }
        }

        Ok(graph)
    }

    fn node_key(&self, paper: &str, text: &str) -> (Option<String>, String) {
        match self.identity {
            NodeIdentity::ByText => (None, text.to_string()),
            NodeIdentity::ByPaperAndText => (Some(paper.to_string()), text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_papers_build_an_empty_graph() {
        let graph = GraphBuilder::default().build(&[]).unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn missing_filename_is_rejected() {
        let papers = vec![
            PaperRecord::new("ok.pdf", "q"),
            PaperRecord::new("", "no filename injected"),
        ];
        let err = GraphBuilder::default().build(&papers).unwrap_err();
        match err {
            DiscourseError::MissingField { record, field } => {
                assert_eq!(record, 1);
                assert_eq!(field, "filename");
            }
        }
    }

    #[test]
    fn every_claim_gets_an_addresses_edge_from_its_question() {
        let papers = vec![PaperRecord::new("p.pdf", "q")
            .with_claim("claim one")
            .with_claim("claim two")
            .with_evidence("evidence one")];
        let graph = GraphBuilder::default().build(&papers).unwrap();

        // question(0), claim(1), claim(2), evidence(3)
        assert_eq!(graph.nodes.len(), 4);
        let addresses: Vec<_> = graph
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Addresses)
            .collect();
        assert_eq!(addresses.len(), 2);
        assert!(addresses.iter().all(|e| e.source == 0));
        assert_eq!(addresses[0].target, 1);
        assert_eq!(addresses[1].target, 2);

        // Evidence nodes get no addresses edge.
        assert!(graph.edges.iter().all(|e| e.target != 3));
    }
}
