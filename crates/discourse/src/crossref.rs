use crate::polarity::ContradictionMarkers;
use crate::schema::{CrossReference, EvidenceEntry, PaperRecord};
use crate::topics::TopicLexicon;

/// Links every paper's claims to topically related evidence in the other
/// papers, split into supporting and contradicting lists.
///
/// The scan is quadratic in paper count: every claim is compared against
/// every other paper's evidence. Fine at tens of papers; a precomputed
/// topic-to-evidence index would cut it down if collections grow.
#[derive(Clone, Debug, Default)]
pub struct CrossReferencer {
    lexicon: TopicLexicon,
    markers: ContradictionMarkers,
}

impl CrossReferencer {
    pub fn new(lexicon: TopicLexicon, markers: ContradictionMarkers) -> Self {
        Self { lexicon, markers }
    }

    pub fn lexicon(&self) -> &TopicLexicon {
        &self.lexicon
    }

    /// Output order is discovery order: papers ascending, claims ascending,
    /// and within a claim, other papers ascending then evidence ascending.
    /// A claim with no topic is skipped; a paper never references itself.
    pub fn build(&self, papers: &[PaperRecord]) -> Vec<CrossReference> {
        let mut references = Vec::new();

        for (i, paper) in papers.iter().enumerate() {
            for claim in &paper.claims {
                let claim_topics = self.lexicon.classify(claim);
                if claim_topics.is_empty() {
                    continue;
                }

                let mut supporting = Vec::new();
                let mut contradicting = Vec::new();

                for (j, other) in papers.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    for evidence in &other.evidence {
                        let evidence_topics = self.lexicon.classify(evidence);
                        if claim_topics.is_disjoint(&evidence_topics) {
                            continue;
                        }
                        let entry = EvidenceEntry {
                            paper: other.filename.clone(),
                            evidence: evidence.clone(),
                        };
                        if self.markers.is_contradicting(evidence) {
                            contradicting.push(entry);
                        } else {
                            supporting.push(entry);
                        }
                    }
                }

                if !supporting.is_empty() || !contradicting.is_empty() {
                    references.push(CrossReference {
                        source_paper: paper.filename.clone(),
                        claim: claim.clone(),
                        supporting_evidence: supporting,
                        contradicting_evidence: contradicting,
                    });
                }
            }
        }

        references
    }
}
