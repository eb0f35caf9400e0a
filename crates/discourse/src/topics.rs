use std::collections::HashSet;

/// Topic labels mapped to keyword lists. A text span belongs to a topic
/// when any of the topic's keywords occurs in it as a case-insensitive
/// substring.
///
/// Topics are configuration, not code: adding one is a data change and the
/// matcher stays untouched.
#[derive(Clone, Debug)]
pub struct TopicLexicon {
    topics: Vec<TopicEntry>,
}

#[derive(Clone, Debug)]
struct TopicEntry {
    name: String,
    keywords: Vec<String>,
}

impl TopicLexicon {
    pub fn empty() -> Self {
        Self { topics: Vec::new() }
    }

    /// Keywords are folded to lowercase; matching lowercases the text side.
    pub fn with_topic(
        mut self,
        name: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.topics.push(TopicEntry {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        });
        self
    }

    /// Topics that `text` touches. Empty text yields the empty set.
    pub fn classify(&self, text: &str) -> HashSet<&str> {
        let haystack = text.to_lowercase();
        self.topics
            .iter()
            .filter(|t| t.keywords.iter().any(|k| haystack.contains(k.as_str())))
            .map(|t| t.name.as_str())
            .collect()
    }
}

/// The tracked topics of the oxytocin research corpus this pipeline was
/// built around.
impl Default for TopicLexicon {
    fn default() -> Self {
        Self::empty()
            .with_topic(
                "initial_findings",
                ["initial", "first", "original", "kosfeld"],
            )
            .with_topic(
                "replication",
                ["replicate", "replication", "failed", "attempt"],
            )
            .with_topic(
                "social_contact",
                ["social contact", "social interaction", "social cue"],
            )
            .with_topic(
                "methodology",
                ["method", "measurement", "plasma", "extraction"],
            )
    }
}
