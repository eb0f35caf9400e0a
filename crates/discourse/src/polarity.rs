/// Markers whose presence flags an evidence span as contradicting rather
/// than supporting.
///
/// Matching is case-insensitive substring containment. `not` and `fail`
/// are NOT whole-word matches: "notable" and "failure" both trip them.
/// Downstream consumers were built against that behavior, so it stays.
#[derive(Clone, Debug)]
pub struct ContradictionMarkers {
    markers: Vec<String>,
}

impl ContradictionMarkers {
    pub fn new(markers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            markers: markers
                .into_iter()
                .map(|m| m.into().to_lowercase())
                .collect(),
        }
    }

    pub fn is_contradicting(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.markers.iter().any(|m| haystack.contains(m.as_str()))
    }
}

impl Default for ContradictionMarkers {
    fn default() -> Self {
        Self::new(["not", "fail", "no effect", "unreliable", "flawed"])
    }
}
