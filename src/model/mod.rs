use serde::{Deserialize, Serialize};

/// One entry of the demo list.
///
/// Records are never mutated after loading. `tags` may be absent in the
/// source document and is then treated as empty; every other field is
/// required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DemoRecord {
    pub title: String,
    pub description: String,
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub path: String,
}

impl DemoRecord {
    /// True when `normalized` (see [`normalize_term`]) occurs in the title,
    /// the description or any tag, ignoring case. An empty term matches
    /// everything.
    pub fn matches(&self, normalized: &str) -> bool {
        if normalized.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(normalized)
            || self.description.to_lowercase().contains(normalized)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(normalized))
    }
}

pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}
