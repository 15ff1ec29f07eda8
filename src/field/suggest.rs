use std::collections::HashSet;

/// Source of autocomplete candidates for the edit draft.
///
/// Matching lives behind this trait so the dropdown rendering never knows
/// how candidates are chosen, and the filter is testable on its own.
pub trait SuggestionSource {
    /// Candidates matching `query`, in source order. An empty query
    /// matches everything.
    fn filter(&self, query: &str) -> Vec<String>;
}

/// A fixed candidate pool matched by case-insensitive substring.
#[derive(Debug, Clone, Default)]
pub struct StaticSuggestions {
    pool: Vec<String>,
}

impl StaticSuggestions {
    pub fn new(pool: Vec<String>) -> Self {
        StaticSuggestions { pool }
    }

    /// Merge a primary list with extra candidates, deduplicated
    /// case-insensitively. The first spelling seen wins.
    pub fn merged(primary: &[String], extra: impl IntoIterator<Item = String>) -> Self {
        let mut pool = primary.to_vec();
        let mut seen: HashSet<String> = pool.iter().map(|c| c.to_lowercase()).collect();
        for candidate in extra {
            if seen.insert(candidate.to_lowercase()) {
                pool.push(candidate);
            }
        }
        StaticSuggestions { pool }
    }
}

impl SuggestionSource for StaticSuggestions {
    fn filter(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return self.pool.clone();
        }
        let needle = query.to_lowercase();
        self.pool
            .iter()
            .filter(|c| c.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
