//! Keyword relevance filter.

use tenderwatch_entity::TenderDraft;

/// OR-of-substrings relevance filter.
///
/// A candidate is retained when any configured keyword appears, case
/// insensitively, in its title, description, or keyword list. No ranking,
/// no stemming. An empty keyword set retains everything.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    /// Build a filter from the configured keyword set.
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Check whether a single candidate is relevant.
    pub fn is_relevant(&self, draft: &TenderDraft) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        let haystack = format!(
            "{} {} {}",
            draft.title,
            draft.description,
            draft.keywords.join(" ")
        )
        .to_lowercase();
        self.keywords.iter().any(|k| haystack.contains(k))
    }

    /// Drop irrelevant candidates, preserving order.
    pub fn apply(&self, drafts: Vec<TenderDraft>) -> Vec<TenderDraft> {
        drafts.into_iter().filter(|d| self.is_relevant(d)).collect()
    }
}
