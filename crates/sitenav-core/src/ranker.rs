//! Tiered scoring and ranking over the navigation catalog.
//!
//! [`rank`] is a pure function from a query and a catalog slice to a
//! scored, truncated result list. Matching is case-insensitive and runs
//! in two stages: the label is checked first, and only a label that fails
//! every tier falls through to the keyword set. This is observable
//! behavior (an entry whose label and keywords both match scores only the
//! label tier), not an optimization.
//!
//! # Invariants
//!
//! 1. **Tier dominance**: with priorities in the documented range
//!    (well below [`TIER_GAP_MIN`]), any exact-label match outranks any
//!    prefix-label match, which outranks any substring-label match, which
//!    outranks every keyword tier. Priority only reorders entries within
//!    a tier.
//! 2. **Stability**: equal combined scores preserve catalog order. The
//!    catalog's document order encodes intentional tie-break priority, so
//!    a stable sort is required, not incidental.
//! 3. **Truncation**: results are always a prefix of the full score-sorted
//!    match list, capped at [`MAX_RESULTS`].

use crate::catalog::SearchEntry;

/// Maximum number of results returned to the dropdown.
pub const MAX_RESULTS: usize = 8;

/// Base score for an exact label match.
pub const SCORE_LABEL_EXACT: u32 = 1000;
/// Base score when the label starts with the query.
pub const SCORE_LABEL_PREFIX: u32 = 500;
/// Base score when the label contains the query.
pub const SCORE_LABEL_SUBSTRING: u32 = 300;
/// Base score for an exact keyword match.
pub const SCORE_KEYWORD_EXACT: u32 = 200;
/// Base score when a keyword starts with the query.
pub const SCORE_KEYWORD_PREFIX: u32 = 150;
/// Base score when a keyword contains the query.
pub const SCORE_KEYWORD_SUBSTRING: u32 = 100;

/// Smallest gap between adjacent tiers; priorities at or above this value
/// can invert tier ordering and are an authoring error.
pub const TIER_GAP_MIN: u32 = 50;

/// Which tier produced the match (for dropdown highlighting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Label equals the query.
    LabelExact,
    /// Label starts with the query.
    LabelPrefix,
    /// Label contains the query.
    LabelSubstring,
    /// A keyword equals the query.
    KeywordExact,
    /// A keyword starts with the query.
    KeywordPrefix,
    /// A keyword contains the query.
    KeywordSubstring,
}

impl MatchTier {
    /// The tier's base score.
    #[must_use]
    pub fn base_score(self) -> u32 {
        match self {
            Self::LabelExact => SCORE_LABEL_EXACT,
            Self::LabelPrefix => SCORE_LABEL_PREFIX,
            Self::LabelSubstring => SCORE_LABEL_SUBSTRING,
            Self::KeywordExact => SCORE_KEYWORD_EXACT,
            Self::KeywordPrefix => SCORE_KEYWORD_PREFIX,
            Self::KeywordSubstring => SCORE_KEYWORD_SUBSTRING,
        }
    }
}

/// One scored catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedResult {
    /// The matched entry.
    pub entry: SearchEntry,
    /// Tier base score plus the entry's priority.
    pub score: u32,
    /// Which tier matched, for highlighting.
    pub tier: MatchTier,
}

/// Match a lowercased text against a lowercased query, first tier wins.
fn text_tier(text: &str, query: &str, exact: MatchTier, prefix: MatchTier, sub: MatchTier) -> Option<MatchTier> {
    if text == query {
        Some(exact)
    } else if text.starts_with(query) {
        Some(prefix)
    } else if text.contains(query) {
        Some(sub)
    } else {
        None
    }
}

/// Score a single entry against an already-trimmed, lowercased query.
///
/// Keyword tiers are consulted only when the label missed every tier.
#[must_use]
pub fn match_tier(entry: &SearchEntry, query: &str) -> Option<MatchTier> {
    let label = entry.label.to_lowercase();
    if let Some(tier) = text_tier(
        &label,
        query,
        MatchTier::LabelExact,
        MatchTier::LabelPrefix,
        MatchTier::LabelSubstring,
    ) {
        return Some(tier);
    }
    entry
        .keywords
        .iter()
        .filter_map(|kw| {
            text_tier(
                &kw.to_lowercase(),
                query,
                MatchTier::KeywordExact,
                MatchTier::KeywordPrefix,
                MatchTier::KeywordSubstring,
            )
        })
        .min()
}

/// Rank catalog entries against a query.
///
/// Returns at most [`MAX_RESULTS`] results, sorted by descending combined
/// score (tier base plus entry priority). A whitespace-only query returns
/// no results. Entries that match no tier are dropped.
#[must_use]
pub fn rank(query: &str, entries: &[SearchEntry]) -> Vec<RankedResult> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<RankedResult> = entries
        .iter()
        .filter_map(|entry| {
            let tier = match_tier(entry, &query)?;
            Some(RankedResult {
                entry: entry.clone(),
                score: tier.base_score() + entry.priority,
                tier,
            })
        })
        .collect();

    // sort_by is stable: equal scores keep catalog order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(MAX_RESULTS);
    results
}
