//! Navigation catalog: the read-only set of searchable entries.
//!
//! The catalog is loaded once (embedded or fetched by the host) and never
//! mutated afterwards. Document order is meaningful: when two entries rank
//! with the same score, the one that appears earlier in the catalog wins,
//! so authors encode tie-break priority by ordering the JSON array.
//!
//! # Invariants
//!
//! 1. **Unique ids**: two entries with the same `id` are rejected at parse
//!    time, never silently merged.
//! 2. **Order preservation**: `entries()` yields entries in document order.
//! 3. **Immutability**: there is no mutation API; re-loading builds a new
//!    catalog.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Malformed JSON | Truncated/invalid asset | `CatalogError::Parse` |
//! | Duplicate id | Authoring mistake | `CatalogError::DuplicateId` |
//! | Unknown entry kind | Schema drift | `CatalogError::Parse` |

use std::collections::HashSet;

use serde::Deserialize;

/// Default priority weight applied when an entry omits `priority`.
pub const DEFAULT_PRIORITY: u32 = 50;

/// What a catalog entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A routable page of the site.
    Page,
    /// An anchored section within a page.
    Section,
    /// An action the host performs (external link, app download).
    Action,
    /// A content block referenced for discovery only.
    Content,
}

/// One searchable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchEntry {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Human-readable label shown in the dropdown and matched first.
    pub label: String,
    /// Entry category.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Route path (or absolute URL for external actions).
    pub path: String,
    /// Anchor id of the target section, when the entry is section-scoped.
    #[serde(default)]
    pub section: Option<String>,
    /// Secondary match terms, consulted only when the label does not match.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Ranking weight added to any non-zero match score.
    #[serde(default = "default_priority")]
    pub priority: u32,
}

fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

impl SearchEntry {
    /// Whether this entry targets another browsing context (absolute URL).
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.path.starts_with("http://") || self.path.starts_with("https://")
    }
}

/// Errors from catalog loading.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The asset was not valid JSON for the expected schema.
    Parse(String),
    /// Two entries shared an id.
    DuplicateId(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "catalog parse error: {msg}"),
            Self::DuplicateId(id) => write!(f, "duplicate catalog entry id '{id}'"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable, ordered collection of [`SearchEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<SearchEntry>,
}

impl Catalog {
    /// Build a catalog from already-validated entries.
    ///
    /// Returns [`CatalogError::DuplicateId`] if two entries share an id.
    pub fn new(entries: Vec<SearchEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a catalog from a JSON array of entry objects.
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        let entries: Vec<SearchEntry> =
            serde_json::from_str(payload).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(entries)
    }

    /// An empty catalog (the degraded state after a failed asset load).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All entries in document order.
    #[must_use]
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SearchEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Small decorative feature: one icon cell in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SmallFeature {
    /// Icon asset name.
    pub icon: String,
    /// Caption text.
    pub text: String,
}

/// Large (2x2) feature occupying the reserved center block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargeFeature {
    /// Icon asset name.
    pub icon: String,
    /// Caption text.
    pub text: String,
    /// Background asset name.
    pub background: String,
    /// Text shown on the flipped back face.
    pub back_text: String,
}

/// The feature-grid JSON asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAssets {
    /// Entries for the 1x1 cells.
    #[serde(default)]
    pub small_features: Vec<SmallFeature>,
    /// Entries for the 2x2 center cells.
    #[serde(default)]
    pub large_features: Vec<LargeFeature>,
}

impl FeatureAssets {
    /// Parse the feature asset document.
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(payload).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, label: &str) -> SearchEntry {
        SearchEntry {
            id: id.into(),
            label: label.into(),
            kind: EntryKind::Page,
            path: "/".into(),
            section: None,
            keywords: Vec::new(),
            priority: DEFAULT_PRIORITY,
        }
    }

    // ── Construction ────────────────────────────────────────────────

    #[test]
    fn new_accepts_unique_ids() {
        let cat = Catalog::new(vec![entry("a", "A"), entry("b", "B")]).unwrap();
        assert_eq!(cat.len(), 2);
        assert!(!cat.is_empty());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![entry("a", "A"), entry("a", "B")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn empty_catalog() {
        let cat = Catalog::empty();
        assert!(cat.is_empty());
        assert_eq!(cat.len(), 0);
        assert!(cat.get("anything").is_none());
    }

    // ── JSON parsing ────────────────────────────────────────────────

    #[test]
    fn from_json_full_entry() {
        let cat = Catalog::from_json(
            r#"[{
                "id": "pay-now",
                "label": "Pay Now",
                "type": "action",
                "path": "https://pay.example.com",
                "keywords": ["payment", "bill"],
                "priority": 90
            }]"#,
        )
        .unwrap();
        let e = cat.get("pay-now").unwrap();
        assert_eq!(e.label, "Pay Now");
        assert_eq!(e.kind, EntryKind::Action);
        assert_eq!(e.priority, 90);
        assert_eq!(e.keywords, vec!["payment", "bill"]);
        assert!(e.is_external());
    }

    #[test]
    fn from_json_applies_defaults() {
        let cat = Catalog::from_json(
            r#"[{"id": "home", "label": "Home", "type": "page", "path": "/"}]"#,
        )
        .unwrap();
        let e = cat.get("home").unwrap();
        assert_eq!(e.priority, DEFAULT_PRIORITY);
        assert!(e.keywords.is_empty());
        assert!(e.section.is_none());
        assert!(!e.is_external());
    }

    #[test]
    fn from_json_preserves_document_order() {
        let cat = Catalog::from_json(
            r#"[
                {"id": "b", "label": "B", "type": "page", "path": "/b"},
                {"id": "a", "label": "A", "type": "page", "path": "/a"}
            ]"#,
        )
        .unwrap();
        let ids: Vec<_> = cat.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn from_json_rejects_malformed() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"id": "x"}]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn from_json_rejects_unknown_kind() {
        let res = Catalog::from_json(
            r#"[{"id": "x", "label": "X", "type": "widget", "path": "/"}]"#,
        );
        assert!(matches!(res, Err(CatalogError::Parse(_))));
    }

    // ── Feature assets ──────────────────────────────────────────────

    #[test]
    fn feature_assets_parse_camel_case() {
        let assets = FeatureAssets::from_json(
            r#"{
                "smallFeatures": [{"icon": "bolt", "text": "Fast"}],
                "largeFeatures": [{
                    "icon": "shield", "text": "Safe",
                    "background": "bg1", "backText": "Bank-grade security"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(assets.small_features.len(), 1);
        assert_eq!(assets.large_features[0].back_text, "Bank-grade security");
    }

    #[test]
    fn feature_assets_default_to_empty_lists() {
        let assets = FeatureAssets::from_json("{}").unwrap();
        assert!(assets.small_features.is_empty());
        assert!(assets.large_features.is_empty());
    }
}
