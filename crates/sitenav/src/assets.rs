//! Asset-load entry points with graceful degradation.
//!
//! The host performs the actual HTTP fetch and hands the body over (or
//! `None` when the request failed or returned a non-success status).
//! Failures never propagate: a bad catalog disables search, a bad feature
//! document renders an empty grid, and either case is logged once.

use sitenav_core::catalog::{Catalog, FeatureAssets};

/// Build the search catalog from a fetched payload.
///
/// `None` (fetch failure) or an unparseable body degrades to the empty
/// catalog; the search UI then simply produces no results.
#[must_use]
pub fn load_catalog(payload: Option<&str>) -> Catalog {
    let Some(body) = payload else {
        tracing::error!("search catalog fetch failed; search disabled");
        return Catalog::empty();
    };
    match Catalog::from_json(body) {
        Ok(catalog) => {
            tracing::debug!(entries = catalog.len(), "search catalog loaded");
            catalog
        }
        Err(err) => {
            tracing::error!(error = %err, "search catalog unusable; search disabled");
            Catalog::empty()
        }
    }
}

/// Build the feature-grid assets from a fetched payload.
///
/// Degrades to empty feature lists (an empty grid) on any failure.
#[must_use]
pub fn load_features(payload: Option<&str>) -> FeatureAssets {
    let Some(body) = payload else {
        tracing::error!("feature asset fetch failed; grid left empty");
        return FeatureAssets::default();
    };
    match FeatureAssets::from_json(body) {
        Ok(assets) => {
            tracing::debug!(
                small = assets.small_features.len(),
                large = assets.large_features.len(),
                "feature assets loaded"
            );
            assets
        }
        Err(err) => {
            tracing::error!(error = %err, "feature assets unusable; grid left empty");
            FeatureAssets::default()
        }
    }
}
