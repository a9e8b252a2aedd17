#![forbid(unsafe_code)]

//! Headless navigation core for a marketing-site front end.
//!
//! Everything in this crate is pure, synchronous state: the host (a web
//! front end, a test harness) feeds it events and geometry and executes
//! the commands it hands back. No module touches the DOM, the network, or
//! an OS timer.
//!
//! - [`catalog`]: the read-only searchable entry set and feature assets.
//! - [`ranker`]: tiered query scoring over the catalog.
//! - [`selection`]: the dropdown cursor (saturating, no wraparound).
//! - [`section`]: scroll-position to active-section resolution.
//! - [`phase`]: scroll-threshold hide/show animation phases.
//! - [`grid`]: fixed 10x6 feature-grid placement.

pub mod catalog;
pub mod grid;
pub mod phase;
pub mod ranker;
pub mod section;
pub mod selection;

pub use catalog::{
    Catalog, CatalogError, DEFAULT_PRIORITY, EntryKind, FeatureAssets, LargeFeature, SearchEntry,
    SmallFeature,
};
pub use grid::{FeatureGrid, FeatureSlot, PlacedFeature, layout};
pub use phase::{OneShot, PHASE_RESET, SCROLLED_THRESHOLD_PX, ScrollPhase, ScrollPhaseMachine};
pub use ranker::{MAX_RESULTS, MatchTier, RankedResult, rank};
pub use section::{
    HEADER_CLEARANCE_PX, HOME_SECTION, LOOKAHEAD_PX, ScrollCommand, SectionGeometry,
    SectionTracker, TOP_SNAP_PX,
};
pub use selection::SelectionCursor;
