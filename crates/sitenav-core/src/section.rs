//! Scroll-position to active-section resolution.
//!
//! The tracker owns a small, explicit allowlist of section ids (not the
//! full catalog) and asks the host for geometry through the
//! [`SectionGeometry`] seam on every scroll event. Sections missing from
//! the document are skipped silently, never an error.
//!
//! # Resolution rules
//!
//! 1. Present sections are walked in ascending offset order; the last one
//!    whose top is at or above `scroll_y + LOOKAHEAD_PX` wins, so a
//!    section activates slightly before it reaches the viewport top.
//! 2. Near the very top (`scroll_y < TOP_SNAP_PX`) the result is always
//!    [`HOME_SECTION`], even if a tracked section starts at offset 0.
//!
//! There is no polling; transitions happen only when the host reports a
//! scroll event.

/// The synthetic section representing the top of the page.
pub const HOME_SECTION: &str = "home";

/// Lookahead bias added to the scroll position before comparing offsets.
pub const LOOKAHEAD_PX: f64 = 150.0;

/// Below this scroll position the active section is forced to home.
pub const TOP_SNAP_PX: f64 = 50.0;

/// Clearance subtracted from a section's top when scrolling to it, so the
/// fixed header does not cover the section heading.
pub const HEADER_CLEARANCE_PX: f64 = 100.0;

/// Host seam for reading live layout. Offsets are pixels from the
/// document top and may be fractional.
pub trait SectionGeometry {
    /// Current vertical scroll position.
    fn scroll_y(&self) -> f64;

    /// Top offset of the section element, or `None` if it is not in the
    /// document.
    fn section_top(&self, id: &str) -> Option<f64>;
}

/// A scroll the host must perform (smooth/animated, curve is the host's).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Scroll to the document top.
    ToTop,
    /// Scroll so the given offset lands at the viewport top.
    ToOffset(f64),
}

/// Maps scroll position to the currently active navigation section.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    tracked: Vec<String>,
    active: String,
}

impl SectionTracker {
    /// Track the given section ids, starting at home.
    #[must_use]
    pub fn new<I, S>(tracked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracked: tracked.into_iter().map(Into::into).collect(),
            active: HOME_SECTION.to_string(),
        }
    }

    /// The tracked allowlist, in declaration order.
    #[must_use]
    pub fn tracked(&self) -> &[String] {
        &self.tracked
    }

    /// The currently active section id.
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Resolve the active section for the current geometry without
    /// mutating the tracker.
    #[must_use]
    pub fn resolve(&self, geometry: &impl SectionGeometry) -> &str {
        let scroll_y = geometry.scroll_y();
        if scroll_y < TOP_SNAP_PX {
            return HOME_SECTION;
        }

        let mut present: Vec<(&str, f64)> = self
            .tracked
            .iter()
            .filter_map(|id| geometry.section_top(id).map(|top| (id.as_str(), top)))
            .collect();
        present.sort_by(|a, b| a.1.total_cmp(&b.1));

        let position = scroll_y + LOOKAHEAD_PX;
        let mut active = HOME_SECTION;
        for (id, top) in present {
            if top <= position {
                active = id;
            }
        }
        active
    }

    /// Handle a scroll event: recompute and store the active section.
    ///
    /// Returns the new id only when it changed, so callers can gate the
    /// nav-highlight update on `Some`.
    pub fn on_scroll(&mut self, geometry: &impl SectionGeometry) -> Option<&str> {
        let next = self.resolve(geometry).to_string();
        if next == self.active {
            return None;
        }
        self.active = next;
        Some(&self.active)
    }

    /// Plan the scroll for a nav pick. Home always goes to the top;
    /// other sections land [`HEADER_CLEARANCE_PX`] above their top.
    /// `None` when the section element is absent.
    #[must_use]
    pub fn scroll_target(id: &str, geometry: &impl SectionGeometry) -> Option<ScrollCommand> {
        if id == HOME_SECTION {
            return Some(ScrollCommand::ToTop);
        }
        geometry
            .section_top(id)
            .map(|top| ScrollCommand::ToOffset(top - HEADER_CLEARANCE_PX))
    }
}
