//! Top-bar controller: query state, ranked dropdown, cursor, scroll
//! tracking, and the hide/show phase machine in one component-scoped
//! object.
//!
//! The controller is headless. Event handlers mutate it and hand back
//! plain commands ([`NavDirective`], [`ScrollCommand`],
//! [`ScrollPhase`]); the host renders the dropdown, routes, scrolls, and
//! toggles CSS classes. All state is owned by one instance per mounted
//! top bar; teardown is dropping it.
//!
//! # Invariants
//!
//! 1. `results` is always `rank(query, catalog)` for the current query
//!    and catalog; every mutation that changes either re-ranks.
//! 2. The cursor is reset on every re-rank (result identity change), so
//!    it never indexes a stale list.
//! 3. A commit is only possible with a cursor selection; picking by mouse
//!    bypasses the cursor but not the result list.

use sitenav_core::catalog::{Catalog, SearchEntry};
use sitenav_core::phase::{OneShot, ScrollPhase, ScrollPhaseMachine};
use sitenav_core::ranker::{RankedResult, rank};
use sitenav_core::section::{ScrollCommand, SectionGeometry, SectionTracker};
use sitenav_core::selection::SelectionCursor;
use web_time::Instant;

/// What the host must do after a result is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavDirective {
    /// Open an absolute URL in a new browsing context.
    OpenExternal {
        /// The external URL.
        url: String,
    },
    /// Smooth-scroll to a section on the current route.
    ScrollTo {
        /// Target section id.
        section: String,
    },
    /// Navigate to another route, then scroll to a section there.
    /// Pair with [`crate::resume::stash_pending_section`] before routing.
    RouteThenScroll {
        /// Destination route path.
        path: String,
        /// Section to resume to after the route lands.
        section: String,
    },
    /// Plain route navigation.
    Route {
        /// Destination route path.
        path: String,
    },
}

/// Resolve the directive for a picked entry on the given route.
#[must_use]
pub fn directive_for(entry: &SearchEntry, current_path: &str) -> NavDirective {
    if entry.is_external() {
        return NavDirective::OpenExternal {
            url: entry.path.clone(),
        };
    }
    match &entry.section {
        Some(section) if entry.path == current_path => NavDirective::ScrollTo {
            section: section.clone(),
        },
        Some(section) => NavDirective::RouteThenScroll {
            path: entry.path.clone(),
            section: section.clone(),
        },
        None => NavDirective::Route {
            path: entry.path.clone(),
        },
    }
}

/// Outcome of one scroll event, for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollUpdate {
    /// Newly active nav section, present only when it changed.
    pub active_section: Option<String>,
    /// Newly entered animation phase, present only on a crossing.
    pub phase: Option<ScrollPhase>,
}

/// Per-instance top-bar state.
#[derive(Debug)]
pub struct TopBar {
    catalog: Catalog,
    query: String,
    results: Vec<RankedResult>,
    cursor: SelectionCursor,
    expanded: bool,
    focused: bool,
    focus_defer: OneShot,
    tracker: SectionTracker,
    phase: ScrollPhaseMachine,
}

impl TopBar {
    /// A top bar over the given catalog, tracking the given section ids.
    #[must_use]
    pub fn new<I, S>(catalog: Catalog, tracked_sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            catalog,
            query: String::new(),
            results: Vec::new(),
            cursor: SelectionCursor::new(),
            expanded: false,
            focused: false,
            focus_defer: OneShot::new(),
            tracker: SectionTracker::new(tracked_sections),
            phase: ScrollPhaseMachine::new(),
        }
    }

    /// Swap in a catalog that finished loading after mount, re-ranking
    /// any query typed in the meantime.
    pub fn install_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.rerank();
    }

    // ── Search ──────────────────────────────────────────────────────

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current ranked results.
    #[must_use]
    pub fn results(&self) -> &[RankedResult] {
        &self.results
    }

    /// Cursor position in the dropdown.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.cursor.selected()
    }

    /// Whether the dropdown is expanded.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the input has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Handle an input change: re-rank and reopen the dropdown.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.rerank();
    }

    fn rerank(&mut self) {
        self.results = rank(&self.query, self.catalog.entries());
        self.cursor.reset();
        self.expanded = !self.results.is_empty();
    }

    /// Arrow-down: move the cursor into or down the dropdown.
    pub fn key_down(&mut self) {
        self.cursor.move_down(self.results.len());
    }

    /// Arrow-up: move the cursor up, back out to no-selection.
    pub fn key_up(&mut self) {
        self.cursor.move_up();
    }

    /// Enter: commit the cursor's entry, closing the search UI.
    /// `None` without a selection.
    pub fn commit(&mut self, current_path: &str) -> Option<NavDirective> {
        let entry = self.cursor.pick(&self.results)?.entry.clone();
        self.cancel();
        Some(directive_for(&entry, current_path))
    }

    /// Mouse pick of a visible result row.
    pub fn pick(&mut self, index: usize, current_path: &str) -> Option<NavDirective> {
        let entry = self.results.get(index)?.entry.clone();
        self.cancel();
        Some(directive_for(&entry, current_path))
    }

    /// Escape or outside-click: clear the query and every transient flag.
    pub fn cancel(&mut self) {
        self.query.clear();
        self.results.clear();
        self.cursor.reset();
        self.expanded = false;
        self.focused = false;
        self.focus_defer.cancel();
    }

    /// Immediate focus (the input received a focus event).
    pub fn focus(&mut self) {
        self.focused = true;
        self.expanded = !self.results.is_empty();
    }

    /// Blur without clearing the query.
    pub fn blur(&mut self) {
        self.focused = false;
        self.expanded = false;
    }

    /// Request focus on the next poll (the deferred-focus pattern: the
    /// input element may not exist until after the current render).
    pub fn focus_soon(&mut self, now: Instant) {
        self.focus_defer.arm(now);
    }

    // ── Scroll ──────────────────────────────────────────────────────

    /// Currently highlighted nav section.
    #[must_use]
    pub fn active_section(&self) -> &str {
        self.tracker.active()
    }

    /// Current animation phase.
    #[must_use]
    pub fn scroll_phase(&self) -> ScrollPhase {
        self.phase.phase()
    }

    /// Handle one scroll event: update the nav highlight and the phase
    /// machine together.
    pub fn on_scroll(&mut self, geometry: &impl SectionGeometry, now: Instant) -> ScrollUpdate {
        let phase = self.phase.on_scroll(geometry.scroll_y(), now);
        let active_section = self.tracker.on_scroll(geometry).map(str::to_string);
        ScrollUpdate {
            active_section,
            phase,
        }
    }

    /// Plan the scroll for a nav pick (home goes to the top, sections
    /// land under the fixed header).
    #[must_use]
    pub fn scroll_target(
        &self,
        section_id: &str,
        geometry: &impl SectionGeometry,
    ) -> Option<ScrollCommand> {
        SectionTracker::scroll_target(section_id, geometry)
    }

    /// Advance deferred work: the phase reset and the deferred focus.
    /// Returns a phase change when the hide/show window expires.
    pub fn poll(&mut self, now: Instant) -> Option<ScrollPhase> {
        if self.focus_defer.fire(now) {
            self.focused = true;
        }
        self.phase.poll(now)
    }
}
