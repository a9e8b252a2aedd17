//! End-to-end flows across mount, search, navigation, and scroll resume.

use sitenav::core::phase::{PHASE_RESET, ScrollPhase};
use sitenav::core::section::{ScrollCommand, SectionGeometry};
use sitenav::{
    MemorySessionStore, MountGuard, NavDirective, TopBar, load_catalog, stash_pending_section,
    take_pending_section,
};
use std::collections::HashMap;
use web_time::Instant;

const CATALOG_JSON: &str = r#"[
    {"id": "home", "label": "Home", "type": "page", "path": "/"},
    {"id": "portal", "label": "Operator Portal", "type": "section",
     "path": "/", "section": "operator-portal", "keywords": ["operators"], "priority": 60},
    {"id": "app", "label": "Mobile App", "type": "section",
     "path": "/", "section": "mobile-app", "keywords": ["download"], "priority": 70},
    {"id": "pay", "label": "Pay Now", "type": "action",
     "path": "https://pay.example.com", "priority": 90}
]"#;

struct FakeDom {
    scroll_y: f64,
    tops: HashMap<&'static str, f64>,
}

impl FakeDom {
    fn at(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            tops: [("operator-portal", 800.0), ("mobile-app", 1600.0)]
                .into_iter()
                .collect(),
        }
    }
}

impl SectionGeometry for FakeDom {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        self.tops.get(id).copied()
    }
}

#[test]
fn catalog_arrives_after_mount_and_search_works() {
    let now = Instant::now();
    let guard = MountGuard::new();
    let handle = guard.handle();

    let mut bar = TopBar::new(load_catalog(None), ["operator-portal", "mobile-app"]);
    bar.focus_soon(now);

    // Fetch completes while still mounted.
    let applied = handle.apply(|| {
        bar.install_catalog(load_catalog(Some(CATALOG_JSON)));
    });
    assert!(applied);

    bar.poll(now);
    assert!(bar.is_focused());

    bar.set_query("oper");
    assert_eq!(bar.results().len(), 1);
    assert_eq!(bar.results()[0].entry.id, "portal");
}

#[test]
fn teardown_discards_late_catalog() {
    let guard = MountGuard::new();
    let handle = guard.handle();
    drop(guard);

    let mut installed = false;
    assert!(!handle.apply(|| installed = true));
    assert!(!installed);
}

#[test]
fn cross_route_pick_resumes_scroll_on_destination() {
    let mut bar = TopBar::new(
        load_catalog(Some(CATALOG_JSON)),
        ["operator-portal", "mobile-app"],
    );
    let mut store = MemorySessionStore::new();

    // Pick a section entry while on another route.
    bar.set_query("mobile");
    bar.key_down();
    let directive = bar.commit("/pricing").unwrap();
    let NavDirective::RouteThenScroll { path, section } = directive else {
        panic!("expected RouteThenScroll, got {directive:?}");
    };
    assert_eq!(path, "/");
    stash_pending_section(&mut store, &section);

    // Destination page mounts, takes the flag once, and scrolls.
    let pending = take_pending_section(&mut store).unwrap();
    assert_eq!(pending, "mobile-app");
    assert_eq!(take_pending_section(&mut store), None);

    let dest = TopBar::new(
        load_catalog(Some(CATALOG_JSON)),
        ["operator-portal", "mobile-app"],
    );
    assert_eq!(
        dest.scroll_target(&pending, &FakeDom::at(0.0)),
        Some(ScrollCommand::ToOffset(1500.0))
    );
}

#[test]
fn scroll_session_drives_highlight_and_phases() {
    let t0 = Instant::now();
    let mut bar = TopBar::new(
        load_catalog(Some(CATALOG_JSON)),
        ["operator-portal", "mobile-app"],
    );

    // First observation on mount: quiet.
    let update = bar.on_scroll(&FakeDom::at(0.0), t0);
    assert_eq!(update.phase, None);
    assert_eq!(update.active_section, None);
    assert_eq!(bar.active_section(), "home");

    // Scroll into the first section.
    let update = bar.on_scroll(&FakeDom::at(900.0), t0);
    assert_eq!(update.phase, Some(ScrollPhase::Hide));
    assert_eq!(update.active_section.as_deref(), Some("operator-portal"));

    // Further scrolling on the same side: highlight moves, no new phase.
    let update = bar.on_scroll(&FakeDom::at(1700.0), t0);
    assert_eq!(update.phase, None);
    assert_eq!(update.active_section.as_deref(), Some("mobile-app"));

    // Phase window expires.
    assert_eq!(bar.poll(t0 + PHASE_RESET), Some(ScrollPhase::Idle));

    // Back to the very top: Show phase and forced home highlight.
    let t1 = t0 + PHASE_RESET + PHASE_RESET;
    let update = bar.on_scroll(&FakeDom::at(10.0), t1);
    assert_eq!(update.phase, Some(ScrollPhase::Show));
    assert_eq!(update.active_section.as_deref(), Some("home"));
}

#[test]
fn external_pick_opens_new_context_without_touching_storage() {
    let mut bar = TopBar::new(load_catalog(Some(CATALOG_JSON)), ["operator-portal"]);
    let mut store = MemorySessionStore::new();

    bar.set_query("pay now");
    let directive = bar.pick(0, "/").unwrap();
    assert_eq!(
        directive,
        NavDirective::OpenExternal {
            url: "https://pay.example.com".into()
        }
    );
    assert_eq!(take_pending_section(&mut store), None);
}
