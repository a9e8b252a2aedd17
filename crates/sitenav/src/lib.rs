#![forbid(unsafe_code)]

//! Host-driven navigation layer for a marketing-site front end.
//!
//! This crate composes the pure state machines from [`sitenav_core`] into
//! the component-scoped pieces a web host actually mounts:
//!
//! - [`topbar`]: the top-bar controller (search, dropdown cursor, section
//!   highlight, hide/show phases).
//! - [`assets`]: catalog and feature-grid loading with graceful
//!   degradation on fetch or parse failure.
//! - [`guard`]: the mount guard that discards async results after
//!   teardown.
//! - [`resume`]: the single session flag that resumes a scroll across a
//!   route change.
//!
//! The host owns the event loop: it forwards DOM events (input, keydown,
//! scroll), calls [`topbar::TopBar::poll`] each frame for deferred work,
//! and executes the returned commands.

pub mod assets;
pub mod guard;
pub mod resume;
pub mod topbar;

pub use assets::{load_catalog, load_features};
pub use guard::{MountGuard, MountHandle};
pub use resume::{
    MemorySessionStore, PENDING_SECTION_KEY, SessionStore, stash_pending_section,
    take_pending_section,
};
pub use topbar::{NavDirective, ScrollUpdate, TopBar, directive_for};

pub use sitenav_core as core;
