//! Scroll-threshold animation phases for the top bar.
//!
//! Crossing [`SCROLLED_THRESHOLD_PX`] downward enters [`ScrollPhase::Hide`],
//! crossing back up enters [`ScrollPhase::Show`]; either way a one-shot
//! deadline reverts the phase to [`ScrollPhase::Idle`] after
//! [`PHASE_RESET`]. The machine is poll driven: the host calls
//! [`ScrollPhaseMachine::poll`] from its frame/event loop instead of owning
//! an OS timer, so teardown is just dropping the state and nothing can fire
//! against a dead component.
//!
//! The first scroll observation after construction only records which side
//! of the threshold the page is on; no phase transition fires on mount,
//! even when the page is restored mid-scroll.

use web_time::{Duration, Instant};

/// Scroll distance from the top that counts as "scrolled".
pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// How long a hide/show phase lasts before reverting to idle.
pub const PHASE_RESET: Duration = Duration::from_millis(450);

/// Transient animation phase bracketing a threshold crossing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    /// No crossing in flight.
    #[default]
    Idle,
    /// The page just crossed downward past the threshold.
    Hide,
    /// The page just crossed back up above the threshold.
    Show,
}

/// A single-fire deadline. Re-arming replaces any pending deadline;
/// [`fire`](Self::fire) returns `true` at most once per arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    /// A disarmed one-shot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the deadline.
    pub fn arm(&mut self, deadline: Instant) {
        self.deadline = Some(deadline);
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the deadline has passed, disarming in the process.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// State machine driving the top bar's hide/show animation classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollPhaseMachine {
    phase: ScrollPhase,
    scrolled: Option<bool>,
    reset: OneShot,
}

impl ScrollPhaseMachine {
    /// A machine that has not yet observed a scroll position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Whether the last observed position was past the threshold.
    /// `false` before the first observation.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled.unwrap_or(false)
    }

    /// Observe a scroll position. Returns the new phase when a threshold
    /// crossing fires a transition; the very first observation never
    /// transitions.
    pub fn on_scroll(&mut self, scroll_y: f64, now: Instant) -> Option<ScrollPhase> {
        let scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
        let prev = self.scrolled.replace(scrolled);
        match prev {
            None => None,
            Some(was) if was == scrolled => None,
            Some(_) => {
                self.phase = if scrolled {
                    ScrollPhase::Hide
                } else {
                    ScrollPhase::Show
                };
                self.reset.arm(now + PHASE_RESET);
                Some(self.phase)
            }
        }
    }

    /// Advance time. Returns `Some(Idle)` exactly once when the pending
    /// phase expires.
    pub fn poll(&mut self, now: Instant) -> Option<ScrollPhase> {
        if self.reset.fire(now) {
            self.phase = ScrollPhase::Idle;
            Some(ScrollPhase::Idle)
        } else {
            None
        }
    }
}
