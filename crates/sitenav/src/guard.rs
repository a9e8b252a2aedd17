//! Mount guard for the asynchronous asset load.
//!
//! The catalog fetch is the one async boundary in the system. The
//! component owns a [`MountGuard`] and hands a [`MountHandle`] to the
//! fetch completion; if teardown drops the guard first, the completion's
//! [`apply`](MountHandle::apply) becomes a no-op and the fetched payload
//! is discarded. Cancellation means dropping the result, not aborting the
//! request.
//!
//! Single-threaded `Rc<Cell<bool>>` sharing: all completions run on the
//! same event loop as the component.

use std::cell::Cell;
use std::rc::Rc;

/// Alive flag owned by the mounted component. Dropping it (or calling
/// [`dismiss`](Self::dismiss)) invalidates every outstanding handle.
#[derive(Debug)]
pub struct MountGuard {
    alive: Rc<Cell<bool>>,
}

impl MountGuard {
    /// A live guard for a freshly mounted component.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    /// Hand out a handle for an async completion to hold.
    #[must_use]
    pub fn handle(&self) -> MountHandle {
        MountHandle {
            alive: Rc::clone(&self.alive),
        }
    }

    /// Explicitly invalidate all handles before the guard is dropped.
    pub fn dismiss(&self) {
        self.alive.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

/// Completion-side view of a [`MountGuard`].
#[derive(Debug, Clone)]
pub struct MountHandle {
    alive: Rc<Cell<bool>>,
}

impl MountHandle {
    /// Whether the component is still mounted.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.alive.get()
    }

    /// Run `f` only while the component is mounted. Returns whether it ran.
    pub fn apply<F: FnOnce()>(&self, f: F) -> bool {
        if self.is_live() {
            f();
            true
        } else {
            tracing::debug!("async result discarded after teardown");
            false
        }
    }
}
