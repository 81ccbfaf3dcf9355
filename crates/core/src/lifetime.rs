//! Process-wide lifetime accounting for tracked entities.
//!
//! Every work item (and every [`Named`](crate::Named) label) embeds a
//! [`Tracked`] guard. The guard registers itself when it is created or cloned
//! and unregisters when dropped, so [`count`] reports how many tracked
//! entities are alive.
//!
//! Copy-assignment through [`Clone::clone_from`] registers the target again
//! without unregistering anything. Once assignment is used the counter is a
//! cumulative activity counter rather than a strict live count.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Zero at process start, never reset.
static LIVE_OBJECTS: AtomicUsize = AtomicUsize::new(0);

/// Increment the global counter.
pub fn register() {
    LIVE_OBJECTS.fetch_add(1, Ordering::Relaxed);
}

/// Decrement the global counter.
pub fn unregister() {
    let previous = LIVE_OBJECTS.fetch_sub(1, Ordering::Relaxed);
    debug_assert!(previous > 0, "unregister without matching register");
}

/// Current value of the global counter.
pub fn count() -> usize {
    LIVE_OBJECTS.load(Ordering::Relaxed)
}

/// Lifetime guard embedded in tracked entities.
#[derive(Debug)]
pub struct Tracked(());

impl Tracked {
    /// Register a newly constructed entity.
    pub fn new() -> Self {
        register();
        Self(())
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new()
    }

    /// Assignment counts as a registration of the target.
    fn clone_from(&mut self, _source: &Self) {
        register();
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        unregister();
    }
}
