//! Stable per-instance identifiers.
//!
//! Widgets that own render-time resources (gradients, masks) need ids that are
//! unique per instance and stable across repaints. The host supplies an
//! [`IdSource`]; a widget draws exactly one id from it when constructed.

use crate::widget::WidgetId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Capability for allocating widget identities.
pub trait IdSource: Send + Sync {
    /// Allocate a fresh identity. Never returns the same id twice.
    fn next_id(&self) -> WidgetId;
}

/// Monotonic counter starting at 1.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Create a counter whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a counter whose first id is `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> WidgetId {
        WidgetId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

static PROCESS_IDS: SequentialIds = SequentialIds::new();

/// Process-wide id source for hosts that do not provide their own.
#[must_use]
pub fn global_ids() -> &'static SequentialIds {
    &PROCESS_IDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_sequential_ids_start_at_one() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id(), WidgetId::new(1));
        assert_eq!(ids.next_id(), WidgetId::new(2));
    }

    #[test]
    fn test_starting_at() {
        let ids = SequentialIds::starting_at(100);
        assert_eq!(ids.next_id().0, 100);
    }

    #[test]
    fn test_global_ids_are_unique() {
        let a = global_ids().next_id();
        let b = global_ids().next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let ids = Arc::new(SequentialIds::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();
        let mut seen = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
