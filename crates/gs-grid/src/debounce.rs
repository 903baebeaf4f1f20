//! A keyed, cancellable debouncer.
//!
//! [`Debouncer`] holds at most one pending value per key. Arming a key again
//! replaces the pending value and restarts its quiet period, so only the last
//! write is ever delivered. The debouncer never spawns: the owner passes the
//! current [`Instant`] in and collects due values with
//! [`Debouncer::fire_due`].

use std::hash::Hash;
use std::time::{Duration, Instant};

use gs_core::{FxHashMap, fx_hash_map};

#[derive(Debug, Clone)]
struct Pending<V> {
    value: V,
    due: Instant,
}

/// Last-write-wins debouncer keyed by `K`.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use gs_grid::Debouncer;
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(300));
/// let start = Instant::now();
///
/// debouncer.arm("severity", "c", start);
/// debouncer.arm("severity", "cr", start + Duration::from_millis(100));
///
/// assert!(debouncer.fire_due(start + Duration::from_millis(350)).is_empty());
/// let fired = debouncer.fire_due(start + Duration::from_millis(400));
/// assert_eq!(fired, vec![("severity", "cr")]);
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<K, V> {
    delay: Duration,
    pending: FxHashMap<K, Pending<V>>,
}

impl<K: Eq + Hash + Clone, V> Debouncer<K, V> {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: fx_hash_map(),
        }
    }

    /// Arms `key` with `value`, replacing any pending value for it.
    pub fn arm(&mut self, key: K, value: V, now: Instant) {
        let due = now + self.delay;
        self.pending.insert(key, Pending { value, due });
    }

    /// Drops the pending value for `key` without delivering it.
    pub fn cancel(&mut self, key: &K) -> Option<V> {
        self.pending.remove(key).map(|p| p.value)
    }

    /// Drops every pending value.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Delivers the pending value for `key` now, ignoring its deadline.
    pub fn flush(&mut self, key: &K) -> Option<V> {
        self.cancel(key)
    }

    /// Removes and returns every value whose deadline has passed, oldest
    /// deadline first.
    pub fn fire_due(&mut self, now: Instant) -> Vec<(K, V)> {
        let due_keys: Vec<K> = self
            .pending
            .iter()
            .filter(|(_, pending)| pending.due <= now)
            .map(|(key, _)| key.clone())
            .collect();

        let mut fired: Vec<(Instant, K, V)> = due_keys
            .into_iter()
            .filter_map(|key| {
                self.pending
                    .remove(&key)
                    .map(|pending| (pending.due, key, pending.value))
            })
            .collect();
        fired.sort_by_key(|(due, _, _)| *due);
        fired.into_iter().map(|(_, key, value)| (key, value)).collect()
    }

    /// Returns the pending value for `key`.
    #[must_use]
    pub fn pending(&self, key: &K) -> Option<&V> {
        self.pending.get(key).map(|p| &p.value)
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
