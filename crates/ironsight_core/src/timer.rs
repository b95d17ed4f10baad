//! Purpose-keyed timers
//!
//! Each component owns a `TimerSet` keyed by an enum of its timer purposes
//! (fire cooldown, reload, interp, stun, ...). Scheduling a key that is
//! already pending replaces it: last scheduler wins, nothing accumulates.
//! Time only advances through [`TimerSet::update`], which returns the keys
//! that expired during that step so the owner can run their callbacks.

use core::fmt::Debug;

#[derive(Debug, Clone)]
struct TimerEntry<K> {
    key: K,
    duration: f32,
    elapsed: f32,
}

impl<K> TimerEntry<K> {
    fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }
}

/// A small set of one-shot timers keyed by purpose
#[derive(Debug, Clone)]
pub struct TimerSet<K> {
    entries: Vec<TimerEntry<K>>,
}

impl<K> Default for TimerSet<K> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K: Copy + Eq + Debug> TimerSet<K> {
    /// Create an empty timer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire after `duration` seconds, replacing any pending
    /// timer with the same key. Negative durations fire on the next update.
    pub fn schedule(&mut self, key: K, duration: f32) {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        if self.cancel(key) {
            log::trace!("Rescheduled timer {:?} ({}s)", key, duration);
        }
        self.entries.push(TimerEntry {
            key,
            duration,
            elapsed: 0.0,
        });
    }

    /// Cancel a pending timer. Returns true if one was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        self.entries.len() != before
    }

    /// Cancel every pending timer
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Check if a timer is pending
    pub fn is_active(&self, key: K) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Seconds since the timer was scheduled, if pending
    pub fn elapsed(&self, key: K) -> Option<f32> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.elapsed)
    }

    /// Seconds until the timer fires, if pending
    pub fn remaining(&self, key: K) -> Option<f32> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.remaining())
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance all timers and return the keys that expired, earliest first
    pub fn update(&mut self, delta_time: f32) -> Vec<K> {
        let mut expired: Vec<(f32, K)> = Vec::new();
        self.entries.retain_mut(|e| {
            let remaining_before = e.remaining();
            e.elapsed += delta_time;
            if e.elapsed >= e.duration {
                expired.push((remaining_before, e.key));
                false
            } else {
                true
            }
        });
        expired.sort_by(|a, b| a.0.total_cmp(&b.0));
        expired.into_iter().map(|(_, key)| key).collect()
    }
}
