//! Deferred marker clears.
//!
//! Each timer remembers the item id it was armed for. When it fires, the
//! main loop sends [`Event::MarkerExpired`](crate::app::Event::MarkerExpired)
//! with that id and the handler decides whether the marker still matches.

use std::time::{Duration, Instant};

/// Pending one-shot timers, each tagged with an item id.
#[derive(Debug, Default)]
pub struct MarkerTimers {
    pending: Vec<(Instant, String)>,
}

impl MarkerTimers {
    /// Arms a timer firing `after` from `now`.
    pub fn schedule(&mut self, id: impl Into<String>, after: Duration, now: Instant) {
        self.pending.push((now + after, id.into()));
    }

    /// Removes and returns the ids of every timer due at `now`, oldest first.
    pub fn due(&mut self, now: Instant) -> Vec<String> {
        let mut fired: Vec<(Instant, String)> = Vec::new();
        self.pending.retain(|(deadline, id)| {
            if *deadline <= now {
                fired.push((*deadline, id.clone()));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|(deadline, _)| *deadline);
        fired.into_iter().map(|(_, id)| id).collect()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(deadline, _)| *deadline).min()
    }

    /// How long the loop may block before the next timer is due.
    #[must_use]
    pub fn wait_from(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order_once() {
        let start = Instant::now();
        let mut timers = MarkerTimers::default();
        timers.schedule("b", Duration::from_millis(200), start);
        timers.schedule("a", Duration::from_millis(100), start);
        timers.schedule("c", Duration::from_millis(900), start);

        assert!(timers.due(start).is_empty());
        assert_eq!(timers.wait_from(start), Some(Duration::from_millis(100)));

        let fired = timers.due(start + Duration::from_millis(300));
        assert_eq!(fired, vec!["a".to_string(), "b".to_string()]);
        assert!(timers.due(start + Duration::from_millis(300)).is_empty());
        assert_eq!(timers.next_deadline(), Some(start + Duration::from_millis(900)));
    }

    #[test]
    fn same_id_can_be_armed_twice() {
        let start = Instant::now();
        let mut timers = MarkerTimers::default();
        timers.schedule("a", Duration::from_millis(300), start);
        timers.schedule("a", Duration::from_millis(300), start + Duration::from_millis(100));

        assert_eq!(timers.due(start + Duration::from_millis(300)), vec!["a".to_string()]);
        assert!(!timers.is_empty());
        assert_eq!(timers.due(start + Duration::from_millis(400)), vec!["a".to_string()]);
        assert!(timers.is_empty());
    }
}
