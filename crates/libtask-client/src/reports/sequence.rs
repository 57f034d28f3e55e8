//! Request Sequencing
//!
//! When a newer request is issued while an older one is in flight, the
//! older result must not overwrite fresher state. Each request takes a
//! ticket; only the latest ticket's result is delivered.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter; clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Take a ticket now and resolve to `None` if it was superseded by the
    /// time `fut` completes.
    pub fn track<F: Future>(&self, fut: F) -> impl Future<Output = Option<F::Output>> {
        let ticket = self.begin();
        let sequence = self.clone();
        async move {
            let output = fut.await;
            sequence.is_current(ticket).then_some(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_current(first));
        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let sequence = RequestSequence::new();
        let stale = sequence.track(async { "old filters" });
        let fresh = sequence.track(async { "new filters" });

        // the fresh request finishes first, the stale one afterwards
        assert_eq!(fresh.await, Some("new filters"));
        assert_eq!(stale.await, None);
    }

    #[tokio::test]
    async fn test_clones_share_generation() {
        let sequence = RequestSequence::new();
        let handle = sequence.clone();
        let pending = sequence.track(async { 1 });
        handle.begin();
        assert_eq!(pending.await, None);
    }
}
