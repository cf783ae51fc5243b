//! Latest-request-wins state for async service calls.
//!
//! Each request takes a ticket from a monotonically increasing sequence.
//! A completion is applied only while its ticket is still the newest one
//! issued for the slot, so a slow, superseded response can never overwrite
//! the result of a request started after it.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

/// Proof that a request was started through a [`RequestSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Observable state of a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotState<T> {
    /// Last successfully applied value.
    pub value: Option<T>,
    /// Message of the last applied failure, cleared when a request starts.
    pub error: Option<String>,
    /// Whether the newest request is still outstanding.
    pub in_flight: bool,
    latest: u64,
}

impl<T> Default for SlotState<T> {
    fn default() -> Self {
        Self {
            value: None,
            error: None,
            in_flight: false,
            latest: 0,
        }
    }
}

/// Holds the result of the most recent request of one kind.
#[derive(Debug)]
pub struct RequestSlot<T> {
    name: &'static str,
    next_seq: AtomicU64,
    state: RwLock<SlotState<T>>,
}

impl<T: Clone> RequestSlot<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next_seq: AtomicU64::new(1),
            state: RwLock::new(SlotState::default()),
        }
    }

    /// Start a request, keeping the previous value visible until it completes.
    pub async fn begin(&self) -> RequestTicket {
        self.start(false).await
    }

    /// Start a request and drop the previous value immediately.
    pub async fn begin_replacing(&self) -> RequestTicket {
        self.start(true).await
    }

    async fn start(&self, clear_value: bool) -> RequestTicket {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let mut state = self.state.write().await;
        // Tickets can reach the lock out of order; never move `latest` backwards.
        if seq > state.latest {
            state.latest = seq;
            state.in_flight = true;
            state.error = None;
            if clear_value {
                state.value = None;
            }
        }
        RequestTicket { seq }
    }

    /// Apply a successful response. Returns `false` when the ticket was superseded.
    pub async fn complete(&self, ticket: RequestTicket, value: T) -> bool {
        self.finish(ticket, |state| state.value = Some(value)).await
    }

    /// Apply a failure. Returns `false` when the ticket was superseded.
    pub async fn fail(&self, ticket: RequestTicket, message: impl Into<String>) -> bool {
        let message = message.into();
        self.finish(ticket, |state| state.error = Some(message)).await
    }

    async fn finish(&self, ticket: RequestTicket, apply: impl FnOnce(&mut SlotState<T>)) -> bool {
        let mut state = self.state.write().await;
        if ticket.seq != state.latest {
            debug!(
                slot = self.name,
                ticket = ticket.seq,
                latest = state.latest,
                "discarding superseded response"
            );
            return false;
        }
        apply(&mut *state);
        state.in_flight = false;
        true
    }

    /// Forget value and error. Outstanding tickets become stale.
    pub async fn reset(&self) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let mut state = self.state.write().await;
        *state = SlotState {
            latest: seq.max(state.latest),
            ..SlotState::default()
        };
    }

    pub async fn snapshot(&self) -> SlotState<T> {
        self.state.read().await.clone()
    }

    pub async fn value(&self) -> Option<T> {
        self.state.read().await.value.clone()
    }
}
