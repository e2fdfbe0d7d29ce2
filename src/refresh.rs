// 8.0: sequence-token guard for async price refreshes. every request gets a
// monotonically increasing token; only a response newer than the last
// committed one may update the displayed value. a stale response arriving
// after a newer one is discarded, never applied. this is the single
// concurrency hazard in scope; cancellation and timeouts belong to the
// network layer that owns the fetch.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct RefreshGate<T> {
    next_token: u64,
    committed: Option<(RequestToken, T)>,
}

impl<T> Default for RefreshGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RefreshGate<T> {
    pub fn new() -> Self {
        Self {
            next_token: 0,
            committed: None,
        }
    }

    /// Tag an outgoing request. Tokens only ever increase.
    pub fn issue(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    /// Offer a response for display. Returns true if it was applied, false
    /// if a newer response already landed and this one was discarded.
    pub fn commit(&mut self, token: RequestToken, value: T) -> bool {
        if let Some((latest, _)) = &self.committed {
            if token <= *latest {
                return false;
            }
        }
        self.committed = Some((token, value));
        true
    }

    /// The value the UI should display right now.
    pub fn latest(&self) -> Option<&T> {
        self.committed.as_ref().map(|(_, v)| v)
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        self.committed.as_ref().map(|(t, _)| *t)
    }
}
