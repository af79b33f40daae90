//! Generation counter that decides which responses may touch the view.

use std::fmt;

/// Identity of one dispatched classification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mints request ids and filters stale responses.
///
/// Only the response for the most recently minted id is accepted, and only
/// once. In-flight requests are never cancelled; their responses are simply
/// dropped when they arrive.
#[derive(Debug, Clone)]
pub struct RequestSequencer {
    latest: u64,
    settled: bool,
}

impl Default for RequestSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self {
            latest: 0,
            settled: true,
        }
    }

    /// Mint the id for a new request.
    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        self.settled = false;
        RequestId(self.latest)
    }

    /// Returns true if the response for `id` should be applied.
    pub fn accept(&mut self, id: RequestId) -> bool {
        if self.settled || id.0 != self.latest {
            return false;
        }
        self.settled = true;
        true
    }

    /// Make every outstanding request stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.settled = true;
    }

    /// Highest id minted so far.
    pub fn latest(&self) -> Option<RequestId> {
        (self.latest > 0).then_some(RequestId(self.latest))
    }

    /// True while the latest request has neither been accepted nor invalidated.
    pub fn is_outstanding(&self) -> bool {
        !self.settled
    }
}
