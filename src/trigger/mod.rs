//! Decides when an edit turns into a classification request.
//!
//! The policy is a pure state machine: the caller passes the current
//! `Instant` in, which keeps debounce behaviour testable without sleeping.
//!
//! ```text
//! edit ──→ blank? ──yes──→ Reset
//!            │
//!            no ──→ Immediate ──→ Dispatch(text)
//!            │
//!            └───→ Debounced ──→ Scheduled ──(window elapsed, poll)──→ text
//! ```

use std::time::{Duration, Instant};

/// How edits are turned into dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Every non-blank edit dispatches.
    Immediate,
    /// Dispatch once `window` passes without another edit.
    Debounced { window: Duration },
}

impl TriggerMode {
    /// Short label for the header.
    pub fn describe(&self) -> String {
        match self {
            TriggerMode::Immediate => "immediate".to_string(),
            TriggerMode::Debounced { window } => {
                format!("debounced {}ms", window.as_millis())
            }
        }
    }
}

/// Outcome of feeding one edit to the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerDecision {
    /// Classify this text now.
    Dispatch(String),
    /// Text is held until the debounce window elapses.
    Scheduled,
    /// Text is blank: return to idle and drop any pending work.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingDispatch {
    text: String,
    last_edit: Instant,
}

/// Trigger policy state.
#[derive(Debug, Clone)]
pub struct TriggerPolicy {
    mode: TriggerMode,
    pending: Option<PendingDispatch>,
}

impl TriggerPolicy {
    pub fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            pending: None,
        }
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Feed an edit. The newest edit always replaces any held text.
    pub fn on_edit(&mut self, text: &str, now: Instant) -> TriggerDecision {
        if text.trim().is_empty() {
            self.pending = None;
            return TriggerDecision::Reset;
        }

        match self.mode {
            TriggerMode::Immediate => TriggerDecision::Dispatch(text.to_string()),
            TriggerMode::Debounced { .. } => {
                self.pending = Some(PendingDispatch {
                    text: text.to_string(),
                    last_edit: now,
                });
                TriggerDecision::Scheduled
            }
        }
    }

    /// Release held text whose quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let deadline = self.next_deadline()?;
        if now < deadline {
            return None;
        }
        self.pending.take().map(|pending| pending.text)
    }

    /// When held text becomes due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        let pending = self.pending.as_ref()?;
        match self.mode {
            TriggerMode::Immediate => None,
            TriggerMode::Debounced { window } => Some(pending.last_edit + window),
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Dispatch `text` right away regardless of mode (manual re-analyze).
    pub fn flush(&mut self, text: &str) -> TriggerDecision {
        self.pending = None;
        if text.trim().is_empty() {
            TriggerDecision::Reset
        } else {
            TriggerDecision::Dispatch(text.to_string())
        }
    }
}
