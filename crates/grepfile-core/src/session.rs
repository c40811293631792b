//! Settle-once lifecycle for one query.
//!
//! ```text
//! Idle ──begin──▶ Streaming ──┬─ resolve ──▶ Resolved
//!   │                         ├─ reject  ──▶ Rejected
//!   └──── (any settle) ───────┴─ cancel  ──▶ Cancelled
//! ```
//!
//! The three terminal states are mutually exclusive. Whichever settle call
//! lands first wins the compare-and-swap; every later call returns `false`
//! and changes nothing, so racing completion paths (a `sources` record
//! arriving in the same tick as a cancel) settle the session exactly once.

use std::sync::atomic::{AtomicU8, Ordering};

/// Observable state of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Streaming,
    Resolved,
    Rejected,
    Cancelled,
}

impl SessionState {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => SessionState::Idle,
            1 => SessionState::Streaming,
            2 => SessionState::Resolved,
            3 => SessionState::Rejected,
            _ => SessionState::Cancelled,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            SessionState::Idle => 0,
            SessionState::Streaming => 1,
            SessionState::Resolved => 2,
            SessionState::Rejected => 3,
            SessionState::Cancelled => 4,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SessionState::Resolved | SessionState::Rejected | SessionState::Cancelled
        )
    }
}

/// Per-query state guard. Shareable by reference across tasks.
#[derive(Debug)]
pub struct Session {
    state: AtomicU8,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(SessionState::Idle.as_u8()),
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_settled(&self) -> bool {
        self.state().is_terminal()
    }

    /// Idle → Streaming. Returns `false` if the session already left Idle.
    pub fn begin(&self) -> bool {
        self.state
            .compare_exchange(
                SessionState::Idle.as_u8(),
                SessionState::Streaming.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    pub fn resolve(&self) -> bool {
        self.settle(SessionState::Resolved)
    }

    pub fn reject(&self) -> bool {
        self.settle(SessionState::Rejected)
    }

    pub fn cancel(&self) -> bool {
        self.settle(SessionState::Cancelled)
    }

    fn settle(&self, target: SessionState) -> bool {
        let mut current = self.state.load(Ordering::Acquire);
        loop {
            if SessionState::from_u8(current).is_terminal() {
                return false;
            }
            match self.state.compare_exchange_weak(
                current,
                target.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }
}
