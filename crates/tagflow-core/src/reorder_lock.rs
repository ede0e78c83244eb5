#![forbid(unsafe_code)]

//! Reorder lock: suppresses further swaps while a swap's layout transition
//! is still on screen.
//!
//! After every swap the lock is [`engage`](ReorderLock::engage)d for the
//! animation window. It is released by whichever comes first:
//!
//! - the window elapsing, observed through [`poll`](ReorderLock::poll)
//!   (the deferred-timer path), or
//! - an explicit [`release`](ReorderLock::release) carrying an
//!   [`AnimationToken`] (timer fire or animation-completion signal from the
//!   host).
//!
//! # Invariants
//!
//! 1. Every `engage` hands out a fresh token; tokens are never reused.
//! 2. In [`ReenableMode::Token`] only the token of the latest `engage`
//!    releases the lock; stale tokens are ignored.
//! 3. In [`ReenableMode::FixedDelay`] any release re-enables, matching a
//!    plain deferred callback.
//! 4. Releasing an already-released lock is harmless.
//!
//! # Failure Modes
//!
//! The deadline is fixed at engage time. A host whose transition runs longer
//! than the configured duration may see a new swap accepted before the
//! previous one finished drawing.

use std::time::Duration;

use web_time::Instant;

use crate::config::ReenableMode;

/// Identifies one engagement of the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationToken(u64);

impl AnimationToken {
    /// Raw sequence number.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Swap suppression window.
#[derive(Debug, Clone)]
pub struct ReorderLock {
    duration: Duration,
    mode: ReenableMode,
    deadline: Option<Instant>,
    current: Option<AnimationToken>,
    next_token: u64,
}

impl ReorderLock {
    /// Create a released lock with the given window and re-enable mode.
    #[must_use]
    pub fn new(duration: Duration, mode: ReenableMode) -> Self {
        Self {
            duration,
            mode,
            deadline: None,
            current: None,
            next_token: 0,
        }
    }

    /// Whether swaps are currently allowed.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.current.is_none()
    }

    /// Engage the lock at `now`, returning the token for this window.
    pub fn engage(&mut self, now: Instant) -> AnimationToken {
        self.next_token += 1;
        let token = AnimationToken(self.next_token);
        self.current = Some(token);
        self.deadline = Some(now + self.duration);
        token
    }

    /// Release the lock if its window has elapsed at `now`.
    ///
    /// Returns `true` if this call re-enabled swaps.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Release the lock for `token`.
    ///
    /// Returns `true` if this call re-enabled swaps.
    pub fn release(&mut self, token: AnimationToken) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        if self.mode == ReenableMode::Token && current != token {
            return false;
        }
        self.clear();
        true
    }

    /// Token of the engagement currently holding the lock.
    #[inline]
    #[must_use]
    pub fn current_token(&self) -> Option<AnimationToken> {
        self.current
    }

    /// When the current window ends, if engaged.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Configured window length.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Re-enable mode.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> ReenableMode {
        self.mode
    }

    fn clear(&mut self) {
        self.current = None;
        self.deadline = None;
    }
}
