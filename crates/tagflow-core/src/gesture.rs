#![forbid(unsafe_code)]

//! Pan-gesture plumbing: turns raw pointer samples into responder callbacks.
//!
//! A host toolkit delivers [`PointerSample`]s (down, move, up, cancel) with
//! screen coordinates and the number of active touch points. The
//! [`GestureTracker`] accumulates them into a [`GestureState`] (cumulative
//! displacement since the gesture started plus the latest pointer position)
//! and drives a [`PanResponder`] through its lifecycle.
//!
//! # State Machine
//!
//! ```text
//!   Idle ──Down──▶ Tracking ──Move + should_claim──▶ Claimed
//!                     │                               │  Move ─▶ on_move
//!                     │ Up / Cancel                   │  Up   ─▶ on_release
//!                     ▼                               │  Cancel ─▶ on_terminate
//!                   Idle ◀────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. `on_grant` is called exactly once per claimed gesture, before any
//!    `on_move` of that gesture.
//! 2. A claimed gesture ends with exactly one of `on_release` or
//!    `on_terminate`.
//! 3. An unclaimed gesture produces no responder calls beyond `should_claim`;
//!    its `Up` is left to the element's own press handler (the tap path).
//! 4. After [`GestureTracker::reset`] the tracker is idle.
//!
//! # Failure Modes
//!
//! - `Move` without a prior `Down` starts tracking at that sample, so the
//!   first displacement is zero and the gesture cannot be claimed on it.
//! - `Up`/`Cancel` while idle are ignored.

use web_time::Instant;

// ---------------------------------------------------------------------------
// Samples and state
// ---------------------------------------------------------------------------

/// Phase of a raw pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// A touch point went down.
    Down,
    /// A touch point moved.
    Move,
    /// The last touch point was lifted.
    Up,
    /// The host cancelled the gesture (e.g. a parent scroll view took over).
    Cancel,
}

/// One raw pointer sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub phase: PointerPhase,
    /// Screen x of the primary touch point.
    pub x: f32,
    /// Screen y of the primary touch point.
    pub y: f32,
    /// Number of touch points currently on the screen.
    pub active_touches: u8,
}

impl PointerSample {
    /// Single-touch sample.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            x,
            y,
            active_touches: 1,
        }
    }

    /// Override the active touch count.
    #[must_use]
    pub const fn with_touches(mut self, active_touches: u8) -> Self {
        self.active_touches = active_touches;
        self
    }

    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, x, y).with_touches(0)
    }

    pub const fn cancel() -> Self {
        Self::new(PointerPhase::Cancel, 0.0, 0.0).with_touches(0)
    }
}

/// Accumulated state of an in-progress pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    /// Cumulative x displacement since the gesture started.
    pub dx: f32,
    /// Cumulative y displacement since the gesture started.
    pub dy: f32,
    /// Latest screen x of the pointer.
    pub move_x: f32,
    /// Latest screen y of the pointer.
    pub move_y: f32,
    /// Number of touch points currently active.
    pub number_active_touches: u8,
}

impl GestureState {
    /// Whether the pointer moved at all since the gesture started.
    #[inline]
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.dx != 0.0 || self.dy != 0.0
    }

    /// Whether exactly one touch point is active.
    #[inline]
    #[must_use]
    pub fn is_single_touch(&self) -> bool {
        self.number_active_touches == 1
    }
}

// ---------------------------------------------------------------------------
// Responder
// ---------------------------------------------------------------------------

/// A component that can take ownership of a pan gesture.
///
/// Mirrors the responder contract of touch toolkits: the tracker asks
/// [`should_claim`](PanResponder::should_claim) on every move of an unclaimed
/// gesture; once it answers `true` the responder owns the gesture until
/// release or termination.
pub trait PanResponder {
    /// Notification produced when a gesture ends.
    type Output;

    /// Decide whether to take the gesture described by `gesture`.
    fn should_claim(&mut self, gesture: &GestureState) -> bool;

    /// The gesture was granted to this responder.
    fn on_grant(&mut self, now: Instant);

    /// The pointer moved while this responder owns the gesture.
    fn on_move(&mut self, gesture: &GestureState, now: Instant);

    /// The pointer was lifted.
    fn on_release(&mut self, gesture: &GestureState, now: Instant) -> Option<Self::Output>;

    /// The host took the gesture away.
    fn on_terminate(&mut self, now: Instant);
}

// ---------------------------------------------------------------------------
// GestureTracker
// ---------------------------------------------------------------------------

/// Converts raw pointer samples into [`PanResponder`] calls.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    start: Option<(f32, f32)>,
    state: GestureState,
    claimed: bool,
}

impl GestureTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one raw sample, forwarding to `responder` as needed.
    ///
    /// Returns the responder's output when a claimed gesture is released.
    pub fn process<R: PanResponder>(
        &mut self,
        sample: &PointerSample,
        responder: &mut R,
        now: Instant,
    ) -> Option<R::Output> {
        match sample.phase {
            PointerPhase::Down => {
                self.on_down(sample);
                None
            }
            PointerPhase::Move => {
                self.on_move(sample, responder, now);
                None
            }
            PointerPhase::Up => self.on_up(sample, responder, now),
            PointerPhase::Cancel => {
                if self.claimed {
                    responder.on_terminate(now);
                }
                self.reset();
                None
            }
        }
    }

    /// Whether the current gesture has been claimed by the responder.
    #[inline]
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Whether a gesture is being tracked at all.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Latest accumulated gesture state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Return to idle without notifying anyone.
    pub fn reset(&mut self) {
        self.start = None;
        self.state = GestureState::default();
        self.claimed = false;
    }

    fn on_down(&mut self, sample: &PointerSample) {
        if self.start.is_none() {
            self.start = Some((sample.x, sample.y));
            self.state = GestureState {
                dx: 0.0,
                dy: 0.0,
                move_x: sample.x,
                move_y: sample.y,
                number_active_touches: sample.active_touches,
            };
        } else {
            // Additional finger on an ongoing gesture.
            self.state.number_active_touches = sample.active_touches;
        }
    }

    fn on_move<R: PanResponder>(&mut self, sample: &PointerSample, responder: &mut R, now: Instant) {
        let Some((sx, sy)) = self.start else {
            self.on_down(sample);
            return;
        };

        self.state = GestureState {
            dx: sample.x - sx,
            dy: sample.y - sy,
            move_x: sample.x,
            move_y: sample.y,
            number_active_touches: sample.active_touches,
        };

        if !self.claimed {
            if !responder.should_claim(&self.state) {
                return;
            }
            self.claimed = true;
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target: "tagflow.gesture",
                x = sample.x,
                y = sample.y,
                "gesture claimed"
            );
            responder.on_grant(now);
        }

        responder.on_move(&self.state, now);
    }

    fn on_up<R: PanResponder>(
        &mut self,
        sample: &PointerSample,
        responder: &mut R,
        now: Instant,
    ) -> Option<R::Output> {
        let Some((sx, sy)) = self.start else {
            return None;
        };
        let claimed = self.claimed;
        let state = GestureState {
            dx: sample.x - sx,
            dy: sample.y - sy,
            move_x: sample.x,
            move_y: sample.y,
            number_active_touches: sample.active_touches,
        };
        self.reset();

        if claimed {
            responder.on_release(&state, now)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
