//! Tracker + reorder lock working together the way a controller uses them.
//!
//! Run:
//!   cargo test -p tagflow-core --test gesture_lock_integration

use std::time::Duration;

use tagflow_core::config::{DndConfig, ReenableMode};
use tagflow_core::gesture::{GestureState, GestureTracker, PanResponder, PointerSample};
use tagflow_core::reorder_lock::ReorderLock;
use web_time::Instant;

/// Counts "swaps": one per move while the lock is released.
struct Swapper {
    lock: ReorderLock,
    swaps: usize,
}

impl PanResponder for Swapper {
    type Output = usize;

    fn should_claim(&mut self, g: &GestureState) -> bool {
        g.is_single_touch() && g.has_moved()
    }

    fn on_grant(&mut self, _now: Instant) {}

    fn on_move(&mut self, _g: &GestureState, now: Instant) {
        self.lock.poll(now);
        if self.lock.is_enabled() {
            self.swaps += 1;
            self.lock.engage(now);
        }
    }

    fn on_release(&mut self, _g: &GestureState, _now: Instant) -> Option<usize> {
        Some(self.swaps)
    }

    fn on_terminate(&mut self, _now: Instant) {}
}

#[test]
fn moves_inside_window_are_suppressed() {
    let config = DndConfig::default();
    let mut swapper = Swapper {
        lock: ReorderLock::new(config.animation_duration(), config.reenable_mode),
        swaps: 0,
    };
    let mut tracker = GestureTracker::new();
    let t = Instant::now();

    tracker.process(&PointerSample::down(0.0, 0.0), &mut swapper, t);
    tracker.process(&PointerSample::moved(1.0, 0.0), &mut swapper, t);
    tracker.process(&PointerSample::moved(2.0, 0.0), &mut swapper, t + Duration::from_millis(100));
    tracker.process(&PointerSample::moved(3.0, 0.0), &mut swapper, t + Duration::from_millis(249));
    assert_eq!(swapper.swaps, 1);

    tracker.process(&PointerSample::moved(4.0, 0.0), &mut swapper, t + Duration::from_millis(250));
    let total = tracker.process(&PointerSample::up(4.0, 0.0), &mut swapper, t + Duration::from_millis(300));
    assert_eq!(total, Some(2));
}

#[test]
fn explicit_release_reopens_early() {
    let mut lock = ReorderLock::new(Duration::from_millis(250), ReenableMode::Token);
    let t = Instant::now();
    let token = lock.engage(t);
    assert!(lock.release(token));
    assert!(lock.is_enabled());
}
