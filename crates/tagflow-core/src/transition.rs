#![forbid(unsafe_code)]

//! Layout transition hints.
//!
//! The engine never animates anything itself. After a change that reflows the
//! chips (swap, delete, drag flag flip) it asks the renderer to animate the
//! *next* layout change with a [`LayoutTransition`]. The renderer is free to
//! ignore the hint.

use std::time::Duration;

/// Easing function mapping linear progress `t` in `[0, 1]` to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[inline]
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Cubic ease-in-ease-out: slow start, fast middle, slow end.
#[inline]
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Named easing curves the renderer can map onto its own presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseInEaseOut,
}

impl Easing {
    /// Function implementing this curve.
    #[must_use]
    pub fn function(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::EaseInEaseOut => ease_in_out,
        }
    }
}

/// Request to animate the next layout change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutTransition {
    pub duration: Duration,
    pub easing: Easing,
}

impl LayoutTransition {
    /// Ease-in-ease-out transition over `duration`.
    #[must_use]
    pub const fn ease_in_ease_out(duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::EaseInEaseOut,
        }
    }

    /// Eased progress after `elapsed`, in `[0, 1]`.
    ///
    /// A zero-length transition is immediately complete.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.easing.function())(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_in_out_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn progress_clamps() {
        let tr = LayoutTransition::ease_in_ease_out(Duration::from_millis(200));
        assert_eq!(tr.progress(Duration::ZERO), 0.0);
        assert_eq!(tr.progress(Duration::from_millis(500)), 1.0);
    }

    #[test]
    fn zero_duration_is_complete() {
        let tr = LayoutTransition::ease_in_ease_out(Duration::ZERO);
        assert_eq!(tr.progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn linear_progress() {
        let tr = LayoutTransition {
            duration: Duration::from_millis(100),
            easing: Easing::Linear,
        };
        assert!((tr.progress(Duration::from_millis(25)) - 0.25).abs() < 1e-6);
    }
}
