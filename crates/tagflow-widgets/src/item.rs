#![forbid(unsafe_code)]

//! Item records: one draggable chip in the collection.

use ahash::AHashSet;
use tagflow_core::geometry::{Measurement, ScreenRect};

/// A single draggable, orderable, hit-testable chip.
///
/// `payload` is whatever the renderer needs to draw the chip; the engine
/// never looks at it.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<T> {
    key: String,
    screen_rect: Option<ScreenRect>,
    is_being_dragged: bool,
    /// Caller-supplied display payload.
    pub payload: T,
}

impl<T> Item<T> {
    /// Create an unmeasured item.
    #[must_use]
    pub fn new(key: impl Into<String>, payload: T) -> Self {
        Self {
            key: key.into(),
            screen_rect: None,
            is_being_dragged: false,
            payload,
        }
    }

    /// Set the measured rectangle up front (hosts that pre-measure).
    #[must_use]
    pub fn with_screen_rect(mut self, rect: ScreenRect) -> Self {
        self.screen_rect = Some(rect);
        self
    }

    /// Stable identity of this item.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last measured rectangle, if the item has been laid out.
    #[inline]
    #[must_use]
    pub fn screen_rect(&self) -> Option<ScreenRect> {
        self.screen_rect
    }

    /// Whether this item is the current drag subject.
    #[inline]
    #[must_use]
    pub fn is_being_dragged(&self) -> bool {
        self.is_being_dragged
    }

    /// Whether the item has been measured and can take part in hit tests.
    #[inline]
    #[must_use]
    pub fn is_hit_testable(&self) -> bool {
        self.screen_rect.is_some()
    }

    /// Whether `(x, y)` falls inside the measured rectangle.
    #[inline]
    #[must_use]
    pub fn hit(&self, x: f32, y: f32) -> bool {
        self.screen_rect.is_some_and(|r| r.contains(x, y))
    }

    pub(crate) fn set_measurement(&mut self, m: Measurement) {
        self.screen_rect = Some(ScreenRect::from_measurement(m));
    }

    pub(crate) fn set_dragged(&mut self, dragged: bool) {
        self.is_being_dragged = dragged;
    }
}

impl Item<()> {
    /// Item without payload.
    #[must_use]
    pub fn keyed(key: impl Into<String>) -> Self {
        Self::new(key, ())
    }
}

impl<K: Into<String>, T> From<(K, T)> for Item<T> {
    fn from((key, payload): (K, T)) -> Self {
        Self::new(key, payload)
    }
}

/// Drop items whose key was already seen, keeping the first occurrence.
///
/// Returns the kept items and the number dropped.
pub(crate) fn dedup_by_key<T>(items: impl IntoIterator<Item = Item<T>>) -> (Vec<Item<T>>, usize) {
    let mut seen = AHashSet::new();
    let mut dropped = 0;
    let kept = items
        .into_iter()
        .filter(|item| {
            let fresh = seen.insert(item.key.clone());
            if !fresh {
                dropped += 1;
            }
            fresh
        })
        .collect();
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_item_never_hits() {
        let item = Item::keyed("#love");
        assert!(!item.is_hit_testable());
        assert!(!item.hit(0.0, 0.0));
    }

    #[test]
    fn measured_item_hits_inclusive() {
        let mut item = Item::keyed("#tbt");
        item.set_measurement(Measurement::new(10.0, 20.0, 30.0, 10.0));
        assert!(item.hit(10.0, 20.0));
        assert!(item.hit(40.0, 30.0));
        assert!(!item.hit(40.5, 30.0));
    }

    #[test]
    fn remeasure_overwrites() {
        let mut item = Item::keyed("a");
        item.set_measurement(Measurement::new(0.0, 0.0, 10.0, 10.0));
        item.set_measurement(Measurement::new(100.0, 0.0, 10.0, 10.0));
        assert_eq!(item.screen_rect(), Some(ScreenRect::new(100.0, 0.0, 110.0, 10.0)));
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let items = vec![
            Item::new("a", 1),
            Item::new("b", 2),
            Item::new("a", 3),
            Item::new("c", 4),
            Item::new("b", 5),
        ];
        let (kept, dropped) = dedup_by_key(items);
        let keys: Vec<_> = kept.iter().map(|i| (i.key(), i.payload)).collect();
        assert_eq!(keys, [("a", 1), ("b", 2), ("c", 4)]);
        assert_eq!(dropped, 2);
    }

    #[test]
    fn from_tuple() {
        let item: Item<u8> = ("k", 7).into();
        assert_eq!(item.key(), "k");
        assert_eq!(item.payload, 7);
    }
}
