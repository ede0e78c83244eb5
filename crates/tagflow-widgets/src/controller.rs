#![forbid(unsafe_code)]

//! Drag controller: owns the chip collection and reacts to pan gestures.
//!
//! [`DragController`] is the single owner of the ordered item collection. It
//! answers the host's "should I take this gesture?" question, tracks which
//! item is being dragged, hit-tests the pointer against measured item
//! rectangles, relocates the dragged item when it passes over another one,
//! and detects drops on the optional delete zone.
//!
//! # State Machine
//!
//! ```text
//!            should_claim (1 touch, moved, over item)
//!   Idle ──────────────────────────────────────────▶ Claimed(key)
//!    ▲                                                  │ on_grant: mark dragged
//!    │  on_release: unmark, maybe delete, emit change   ▼
//!    ├──────────────────────────────────────────── Dragging(key)
//!    │  on_terminate: unmark, emit nothing              │ on_move: swap when over
//!    └──────────────────────────────────────────────────┘ another item (lock permitting)
//! ```
//!
//! # Invariants
//!
//! 1. Keys in the collection are unique.
//! 2. At most one item has `is_being_dragged` set, and only while a gesture
//!    is claimed.
//! 3. The order changes only through move-element: one item relocates per
//!    swap.
//! 4. After a swap no further swap happens until the reorder lock releases.
//! 5. Items without a measured rectangle are never a drag source or target.
//!
//! # Failure Modes
//!
//! Every missing precondition is a silent no-op (logged at `trace`/`debug`):
//! handlers called without a claimed gesture, measurements for unknown keys,
//! and a dragged key that vanished after an external replacement.

use tagflow_core::config::DndConfig;
use tagflow_core::geometry::{Measurement, ScreenRect};
use tagflow_core::gesture::{GestureState, PanResponder};
use tagflow_core::ordering::move_element_in_place;
use tagflow_core::reorder_lock::{AnimationToken, ReorderLock};
use tagflow_core::transition::LayoutTransition;
use web_time::Instant;

use crate::event::DndEvent;
use crate::item::{Item, dedup_by_key};

const TARGET: &str = "tagflow.dnd";

/// Delete-by-drag affordance state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DeleteZone {
    rect: Option<ScreenRect>,
}

impl DeleteZone {
    /// Unmeasured zones behave as an all-zero rectangle.
    fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.unwrap_or_default().contains(x, y)
    }
}

/// Owner of the chip collection and the drag-gesture state machine.
#[derive(Debug, Clone)]
pub struct DragController<T> {
    items: Vec<Item<T>>,
    config: DndConfig,
    lock: ReorderLock,
    delete_zone: Option<DeleteZone>,
    is_on_delete_zone: bool,
    active_key: Option<String>,
    pending_transition: bool,
}

impl<T: Clone> DragController<T> {
    /// Create a controller with the default configuration.
    ///
    /// Duplicate keys are dropped, first occurrence wins.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = Item<T>>) -> Self {
        Self::with_config(items, DndConfig::default())
    }

    /// Create a controller with an explicit configuration.
    #[must_use]
    pub fn with_config(items: impl IntoIterator<Item = Item<T>>, config: DndConfig) -> Self {
        let lock = ReorderLock::new(config.animation_duration(), config.reenable_mode);
        let mut controller = Self {
            items: Vec::new(),
            config,
            lock,
            delete_zone: None,
            is_on_delete_zone: false,
            active_key: None,
            pending_transition: false,
        };
        controller.install(items);
        controller
    }

    /// Enable the delete zone (builder form).
    #[must_use]
    pub fn with_delete_zone(mut self) -> Self {
        self.set_delete_zone_enabled(true);
        self
    }

    /// Enable or disable delete-by-drag.
    ///
    /// Disabling forgets the zone's measured rectangle.
    pub fn set_delete_zone_enabled(&mut self, enabled: bool) {
        match (enabled, self.delete_zone.is_some()) {
            (true, false) => self.delete_zone = Some(DeleteZone::default()),
            (false, true) => {
                self.delete_zone = None;
                self.is_on_delete_zone = false;
            }
            _ => {}
        }
    }

    // --- Accessors ---

    /// Items in display order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Look up an item by key.
    #[must_use]
    pub fn item(&self, key: &str) -> Option<&Item<T>> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Item::key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Key of the item currently grabbed.
    #[inline]
    #[must_use]
    pub fn active_key(&self) -> Option<&str> {
        self.active_key.as_deref()
    }

    /// Whether a swap would be accepted right now.
    #[inline]
    #[must_use]
    pub fn is_dnd_enabled(&self) -> bool {
        self.lock.is_enabled()
    }

    /// Whether the pointer hovers the delete zone during a drag.
    #[inline]
    #[must_use]
    pub fn is_on_delete_zone(&self) -> bool {
        self.is_on_delete_zone
    }

    /// Whether delete-by-drag is configured.
    #[inline]
    #[must_use]
    pub fn has_delete_zone(&self) -> bool {
        self.delete_zone.is_some()
    }

    /// Measured delete-zone rectangle, if configured and measured.
    #[must_use]
    pub fn delete_zone_rect(&self) -> Option<ScreenRect> {
        self.delete_zone.and_then(|zone| zone.rect)
    }

    /// Configuration in effect.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DndConfig {
        &self.config
    }

    /// Token of the swap currently holding the reorder lock.
    #[inline]
    #[must_use]
    pub fn animation_token(&self) -> Option<AnimationToken> {
        self.lock.current_token()
    }

    // --- Hit testing ---

    /// First item, in display order, whose rectangle contains `(x, y)`.
    ///
    /// Unmeasured items and the item keyed `exclude_key` are skipped.
    #[must_use]
    pub fn find_item_at(&self, x: f32, y: f32, exclude_key: Option<&str>) -> Option<&Item<T>> {
        self.items
            .iter()
            .find(|item| item.hit(x, y) && exclude_key != Some(item.key()))
    }

    // --- Gesture handlers ---

    /// Decide whether to claim a gesture.
    ///
    /// Claims iff exactly one touch is active, the pointer moved since the
    /// gesture started, and a measured item lies under the pointer. The
    /// claimed item becomes the drag subject.
    pub fn should_claim(&mut self, gesture: &GestureState) -> bool {
        if !gesture.is_single_touch() {
            tracing::trace!(
                target: TARGET,
                touches = gesture.number_active_touches,
                "claim rejected: multi-touch"
            );
            return false;
        }
        if !gesture.has_moved() {
            return false;
        }
        let Some(key) = self
            .find_item_at(gesture.move_x, gesture.move_y, None)
            .map(|item| item.key().to_owned())
        else {
            return false;
        };

        tracing::debug!(
            target: TARGET,
            key = %key,
            x = gesture.move_x,
            y = gesture.move_y,
            "gesture claimed"
        );
        self.active_key = Some(key);
        true
    }

    /// The gesture was granted: mark the subject as dragged.
    pub fn on_grant(&mut self) {
        let Some(key) = self.active_key.clone() else {
            return;
        };
        if self.set_dragged(&key, true) {
            self.pending_transition = true;
        }
    }

    /// Pointer moved during a claimed gesture.
    pub fn on_move(&mut self, gesture: &GestureState, now: Instant) {
        self.lock.poll(now);
        if !self.lock.is_enabled() {
            return;
        }
        let Some(active) = self.active_key.clone() else {
            return;
        };

        let target = self
            .find_item_at(gesture.move_x, gesture.move_y, Some(&active))
            .map(|item| item.key().to_owned());
        if let Some(target) = target {
            self.swap(&active, &target, now);
        }

        if let Some(zone) = self.delete_zone {
            self.is_on_delete_zone = zone.contains(gesture.move_x, gesture.move_y);
        }
    }

    /// Pointer lifted: finish the drag.
    ///
    /// Returns `Deleted` when released on the delete zone, `Reordered`
    /// otherwise, and `None` without a claimed gesture.
    pub fn on_release(&mut self, gesture: &GestureState) -> Option<DndEvent<T>> {
        let key = self.active_key.take()?;
        self.set_dragged(&key, false);
        self.is_on_delete_zone = false;

        let _span = tracing::debug_span!(
            "dnd.release",
            key = %key,
            x = gesture.move_x,
            y = gesture.move_y,
        )
        .entered();

        let Some(index) = self.index_of(&key) else {
            tracing::debug!(target: TARGET, key = %key, "dragged item no longer present");
            return None;
        };

        let should_remove = self
            .delete_zone
            .is_some_and(|zone| zone.contains(gesture.move_x, gesture.move_y));

        self.pending_transition = true;
        if should_remove {
            let item = self.items.remove(index);
            tracing::debug!(target: TARGET, key = %key, remaining = self.items.len(), "item deleted");
            Some(DndEvent::Deleted {
                items: self.items.clone(),
                item,
            })
        } else {
            tracing::debug!(target: TARGET, key = %key, index, "item dropped");
            Some(DndEvent::Reordered {
                items: self.items.clone(),
                item: self.items[index].clone(),
            })
        }
    }

    /// The host took the gesture away: forget the drag, change nothing else.
    pub fn on_terminate(&mut self) {
        let Some(key) = self.active_key.take() else {
            return;
        };
        tracing::debug!(target: TARGET, key = %key, "gesture terminated");
        self.set_dragged(&key, false);
        self.is_on_delete_zone = false;
    }

    // --- Timing ---

    /// Deferred-timer entry point: re-enable swaps once the window elapsed.
    ///
    /// Returns `true` if swaps were re-enabled by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        let released = self.lock.poll(now);
        if released {
            tracing::trace!(target: TARGET, "reorder lock released by timer");
        }
        released
    }

    /// The layout transition started by the swap holding `token` finished.
    ///
    /// Returns `true` if swaps were re-enabled by this call.
    pub fn animation_finished(&mut self, token: AnimationToken) -> bool {
        let released = self.lock.release(token);
        tracing::trace!(target: TARGET, token = token.get(), released, "animation finished");
        released
    }

    /// Transition the renderer should apply to layout changes.
    #[must_use]
    pub fn layout_transition(&self) -> LayoutTransition {
        LayoutTransition::ease_in_ease_out(self.config.animation_duration())
    }

    /// Take the pending "animate next layout change" request, if any.
    pub fn take_layout_transition(&mut self) -> Option<LayoutTransition> {
        std::mem::take(&mut self.pending_transition).then(|| self.layout_transition())
    }

    // --- Measurement ingestion ---

    /// Record the on-screen rectangle of an item after a layout pass.
    ///
    /// Unknown keys are ignored. Safe to call on every layout pass.
    pub fn on_render_item(&mut self, key: &str, screen_x: f32, screen_y: f32, width: f32, height: f32) {
        self.on_measure_item(key, Measurement::new(screen_x, screen_y, width, height));
    }

    /// [`on_render_item`](Self::on_render_item) taking a [`Measurement`].
    pub fn on_measure_item(&mut self, key: &str, measurement: Measurement) {
        match self.items.iter_mut().find(|item| item.key() == key) {
            Some(item) => item.set_measurement(measurement),
            None => tracing::trace!(target: TARGET, key = %key, "measurement for unknown key"),
        }
    }

    /// Record the on-screen rectangle of the delete zone.
    ///
    /// Ignored unless a delete zone is configured.
    pub fn on_render_delete_zone(&mut self, screen_x: f32, screen_y: f32, width: f32, height: f32) {
        self.on_measure_delete_zone(Measurement::new(screen_x, screen_y, width, height));
    }

    /// [`on_render_delete_zone`](Self::on_render_delete_zone) taking a [`Measurement`].
    pub fn on_measure_delete_zone(&mut self, measurement: Measurement) {
        if let Some(zone) = self.delete_zone.as_mut() {
            zone.rect = Some(ScreenRect::from_measurement(measurement));
        }
    }

    // --- Collection ---

    /// Replace the collection wholesale.
    ///
    /// An in-flight drag whose key is gone degrades to no-ops; if the key is
    /// still present its item is marked dragged again.
    pub fn replace_items(&mut self, items: impl IntoIterator<Item = Item<T>>) {
        self.install(items);
        self.pending_transition = true;
    }

    /// Tap on an item: emit `Pressed` with the current collection.
    pub fn press_item(&self, key: &str) -> Option<DndEvent<T>> {
        let item = self.item(key)?;
        Some(DndEvent::Pressed {
            item: item.clone(),
            items: self.items.clone(),
        })
    }

    /// Activate the "add new" affordance.
    pub fn press_add_new(&self) -> DndEvent<T> {
        DndEvent::AddNewRequested
    }

    // --- Internals ---

    fn install(&mut self, items: impl IntoIterator<Item = Item<T>>) {
        let (mut items, dropped) = dedup_by_key(items);
        if dropped > 0 {
            tracing::warn!(target: TARGET, dropped, "duplicate item keys dropped");
        }
        let active = self.active_key.as_deref();
        for item in &mut items {
            let dragged = active == Some(item.key());
            item.set_dragged(dragged);
        }
        self.items = items;
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    fn set_dragged(&mut self, key: &str, dragged: bool) -> bool {
        match self.items.iter_mut().find(|item| item.key() == key) {
            Some(item) => {
                item.set_dragged(dragged);
                true
            }
            None => false,
        }
    }

    fn swap(&mut self, dragged: &str, target: &str, now: Instant) {
        let (Some(from), Some(to)) = (self.index_of(dragged), self.index_of(target)) else {
            tracing::debug!(target: TARGET, dragged = %dragged, target_key = %target, "swap skipped: key missing");
            return;
        };

        let _span = tracing::debug_span!(
            "dnd.swap",
            dragged = %dragged,
            over = %target,
            from = from,
            to = to,
        )
        .entered();

        move_element_in_place(&mut self.items, from, to);
        let token = self.lock.engage(now);
        self.pending_transition = true;
        tracing::debug!(target: TARGET, token = token.get(), "items swapped, reorder locked");
    }
}

impl<T: Clone> PanResponder for DragController<T> {
    type Output = DndEvent<T>;

    fn should_claim(&mut self, gesture: &GestureState) -> bool {
        DragController::should_claim(self, gesture)
    }

    fn on_grant(&mut self, _now: Instant) {
        DragController::on_grant(self);
    }

    fn on_move(&mut self, gesture: &GestureState, now: Instant) {
        DragController::on_move(self, gesture, now);
    }

    fn on_release(&mut self, gesture: &GestureState, _now: Instant) -> Option<DndEvent<T>> {
        DragController::on_release(self, gesture)
    }

    fn on_terminate(&mut self, _now: Instant) {
        DragController::on_terminate(self);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
