#![forbid(unsafe_code)]

//! Closure-style adapter over [`DndEvent`]s.
//!
//! Hosts that prefer callbacks to matching on events register closures here
//! and feed every event through [`Callbacks::dispatch`].

use std::fmt;

use crate::event::{ChangeAction, DndEvent};
use crate::item::Item;

type PressItemFn<T> = Box<dyn FnMut(&Item<T>, &[Item<T>])>;
type ChangeFn<T> = Box<dyn FnMut(&[Item<T>], &Item<T>, Option<ChangeAction>)>;
type AddNewFn = Box<dyn FnMut()>;

/// Registered notification handlers. Unset handlers drop their events.
pub struct Callbacks<T> {
    on_press_item: Option<PressItemFn<T>>,
    on_change: Option<ChangeFn<T>>,
    on_press_add_new: Option<AddNewFn>,
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self {
            on_press_item: None,
            on_change: None,
            on_press_add_new: None,
        }
    }
}

impl<T> fmt::Debug for Callbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_press_item", &self.on_press_item.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_press_add_new", &self.on_press_add_new.is_some())
            .finish()
    }
}

impl<T> Callbacks<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the tapped item and the full collection.
    #[must_use]
    pub fn on_press_item(mut self, f: impl FnMut(&Item<T>, &[Item<T>]) + 'static) -> Self {
        self.on_press_item = Some(Box::new(f));
        self
    }

    /// Called with the collection, the dragged item and the action tag after
    /// every drag.
    #[must_use]
    pub fn on_change(
        mut self,
        f: impl FnMut(&[Item<T>], &Item<T>, Option<ChangeAction>) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called when the "add new" affordance is activated.
    #[must_use]
    pub fn on_press_add_new(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press_add_new = Some(Box::new(f));
        self
    }

    /// Route one event to its handler.
    ///
    /// Returns `true` if a handler ran.
    pub fn dispatch(&mut self, event: &DndEvent<T>) -> bool {
        match event {
            DndEvent::Pressed { item, items } => self
                .on_press_item
                .as_mut()
                .map(|f| f(item, items.as_slice()))
                .is_some(),
            DndEvent::Reordered { items, item } | DndEvent::Deleted { items, item } => {
                let action = event.action();
                self.on_change
                    .as_mut()
                    .map(|f| f(items.as_slice(), item, action))
                    .is_some()
            }
            DndEvent::AddNewRequested => self.on_press_add_new.as_mut().map(|f| f()).is_some(),
        }
    }
}
