#![forbid(unsafe_code)]

//! Outbound notifications of the drag controller.
//!
//! # Invariants
//! 1. `Reordered` and `Deleted` are emitted only on release of a claimed
//!    gesture, at most one per gesture.
//! 2. `Deleted` is emitted only when a delete zone is configured and the
//!    release point lies inside it; its `items` no longer contain `item`.
//! 3. Termination of a gesture emits nothing.

use std::fmt;

use crate::item::Item;

/// Action tag attached to change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    /// The item was dropped on the delete zone and removed.
    Delete,
}

impl ChangeAction {
    /// Wire form of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event produced by the drag controller.
#[derive(Debug, Clone, PartialEq)]
pub enum DndEvent<T> {
    /// An item was tapped.
    Pressed { item: Item<T>, items: Vec<Item<T>> },
    /// A drag ended outside the delete zone; `items` is the current order.
    Reordered { items: Vec<Item<T>>, item: Item<T> },
    /// A drag ended on the delete zone and `item` was removed.
    Deleted { items: Vec<Item<T>>, item: Item<T> },
    /// The "add new" affordance was activated.
    AddNewRequested,
}

impl<T> DndEvent<T> {
    /// Action tag for change notifications; `None` for everything but deletes.
    #[must_use]
    pub fn action(&self) -> Option<ChangeAction> {
        match self {
            Self::Deleted { .. } => Some(ChangeAction::Delete),
            _ => None,
        }
    }

    /// Whether this is a change notification (`Reordered` or `Deleted`).
    #[must_use]
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Reordered { .. } | Self::Deleted { .. })
    }

    /// Collection carried by the event, if any.
    #[must_use]
    pub fn items(&self) -> Option<&[Item<T>]> {
        match self {
            Self::Pressed { items, .. }
            | Self::Reordered { items, .. }
            | Self::Deleted { items, .. } => Some(items),
            Self::AddNewRequested => None,
        }
    }

    /// Item the event is about, if any.
    #[must_use]
    pub fn item(&self) -> Option<&Item<T>> {
        match self {
            Self::Pressed { item, .. } | Self::Reordered { item, .. } | Self::Deleted { item, .. } => {
                Some(item)
            }
            Self::AddNewRequested => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_delete_carries_action() {
        let item = Item::keyed("a");
        let deleted = DndEvent::Deleted {
            items: vec![],
            item: item.clone(),
        };
        let reordered = DndEvent::Reordered {
            items: vec![item.clone()],
            item,
        };
        assert_eq!(deleted.action(), Some(ChangeAction::Delete));
        assert_eq!(reordered.action(), None);
        assert_eq!(DndEvent::<()>::AddNewRequested.action(), None);
        assert_eq!(ChangeAction::Delete.to_string(), "DELETE");
    }

    #[test]
    fn accessors() {
        let ev = DndEvent::Pressed {
            item: Item::keyed("x"),
            items: vec![Item::keyed("x"), Item::keyed("y")],
        };
        assert!(!ev.is_change());
        assert_eq!(ev.items().map(<[_]>::len), Some(2));
        assert_eq!(ev.item().map(Item::key), Some("x"));
        assert!(DndEvent::<()>::AddNewRequested.items().is_none());
    }
}
