#![forbid(unsafe_code)]

//! Drag-and-drop chip picker built on `tagflow-core`.
//!
//! [`DragController`] owns an ordered collection of [`Item`]s and implements
//! [`PanResponder`](tagflow_core::PanResponder), so a
//! [`GestureTracker`](tagflow_core::GestureTracker) can drive it straight from
//! raw pointer samples. Finished drags come out as [`DndEvent`]s; hosts that
//! prefer closures route them through [`Callbacks`]. The [`render`] module
//! connects the controller to a host toolkit's draw and measure passes.

pub mod callbacks;
pub mod controller;
pub mod event;
pub mod item;
pub mod render;

pub use callbacks::Callbacks;
pub use controller::DragController;
pub use event::{ChangeAction, DndEvent};
pub use item::Item;
pub use render::{
    AreaFrame, DeleteZoneRenderer, ItemArea, ItemProps, ItemRenderer, Measured, PressHandle,
    RenderedItem,
};
