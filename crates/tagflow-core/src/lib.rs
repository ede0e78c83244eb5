#![forbid(unsafe_code)]

//! Core: geometry, ordering, gesture plumbing and timing for tagflow.
//!
//! # Role in tagflow
//! `tagflow-core` holds everything the drag controller needs that does not
//! know about items: hit-test geometry, the move-element reorder primitive,
//! the pan-gesture tracker that turns raw pointer samples into responder
//! calls, the reorder lock, layout transition hints and configuration.
//!
//! # How it fits in the system
//! `tagflow-widgets` builds the drag controller on these pieces. Hosts feed
//! raw pointer samples and element measurements in; nothing here renders.

pub mod config;
pub mod geometry;
pub mod gesture;
pub mod ordering;
pub mod reorder_lock;
pub mod transition;

pub use config::{ConfigError, DndConfig, ReenableMode};
pub use geometry::{Measurement, ScreenRect, contains_point};
pub use gesture::{GestureState, GestureTracker, PanResponder, PointerPhase, PointerSample};
pub use ordering::{move_element, move_element_in_place};
pub use reorder_lock::{AnimationToken, ReorderLock};
pub use transition::{Easing, LayoutTransition};
