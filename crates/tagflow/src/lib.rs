#![forbid(unsafe_code)]

//! tagflow public facade crate.
//!
//! A drag-and-drop engine for tag/chip pickers: hosts feed pointer samples
//! and element measurements in, and get a reordered (or filtered) collection
//! plus change events out. This crate re-exports the stable surface of
//! `tagflow-core` and `tagflow-widgets` and offers a small prelude.
//!
//! ```
//! use tagflow::prelude::*;
//!
//! let mut picker = DragController::new(["#love", "#tbt", "#cute"].map(Item::keyed));
//! for (i, key) in ["#love", "#tbt", "#cute"].iter().enumerate() {
//!     picker.on_render_item(key, i as f32 * 20.0, 0.0, 10.0, 10.0);
//! }
//!
//! let mut tracker = GestureTracker::new();
//! let now = Instant::now();
//! tracker.process(&PointerSample::down(5.0, 5.0), &mut picker, now);
//! tracker.process(&PointerSample::moved(6.0, 5.0), &mut picker, now);
//! tracker.process(&PointerSample::moved(45.0, 5.0), &mut picker, now);
//! let event = tracker.process(&PointerSample::up(45.0, 5.0), &mut picker, now);
//!
//! assert!(matches!(event, Some(DndEvent::Reordered { .. })));
//! assert_eq!(picker.keys().collect::<Vec<_>>(), ["#tbt", "#cute", "#love"]);
//! ```

use std::fmt;

#[cfg(feature = "tracing-subscriber")]
pub mod logging;

// --- Core re-exports -------------------------------------------------------

pub use tagflow_core::config::{
    ConfigError, DEFAULT_ANIMATION_DURATION_MS, DndConfig, MAX_ANIMATION_DURATION_MS, ReenableMode,
};
pub use tagflow_core::geometry::{Measurement, ScreenRect, contains_point};
pub use tagflow_core::gesture::{
    GestureState, GestureTracker, PanResponder, PointerPhase, PointerSample,
};
pub use tagflow_core::ordering::{move_element, move_element_in_place};
pub use tagflow_core::reorder_lock::{AnimationToken, ReorderLock};
pub use tagflow_core::transition::{Easing, LayoutTransition};

// --- Widget re-exports -----------------------------------------------------

pub use tagflow_widgets::callbacks::Callbacks;
pub use tagflow_widgets::controller::DragController;
pub use tagflow_widgets::event::{ChangeAction, DndEvent};
pub use tagflow_widgets::item::Item;
pub use tagflow_widgets::render::{
    AreaFrame, DeleteZoneRenderer, ItemArea, ItemProps, ItemRenderer, Measured, PressHandle,
    RenderedItem,
};

pub use web_time::Instant;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tagflow hosts.
#[derive(Debug)]
pub enum Error {
    /// Configuration could not be loaded or failed validation.
    Config(ConfigError),
    /// The log subscriber could not be installed.
    Logging(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Logging(msg) => write!(f, "logging: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for tagflow APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

/// Everything a host needs to wire a picker up.
pub mod prelude {
    pub use crate::{
        Callbacks, ChangeAction, DeleteZoneRenderer, DndConfig, DndEvent, DragController, Error,
        GestureState, GestureTracker, Instant, Item, ItemArea, ItemProps, ItemRenderer,
        LayoutTransition, Measured, Measurement, PanResponder, PointerSample, ReenableMode,
        Result, ScreenRect,
    };

    pub use crate::{core, widgets};

    #[cfg(feature = "tracing-subscriber")]
    pub use crate::logging;
}

pub use tagflow_core as core;
pub use tagflow_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_error_is_wrapped_with_source() {
        let err: Error =
            ConfigError::Validation(vec!["animation_duration_ms out of range".into()]).into();
        assert!(err.to_string().starts_with("config: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn logging_error_has_no_source() {
        let err = Error::Logging("already set".into());
        assert_eq!(err.to_string(), "logging: already set");
        assert!(err.source().is_none());
    }
}
