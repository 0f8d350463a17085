//! Veneer Events
//!
//! Normalized event observation on top of the native listener models.
//!
//! - [`EventRegistry`] records which handlers observe which element and
//!   event, keeps one native subscription per distinct handler, and sweeps
//!   every observed element on unload.
//! - [`fire`] dispatches namespaced custom events (`app:saved`) with a
//!   payload.
//! - [`EventExt`] adds the normalized helpers (`stop`, `pointer`,
//!   `element`, ...) to native events.
//!
//! # Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use veneer_dom::Document;
//! use veneer_events::{fire, EventRegistry, Handler};
//!
//! let mut doc = Document::new("about:blank");
//! let mut registry = EventRegistry::new();
//! let el = doc.append_element(doc.body(), "div").unwrap();
//!
//! let saves = Rc::new(Cell::new(0));
//! let counter = saves.clone();
//! let handler = Handler::new(move |_, _, _| counter.set(counter.get() + 1));
//!
//! registry.observe(&mut doc, el, "app:saved", &handler).unwrap();
//! fire(&mut doc, el, "app:saved", serde_json::json!({ "id": 3 }), true).unwrap();
//! assert_eq!(saves.get(), 1);
//! ```

mod cache;
mod fire;
mod handler;
mod loaded;
mod methods;
mod registry;
mod responder;
mod selector;

pub use cache::CleanupCache;
pub use fire::{fire, is_custom_event};
pub use handler::Handler;
pub use loaded::ContentLoaded;
pub use methods::{extend, EventExt};
pub use registry::{EventRegistry, SweepStats};
pub use responder::{Responder, Strategy};
pub use selector::SimpleSelector;

use veneer_dom::DomError;

pub const KEY_BACKSPACE: u32 = 8;
pub const KEY_TAB: u32 = 9;
pub const KEY_RETURN: u32 = 13;
pub const KEY_ESC: u32 = 27;
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
pub const KEY_DELETE: u32 = 46;
pub const KEY_HOME: u32 = 36;
pub const KEY_END: u32 = 35;
pub const KEY_PAGEUP: u32 = 33;
pub const KEY_PAGEDOWN: u32 = 34;
pub const KEY_INSERT: u32 = 45;

/// Event layer error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("Custom event names need a namespace (\"ns:name\"), got {0:?}")]
    NotCustomEvent(String),

    #[error(transparent)]
    Dom(#[from] DomError),
}
