//! Veneer
//!
//! One API over the quirks of the Trident, WebKit, Gecko and KHTML
//! engines: event observation with custom events and unload cleanup, form
//! control values and serialization, and box-model measurements.
//!
//! # Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use veneer::{Config, Page};
//! use veneer::dom::Engine;
//! use veneer::events::Handler;
//!
//! let mut page = Page::new("http://example.com/", Config::with_engine(Engine::Trident)).unwrap();
//! let body = page.document().body();
//! let button = page.document_mut().append_element(body, "button").unwrap();
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//! page.observe(button, "app:pressed", &Handler::new(move |_, _, _| counter.set(counter.get() + 1)))
//!     .unwrap();
//! page.fire(button, "app:pressed", serde_json::json!({}), true).unwrap();
//!
//! assert_eq!(clicks.get(), 1);
//! assert_eq!(page.unload().swept, 1);
//! ```

mod config;
mod page;

use tracing_subscriber::EnvFilter;

pub use config::Config;
pub use page::Page;

// Re-export sub-crates
pub use veneer_dom as dom;
pub use veneer_events as events;
pub use veneer_forms as forms;
pub use veneer_layout as layout;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Page error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("DOM error: {0}")]
    Dom(#[from] dom::DomError),

    #[error("Event error: {0}")]
    Event(#[from] events::EventError),

    #[error("Form error: {0}")]
    Form(#[from] forms::FormError),

    #[error("Layout error: {0}")]
    Layout(#[from] layout::LayoutError),
}

/// Install a `tracing` subscriber filtered by `RUST_LOG`, writing to
/// stderr.
///
/// Does nothing when a subscriber is already installed.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Like [`init_logging`], but writing through the test harness so output
/// is captured per test. Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
