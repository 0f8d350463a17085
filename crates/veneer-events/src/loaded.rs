//! `dom:loaded`
//!
//! Announces, exactly once per document, that the tree is complete and safe
//! to script. Observers subscribe with `observe(doc.root(), "dom:loaded")`.

use serde_json::Value;
use veneer_dom::{Document, ListenerModel, Listener, NodeId, ReadyState};

use crate::{fire, EventError};

/// Installs the `dom:loaded` signal on a document
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentLoaded;

impl ContentLoaded {
    /// Hook the engine's readiness signals.
    ///
    /// W3C engines announce on `DOMContentLoaded`, Trident once
    /// `readystatechange` reports `complete`. Both fall back on `load`.
    /// A document that already finished loading is announced immediately.
    pub fn install(doc: &mut Document) -> Result<(), EventError> {
        let model = doc.quirks().listener_model;
        let on_load = Listener::new(|_, doc| announce(doc));

        match model {
            ListenerModel::AddEventListener => {
                doc.add_event_listener(NodeId::ROOT, "DOMContentLoaded", on_load.clone())?;
                doc.add_event_listener(NodeId::ROOT, "load", on_load)?;
            }
            ListenerModel::AttachEvent => {
                let on_ready = Listener::new(|_, doc| {
                    if doc.ready_state() == ReadyState::Complete {
                        announce(doc);
                    }
                });
                doc.attach_event(NodeId::ROOT, &model.key("readystatechange"), on_ready)?;
                doc.attach_event(NodeId::ROOT, &model.key("load"), on_load)?;
            }
        }

        if doc.ready_state() == ReadyState::Complete {
            announce(doc);
        }
        Ok(())
    }
}

fn announce(doc: &mut Document) {
    if doc.is_loaded() {
        return;
    }
    doc.set_loaded(true);

    let root = doc.root();
    if let Err(err) = fire(doc, root, "dom:loaded", Value::Null, true) {
        tracing::warn!("Failed to announce dom:loaded: {}", err);
    }
}
