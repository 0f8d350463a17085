//! Page - a document with its event registry

use serde_json::Value;
use veneer_dom::{Document, Event, NodeId};
use veneer_events::{fire, ContentLoaded, EventRegistry, Handler, SweepStats};
use veneer_forms::{get_value, set_value, Field, FieldValue, Form, SetValue};
use veneer_layout::{measure, BoxProperty, Layout};

use crate::{Config, Error};

/// A loaded page
#[derive(Debug)]
pub struct Page {
    document: Document,
    registry: EventRegistry,
    config: Config,
}

impl Page {
    /// Create an empty page for `url`
    pub fn new(url: &str, config: Config) -> Result<Self, Error> {
        tracing::info!("Opening {} as {:?}", url, config.engine);

        let mut document = Document::with_quirks(url, config.engine, config.quirks());
        if config.content_loaded {
            ContentLoaded::install(&mut document)?;
        }

        Ok(Self {
            document,
            registry: EventRegistry::new(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// Borrow the document and registry together
    pub fn parts_mut(&mut self) -> (&mut Document, &mut EventRegistry) {
        (&mut self.document, &mut self.registry)
    }

    // === Events ===

    pub fn observe(
        &mut self,
        element: NodeId,
        event_name: &str,
        handler: &Handler,
    ) -> Result<NodeId, Error> {
        Ok(self
            .registry
            .observe(&mut self.document, element, event_name, handler)?)
    }

    pub fn stop_observing(
        &mut self,
        element: NodeId,
        event_name: Option<&str>,
        handler: Option<&Handler>,
    ) -> Result<NodeId, Error> {
        Ok(self
            .registry
            .stop_observing(&mut self.document, element, event_name, handler)?)
    }

    pub fn fire(
        &mut self,
        element: NodeId,
        event_name: &str,
        memo: Value,
        bubble: bool,
    ) -> Result<Event, Error> {
        Ok(fire(&mut self.document, element, event_name, memo, bubble)?)
    }

    // === Layout ===

    pub fn get_layout(&self, element: NodeId) -> Layout {
        Layout::new(element)
    }

    pub fn measure(&self, element: NodeId, property: BoxProperty) -> f64 {
        measure(&self.document, element, property)
    }

    // === Forms ===

    pub fn get_value(&self, element: NodeId) -> Result<Option<FieldValue>, Error> {
        Ok(get_value(&self.document, element)?)
    }

    pub fn set_value(&mut self, element: NodeId, value: impl Into<SetValue>) -> Result<(), Error> {
        Ok(set_value(&mut self.document, element, value)?)
    }

    pub fn form(&self, element: NodeId) -> Result<Form, Error> {
        Ok(Form::new(&self.document, element)?)
    }

    pub fn field(&self, element: NodeId) -> Result<Field, Error> {
        Ok(Field::new(&self.document, element)?)
    }

    // === Lifecycle ===

    /// The document tree is complete
    pub fn finish_parsing(&mut self) {
        self.document.finish_parsing();
    }

    /// The document and its subresources are loaded
    pub fn finish_loading(&mut self) {
        self.document.finish_loading();
        tracing::info!("Loaded {}", self.document.url());
    }

    /// Navigate away, sweeping observed elements unless configured not to
    pub fn unload(&mut self) -> SweepStats {
        tracing::info!("Unloading {}", self.document.url());
        if self.config.sweep_on_unload {
            self.registry.unload(&mut self.document)
        } else {
            self.document.unload();
            SweepStats::default()
        }
    }
}
