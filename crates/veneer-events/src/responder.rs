//! Responders
//!
//! A responder sits between one native subscription and one user handler.
//! Its strategy is chosen once, when the handler is registered.

use veneer_dom::{Document, DomError, ListenerModel, Listener, NodeId, Quirks};

use crate::{extend, is_custom_event, Handler};

/// Native event carrying custom events
const CUSTOM_CARRIER: &str = "dataavailable";
/// Trident carrier for custom events fired without bubbling
const CUSTOM_CARRIER_NON_BUBBLING: &str = "filterchange";

/// How a responder filters native events before calling its handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Only synthetic events tagged with this custom name get through
    Custom { name: String },
    /// `mouseenter` / `mouseleave` emulated on `mouseover` / `mouseout`:
    /// moves between the element and its own descendants are dropped
    Transition,
    /// Every native event gets through
    PassThrough,
}

impl Strategy {
    /// Pick the strategy for `event_name` under `quirks`
    pub fn select(event_name: &str, quirks: &Quirks) -> Self {
        if is_custom_event(event_name) {
            Strategy::Custom {
                name: event_name.to_string(),
            }
        } else if !quirks.native_mouse_enter_leave
            && matches!(event_name, "mouseenter" | "mouseleave")
        {
            Strategy::Transition
        } else {
            Strategy::PassThrough
        }
    }
}

/// Native event types a responder subscribes to
fn native_types(event_name: &str, strategy: &Strategy, model: ListenerModel) -> Vec<String> {
    match strategy {
        Strategy::Custom { .. } => match model {
            ListenerModel::AddEventListener => vec![CUSTOM_CARRIER.to_string()],
            ListenerModel::AttachEvent => vec![
                CUSTOM_CARRIER.to_string(),
                CUSTOM_CARRIER_NON_BUBBLING.to_string(),
            ],
        },
        Strategy::Transition => match event_name {
            "mouseenter" => vec!["mouseover".to_string()],
            _ => vec!["mouseout".to_string()],
        },
        Strategy::PassThrough => vec![event_name.to_string()],
    }
}

/// A registered handler and its native subscription
#[derive(Debug)]
pub struct Responder {
    element: NodeId,
    handler: Handler,
    strategy: Strategy,
    native_types: Vec<String>,
    listener: Listener,
}

impl Responder {
    pub fn new(quirks: &Quirks, element: NodeId, event_name: &str, handler: Handler) -> Self {
        let strategy = Strategy::select(event_name, quirks);
        let native_types = native_types(event_name, &strategy, quirks.listener_model);
        let listener = Self::listener(element, strategy.clone(), handler.clone());

        Self {
            element,
            handler,
            strategy,
            native_types,
            listener,
        }
    }

    fn listener(element: NodeId, strategy: Strategy, handler: Handler) -> Listener {
        Listener::new(move |event, doc| {
            match &strategy {
                Strategy::Custom { name } => {
                    if event.event_name.as_deref() != Some(name.as_str()) {
                        return;
                    }
                    extend(doc, event, element);
                }
                Strategy::Transition => {
                    extend(doc, event, element);
                    let mut node = event.related_target;
                    while let Some(current) = node {
                        if current == element {
                            return;
                        }
                        node = doc.parent(current);
                    }
                }
                Strategy::PassThrough => extend(doc, event, element),
            }
            handler.call(event, doc, element);
        })
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Native event types this responder listens to
    pub fn native_types(&self) -> &[String] {
        &self.native_types
    }

    /// Subscribe to the native events
    pub fn attach(&self, doc: &mut Document) -> Result<(), DomError> {
        let model = doc.quirks().listener_model;
        for event_type in &self.native_types {
            match model {
                ListenerModel::AddEventListener => {
                    doc.add_event_listener(self.element, event_type, self.listener.clone())?
                }
                ListenerModel::AttachEvent => {
                    doc.attach_event(self.element, &model.key(event_type), self.listener.clone())?
                }
            }
        }
        Ok(())
    }

    /// Unsubscribe from the native events
    pub fn detach(&self, doc: &mut Document) -> Result<(), DomError> {
        let model = doc.quirks().listener_model;
        for event_type in &self.native_types {
            match model {
                ListenerModel::AddEventListener => {
                    doc.remove_event_listener(self.element, event_type, &self.listener)?
                }
                ListenerModel::AttachEvent => {
                    doc.detach_event(self.element, &model.key(event_type), &self.listener)?
                }
            }
        }
        Ok(())
    }
}
