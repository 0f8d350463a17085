//! Change Observers
//!
//! Two ways of noticing that a field or a whole form changed value:
//! polling on a timer the host drives, or listening to the controls'
//! `click` / `change` events.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use veneer_dom::{Document, NodeId};
use veneer_events::{EventRegistry, Handler};

use crate::{ControlKind, Field, FieldValue, Form, FormError, SerializeOptions};

/// Called with the watched element and its new value
pub type ChangeCallback = dyn Fn(&mut Document, NodeId, Option<&FieldValue>);

/// The field or form an observer watches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watched {
    Field(Field),
    /// Watched through its query-string serialization
    Form(Form),
}

impl Watched {
    pub fn new(doc: &Document, element: NodeId) -> Result<Self, FormError> {
        match Form::new(doc, element) {
            Ok(form) => Ok(Self::Form(form)),
            Err(_) => Ok(Self::Field(Field::new(doc, element)?)),
        }
    }

    pub fn element(&self) -> NodeId {
        match self {
            Self::Field(field) => field.element(),
            Self::Form(form) => form.element(),
        }
    }

    fn value(&self, doc: &Document) -> Option<FieldValue> {
        match self {
            Self::Field(field) => field.value(doc).ok().flatten(),
            Self::Form(form) => form
                .serialize(doc, &SerializeOptions::query())
                .as_query()
                .map(|q| FieldValue::Single(q.to_string())),
        }
    }

    /// Controls whose events signal a change
    fn controls(&self, doc: &Document) -> Vec<NodeId> {
        match self {
            Self::Field(field) => vec![field.element()],
            Self::Form(form) => form.elements(doc),
        }
    }
}

/// Whether two readings differ, comparing lists by their joined text
fn changed(last: &Option<FieldValue>, value: &Option<FieldValue>) -> bool {
    match (last, value) {
        (Some(FieldValue::Single(a)), Some(FieldValue::Single(b))) => a != b,
        _ => as_text(last) != as_text(value),
    }
}

fn as_text(value: &Option<FieldValue>) -> String {
    value.as_ref().map_or_else(|| "null".to_string(), FieldValue::to_string)
}

/// Polls a field or form at a fixed frequency.
///
/// There is no timer thread: the host calls [`tick`](Self::tick) from its
/// event loop and the observer checks the value whenever a period elapsed.
pub struct TimedObserver {
    watched: Watched,
    frequency: Duration,
    next_due: Option<Instant>,
    last_value: Option<FieldValue>,
    callback: Box<ChangeCallback>,
}

impl TimedObserver {
    pub fn new(
        doc: &Document,
        element: NodeId,
        frequency: Duration,
        now: Instant,
        callback: impl Fn(&mut Document, NodeId, Option<&FieldValue>) + 'static,
    ) -> Result<Self, FormError> {
        let watched = Watched::new(doc, element)?;
        Ok(Self {
            watched,
            frequency,
            next_due: Some(now + frequency),
            last_value: watched.value(doc),
            callback: Box::new(callback),
        })
    }

    pub fn watched(&self) -> Watched {
        self.watched
    }

    pub fn frequency(&self) -> Duration {
        self.frequency
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Check the value if a period has elapsed by `now`. Returns whether
    /// the callback ran.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        self.next_due = Some(now + self.frequency);

        let value = self.watched.value(doc);
        if !changed(&self.last_value, &value) {
            return false;
        }
        self.last_value = value;
        (self.callback)(doc, self.watched.element(), self.last_value.as_ref());
        true
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }
}

impl fmt::Debug for TimedObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedObserver")
            .field("watched", &self.watched)
            .field("frequency", &self.frequency)
            .field("running", &self.is_running())
            .finish()
    }
}

/// Reacts to `click` (check boxes, radio buttons) and `change` (other
/// controls) events of a field, or of every control of a form
#[derive(Debug)]
pub struct EventObserver {
    watched: Watched,
    subscriptions: Vec<(NodeId, &'static str)>,
    handler: Handler,
}

impl EventObserver {
    pub fn new(
        doc: &mut Document,
        registry: &mut EventRegistry,
        element: NodeId,
        callback: impl Fn(&mut Document, NodeId, Option<&FieldValue>) + 'static,
    ) -> Result<Self, FormError> {
        let watched = Watched::new(doc, element)?;
        let last_value = Rc::new(RefCell::new(watched.value(doc)));

        let handler = Handler::new(move |_, doc, _| {
            let value = watched.value(doc);
            if !changed(&last_value.borrow(), &value) {
                return;
            }
            last_value.replace(value.clone());
            callback(doc, watched.element(), value.as_ref());
        });

        let mut subscriptions = Vec::new();
        for control in watched.controls(doc) {
            let event_name = match ControlKind::of(doc, control) {
                Some(ControlKind::Checkable) => "click",
                _ => "change",
            };
            registry.observe(doc, control, event_name, &handler)?;
            subscriptions.push((control, event_name));
        }
        tracing::debug!(
            "Observing {} controls of {:?} for changes",
            subscriptions.len(),
            watched.element()
        );

        Ok(Self {
            watched,
            subscriptions,
            handler,
        })
    }

    pub fn watched(&self) -> Watched {
        self.watched
    }

    /// Stop reacting to the controls' events
    pub fn stop(&self, doc: &mut Document, registry: &mut EventRegistry) -> Result<(), FormError> {
        for &(control, event_name) in &self.subscriptions {
            registry.stop_observing(doc, control, Some(event_name), Some(&self.handler))?;
        }
        Ok(())
    }
}
