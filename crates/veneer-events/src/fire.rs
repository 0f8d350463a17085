//! Custom Events

use serde_json::{Map, Value};
use veneer_dom::{Document, Event, ListenerModel, NodeId};

use crate::{extend, EventError};

/// Whether an event name denotes an application-defined custom event
pub fn is_custom_event(event_name: &str) -> bool {
    event_name.contains(':')
}

/// Fire the custom event `event_name` at `element`.
///
/// `memo` travels with the event (a `null` memo becomes an empty object).
/// The normalized event is returned after dispatch so callers can check
/// whether a handler stopped it.
pub fn fire(
    doc: &mut Document,
    element: NodeId,
    event_name: &str,
    memo: Value,
    bubble: bool,
) -> Result<Event, EventError> {
    if !is_custom_event(event_name) {
        return Err(EventError::NotCustomEvent(event_name.to_string()));
    }

    let target = if element == doc.root() && !doc.quirks().document_dispatch {
        doc.document_element()
    } else {
        element
    };

    let carrier = match (doc.quirks().listener_model, bubble) {
        (ListenerModel::AttachEvent, false) => "filterchange",
        _ => "dataavailable",
    };

    let mut event = Event::new(carrier, bubble, true);
    event.event_name = Some(event_name.to_string());
    event.memo = match memo {
        Value::Null => Value::Object(Map::new()),
        memo => memo,
    };

    tracing::debug!("Firing {} at {:?} (bubble: {})", event_name, target, bubble);
    doc.dispatch_event(target, &mut event)?;
    extend(doc, &mut event, target);

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_cannot_be_fired() {
        let mut doc = Document::new("about:blank");
        let body = doc.body();
        assert_eq!(
            fire(&mut doc, body, "click", Value::Null, true).unwrap_err(),
            EventError::NotCustomEvent("click".into())
        );
    }

    #[test]
    fn test_memo_defaults_to_empty_object() {
        let mut doc = Document::new("about:blank");
        let body = doc.body();
        let event = fire(&mut doc, body, "app:ping", Value::Null, true).unwrap();
        assert_eq!(event.memo, Value::Object(Map::new()));
        assert_eq!(event.target, Some(body));
        assert!(!event.stopped);
    }
}
