//! Event Normalization
//!
//! Fills in the fields a Trident-shaped event lacks and adds the helper
//! methods handlers use regardless of engine.

use std::iter;

use veneer_dom::{ButtonEncoding, Document, Event, NodeId};

use crate::SimpleSelector;

/// Normalize a native event in place.
///
/// `target` falls back to `src_element`, then to `element`;
/// `related_target` is taken from `from_element` / `to_element` for
/// `mouseover` / `mouseout`; page coordinates are derived from client
/// coordinates and the page scroll. Fields the engine already reported are
/// left alone, so calling this twice is harmless.
pub fn extend(doc: &Document, event: &mut Event, element: NodeId) {
    if event.extended {
        return;
    }

    if event.target.is_none() {
        event.target = event.src_element.or(Some(element));
    }
    if event.related_target.is_none() {
        event.related_target = match event.event_type.as_str() {
            "mouseover" => event.from_element,
            "mouseout" => event.to_element,
            _ => None,
        };
    }
    if event.page_x.is_none() || event.page_y.is_none() {
        let (x, y) = event.pointer(doc);
        event.page_x = Some(x);
        event.page_y = Some(y);
    }

    event.extended = true;
}

/// Helpers available on every normalized event
pub trait EventExt {
    /// Prevent the default action, stop propagation and mark the event as
    /// stopped for later inspection
    fn stop(&mut self);

    fn is_left_click(&self, doc: &Document) -> bool;
    fn is_middle_click(&self, doc: &Document) -> bool;
    fn is_right_click(&self, doc: &Document) -> bool;

    /// Absolute pointer position on the page
    fn pointer(&self, doc: &Document) -> (f64, f64);

    fn pointer_x(&self, doc: &Document) -> f64 {
        self.pointer(doc).0
    }

    fn pointer_y(&self, doc: &Document) -> f64 {
        self.pointer(doc).1
    }

    /// The element the event occurred on
    fn element(&self, doc: &Document) -> Option<NodeId>;

    /// First of the event's element and its ancestors matching `selector`
    fn find_element(&self, doc: &Document, selector: &str) -> Option<NodeId>;
}

impl EventExt for Event {
    fn stop(&mut self) {
        self.prevent_default();
        self.stop_propagation();
        self.stopped = true;
    }

    fn is_left_click(&self, doc: &Document) -> bool {
        is_button(self, doc, 0)
    }

    fn is_middle_click(&self, doc: &Document) -> bool {
        is_button(self, doc, 1)
    }

    fn is_right_click(&self, doc: &Document) -> bool {
        is_button(self, doc, 2)
    }

    fn pointer(&self, doc: &Document) -> (f64, f64) {
        let (scroll_x, scroll_y) = doc.scroll();
        let edge = doc.quirks().document_client_edge;
        (
            self.page_x.unwrap_or(self.client_x + scroll_x - edge),
            self.page_y.unwrap_or(self.client_y + scroll_y - edge),
        )
    }

    fn element(&self, doc: &Document) -> Option<NodeId> {
        let mut node = self.target.or(self.src_element)?;

        // Load and error events on images, and clicks on radio buttons
        // reached by keyboard, report the wrong target
        if let Some(current) = self.current_target.filter(|&c| doc.is_element(c)) {
            let radio_click = self.event_type == "click"
                && doc.tag_name(current) == Some("input")
                && doc.get_attribute(current, "type").is_some_and(|t| t.eq_ignore_ascii_case("radio"));
            if matches!(self.event_type.as_str(), "load" | "error") || radio_click {
                node = current;
            }
        }

        // Text node targets on anchor clicks
        if doc.is_text(node) {
            node = doc.parent(node)?;
        }
        Some(node)
    }

    fn find_element(&self, doc: &Document, selector: &str) -> Option<NodeId> {
        let element = self.element(doc)?;
        let Some(selector) = SimpleSelector::parse(selector) else {
            return Some(element);
        };
        iter::once(element)
            .chain(doc.tree().ancestors(element))
            .find(|&node| selector.matches(doc, node))
    }
}

/// Decode the engine's button reporting. `code` is 0 for the primary
/// button, 1 for the middle one and 2 for the secondary one.
fn is_button(event: &Event, doc: &Document, code: u16) -> bool {
    match doc.quirks().button_encoding {
        ButtonEncoding::Trident => {
            let mask = match code {
                0 => 1,
                1 => 4,
                _ => 2,
            };
            event.button == mask
        }
        ButtonEncoding::WebKit => match code {
            0 => event.which == Some(1) && !event.meta_key,
            1 => event.which == Some(1) && event.meta_key,
            _ => false,
        },
        ButtonEncoding::Standard => match event.which {
            Some(which) if which != 0 => which == code + 1,
            _ => event.button == code,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_dom::{Engine, MouseButton, MouseEventInit};

    fn click(doc: &Document, button: MouseButton) -> Event {
        let init = MouseEventInit {
            button,
            ..Default::default()
        };
        doc.create_mouse_event("mousedown", doc.body(), init)
    }

    #[test]
    fn test_button_decoding_per_engine() {
        for engine in [Engine::Gecko, Engine::Trident, Engine::Khtml] {
            let doc = Document::with_engine("about:blank", engine);
            assert!(click(&doc, MouseButton::Left).is_left_click(&doc), "{engine:?}");
            assert!(click(&doc, MouseButton::Middle).is_middle_click(&doc), "{engine:?}");
            assert!(click(&doc, MouseButton::Right).is_right_click(&doc), "{engine:?}");
            assert!(!click(&doc, MouseButton::Right).is_left_click(&doc), "{engine:?}");
        }

        let webkit = Document::with_engine("about:blank", Engine::WebKit);
        assert!(click(&webkit, MouseButton::Left).is_left_click(&webkit));
        assert!(click(&webkit, MouseButton::Middle).is_middle_click(&webkit));
        assert!(!click(&webkit, MouseButton::Middle).is_left_click(&webkit));
    }

    #[test]
    fn test_extend_trident_event() {
        let mut doc = Document::with_engine("about:blank", Engine::Trident);
        let outside = doc.append_element(doc.body(), "div").unwrap();
        let el = doc.append_element(doc.body(), "div").unwrap();
        doc.scroll_to(0.0, 50.0);

        let init = MouseEventInit {
            client_x: 10.0,
            client_y: 10.0,
            related: Some(outside),
            ..Default::default()
        };
        let mut event = doc.create_mouse_event("mouseover", el, init);
        event.src_element = Some(el);
        extend(&doc, &mut event, el);

        assert_eq!(event.target, Some(el));
        assert_eq!(event.related_target, Some(outside));
        assert_eq!(event.page_x, Some(10.0));
        assert_eq!(event.page_y, Some(60.0));
        assert!(event.extended);
    }

    #[test]
    fn test_stop_marks_event() {
        let mut event = Event::new("click", true, true);
        event.stop();
        assert!(event.stopped);
        assert!(event.is_default_prevented());
        assert!(event.is_propagation_stopped());
    }

    #[test]
    fn test_element_lifts_text_targets() {
        let mut doc = Document::new("about:blank");
        let link = doc.append_element(doc.body(), "a").unwrap();
        let text = doc.append_text(link, "home").unwrap();

        let mut event = Event::new("click", true, true);
        event.target = Some(text);
        assert_eq!(event.element(&doc), Some(link));
    }

    #[test]
    fn test_find_element_walks_ancestors() {
        let mut doc = Document::new("about:blank");
        let table = doc.append_element(doc.body(), "table").unwrap();
        let row = doc.append_element(table, "tr").unwrap();
        let cell = doc.append_element(row, "td").unwrap();

        let mut event = Event::new("click", true, true);
        event.target = Some(cell);
        assert_eq!(event.find_element(&doc, "tr"), Some(row));
        assert_eq!(event.find_element(&doc, "ul"), None);
        assert_eq!(event.find_element(&doc, ""), Some(cell));
    }
}
