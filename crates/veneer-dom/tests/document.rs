//! Host document tests
//!
//! Dispatch, listener models, liveness and box metrics.

use std::cell::RefCell;
use std::rc::Rc;

use veneer_dom::{DomError, Document, Engine, Event, Listener, MouseEventInit, ReadyState};

fn recorder(log: &Rc<RefCell<Vec<String>>>, label: &str) -> Listener {
    let log = log.clone();
    let label = label.to_string();
    Listener::new(move |_, _| log.borrow_mut().push(label.clone()))
}

#[test]
fn test_dispatch_bubbles_to_document() {
    let mut doc = Document::new("about:blank");
    let outer = doc.append_element(doc.body(), "div").unwrap();
    let inner = doc.append_element(outer, "span").unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));

    doc.add_event_listener(inner, "click", recorder(&log, "inner")).unwrap();
    doc.add_event_listener(outer, "click", recorder(&log, "outer")).unwrap();
    doc.add_event_listener(doc.root(), "click", recorder(&log, "document")).unwrap();

    let mut event = Event::new("click", true, true);
    assert!(doc.dispatch_event(inner, &mut event).unwrap());
    assert_eq!(*log.borrow(), vec!["inner", "outer", "document"]);
    assert_eq!(event.target, Some(inner));
}

#[test]
fn test_non_bubbling_event_stays_on_target() {
    let mut doc = Document::new("about:blank");
    let outer = doc.append_element(doc.body(), "div").unwrap();
    let inner = doc.append_element(outer, "span").unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));

    doc.add_event_listener(inner, "focus", recorder(&log, "inner")).unwrap();
    doc.add_event_listener(outer, "focus", recorder(&log, "outer")).unwrap();

    let mut event = Event::new("focus", false, false);
    doc.dispatch_event(inner, &mut event).unwrap();
    assert_eq!(*log.borrow(), vec!["inner"]);
}

#[test]
fn test_stop_propagation() {
    let mut doc = Document::new("about:blank");
    let outer = doc.append_element(doc.body(), "div").unwrap();
    let inner = doc.append_element(outer, "span").unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));

    doc.add_event_listener(
        inner,
        "click",
        Listener::new(|event, _| {
            event.stop_propagation();
            event.prevent_default();
        }),
    )
    .unwrap();
    doc.add_event_listener(outer, "click", recorder(&log, "outer")).unwrap();

    let mut event = Event::new("click", true, true);
    assert!(!doc.dispatch_event(inner, &mut event).unwrap());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_listener_model_is_engine_specific() {
    let mut doc = Document::with_engine("about:blank", Engine::Trident);
    let el = doc.append_element(doc.body(), "a").unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));

    let err = doc
        .add_event_listener(el, "click", recorder(&log, "w3c"))
        .unwrap_err();
    assert!(matches!(err, DomError::UnsupportedListenerModel { .. }));

    doc.attach_event(el, "onclick", recorder(&log, "ie")).unwrap();
    let mut event = Event::new("click", true, true);
    doc.dispatch_event(el, &mut event).unwrap();

    assert_eq!(*log.borrow(), vec!["ie"]);
    assert_eq!(event.src_element, Some(el));
    assert_eq!(event.target, None);
}

#[test]
fn test_trident_does_not_dedupe_listeners() {
    let mut doc = Document::with_engine("about:blank", Engine::Trident);
    let el = doc.append_element(doc.body(), "a").unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));
    let listener = recorder(&log, "ie");

    doc.attach_event(el, "onclick", listener.clone()).unwrap();
    doc.attach_event(el, "onclick", listener).unwrap();
    assert_eq!(doc.listener_count(el), 2);
}

#[test]
fn test_listeners_may_subscribe_during_dispatch() {
    let mut doc = Document::new("about:blank");
    let el = doc.append_element(doc.body(), "div").unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));
    let late = recorder(&log, "late");

    doc.add_event_listener(
        el,
        "click",
        Listener::new(move |event, doc| {
            let target = event.current_target.unwrap();
            doc.add_event_listener(target, "click", late.clone()).unwrap();
        }),
    )
    .unwrap();

    doc.dispatch_event(el, &mut Event::new("click", true, true)).unwrap();
    assert!(log.borrow().is_empty());
    doc.dispatch_event(el, &mut Event::new("click", true, true)).unwrap();
    assert_eq!(*log.borrow(), vec!["late"]);
}

#[test]
fn test_denied_access_blocks_removal() {
    let mut doc = Document::new("about:blank");
    let frame = doc.append_element(doc.body(), "iframe").unwrap();
    let listener = Listener::new(|_, _| {});
    doc.add_event_listener(frame, "load", listener.clone()).unwrap();
    doc.deny_access(frame);

    assert_eq!(
        doc.remove_event_listener(frame, "load", &listener),
        Err(DomError::AccessDenied(frame))
    );
    assert_eq!(doc.listener_count(frame), 1);
}

#[test]
fn test_removed_node_is_not_alive() {
    let mut doc = Document::new("about:blank");
    let el = doc.append_element(doc.body(), "div").unwrap();
    let child = doc.append_element(el, "p").unwrap();
    doc.add_event_listener(child, "click", Listener::new(|_, _| {})).unwrap();
    let weak = doc.weak(child).unwrap();

    assert!(doc.is_alive(weak));
    doc.remove_node(el).unwrap();
    assert!(!doc.is_alive(weak));
    assert_eq!(doc.listener_count(child), 0);
    assert!(doc.dispatch_event(child, &mut Event::new("click", true, true)).is_err());
}

#[test]
fn test_mouse_event_shape_per_engine() {
    let mut gecko = Document::with_engine("about:blank", Engine::Gecko);
    gecko.scroll_to(0.0, 100.0);
    let el = gecko.body();
    let init = MouseEventInit {
        client_x: 10.0,
        client_y: 20.0,
        ..Default::default()
    };
    let event = gecko.create_mouse_event("click", el, init);
    assert_eq!(event.page_y, Some(120.0));
    assert_eq!(event.which, Some(1));

    let ie = Document::with_engine("about:blank", Engine::Trident);
    let event = ie.create_mouse_event("click", ie.body(), init);
    assert_eq!(event.page_x, None);
    assert_eq!(event.client_x, 12.0);
    assert_eq!(event.button, 1);
}

#[test]
fn test_geometry_content_box() {
    let mut doc = Document::new("about:blank");
    let el = doc.append_element(doc.body(), "div").unwrap();
    doc.set_style(el, "position", "absolute").unwrap();
    doc.set_style(el, "left", "25px").unwrap();
    doc.set_style(el, "width", "200px").unwrap();
    doc.set_style(el, "height", "100px").unwrap();
    doc.set_style(el, "padding", "10px").unwrap();
    doc.set_style(el, "border-width", "3px").unwrap();

    let geometry = doc.geometry(el);
    assert_eq!(geometry.offset_width, 226.0);
    assert_eq!(geometry.offset_height, 126.0);
    assert_eq!(geometry.client_left, 3.0);
    assert_eq!(geometry.client_width, 220.0);
    assert_eq!(geometry.offset_left, 25.0);
}

#[test]
fn test_auto_width_fills_parent() {
    let mut doc = Document::new("about:blank");
    let parent = doc.append_element(doc.body(), "div").unwrap();
    doc.set_style(parent, "width", "300px").unwrap();
    let child = doc.append_element(parent, "div").unwrap();
    doc.set_style(child, "margin", "0 20px").unwrap();

    assert_eq!(doc.geometry(child).offset_width, 260.0);
    assert_eq!(doc.resolve_length(child, "50%"), Some(150.0));
}

#[test]
fn test_ready_state_signals() {
    let mut doc = Document::new("about:blank");
    let log = Rc::new(RefCell::new(Vec::new()));
    let root = doc.root();
    doc.add_event_listener(root, "DOMContentLoaded", recorder(&log, "ready")).unwrap();
    doc.add_event_listener(root, "load", recorder(&log, "load")).unwrap();

    doc.finish_loading();
    assert_eq!(doc.ready_state(), ReadyState::Complete);
    assert_eq!(*log.borrow(), vec!["ready", "load"]);
}

#[test]
fn test_select_one_defaults_to_first_option() {
    let mut doc = Document::new("about:blank");
    let select = doc.append_element(doc.body(), "select").unwrap();
    let a = doc.append_element(select, "option").unwrap();
    let b = doc.append_element(select, "option").unwrap();

    assert_eq!(doc.selected_index(select), Some(0));
    doc.set_selected(b, true).unwrap();
    assert!(!doc.selected(a));
    assert_eq!(doc.selected_index(select), Some(1));
}

#[test]
fn test_radio_group_is_exclusive() {
    let mut doc = Document::new("about:blank");
    let form = doc.append_element(doc.body(), "form").unwrap();
    let first = doc.append_element(form, "input").unwrap();
    let second = doc.append_element(form, "input").unwrap();
    for radio in [first, second] {
        doc.set_attribute(radio, "type", "radio").unwrap();
        doc.set_attribute(radio, "name", "size").unwrap();
    }

    doc.set_checked(first, true).unwrap();
    doc.set_checked(second, true).unwrap();
    assert!(!doc.checked(first));
    assert!(doc.checked(second));
}

#[test]
fn test_lookup_by_id_and_attribute_removal() {
    let mut doc = Document::new("about:blank");
    let el = doc.append_element(doc.body(), "div").unwrap();
    doc.set_attribute(el, "id", "main").unwrap();

    assert_eq!(doc.get_element_by_id("main"), Some(el));
    assert_eq!(doc.remove_attribute(el, "ID").unwrap(), Some("main".to_string()));
    assert_eq!(doc.get_element_by_id("main"), None);
    assert_eq!(doc.remove_attribute(el, "id").unwrap(), None);
}

#[test]
fn test_percentages_of_viewport() {
    let mut doc = Document::new("about:blank");
    assert_eq!(doc.viewport(), (1024.0, 768.0));

    doc.set_viewport(800.0, 600.0);
    let el = doc.append_element(doc.body(), "div").unwrap();
    assert_eq!(doc.resolve_length(el, "50%"), Some(400.0));
}
