//! Form tests
//!
//! Serialization rules, form helpers and both observer flavours.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use veneer_dom::{Document, Engine, Event, MouseEventInit, NodeId};
use veneer_events::EventRegistry;
use veneer_forms::{
    get_value, serialize_elements, set_value, EventObserver, FieldValue, Form, SerializeOptions,
    Submit, TimedObserver,
};

fn control(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let el = doc.append_element(parent, tag).unwrap();
    for (name, value) in attrs {
        doc.set_attribute(el, name, value).unwrap();
    }
    el
}

/// A login form: user, password, remember-me, two submit buttons, a file
/// input, a disabled field and an unnamed one
fn login_form(doc: &mut Document) -> NodeId {
    let form = doc.append_element(doc.body(), "form").unwrap();
    control(doc, form, "input", &[("name", "user"), ("value", "ann")]);
    control(doc, form, "input", &[("type", "password"), ("name", "pass"), ("value", "s3cret")]);
    control(doc, form, "input", &[("type", "checkbox"), ("name", "remember"), ("checked", "checked")]);
    control(doc, form, "input", &[("type", "file"), ("name", "avatar")]);
    control(doc, form, "input", &[("name", "legacy"), ("value", "x"), ("disabled", "disabled")]);
    control(doc, form, "input", &[("value", "anonymous")]);
    control(doc, form, "input", &[("type", "submit"), ("name", "login"), ("value", "Log in")]);
    control(doc, form, "input", &[("type", "submit"), ("name", "cancel"), ("value", "Cancel")]);
    form
}

#[test]
fn test_serialize_hash_skips_excluded_controls() {
    let mut doc = Document::new("http://example.com/login");
    let form_el = login_form(&mut doc);
    let form = Form::new(&doc, form_el).unwrap();

    let serialized = form.serialize(&doc, &SerializeOptions::default());
    let data = serialized.as_hash().unwrap();
    let keys: Vec<&str> = data.iter().map(|(k, _)| k).collect();

    assert_eq!(keys, vec!["user", "pass", "remember", "login"]);
    assert_eq!(data.get("remember"), Some(&FieldValue::Single("on".into())));
}

#[test]
fn test_serialize_query_string() {
    let mut doc = Document::new("about:blank");
    let form_el = login_form(&mut doc);
    let form = Form::new(&doc, form_el).unwrap();

    let serialized = form.serialize(&doc, &SerializeOptions::query());
    assert_eq!(
        serialized.as_query(),
        Some("user=ann&pass=s3cret&remember=on&login=Log+in")
    );
}

#[test]
fn test_submit_option_picks_button() {
    let mut doc = Document::new("about:blank");
    let form_el = login_form(&mut doc);
    let form = Form::new(&doc, form_el).unwrap();

    let named = SerializeOptions {
        hash: true,
        submit: Submit::Named("cancel".into()),
    };
    let data = form.serialize(&doc, &named);
    let data = data.as_hash().unwrap();
    assert!(data.get("login").is_none());
    assert_eq!(data.get("cancel"), Some(&FieldValue::Single("Cancel".into())));

    let none = SerializeOptions {
        hash: true,
        submit: Submit::Exclude,
    };
    let data = form.serialize(&doc, &none);
    let data = data.as_hash().unwrap();
    assert!(data.get("login").is_none() && data.get("cancel").is_none());
}

#[test]
fn test_repeated_names_and_multiple_select() {
    let mut doc = Document::new("about:blank");
    let form_el = doc.append_element(doc.body(), "form").unwrap();
    for value in ["red", "blue"] {
        let el = control(&mut doc, form_el, "input", &[("type", "checkbox"), ("name", "color"), ("value", value)]);
        set_value(&mut doc, el, true).unwrap();
    }
    let select = control(&mut doc, form_el, "select", &[("name", "size"), ("multiple", "multiple")]);
    for size in ["s", "m", "l"] {
        control(&mut doc, select, "option", &[("value", size)]);
    }
    set_value(&mut doc, select, vec!["m".to_string(), "l".to_string()]).unwrap();

    let form = Form::new(&doc, form_el).unwrap();
    let serialized = form.serialize(&doc, &SerializeOptions::default());
    let data = serialized.as_hash().unwrap();

    assert_eq!(
        data.get("color"),
        Some(&FieldValue::Many(vec!["red".into(), "blue".into()]))
    );
    assert_eq!(data.get("size"), Some(&FieldValue::Many(vec!["m".into(), "l".into()])));
    assert_eq!(
        form.serialize(&doc, &SerializeOptions::query()).as_query(),
        Some("color=red&color=blue&size=m&size=l")
    );
}

#[test]
fn test_serialize_elements_subset() {
    let mut doc = Document::new("about:blank");
    let form = login_form(&mut doc);
    let elements = Form::new(&doc, form).unwrap().elements(&doc);

    let serialized = serialize_elements(&doc, &elements[..1], &SerializeOptions::query());
    assert_eq!(serialized.as_query(), Some("user=ann"));
}

#[test]
fn test_radio_group_value() {
    let mut doc = Document::new("about:blank");
    let form_el = doc.append_element(doc.body(), "form").unwrap();
    let small = control(&mut doc, form_el, "input", &[("type", "radio"), ("name", "size"), ("value", "s")]);
    let large = control(&mut doc, form_el, "input", &[("type", "radio"), ("name", "size"), ("value", "l")]);

    set_value(&mut doc, small, true).unwrap();
    set_value(&mut doc, large, true).unwrap();

    assert_eq!(get_value(&doc, small).unwrap(), None);
    assert_eq!(get_value(&doc, large).unwrap(), Some(FieldValue::Single("l".into())));
}

#[test]
fn test_focus_first_element() {
    let mut doc = Document::new("about:blank");
    let form_el = login_form(&mut doc);
    let form = Form::new(&doc, form_el).unwrap();

    form.focus_first_element(&mut doc).unwrap();
    let first = form.elements(&doc)[0];
    assert_eq!(doc.active_element(), Some(first));
    assert_eq!(doc.selection_owner(), Some(first));
}

#[test]
fn test_timed_observer_fires_on_change_only() {
    let mut doc = Document::new("about:blank");
    let body = doc.body();
    let input = control(&mut doc, body, "input", &[("name", "q")]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let start = Instant::now();
    let period = Duration::from_millis(500);

    let s = seen.clone();
    let mut observer = TimedObserver::new(&doc, input, period, start, move |_, _, value| {
        s.borrow_mut().push(value.cloned());
    })
    .unwrap();

    set_value(&mut doc, input, "rust").unwrap();
    assert!(!observer.tick(&mut doc, start + Duration::from_millis(100)));
    assert!(observer.tick(&mut doc, start + period));
    assert!(!observer.tick(&mut doc, start + period * 2));

    set_value(&mut doc, input, "rust lang").unwrap();
    observer.stop();
    assert!(!observer.tick(&mut doc, start + period * 3));

    assert_eq!(*seen.borrow(), vec![Some(FieldValue::Single("rust".into()))]);
}

#[test]
fn test_timed_form_observer_sees_serialization() {
    let mut doc = Document::new("about:blank");
    let form = login_form(&mut doc);
    let user = doc.elements_by_tag(form, "input")[0];
    let seen = Rc::new(RefCell::new(Vec::new()));
    let start = Instant::now();

    let s = seen.clone();
    let mut observer = TimedObserver::new(&doc, form, Duration::ZERO, start, move |_, el, value| {
        s.borrow_mut().push((el, value.map(|v| v.to_string())));
    })
    .unwrap();

    set_value(&mut doc, user, "bob").unwrap();
    assert!(observer.tick(&mut doc, start));
    assert_eq!(
        *seen.borrow(),
        vec![(form, Some("user=bob&pass=s3cret&remember=on&login=Log+in".to_string()))]
    );
}

#[test]
fn test_event_observer_on_form() {
    for engine in [Engine::Gecko, Engine::Trident] {
        let mut doc = Document::with_engine("about:blank", engine);
        let mut registry = EventRegistry::new();
        let form_el = doc.append_element(doc.body(), "form").unwrap();
        let name = control(&mut doc, form_el, "input", &[("name", "name")]);
        let agree = control(&mut doc, form_el, "input", &[("type", "checkbox"), ("name", "agree")]);
        let changes = Rc::new(RefCell::new(Vec::new()));

        let c = changes.clone();
        let observer = EventObserver::new(&mut doc, &mut registry, form_el, move |_, _, value| {
            c.borrow_mut().push(value.map(|v| v.to_string()).unwrap_or_default());
        })
        .unwrap();

        assert_eq!(registry.responder_count(name, Some("change")), 1);
        assert_eq!(registry.responder_count(agree, Some("click")), 1);

        set_value(&mut doc, agree, true).unwrap();
        let mut click = doc.create_mouse_event("click", agree, MouseEventInit::default());
        doc.dispatch_event(agree, &mut click).unwrap();

        // No change since the last event
        doc.dispatch_event(name, &mut Event::new("change", true, false)).unwrap();

        set_value(&mut doc, name, "ann").unwrap();
        doc.dispatch_event(name, &mut Event::new("change", true, false)).unwrap();

        assert_eq!(
            *changes.borrow(),
            vec!["name=&agree=on".to_string(), "name=ann&agree=on".to_string()],
            "{engine:?}"
        );

        observer.stop(&mut doc, &mut registry).unwrap();
        assert_eq!(registry.responder_count(name, None), 0);
        assert_eq!(doc.listener_count(agree), 0);
    }
}
