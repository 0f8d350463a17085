//! Login form example
//!
//! Builds a small login page, watches the form for changes and submits it
//! as a query string.

use veneer::dom::{Engine, Event};
use veneer::events::Handler;
use veneer::forms::{EventObserver, SerializeOptions};
use veneer::{Config, Page};

fn main() -> anyhow::Result<()> {
    veneer::init_logging();

    let mut page = Page::new("http://example.com/login", Config::with_engine(Engine::Trident))?;
    let doc = page.document_mut();
    let body = doc.body();
    let form = doc.append_element(body, "form")?;
    let user = doc.append_element(form, "input")?;
    doc.set_attribute(user, "name", "user")?;
    let remember = doc.append_element(form, "input")?;
    doc.set_attribute(remember, "type", "checkbox")?;
    doc.set_attribute(remember, "name", "remember")?;
    page.finish_loading();

    let observer = {
        let (doc, registry) = page.parts_mut();
        EventObserver::new(
            doc,
            registry,
            form,
            |_, _, value| println!("Form changed: {:?}", value),
        )?
    };

    page.set_value(user, "ann")?;
    page.set_value(remember, true)?;
    let doc = page.document_mut();
    let mut change = Event::new("change", true, false);
    doc.dispatch_event(user, &mut change)?;
    page.fire(form, "app:validated", serde_json::json!({ "valid": true }), true)?;
    page.observe(form, "submit", &Handler::new(|_, _, _| println!("Submitting")))?;
    let mut submit = Event::new("submit", true, true);
    page.document_mut().dispatch_event(form, &mut submit)?;

    let query = page.form(form)?.serialize(page.document(), &SerializeOptions::query());
    println!("Query: {}", query.as_query().unwrap_or_default());

    let (doc, registry) = page.parts_mut();
    observer.stop(doc, registry)?;
    let stats = page.unload();
    println!("Swept {} elements", stats.swept);

    Ok(())
}
