//! User Handlers

use std::fmt;
use std::rc::Rc;

use veneer_dom::{Document, Event, NodeId};

type HandlerFn = dyn Fn(&mut Event, &mut Document, NodeId);

/// A user-supplied event handler.
///
/// Handlers are called with the normalized event, the document and the
/// element they were registered on. Identity is what registration and
/// removal compare: keep a clone of the handler you observed with to stop
/// observing it later. Wrapping the same closure twice gives two distinct
/// handlers.
#[derive(Clone)]
pub struct Handler(Rc<HandlerFn>);

impl Handler {
    pub fn new(f: impl Fn(&mut Event, &mut Document, NodeId) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub(crate) fn call(&self, event: &mut Event, doc: &mut Document, element: NodeId) {
        (self.0)(event, doc, element)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl Eq for Handler {}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}
