//! Native Listeners
//!
//! Callables subscribed to a node's native event slots. Identity is the
//! allocation: clones of one `Listener` are the same listener, two
//! listeners built from identical closures are not.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{Document, Event, NodeId};

type ListenerFn = dyn Fn(&mut Event, &mut Document);

/// Shared native listener
#[derive(Clone)]
pub struct Listener(Rc<ListenerFn>);

impl Listener {
    pub fn new(f: impl Fn(&mut Event, &mut Document) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the listener
    pub fn call(&self, event: &mut Event, doc: &mut Document) {
        (self.0)(event, doc)
    }

    /// Whether both handles point at the same listener
    pub fn same(&self, other: &Listener) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Per-node native listener slots, keyed by the engine's slot name
/// (`click` or `onclick`)
#[derive(Debug, Default)]
pub(crate) struct ListenerTable {
    by_node: HashMap<NodeId, Vec<(String, Listener)>>,
}

impl ListenerTable {
    /// Subscribe; with `dedupe` an identical (key, listener) pair is ignored
    pub fn add(&mut self, node: NodeId, key: String, listener: Listener, dedupe: bool) -> bool {
        let slots = self.by_node.entry(node).or_default();
        if dedupe && slots.iter().any(|(k, l)| *k == key && l.same(&listener)) {
            return false;
        }
        slots.push((key, listener));
        true
    }

    /// Unsubscribe the first matching (key, listener) pair
    pub fn remove(&mut self, node: NodeId, key: &str, listener: &Listener) -> bool {
        let Some(slots) = self.by_node.get_mut(&node) else {
            return false;
        };
        let Some(index) = slots.iter().position(|(k, l)| k == key && l.same(listener)) else {
            return false;
        };
        slots.remove(index);
        if slots.is_empty() {
            self.by_node.remove(&node);
        }
        true
    }

    /// Snapshot of the listeners subscribed under `key`, in order
    pub fn snapshot(&self, node: NodeId, key: &str) -> Vec<Listener> {
        self.by_node
            .get(&node)
            .map(|slots| {
                slots
                    .iter()
                    .filter(|(k, _)| k == key)
                    .map(|(_, l)| l.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count(&self, node: NodeId) -> usize {
        self.by_node.get(&node).map_or(0, Vec::len)
    }

    pub fn clear_node(&mut self, node: NodeId) -> usize {
        self.by_node.remove(&node).map_or(0, |slots| slots.len())
    }
}
