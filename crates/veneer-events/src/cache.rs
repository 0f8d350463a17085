//! Global Cleanup Cache
//!
//! Every element that has ever been observed, held through non-owning
//! handles so the cache never keeps a node around.

use veneer_dom::{Document, NodeId, WeakNode};

#[derive(Debug, Default)]
pub struct CleanupCache {
    entries: Vec<WeakNode>,
}

impl CleanupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember an element
    pub fn track(&mut self, node: WeakNode) {
        if !self.entries.contains(&node) {
            self.entries.push(node);
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.entries.iter().any(|w| w.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget entries whose node has left the document
    pub fn prune(&mut self, doc: &Document) -> Vec<NodeId> {
        let (alive, dead): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|&w| doc.is_alive(w));
        self.entries = alive;
        dead.into_iter().map(|w| w.id()).collect()
    }

    /// Take every entry, leaving the cache empty
    pub(crate) fn take(&mut self) -> Vec<WeakNode> {
        std::mem::take(&mut self.entries)
    }
}
