//! Veneer DOM - host document model
//!
//! Arena-based DOM tree carrying everything the compatibility layers read
//! from a browser: attributes, inline style, box metrics, form-control
//! state and the native listener tables of each engine family.

mod attributes;
mod document;
mod engine;
mod event;
mod geometry;
mod listener;
mod node;
mod style;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::{Document, ReadyState};
pub use engine::{ButtonEncoding, Engine, ListenerModel, Quirks};
pub use event::{Event, MouseButton, MouseEventInit};
pub use geometry::ElementGeometry;
pub use listener::Listener;
pub use node::{ControlState, ElementData, Node, NodeData};
pub use style::{Length, StyleDeclaration};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document node
    pub const ROOT: NodeId = NodeId(0);

    /// Arena slot of this node
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Non-owning handle to a node.
///
/// The document owns its nodes; a `WeakNode` only remembers which slot it
/// pointed at and in which generation, so a removed node is detected by
/// [`Document::is_alive`] instead of being kept around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeakNode {
    pub(crate) id: NodeId,
    pub(crate) generation: u32,
}

impl WeakNode {
    /// The node this handle refers to, without a liveness check
    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// Host DOM error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("No such node: {0:?}")]
    NoSuchNode(NodeId),

    #[error("Cannot append {child:?} under {parent:?}: it would contain itself")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("Permission denied to access node {0:?}")]
    AccessDenied(NodeId),

    #[error("{engine:?} does not support the {model:?} listener model")]
    UnsupportedListenerModel { engine: Engine, model: ListenerModel },
}
