//! DOM Node

use crate::{NamedNodeMap, NodeId, StyleDeclaration};

/// Arena slot of the document tree
#[derive(Debug)]
pub struct Node {
    /// Parent node (None for the document and detached nodes)
    pub parent: Option<NodeId>,
    /// Children in document order
    pub children: Vec<NodeId>,
    /// Bumped when the node is removed; stale handles stop matching
    pub generation: u32,
    /// False once removed from the document
    pub alive: bool,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            generation: 0,
            alive: true,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    pub attrs: NamedNodeMap,
    /// Inline style
    pub style: StyleDeclaration,
    /// Live form-control state
    pub control: ControlState,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: NamedNodeMap::new(),
            style: StyleDeclaration::new(),
            control: ControlState::default(),
        }
    }

    /// Check the tag name, ignoring case
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// The `type` of a form control, lowercased.
    ///
    /// Inputs default to `text`, selects report `select-one` or
    /// `select-multiple`, other controls report their tag.
    pub fn control_type(&self) -> String {
        match self.tag.as_str() {
            "input" => self
                .attrs
                .get("type")
                .map(|t| t.to_ascii_lowercase())
                .unwrap_or_else(|| "text".to_string()),
            "select" if self.attrs.contains("multiple") => "select-multiple".to_string(),
            "select" => "select-one".to_string(),
            "button" => self
                .attrs
                .get("type")
                .map(|t| t.to_ascii_lowercase())
                .unwrap_or_else(|| "submit".to_string()),
            other => other.to_string(),
        }
    }
}

/// Live state of a form control, distinct from its content attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    /// Dirty value; falls back to the `value` attribute while unset
    pub value: Option<String>,
    pub checked: bool,
    pub selected: bool,
}
