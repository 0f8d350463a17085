//! Form Methods

use veneer_dom::{Document, NodeId};

use crate::{serialize_elements, ControlKind, Field, FormError, SerializeOptions, Serialized};

/// A `<form>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Form {
    element: NodeId,
}

impl Form {
    pub fn new(doc: &Document, element: NodeId) -> Result<Self, FormError> {
        match doc.tag_name(element) {
            Some("form") => Ok(Self { element }),
            _ => Err(FormError::NotAForm(element)),
        }
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Serialize every control of the form
    pub fn serialize(&self, doc: &Document, options: &SerializeOptions) -> Serialized {
        serialize_elements(doc, &self.elements(doc), options)
    }

    /// Serializable controls, in document order
    pub fn elements(&self, doc: &Document) -> Vec<NodeId> {
        doc.elements_by_tag(self.element, "*")
            .into_iter()
            .filter(|&el| ControlKind::of(doc, el).is_some())
            .collect()
    }

    /// `<input>` elements, optionally filtered by type and name
    pub fn inputs(&self, doc: &Document, input_type: Option<&str>, name: Option<&str>) -> Vec<NodeId> {
        doc.elements_by_tag(self.element, "input")
            .into_iter()
            .filter(|&el| {
                input_type.is_none_or(|t| {
                    doc.element(el)
                        .is_ok_and(|e| e.control_type().eq_ignore_ascii_case(t))
                })
            })
            .filter(|&el| name.is_none_or(|n| doc.get_attribute(el, "name") == Some(n)))
            .collect()
    }

    pub fn disable(&self, doc: &mut Document) -> Result<(), FormError> {
        for el in self.elements(doc) {
            doc.set_disabled(el, true)?;
        }
        Ok(())
    }

    pub fn enable(&self, doc: &mut Document) -> Result<(), FormError> {
        for el in self.elements(doc) {
            doc.set_disabled(el, false)?;
        }
        Ok(())
    }

    /// First control to give focus to.
    ///
    /// Hidden and disabled controls are passed over. The lowest
    /// non-negative `tabindex` wins; without one, the first control does.
    pub fn find_first_element(&self, doc: &Document) -> Option<NodeId> {
        let candidates: Vec<NodeId> = self
            .elements(doc)
            .into_iter()
            .filter(|&el| {
                !doc.is_disabled(el)
                    && doc.element(el).is_ok_and(|e| e.control_type() != "hidden")
            })
            .collect();

        candidates
            .iter()
            .filter_map(|&el| doc.tab_index(el).filter(|&i| i >= 0).map(|i| (i, el)))
            .min_by_key(|&(index, _)| index)
            .map(|(_, el)| el)
            .or_else(|| candidates.first().copied())
    }

    /// Activate the first control, if any
    pub fn focus_first_element(&self, doc: &mut Document) -> Result<(), FormError> {
        if let Some(first) = self.find_first_element(doc) {
            Field::new(doc, first)?.activate(doc)?;
        }
        Ok(())
    }

    /// Restore every control (and option) to its default state
    pub fn reset(&self, doc: &mut Document) -> Result<(), FormError> {
        for el in doc.elements_by_tag(self.element, "*") {
            doc.reset_control(el)?;
        }
        tracing::debug!("Reset form {:?}", self.element);
        Ok(())
    }
}
