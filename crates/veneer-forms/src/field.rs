//! Field Methods

use url::form_urlencoded;
use veneer_dom::{Document, NodeId};

use crate::{get_value, set_value, ControlKind, FieldValue, FormError, SetValue};

/// A form control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    element: NodeId,
    kind: ControlKind,
}

impl Field {
    pub fn new(doc: &Document, element: NodeId) -> Result<Self, FormError> {
        let kind = ControlKind::of(doc, element).ok_or(FormError::NotAFormControl(element))?;
        Ok(Self { element, kind })
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn value(&self, doc: &Document) -> Result<Option<FieldValue>, FormError> {
        get_value(doc, self.element)
    }

    pub fn set_value(&self, doc: &mut Document, value: impl Into<SetValue>) -> Result<(), FormError> {
        set_value(doc, self.element, value)
    }

    /// `name=value`, URL-encoded; empty for disabled, unnamed or valueless
    /// controls
    pub fn serialize(&self, doc: &Document) -> String {
        if doc.is_disabled(self.element) {
            return String::new();
        }
        let Some(name) = doc.get_attribute(self.element, "name").filter(|n| !n.is_empty()) else {
            return String::new();
        };
        let Ok(Some(value)) = self.value(doc) else {
            return String::new();
        };

        let mut query = form_urlencoded::Serializer::new(String::new());
        for v in value.values() {
            query.append_pair(name, v);
        }
        query.finish()
    }

    /// Empty the control's text
    pub fn clear(&self, doc: &mut Document) -> Result<(), FormError> {
        doc.set_value(self.element, "")?;
        Ok(())
    }

    /// Whether the control's text is non-empty
    pub fn is_present(&self, doc: &Document) -> bool {
        !doc.value(self.element).is_empty()
    }

    /// Focus the control and select its text. Buttons are only focused.
    pub fn activate(&self, doc: &mut Document) -> Result<(), FormError> {
        doc.focus(self.element)?;

        let selectable = match doc.tag_name(self.element) {
            Some("textarea") => true,
            Some("input") => !matches!(
                doc.element(self.element)?.control_type().as_str(),
                "button" | "reset" | "submit"
            ),
            _ => false,
        };
        if selectable {
            doc.select_text(self.element)?;
        }
        Ok(())
    }

    pub fn disable(&self, doc: &mut Document) -> Result<(), FormError> {
        doc.set_disabled(self.element, true)?;
        Ok(())
    }

    pub fn enable(&self, doc: &mut Document) -> Result<(), FormError> {
        doc.set_disabled(self.element, false)?;
        Ok(())
    }

    pub fn focus(&self, doc: &mut Document) -> Result<(), FormError> {
        doc.focus(self.element)?;
        Ok(())
    }

    pub fn select(&self, doc: &mut Document) -> Result<(), FormError> {
        doc.select_text(self.element)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(doc: &mut Document, kind: &str, name: &str) -> Field {
        let el = doc.append_element(doc.body(), "input").unwrap();
        doc.set_attribute(el, "type", kind).unwrap();
        doc.set_attribute(el, "name", name).unwrap();
        Field::new(doc, el).unwrap()
    }

    #[test]
    fn test_serialize_pair() {
        let mut doc = Document::new("about:blank");
        let field = input(&mut doc, "text", "full name");
        field.set_value(&mut doc, "Ann Lee & co").unwrap();

        assert_eq!(field.serialize(&doc), "full+name=Ann+Lee+%26+co");
        field.disable(&mut doc).unwrap();
        assert_eq!(field.serialize(&doc), "");
        field.enable(&mut doc).unwrap();
        assert_eq!(field.serialize(&doc), "full+name=Ann+Lee+%26+co");
    }

    #[test]
    fn test_clear_and_present() {
        let mut doc = Document::new("about:blank");
        let field = input(&mut doc, "text", "q");

        assert!(!field.is_present(&doc));
        field.set_value(&mut doc, "rust").unwrap();
        assert!(field.is_present(&doc));
        field.clear(&mut doc).unwrap();
        assert!(!field.is_present(&doc));
    }

    #[test]
    fn test_activate_skips_selection_on_buttons() {
        let mut doc = Document::new("about:blank");
        let text = input(&mut doc, "text", "q");
        let submit = input(&mut doc, "submit", "go");

        text.activate(&mut doc).unwrap();
        assert_eq!(doc.active_element(), Some(text.element()));
        assert_eq!(doc.selection_owner(), Some(text.element()));

        submit.activate(&mut doc).unwrap();
        assert_eq!(doc.active_element(), Some(submit.element()));
        assert_eq!(doc.selection_owner(), Some(text.element()));
    }

    #[test]
    fn test_non_controls_are_rejected() {
        let mut doc = Document::new("about:blank");
        let div = doc.append_element(doc.body(), "div").unwrap();
        assert_eq!(Field::new(&doc, div), Err(FormError::NotAFormControl(div)));
    }
}
