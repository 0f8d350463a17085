//! Control Values
//!
//! Reading and writing the value of a form control. The serializer is
//! picked from the control's tag and type.

use std::fmt;

use serde::Serialize;
use veneer_dom::{Document, NodeId};

use crate::FormError;

/// Kind of form control, deciding how its value is read and written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Text-like inputs and textareas
    Text,
    /// Check boxes and radio buttons
    Checkable,
    SelectOne,
    SelectMany,
}

impl ControlKind {
    /// Kind of `element`, or `None` when it is not a serializable control
    pub fn of(doc: &Document, element: NodeId) -> Option<Self> {
        let data = doc.element(element).ok()?;
        match (data.tag.as_str(), data.control_type().as_str()) {
            ("input", "checkbox" | "radio") => Some(Self::Checkable),
            ("input", _) | ("textarea", _) => Some(Self::Text),
            ("select", "select-multiple") => Some(Self::SelectMany),
            ("select", _) => Some(Self::SelectOne),
            _ => None,
        }
    }
}

/// Value read from a control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    /// Selected options of a multiple select, or repeated keys
    Many(Vec<String>),
}

impl FieldValue {
    /// Every value, in order
    pub fn values(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Many(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values().join(","))
    }
}

/// Value written to a control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetValue {
    Single(String),
    Many(Vec<String>),
    Checked(bool),
}

impl SetValue {
    /// Truthiness, as used by check boxes
    fn is_truthy(&self) -> bool {
        match self {
            Self::Single(value) => !value.is_empty(),
            Self::Many(_) => true,
            Self::Checked(checked) => *checked,
        }
    }

    fn to_text(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Many(values) => values.join(","),
            Self::Checked(checked) => checked.to_string(),
        }
    }
}

impl From<&str> for SetValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for SetValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<bool> for SetValue {
    fn from(checked: bool) -> Self {
        Self::Checked(checked)
    }
}

impl From<Vec<String>> for SetValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<&[&str]> for SetValue {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Current value of a control.
///
/// Unchecked boxes and selects without a selection have no value. A
/// multiple select with options always has a (possibly empty) list.
pub fn get_value(doc: &Document, element: NodeId) -> Result<Option<FieldValue>, FormError> {
    let kind = ControlKind::of(doc, element).ok_or(FormError::NotAFormControl(element))?;

    let value = match kind {
        ControlKind::Text => Some(FieldValue::Single(doc.value(element))),
        ControlKind::Checkable => doc
            .checked(element)
            .then(|| FieldValue::Single(doc.value(element))),
        ControlKind::SelectOne => doc
            .selected_index(element)
            .and_then(|index| doc.options(element).get(index).copied())
            .map(|option| FieldValue::Single(option_value(doc, option))),
        ControlKind::SelectMany => {
            let options = doc.options(element);
            if options.is_empty() {
                None
            } else {
                Some(FieldValue::Many(
                    options
                        .into_iter()
                        .filter(|&o| doc.selected(o))
                        .map(|o| option_value(doc, o))
                        .collect(),
                ))
            }
        }
    };
    Ok(value)
}

/// Write a control's value.
///
/// Check boxes take the truthiness of the value. On a select, a single
/// value selects the first option with that value; a list selects exactly
/// the options whose value it contains.
pub fn set_value(
    doc: &mut Document,
    element: NodeId,
    value: impl Into<SetValue>,
) -> Result<(), FormError> {
    let kind = ControlKind::of(doc, element).ok_or(FormError::NotAFormControl(element))?;
    let value = value.into();

    match kind {
        ControlKind::Text => doc.set_value(element, &value.to_text())?,
        ControlKind::Checkable => doc.set_checked(element, value.is_truthy())?,
        ControlKind::SelectOne | ControlKind::SelectMany => match value {
            SetValue::Many(values) => {
                for option in doc.options(element) {
                    let selected = values.contains(&option_value(doc, option));
                    doc.set_selected(option, selected)?;
                }
            }
            single => {
                let wanted = single.to_text();
                let matching = doc
                    .options(element)
                    .into_iter()
                    .find(|&o| option_value(doc, o) == wanted);
                if let Some(option) = matching {
                    doc.set_selected(option, true)?;
                }
            }
        },
    }
    Ok(())
}

/// `value` attribute of an option, else its text
pub fn option_value(doc: &Document, option: NodeId) -> String {
    match doc.get_attribute(option, "value") {
        Some(value) => value.to_string(),
        None => doc
            .text_content(option)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(doc: &mut Document, multiple: bool, options: &[(&str, Option<&str>)]) -> NodeId {
        let select = doc.append_element(doc.body(), "select").unwrap();
        if multiple {
            doc.set_attribute(select, "multiple", "multiple").unwrap();
        }
        for (text, value) in options {
            let option = doc.append_element(select, "option").unwrap();
            doc.append_text(option, text).unwrap();
            if let Some(value) = value {
                doc.set_attribute(option, "value", value).unwrap();
            }
        }
        select
    }

    #[test]
    fn test_control_kind() {
        let mut doc = Document::new("about:blank");
        let body = doc.body();
        let text = doc.append_element(body, "input").unwrap();
        let check = doc.append_element(body, "input").unwrap();
        doc.set_attribute(check, "type", "CHECKBOX").unwrap();
        let area = doc.append_element(body, "textarea").unwrap();
        let div = doc.append_element(body, "div").unwrap();

        assert_eq!(ControlKind::of(&doc, text), Some(ControlKind::Text));
        assert_eq!(ControlKind::of(&doc, check), Some(ControlKind::Checkable));
        assert_eq!(ControlKind::of(&doc, area), Some(ControlKind::Text));
        assert_eq!(ControlKind::of(&doc, div), None);
        assert_eq!(get_value(&doc, div), Err(FormError::NotAFormControl(div)));
    }

    #[test]
    fn test_checkbox_value() {
        let mut doc = Document::new("about:blank");
        let check = doc.append_element(doc.body(), "input").unwrap();
        doc.set_attribute(check, "type", "checkbox").unwrap();

        assert_eq!(get_value(&doc, check).unwrap(), None);
        set_value(&mut doc, check, true).unwrap();
        assert_eq!(
            get_value(&doc, check).unwrap(),
            Some(FieldValue::Single("on".into()))
        );
        set_value(&mut doc, check, "").unwrap();
        assert!(!doc.checked(check));
    }

    #[test]
    fn test_select_one_uses_option_text_without_value() {
        let mut doc = Document::new("about:blank");
        let sel = select(&mut doc, false, &[("  Red  ", None), ("Green", Some("g"))]);

        assert_eq!(
            get_value(&doc, sel).unwrap(),
            Some(FieldValue::Single("Red".into()))
        );
        set_value(&mut doc, sel, "g").unwrap();
        assert_eq!(
            get_value(&doc, sel).unwrap(),
            Some(FieldValue::Single("g".into()))
        );
        set_value(&mut doc, sel, "missing").unwrap();
        assert_eq!(get_value(&doc, sel).unwrap().unwrap().as_single(), Some("g"));
    }

    #[test]
    fn test_select_many_membership() {
        let mut doc = Document::new("about:blank");
        let sel = select(&mut doc, true, &[("a", None), ("b", None), ("c", None)]);

        assert_eq!(get_value(&doc, sel).unwrap(), Some(FieldValue::Many(vec![])));
        set_value(&mut doc, sel, &["a", "c"][..]).unwrap();
        assert_eq!(
            get_value(&doc, sel).unwrap(),
            Some(FieldValue::Many(vec!["a".into(), "c".into()]))
        );

        let empty = select(&mut doc, true, &[]);
        assert_eq!(get_value(&doc, empty).unwrap(), None);
    }

    #[test]
    fn test_display_joins_lists() {
        assert_eq!(FieldValue::Many(vec!["a".into(), "b".into()]).to_string(), "a,b");
        assert_eq!(FieldValue::Single("x".into()).to_string(), "x");
    }
}
