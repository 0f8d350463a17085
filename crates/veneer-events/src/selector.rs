//! Simple selectors for finding the element an event came from

use veneer_dom::{Document, NodeId};

/// A single tag, `#id` or `.class` selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl SimpleSelector {
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(s.to_ascii_lowercase()))
        }
    }

    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some(tag) = doc.tag_name(node) else {
            return false;
        };
        match self {
            Self::Universal => true,
            Self::Tag(t) => tag == t,
            Self::Id(id) => doc.get_attribute(node, "id") == Some(id.as_str()),
            Self::Class(class) => doc
                .get_attribute(node, "class")
                .is_some_and(|c| c.split_whitespace().any(|c| c == class)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_selector_parse() {
        assert_eq!(SimpleSelector::parse("TR"), Some(SimpleSelector::Tag("tr".into())));
        assert!(matches!(SimpleSelector::parse(".row"), Some(SimpleSelector::Class(_))));
        assert!(matches!(SimpleSelector::parse("#records"), Some(SimpleSelector::Id(_))));
        assert_eq!(SimpleSelector::parse("*"), Some(SimpleSelector::Universal));
        assert_eq!(SimpleSelector::parse("  "), None);
    }

    #[test]
    fn test_selector_matches() {
        let mut doc = Document::new("about:blank");
        let row = doc.append_element(doc.body(), "tr").unwrap();
        doc.set_attribute(row, "class", "record active").unwrap();
        doc.set_attribute(row, "id", "r1").unwrap();

        assert!(SimpleSelector::Tag("tr".into()).matches(&doc, row));
        assert!(SimpleSelector::Class("active".into()).matches(&doc, row));
        assert!(SimpleSelector::Id("r1".into()).matches(&doc, row));
        assert!(!SimpleSelector::Class("rec".into()).matches(&doc, row));
        assert!(!SimpleSelector::Universal.matches(&doc, doc.root()));
    }
}
