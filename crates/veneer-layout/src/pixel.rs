//! Pixel Values

use veneer_dom::{Document, NodeId};

/// Resolve a style value to pixels in the context of `element`.
///
/// Plain integers, with or without `px`, are taken as they are. Anything
/// else goes through the document's length resolution; `auto`, empty and
/// unparsable values count as 0.
pub fn pixel_value(doc: &Document, element: NodeId, value: &str) -> f64 {
    let value = value.trim();
    let digits = value
        .strip_suffix("px")
        .or_else(|| value.strip_suffix("PX"))
        .unwrap_or(value);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(px) = digits.parse::<u32>() {
            return f64::from(px);
        }
    }

    doc.resolve_length(element, value).unwrap_or(0.0)
}
