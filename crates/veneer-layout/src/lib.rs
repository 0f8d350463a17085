//! Veneer Layout
//!
//! Box-model measurements of rendered elements: content, padding, border
//! and margin sizes plus position offsets, in pixels.
//!
//! # Example
//! ```rust
//! use veneer_dom::Document;
//! use veneer_layout::{BoxProperty, Layout};
//!
//! let mut doc = Document::new("about:blank");
//! let el = doc.append_element(doc.body(), "div").unwrap();
//! doc.set_style(el, "width", "200px").unwrap();
//! doc.set_style(el, "padding", "10px").unwrap();
//!
//! let mut layout = Layout::new(el);
//! assert_eq!(layout.get(&doc, BoxProperty::Width), 200.0);
//! assert_eq!(layout.get(&doc, BoxProperty::PaddingBoxWidth), 220.0);
//! ```

mod box_model;
mod layout;
mod pixel;
mod property;

pub use box_model::{BoxDimensions, EdgeSizes, Rect};
pub use layout::{measure, Layout};
pub use pixel::pixel_value;
pub use property::BoxProperty;

/// Layout error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Layout properties are read-only (tried to set {property})")]
    ReadOnly { property: BoxProperty },

    #[error("Unknown layout property: {0:?}")]
    UnknownProperty(String),
}
