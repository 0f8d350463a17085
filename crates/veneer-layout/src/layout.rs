//! Layout Accessor
//!
//! A snapshot of an element's box model. Each property is computed the
//! first time it is asked for and then kept: later style changes do not
//! show through. Take a new [`Layout`] for fresh values.

use veneer_dom::{Document, NodeId};

use crate::box_model::{BoxDimensions, EdgeSizes, Rect};
use crate::{pixel_value, BoxProperty, LayoutError};

/// Memoized box-model snapshot of one element
#[derive(Debug, Clone)]
pub struct Layout {
    element: NodeId,
    values: [Option<f64>; BoxProperty::COUNT],
}

impl Layout {
    pub fn new(element: NodeId) -> Self {
        Self {
            element,
            values: [None; BoxProperty::COUNT],
        }
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Value of `property` in pixels
    pub fn get(&mut self, doc: &Document, property: BoxProperty) -> f64 {
        if let Some(value) = self.values[property.index()] {
            return value;
        }
        let value = self.compute(doc, property);
        tracing::trace!("{:?} {} = {}px", self.element, property, value);
        self.values[property.index()] = Some(value);
        value
    }

    /// Value of the property named `name`
    pub fn get_named(&mut self, doc: &Document, name: &str) -> Result<f64, LayoutError> {
        let property = name.parse()?;
        Ok(self.get(doc, property))
    }

    /// Layouts are read-only
    pub fn set(&mut self, property: BoxProperty, _value: f64) -> Result<(), LayoutError> {
        Err(LayoutError::ReadOnly { property })
    }

    /// Whether `property` has been computed in this snapshot
    pub fn is_computed(&self, property: BoxProperty) -> bool {
        self.values[property.index()].is_some()
    }

    /// Every property, computing the missing ones
    pub fn dimensions(&mut self, doc: &Document) -> BoxDimensions {
        use BoxProperty::*;

        let padding = EdgeSizes {
            top: self.get(doc, PaddingTop),
            right: self.get(doc, PaddingRight),
            bottom: self.get(doc, PaddingBottom),
            left: self.get(doc, PaddingLeft),
        };
        let border = EdgeSizes {
            top: self.get(doc, BorderTop),
            right: self.get(doc, BorderRight),
            bottom: self.get(doc, BorderBottom),
            left: self.get(doc, BorderLeft),
        };
        let margin = EdgeSizes {
            top: self.get(doc, MarginTop),
            right: self.get(doc, MarginRight),
            bottom: self.get(doc, MarginBottom),
            left: self.get(doc, MarginLeft),
        };
        let content = Rect {
            x: self.get(doc, Left) + border.left + padding.left,
            y: self.get(doc, Top) + border.top + padding.top,
            width: self.get(doc, Width),
            height: self.get(doc, Height),
        };

        BoxDimensions {
            content,
            padding,
            border,
            margin,
        }
    }

    fn compute(&mut self, doc: &Document, property: BoxProperty) -> f64 {
        use BoxProperty::*;

        match property {
            Width => {
                self.get(doc, BorderBoxWidth)
                    - self.get(doc, BorderLeft)
                    - self.get(doc, BorderRight)
                    - self.get(doc, PaddingLeft)
                    - self.get(doc, PaddingRight)
            }
            Height => {
                self.get(doc, BorderBoxHeight)
                    - self.get(doc, BorderTop)
                    - self.get(doc, BorderBottom)
                    - self.get(doc, PaddingTop)
                    - self.get(doc, PaddingBottom)
            }
            PaddingBoxWidth => {
                self.get(doc, Width) + self.get(doc, PaddingLeft) + self.get(doc, PaddingRight)
            }
            PaddingBoxHeight => {
                self.get(doc, Height) + self.get(doc, PaddingTop) + self.get(doc, PaddingBottom)
            }
            MarginBoxWidth => {
                self.get(doc, BorderBoxWidth) + self.get(doc, MarginLeft) + self.get(doc, MarginRight)
            }
            MarginBoxHeight => {
                self.get(doc, BorderBoxHeight) + self.get(doc, MarginTop) + self.get(doc, MarginBottom)
            }
            BorderBoxWidth => doc.geometry(self.element).offset_width,
            BorderBoxHeight => doc.geometry(self.element).offset_height,
            BorderLeft | BorderRight | BorderTop | BorderBottom => {
                let geometry = doc.geometry(self.element);
                let client = match property {
                    BorderLeft => geometry.client_left,
                    BorderRight => geometry.client_right,
                    BorderTop => geometry.client_top,
                    _ => geometry.client_bottom,
                };
                if client != 0.0 {
                    client
                } else {
                    self.from_style(doc, property)
                }
            }
            _ => self.from_style(doc, property),
        }
    }

    fn from_style(&self, doc: &Document, property: BoxProperty) -> f64 {
        let Some(name) = property.style_property() else {
            return 0.0;
        };
        pixel_value(doc, self.element, &doc.computed_style(self.element, name))
    }
}

/// Measure a single property of `element`
pub fn measure(doc: &Document, element: NodeId, property: BoxProperty) -> f64 {
    Layout::new(element).get(doc, property)
}
