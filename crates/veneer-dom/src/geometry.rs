//! Geometry
//!
//! Offset and client box metrics of an element, as the engine reports them.

/// Element box metrics
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementGeometry {
    // Border box, relative to the offset parent
    pub offset_top: f64,
    pub offset_left: f64,
    pub offset_width: f64,
    pub offset_height: f64,

    // Border widths
    pub client_top: f64,
    pub client_left: f64,
    pub client_right: f64,
    pub client_bottom: f64,

    // Padding box
    pub client_width: f64,
    pub client_height: f64,
}
