//! Native Events
//!
//! The raw event object an engine hands to its listeners. Which fields are
//! filled depends on the engine: standards engines set `target`,
//! `related_target` and page coordinates, Trident sets `src_element`,
//! `from_element` / `to_element` and client coordinates only.

use serde_json::Value;

use crate::NodeId;

/// Native event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: String,
    pub bubbles: bool,
    pub cancelable: bool,

    // W3C
    pub target: Option<NodeId>,
    pub current_target: Option<NodeId>,
    pub related_target: Option<NodeId>,
    pub page_x: Option<f64>,
    pub page_y: Option<f64>,
    pub which: Option<u16>,

    // Trident
    pub src_element: Option<NodeId>,
    pub from_element: Option<NodeId>,
    pub to_element: Option<NodeId>,

    pub client_x: f64,
    pub client_y: f64,
    pub button: u16,
    pub meta_key: bool,
    pub key_code: Option<u32>,

    /// Name of the custom event carried by a synthetic dispatch
    pub event_name: Option<String>,
    /// Payload of a custom event
    pub memo: Value,
    /// Set once the event has been stopped through the normalized API
    pub stopped: bool,
    /// Set once the event has been normalized
    pub extended: bool,

    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    /// Create a bare event
    pub fn new(event_type: &str, bubbles: bool, cancelable: bool) -> Self {
        Self {
            event_type: event_type.to_string(),
            bubbles,
            cancelable,
            target: None,
            current_target: None,
            related_target: None,
            page_x: None,
            page_y: None,
            which: None,
            src_element: None,
            from_element: None,
            to_element: None,
            client_x: 0.0,
            client_y: 0.0,
            button: 0,
            meta_key: false,
            key_code: None,
            event_name: None,
            memo: Value::Null,
            stopped: false,
            extended: false,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Create a keyboard event
    pub fn key(event_type: &str, key_code: u32) -> Self {
        Self {
            key_code: Some(key_code),
            ..Self::new(event_type, true, true)
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Parameters of a user-generated mouse event
#[derive(Debug, Clone, Copy)]
pub struct MouseEventInit {
    /// Viewport coordinates
    pub client_x: f64,
    pub client_y: f64,
    pub button: MouseButton,
    pub meta_key: bool,
    /// The node the pointer came from (`mouseover`) or went to (`mouseout`)
    pub related: Option<NodeId>,
}

impl Default for MouseEventInit {
    fn default() -> Self {
        Self {
            client_x: 0.0,
            client_y: 0.0,
            button: MouseButton::Left,
            meta_key: false,
            related: None,
        }
    }
}
