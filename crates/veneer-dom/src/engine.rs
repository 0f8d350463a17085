//! Engine Profiles
//!
//! The rendering-engine families the compatibility layers smooth over, and
//! the quirks each of them exhibits.

use serde::{Deserialize, Serialize};

/// Rendering engine family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// MSIE
    Trident,
    /// Safari, Chrome
    WebKit,
    /// Firefox
    #[default]
    Gecko,
    /// Konqueror
    Khtml,
}

impl Engine {
    /// Default quirks for this engine
    pub fn quirks(self) -> Quirks {
        match self {
            Engine::Trident => Quirks {
                listener_model: ListenerModel::AttachEvent,
                native_mouse_enter_leave: true,
                button_encoding: ButtonEncoding::Trident,
                reports_page_coords: false,
                document_dispatch: true,
                dedupes_listeners: false,
                document_client_edge: 2.0,
            },
            Engine::WebKit => Quirks {
                button_encoding: ButtonEncoding::WebKit,
                ..Quirks::standard()
            },
            Engine::Gecko => Quirks::standard(),
            Engine::Khtml => Quirks {
                document_dispatch: false,
                ..Quirks::standard()
            },
        }
    }
}

/// How native listeners are subscribed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListenerModel {
    /// `addEventListener(type, fn, false)`
    AddEventListener,
    /// `attachEvent("on" + type, fn)`
    AttachEvent,
}

impl ListenerModel {
    /// Key a native listener of `event_type` is stored under
    pub fn key(self, event_type: &str) -> String {
        match self {
            ListenerModel::AddEventListener => event_type.to_string(),
            ListenerModel::AttachEvent => format!("on{event_type}"),
        }
    }
}

/// How mouse buttons are reported on events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonEncoding {
    /// `which` is button + 1, `button` is 0/1/2
    Standard,
    /// `button` is a bit mask: left 1, right 2, middle 4
    Trident,
    /// `which` is always 1, the meta key marks a middle click
    WebKit,
}

/// Engine quirks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quirks {
    pub listener_model: ListenerModel,
    /// `mouseenter` / `mouseleave` are dispatched natively
    pub native_mouse_enter_leave: bool,
    pub button_encoding: ButtonEncoding,
    /// Events carry `pageX` / `pageY`
    pub reports_page_coords: bool,
    /// The document node itself can be a dispatch target
    pub document_dispatch: bool,
    /// Subscribing the same listener twice is a no-op
    pub dedupes_listeners: bool,
    /// Width of the document element's client edge, included in client
    /// coordinates
    pub document_client_edge: f64,
}

impl Quirks {
    /// Behaviour of a standards-compliant engine
    pub fn standard() -> Self {
        Self {
            listener_model: ListenerModel::AddEventListener,
            native_mouse_enter_leave: false,
            button_encoding: ButtonEncoding::Standard,
            reports_page_coords: true,
            document_dispatch: true,
            dedupes_listeners: true,
            document_client_edge: 0.0,
        }
    }
}

impl Default for Quirks {
    fn default() -> Self {
        Engine::default().quirks()
    }
}
