//! Veneer Forms
//!
//! Form controls on top of the host document: reading and writing values
//! per control kind, serializing controls to key/value pairs or a query
//! string, and observing fields or forms for changes.

mod control;
mod field;
mod form;
mod observer;
mod serialize;

pub use control::{get_value, option_value, set_value, ControlKind, FieldValue, SetValue};
pub use field::Field;
pub use form::Form;
pub use observer::{ChangeCallback, EventObserver, TimedObserver, Watched};
pub use serialize::{serialize_elements, FormData, SerializeOptions, Serialized, Submit};

use veneer_dom::{DomError, NodeId};
use veneer_events::EventError;

/// Form error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Node {0:?} is not a form control")]
    NotAFormControl(NodeId),

    #[error("Node {0:?} is not a form")]
    NotAForm(NodeId),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Event(#[from] EventError),
}
