//! embedded-localization-util - Value helpers shared by the marshaled store
//!
//! Defensive copying and truthiness rules for decoded attribute values.

pub mod duplicable;
pub mod truthy;

pub use duplicable::Duplicable;
pub use truthy::{is_blank, is_truthy};
