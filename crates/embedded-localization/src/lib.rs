//! Nil-friendly marshaled attribute stores.
//!
//! A [`NilFriendlyMarshal`] wraps a binary [`Marshal`] primitive (CBOR by
//! default) and hands back a fresh copy of its configured default whenever a
//! column is absent or decodes to `null`/`false`. [`register_marshaled_store`]
//! binds the shared instance to an attribute of a [`ModelType`] and can
//! declare store accessors for keys inside the decoded mapping.
//!
//! ```
//! use embedded_localization::{MarshalStore, ModelType, Record, StoreOptions};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let mut model = ModelType::new("Article");
//! model.marshal_store("translations", &StoreOptions::with_accessors(["locale"]));
//! let model = Arc::new(model);
//!
//! let mut record = Record::new(model.clone());
//! assert_eq!(record.read_attribute("translations").unwrap(), json!({}));
//!
//! record.write_store_attribute("locale", "en").unwrap();
//! let mut reloaded = Record::from_row(model, record.to_row().unwrap());
//! assert_eq!(reloaded.read_store_attribute("locale").unwrap(), json!("en"));
//! ```

pub mod error;
pub mod marshal;
pub mod marshal_store;
pub mod model;
pub mod nil_friendly_marshal;
pub mod record;

pub use error::{MarshalError, StoreError};
pub use marshal::{CborMarshal, JsonMarshal, Marshal};
pub use marshal_store::{register_marshaled_store, MarshalStore, StoreOptions};
pub use model::{AttributeCodec, ModelType};
pub use nil_friendly_marshal::{Fallback, MarshalOptions, NilFriendlyMarshal};
pub use record::{Record, Row};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
