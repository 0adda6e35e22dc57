//! Model type descriptors: which attributes are serialized, and through what.

use crate::error::MarshalError;
use crate::marshal::Marshal;
use crate::nil_friendly_marshal::NilFriendlyMarshal;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The codec contract a model uses for a serialized attribute.
///
/// `load` is called with the stored column (`None` when nothing is stored),
/// `dump` when the attribute is written back.
pub trait AttributeCodec: Send + Sync + fmt::Debug {
    fn load(&self, raw: Option<&[u8]>) -> Result<Value, MarshalError>;
    fn dump(&self, value: &Value) -> Result<Vec<u8>, MarshalError>;
}

impl<M: Marshal + fmt::Debug> AttributeCodec for NilFriendlyMarshal<M> {
    fn load(&self, raw: Option<&[u8]>) -> Result<Value, MarshalError> {
        NilFriendlyMarshal::load(self, raw)
    }

    fn dump(&self, value: &Value) -> Result<Vec<u8>, MarshalError> {
        NilFriendlyMarshal::dump(self, value)
    }
}

impl<T: AttributeCodec + ?Sized> AttributeCodec for &T {
    fn load(&self, raw: Option<&[u8]>) -> Result<Value, MarshalError> {
        (**self).load(raw)
    }

    fn dump(&self, value: &Value) -> Result<Vec<u8>, MarshalError> {
        (**self).dump(value)
    }
}

/// A record type: its serialized attributes and the store accessors defined
/// on top of them.
#[derive(Debug, Clone)]
pub struct ModelType {
    name: String,
    serialized: IndexMap<String, Arc<dyn AttributeCodec>>,
    /// accessor name -> store attribute
    store_accessors: IndexMap<String, String>,
}

impl ModelType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            serialized: IndexMap::new(),
            store_accessors: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marks `attribute` as serialized through `codec`, replacing any earlier
    /// binding.
    pub fn serialize(&mut self, attribute: impl Into<String>, codec: Arc<dyn AttributeCodec>) {
        let attribute = attribute.into();
        debug!(model = %self.name, attribute = %attribute, ?codec, "serialize attribute");
        self.serialized.insert(attribute, codec);
    }

    /// Declares one accessor per key, each proxying to that key inside the
    /// mapping stored under `attribute`.
    ///
    /// Keys are not checked against the stored data.
    pub fn store_accessor<I, S>(&mut self, attribute: &str, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            let key = key.into();
            debug!(model = %self.name, store = attribute, accessor = %key, "store accessor");
            self.store_accessors.insert(key, attribute.to_string());
        }
    }

    pub fn codec(&self, attribute: &str) -> Option<&dyn AttributeCodec> {
        self.serialized.get(attribute).map(|codec| codec.as_ref())
    }

    pub fn is_serialized(&self, attribute: &str) -> bool {
        self.serialized.contains_key(attribute)
    }

    pub fn serialized_attributes(&self) -> impl Iterator<Item = &str> {
        self.serialized.keys().map(String::as_str)
    }

    /// The store attribute backing `accessor`.
    pub fn store_for(&self, accessor: &str) -> Option<&str> {
        self.store_accessors.get(accessor).map(String::as_str)
    }

    /// Accessor names declared on `attribute`, in declaration order.
    pub fn stored_attributes(&self, attribute: &str) -> Vec<&str> {
        self.store_accessors
            .iter()
            .filter(|(_, store)| store.as_str() == attribute)
            .map(|(accessor, _)| accessor.as_str())
            .collect()
    }
}
