//! Binary encode/decode primitives.

use crate::error::MarshalError;
use serde_json::Value;

/// A paired `dump`/`load` over a generic object serialization format.
pub trait Marshal: Send + Sync {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, MarshalError>;
    fn load(&self, bytes: &[u8]) -> Result<Value, MarshalError>;
}

/// CBOR via `ciborium`. The default primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CborMarshal;

impl Marshal for CborMarshal {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, MarshalError> {
        let mut out = Vec::new();
        ciborium::ser::into_writer(value, &mut out)?;
        Ok(out)
    }

    fn load(&self, bytes: &[u8]) -> Result<Value, MarshalError> {
        Ok(ciborium::de::from_reader::<Value, _>(bytes)?)
    }
}

/// JSON text bytes via `serde_json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonMarshal;

impl Marshal for JsonMarshal {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, MarshalError> {
        Ok(serde_json::to_vec(value)?)
    }

    fn load(&self, bytes: &[u8]) -> Result<Value, MarshalError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
