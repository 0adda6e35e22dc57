//! A marshal wrapper that falls back to a default when there is nothing to load.
//!
//! `load(None)` and any payload that decodes to a falsy value yield a fresh
//! copy of the configured default. `dump` delegates to the wrapped primitive
//! untouched. The free functions [`load`] and [`dump`] forward to the shared
//! instance returned by [`NilFriendlyMarshal::shared`].

use crate::error::MarshalError;
use crate::marshal::{CborMarshal, Marshal};
use embedded_localization_util::{is_blank, is_truthy, Duplicable};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;
use tracing::trace;

/// Which decoded values are treated as "nothing stored".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// `null` and `false` only.
    #[default]
    Falsy,
    /// Falsy values plus empty strings, arrays and objects.
    Blank,
}

impl Fallback {
    pub fn applies_to(self, value: &Value) -> bool {
        match self {
            Fallback::Falsy => !is_truthy(value),
            Fallback::Blank => is_blank(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarshalOptions {
    pub default: Value,
    pub fallback: Fallback,
}

impl Default for MarshalOptions {
    fn default() -> Self {
        Self {
            default: Value::Object(Map::new()),
            fallback: Fallback::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NilFriendlyMarshal<M = CborMarshal> {
    marshal: M,
    options: MarshalOptions,
}

impl NilFriendlyMarshal<CborMarshal> {
    /// Builds a CBOR-backed instance. `None` means `{ default: {} }`.
    pub fn new(options: Option<MarshalOptions>) -> Self {
        Self::with_marshal(CborMarshal, options)
    }

    pub fn with_default(default: Value) -> Self {
        Self::new(Some(MarshalOptions {
            default,
            ..MarshalOptions::default()
        }))
    }

    /// The process-wide instance with an empty mapping as its default.
    ///
    /// Built on first use and never rebuilt.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<NilFriendlyMarshal> = OnceLock::new();
        SHARED.get_or_init(|| NilFriendlyMarshal::new(None))
    }
}

impl Default for NilFriendlyMarshal<CborMarshal> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<M: Marshal> NilFriendlyMarshal<M> {
    pub fn with_marshal(marshal: M, options: Option<MarshalOptions>) -> Self {
        Self {
            marshal,
            options: options.unwrap_or_default(),
        }
    }

    pub fn options(&self) -> &MarshalOptions {
        &self.options
    }

    pub fn load(&self, raw: Option<&[u8]>) -> Result<Value, MarshalError> {
        let Some(bytes) = raw else {
            return Ok(self.default_value());
        };

        let value = self.marshal.load(bytes)?;
        if self.options.fallback.applies_to(&value) {
            trace!(decoded = %value, "decoded value is empty, using default");
            return Ok(self.default_value());
        }
        Ok(value)
    }

    pub fn dump(&self, value: &Value) -> Result<Vec<u8>, MarshalError> {
        self.marshal.dump(value)
    }

    fn default_value(&self) -> Value {
        self.options.default.dup_if_needed()
    }
}

/// Loads through [`NilFriendlyMarshal::shared`].
pub fn load(raw: Option<&[u8]>) -> Result<Value, MarshalError> {
    NilFriendlyMarshal::shared().load(raw)
}

/// Dumps through [`NilFriendlyMarshal::shared`].
pub fn dump(value: &Value) -> Result<Vec<u8>, MarshalError> {
    NilFriendlyMarshal::shared().dump(value)
}
