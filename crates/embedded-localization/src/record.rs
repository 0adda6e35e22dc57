//! Records of a [`ModelType`]: raw columns in, decoded attributes out.

use crate::error::StoreError;
use crate::model::ModelType;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Stored columns keyed by name. `None` means nothing is stored.
pub type Row = IndexMap<String, Option<Vec<u8>>>;

#[derive(Debug, Clone)]
pub struct Record {
    model: Arc<ModelType>,
    raw: Row,
    /// Decoded serialized attributes, filled on first read or on write.
    values: IndexMap<String, Value>,
}

impl Record {
    pub fn new(model: Arc<ModelType>) -> Self {
        Self::from_row(model, Row::new())
    }

    pub fn from_row(model: Arc<ModelType>, row: Row) -> Self {
        Self {
            model,
            raw: row,
            values: IndexMap::new(),
        }
    }

    pub fn model(&self) -> &ModelType {
        &self.model
    }

    pub fn read_attribute(&mut self, attribute: &str) -> Result<Value, StoreError> {
        Ok(self.attribute_mut(attribute)?.clone())
    }

    pub fn write_attribute(
        &mut self,
        attribute: &str,
        value: impl Into<Value>,
    ) -> Result<(), StoreError> {
        if !self.model.is_serialized(attribute) {
            return Err(self.unknown_attribute(attribute));
        }
        self.values.insert(attribute.to_string(), value.into());
        Ok(())
    }

    /// Reads `accessor` out of its store mapping.
    ///
    /// A key the mapping does not contain reads as `null`.
    pub fn read_store_attribute(&mut self, accessor: &str) -> Result<Value, StoreError> {
        let attribute = self.store_for(accessor)?;
        let store = self.store_mut(&attribute)?;
        Ok(store.get(accessor).cloned().unwrap_or(Value::Null))
    }

    pub fn write_store_attribute(
        &mut self,
        accessor: &str,
        value: impl Into<Value>,
    ) -> Result<(), StoreError> {
        let attribute = self.store_for(accessor)?;
        let store = self.store_mut(&attribute)?;
        store.insert(accessor.to_string(), value.into());
        Ok(())
    }

    /// Dumps the record back into columns.
    ///
    /// Attributes that were never read or written keep their stored bytes.
    pub fn to_row(&self) -> Result<Row, StoreError> {
        let mut row = self.raw.clone();
        for (attribute, value) in &self.values {
            let Some(codec) = self.model.codec(attribute) else {
                continue;
            };
            row.insert(attribute.clone(), Some(codec.dump(value)?));
        }
        Ok(row)
    }

    fn attribute_mut(&mut self, attribute: &str) -> Result<&mut Value, StoreError> {
        let Some(codec) = self.model.codec(attribute) else {
            return Err(self.unknown_attribute(attribute));
        };

        if !self.values.contains_key(attribute) {
            let raw = self.raw.get(attribute).and_then(|raw| raw.as_deref());
            let value = codec.load(raw)?;
            self.values.insert(attribute.to_string(), value);
        }

        self.values
            .get_mut(attribute)
            .ok_or_else(|| StoreError::UnknownAttribute {
                model: self.model.name().to_string(),
                attribute: attribute.to_string(),
            })
    }

    fn store_mut(&mut self, attribute: &str) -> Result<&mut Map<String, Value>, StoreError> {
        match self.attribute_mut(attribute)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::NotAMapping {
                attribute: attribute.to_string(),
            }),
        }
    }

    fn store_for(&self, accessor: &str) -> Result<String, StoreError> {
        self.model
            .store_for(accessor)
            .map(str::to_string)
            .ok_or_else(|| StoreError::UnknownAccessor {
                model: self.model.name().to_string(),
                accessor: accessor.to_string(),
            })
    }

    fn unknown_attribute(&self, attribute: &str) -> StoreError {
        StoreError::UnknownAttribute {
            model: self.model.name().to_string(),
            attribute: attribute.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nil_friendly_marshal::NilFriendlyMarshal;
    use serde_json::json;

    fn article() -> Arc<ModelType> {
        let mut model = ModelType::new("Article");
        model.serialize("translations", Arc::new(NilFriendlyMarshal::new(None)));
        model.store_accessor("translations", ["locale"]);
        Arc::new(model)
    }

    #[test]
    fn read_absent_attribute_yields_default() {
        let mut record = Record::new(article());
        assert_eq!(record.read_attribute("translations").unwrap(), json!({}));
    }

    #[test]
    fn unknown_attribute_is_rejected() {
        let mut record = Record::new(article());
        let err = record.read_attribute("title").unwrap_err();
        assert!(matches!(err, StoreError::UnknownAttribute { .. }));
        assert_eq!(err.to_string(), "unknown attribute `title` on Article");

        let err = record.write_attribute("title", "x").unwrap_err();
        assert!(matches!(err, StoreError::UnknownAttribute { .. }));
    }

    #[test]
    fn untouched_columns_pass_through() {
        let mut row = Row::new();
        row.insert("title".to_string(), Some(b"raw".to_vec()));
        row.insert("translations".to_string(), None);

        let record = Record::from_row(article(), row.clone());
        assert_eq!(record.to_row().unwrap(), row);
    }

    #[test]
    fn written_attribute_is_dumped() {
        let mut record = Record::new(article());
        record.write_attribute("translations", json!({"locale": "fr"})).unwrap();

        let row = record.to_row().unwrap();
        let bytes = row["translations"].as_deref().unwrap();
        assert_eq!(
            NilFriendlyMarshal::shared().load(Some(bytes)).unwrap(),
            json!({"locale": "fr"})
        );
    }

    #[test]
    fn accessor_on_non_mapping_store() {
        let mut record = Record::new(article());
        record.write_attribute("translations", json!(["en"])).unwrap();

        let err = record.read_store_attribute("locale").unwrap_err();
        assert!(matches!(err, StoreError::NotAMapping { .. }));
    }

    #[test]
    fn unknown_accessor_is_rejected() {
        let mut record = Record::new(article());
        let err = record.write_store_attribute("color", "red").unwrap_err();
        assert!(matches!(err, StoreError::UnknownAccessor { .. }));
    }
}
