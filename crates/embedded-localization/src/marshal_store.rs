//! Registering a nil-friendly marshaled store on a model type.

use crate::model::ModelType;
use crate::nil_friendly_marshal::NilFriendlyMarshal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Keys inside the stored mapping that get their own accessor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessors: Option<Vec<String>>,
}

impl StoreOptions {
    pub fn with_accessors<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accessors: Some(keys.into_iter().map(Into::into).collect()),
        }
    }
}

/// Serializes `attribute` through [`NilFriendlyMarshal::shared`] and, when
/// `options.accessors` is set, declares a store accessor for each key.
pub fn register_marshaled_store(model: &mut ModelType, attribute: &str, options: &StoreOptions) {
    debug!(
        model = model.name(),
        attribute,
        accessors = ?options.accessors,
        "registering marshaled store"
    );
    model.serialize(attribute, Arc::new(NilFriendlyMarshal::shared()));
    if let Some(keys) = &options.accessors {
        model.store_accessor(attribute, keys.iter().map(String::as_str));
    }
}

/// Call-site sugar for [`register_marshaled_store`].
pub trait MarshalStore {
    fn marshal_store(&mut self, attribute: &str, options: &StoreOptions) -> &mut Self;
}

impl MarshalStore for ModelType {
    fn marshal_store(&mut self, attribute: &str, options: &StoreOptions) -> &mut Self {
        register_marshaled_store(self, attribute, options);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    #[test]
    fn registers_shared_codec() {
        let mut model = ModelType::new("Article");
        register_marshaled_store(&mut model, "translations", &StoreOptions::default());

        let codec = model.codec("translations").unwrap();
        assert_eq!(codec.load(None).unwrap(), json!({}));
        assert!(model.stored_attributes("translations").is_empty());
    }

    #[test]
    fn registers_accessors_when_given() {
        let mut model = ModelType::new("Article");
        model
            .marshal_store("translations", &StoreOptions::with_accessors(["locale"]))
            .marshal_store("settings", &StoreOptions::with_accessors(["theme", "size"]));

        assert_eq!(model.store_for("locale"), Some("translations"));
        assert_eq!(model.stored_attributes("settings"), vec!["theme", "size"]);
    }

    #[test]
    fn empty_accessor_list_declares_nothing() {
        let mut model = ModelType::new("Article");
        model.marshal_store("translations", &StoreOptions::with_accessors(Vec::<String>::new()));
        assert!(model.is_serialized("translations"));
        assert!(model.stored_attributes("translations").is_empty());
    }

    #[test]
    #[traced_test]
    fn registration_is_logged() {
        let mut model = ModelType::new("Article");
        model.marshal_store("translations", &StoreOptions::with_accessors(["locale"]));
        assert!(logs_contain("registering marshaled store"));
    }
}
