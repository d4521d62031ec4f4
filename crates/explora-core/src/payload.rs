//! Opaque per-type page payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// The `config` document attached to a page.
///
/// Its shape depends on the page type, so nothing here enforces a schema.
/// Renderers pick the fields they understand with the accessors below, or
/// parse the whole payload into their own type with [`PageConfig::parse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageConfig(Value);

impl PageConfig {
    /// Wrap a raw JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// True for `null` and for an empty object.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// A string field at the top level of the payload.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// An array field at the top level of the payload.
    pub fn get_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key).and_then(Value::as_array)
    }

    /// Deserialize the payload into a renderer-specific type.
    ///
    /// `page_type` is only used to label the error.
    pub fn parse<T: DeserializeOwned>(&self, page_type: &str) -> CoreResult<T> {
        T::deserialize(&self.0).map_err(|e| CoreError::InvalidConfig {
            page_type: page_type.to_string(),
            reason: e.to_string(),
        })
    }
}

impl From<Value> for PageConfig {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Quiz {
        question: String,
        options: Vec<String>,
    }

    #[test]
    fn test_parse_matching_payload() {
        let config = PageConfig::new(json!({
            "question": "Quel oiseau ?",
            "options": ["Mésange", "Rouge-gorge"]
        }));

        let quiz: Quiz = config.parse("quiz").unwrap();
        assert_eq!(quiz.question, "Quel oiseau ?");
        assert_eq!(quiz.options.len(), 2);
    }

    #[test]
    fn test_parse_mismatch_names_page_type() {
        let config = PageConfig::new(json!({ "question": 42 }));

        let err = config.parse::<Quiz>("quiz").unwrap_err();
        let CoreError::InvalidConfig { page_type, reason } = err;
        assert_eq!(page_type, "quiz");
        assert!(!reason.is_empty());
    }

    #[test]
    fn test_accessors() {
        let config = PageConfig::new(json!({ "titre": "Mare", "images": [1, 2] }));
        assert_eq!(config.get_str("titre"), Some("Mare"));
        assert_eq!(config.get_array("images").map(Vec::len), Some(2));
        assert!(config.get_str("images").is_none());
        assert!(!config.is_empty());
        assert!(PageConfig::default().is_empty());
        assert!(PageConfig::new(json!({})).is_empty());
    }
}
