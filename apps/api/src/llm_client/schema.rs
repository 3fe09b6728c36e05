//! Response schema nodes for structured-output requests.
//!
//! Covers the subset of the Gemini schema language this service sends:
//! arrays of flat objects whose fields are strings, numbers, or string
//! arrays. Type names go over the wire in UPPERCASE.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Number,
    Array,
    Object,
}

#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::leaf(SchemaType::Number)
    }

    pub fn array(items: Schema) -> Self {
        Schema {
            schema_type: SchemaType::Array,
            items: Some(Box::new(items)),
            properties: None,
            required: None,
        }
    }

    pub fn object(properties: Vec<(&str, Schema)>) -> Self {
        Schema {
            schema_type: SchemaType::Object,
            items: None,
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, schema)| (name.to_string(), schema))
                    .collect(),
            ),
            required: None,
        }
    }

    /// Names the properties the model must emit.
    pub fn with_required(mut self, fields: &[&str]) -> Self {
        self.required = Some(fields.iter().map(|f| f.to_string()).collect());
        self
    }

    fn leaf(schema_type: SchemaType) -> Self {
        Schema {
            schema_type,
            items: None,
            properties: None,
            required: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_type_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&SchemaType::String).unwrap(), "\"STRING\"");
        assert_eq!(serde_json::to_string(&SchemaType::Array).unwrap(), "\"ARRAY\"");
    }

    #[test]
    fn test_leaf_schema_omits_empty_fields() {
        let value = serde_json::to_value(Schema::string()).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "STRING" }));
    }

    #[test]
    fn test_array_of_objects_shape() {
        let schema = Schema::array(
            Schema::object(vec![
                ("title", Schema::string()),
                ("matchScore", Schema::number()),
                ("requiredSkills", Schema::array(Schema::string())),
            ])
            .with_required(&["title", "matchScore"]),
        );

        let value = serde_json::to_value(schema).unwrap();
        assert_eq!(value["type"], "ARRAY");
        assert_eq!(value["items"]["type"], "OBJECT");
        assert_eq!(value["items"]["properties"]["title"]["type"], "STRING");
        assert_eq!(value["items"]["properties"]["matchScore"]["type"], "NUMBER");
        assert_eq!(
            value["items"]["properties"]["requiredSkills"]["items"]["type"],
            "STRING"
        );
        let required = value["items"]["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("title")));
        assert!(required.contains(&serde_json::json!("matchScore")));
    }

    #[test]
    fn test_object_without_required_list() {
        let value = serde_json::to_value(Schema::object(vec![("skill", Schema::string())])).unwrap();
        assert!(value.get("required").is_none());
    }
}
