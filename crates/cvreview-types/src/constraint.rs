use crate::value::{Dynamic, FieldError};
use schemars::JsonSchema;
use serde::de::{self, Deserialize, Deserializer};
use serde::Serialize;

/// Reference to the constraint that produced a violation.
///
/// The constraint definition itself is owned by the evaluation engine; only
/// its identity (`api_version` + `kind`) and `name` are carried here.
///
/// Serializes flat. Deserializes from either the flat form
/// (`{"apiVersion", "kind", "name"}`) or a Kubernetes-style constraint
/// object whose name lives under `metadata.name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintRef {
    pub api_version: String,
    pub kind: String,
    pub name: String,
}

impl ConstraintRef {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api_version: String::new(),
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Read a reference out of a Kubernetes-style constraint object
    /// (`apiVersion`, `kind`, `metadata.name`). Only the name is required.
    pub fn from_object(object: &Dynamic) -> Result<Self, FieldError> {
        let name = object.get_path_str(&["metadata", "name"])?;
        Ok(Self::with_name(object, name))
    }

    /// Accept either shape: `metadata.name` when a `metadata` key is present,
    /// a top-level `name` otherwise.
    pub fn from_dynamic(value: &Dynamic) -> Result<Self, FieldError> {
        if value.get("metadata").is_some() {
            return Self::from_object(value);
        }
        let name = value.get_path_str(&["name"])?;
        Ok(Self::with_name(value, name))
    }

    fn with_name(object: &Dynamic, name: &str) -> Self {
        let text = |key: &str| {
            object
                .get(key)
                .and_then(Dynamic::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            api_version: text("apiVersion"),
            kind: text("kind"),
            name: name.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for ConstraintRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Dynamic::deserialize(deserializer)?;
        ConstraintRef::from_dynamic(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_object_reads_metadata_name() {
        let object = Dynamic::from(json!({
            "apiVersion": "constraints.gatekeeper.sh/v1alpha1",
            "kind": "GCPStorageBucketPolicyOnlyConstraintV1",
            "metadata": {"name": "require-bucket-policy-only"},
            "spec": {"severity": "high"},
        }));
        let constraint = ConstraintRef::from_object(&object).expect("constraint");
        assert_eq!(constraint.name, "require-bucket-policy-only");
        assert_eq!(constraint.api_version, "constraints.gatekeeper.sh/v1alpha1");
        assert_eq!(constraint.kind, "GCPStorageBucketPolicyOnlyConstraintV1");
    }

    #[test]
    fn from_object_requires_name() {
        let object = Dynamic::from(json!({"kind": "K", "metadata": {}}));
        assert_eq!(
            ConstraintRef::from_object(&object),
            Err(FieldError::Missing {
                field: "metadata.name".to_string()
            })
        );
    }

    #[test]
    fn deserializes_kubernetes_object() {
        let text = r#"{
            "apiVersion": "constraints.gatekeeper.sh/v1alpha1",
            "kind": "K",
            "metadata": {"name": "require-x", "annotations": {"a": "b"}},
            "spec": {"parameters": {}}
        }"#;
        let constraint: ConstraintRef = serde_json::from_str(text).expect("parse");
        assert_eq!(constraint.name, "require-x");
        assert_eq!(constraint.kind, "K");
        assert_eq!(constraint.api_version, "constraints.gatekeeper.sh/v1alpha1");
    }

    #[test]
    fn deserializes_flat_form_with_optional_identity() {
        let constraint: ConstraintRef =
            serde_json::from_str(r#"{"name": "no-public"}"#).expect("parse");
        assert_eq!(constraint, ConstraintRef::new("", "no-public"));
    }

    #[test]
    fn rejects_non_string_name() {
        let err = serde_json::from_str::<ConstraintRef>(r#"{"metadata": {"name": 3}}"#)
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("field 'metadata.name' is an integer, expected a string")
        );
    }

    #[test]
    fn serializes_flat() {
        let constraint = ConstraintRef {
            api_version: "v1".to_string(),
            kind: "K".to_string(),
            name: "c".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&constraint).expect("serialize"),
            json!({"apiVersion": "v1", "kind": "K", "name": "c"})
        );
    }
}
