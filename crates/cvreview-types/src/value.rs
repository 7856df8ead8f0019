//! Dynamic, schema-less values as handed over by CAI and the evaluation engine.
//!
//! Payloads have no fixed schema, so they are modelled as a tagged union
//! rather than as typed structs. Field extraction goes through typed
//! accessors that return a [`FieldError`] instead of panicking.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping form of a [`Dynamic`] value. Keys are kept sorted so the
/// serialized text is canonical.
pub type DynMap = BTreeMap<String, Dynamic>;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Dynamic {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Only used for integers above `i64::MAX`.
    UInt(u64),
    /// May hold non-finite values, which have no JSON text form.
    Float(f64),
    String(String),
    List(Vec<Dynamic>),
    Map(DynMap),
}

/// Failure to read a typed field out of a dynamic mapping.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("missing field '{field}'")]
    Missing { field: String },

    #[error("field '{field}' is {found}, expected a string")]
    NotAString { field: String, found: &'static str },
}

impl Dynamic {
    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Null => "null",
            Dynamic::Bool(_) => "a boolean",
            Dynamic::Int(_) | Dynamic::UInt(_) => "an integer",
            Dynamic::Float(_) => "a float",
            Dynamic::String(_) => "a string",
            Dynamic::List(_) => "a list",
            Dynamic::Map(_) => "a map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Dynamic::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&DynMap> {
        match self {
            Dynamic::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Look up `key` when this value is a map.
    pub fn get(&self, key: &str) -> Option<&Dynamic> {
        self.as_map()?.get(key)
    }

    /// Walk nested maps, e.g. `["metadata", "name"]`.
    pub fn get_path(&self, path: &[&str]) -> Option<&Dynamic> {
        path.iter().try_fold(self, |value, key| value.get(key))
    }

    /// Read the string at `path`. The error names the dotted path.
    pub fn get_path_str(&self, path: &[&str]) -> Result<&str, FieldError> {
        let field = path.join(".");
        let value = self
            .get_path(path)
            .ok_or_else(|| FieldError::Missing {
                field: field.clone(),
            })?;
        value.as_str().ok_or(FieldError::NotAString {
            field,
            found: value.type_name(),
        })
    }
}

/// Read a string-valued field out of a mapping.
pub fn get_str<'a>(map: &'a DynMap, field: &str) -> Result<&'a str, FieldError> {
    let value = map.get(field).ok_or_else(|| FieldError::Missing {
        field: field.to_string(),
    })?;
    value.as_str().ok_or_else(|| FieldError::NotAString {
        field: field.to_string(),
        found: value.type_name(),
    })
}

impl Serialize for Dynamic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dynamic::Null => serializer.serialize_unit(),
            Dynamic::Bool(b) => serializer.serialize_bool(*b),
            Dynamic::Int(i) => serializer.serialize_i64(*i),
            Dynamic::UInt(u) => serializer.serialize_u64(*u),
            // serde_json would quietly write `null` for NaN and infinities.
            Dynamic::Float(f) if !f.is_finite() => Err(ser::Error::custom(format_args!(
                "unsupported value: {f}"
            ))),
            Dynamic::Float(f) => serializer.serialize_f64(*f),
            Dynamic::String(s) => serializer.serialize_str(s),
            Dynamic::List(items) => items.serialize(serializer),
            Dynamic::Map(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Dynamic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DynamicVisitor)
    }
}

struct DynamicVisitor;

impl<'de> Visitor<'de> for DynamicVisitor {
    type Value = Dynamic;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON-like value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Dynamic, E> {
        Ok(Dynamic::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Dynamic, E> {
        Ok(Dynamic::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Dynamic, D::Error> {
        Dynamic::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Dynamic, E> {
        Ok(Dynamic::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Dynamic, E> {
        Ok(Dynamic::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Dynamic, E> {
        Ok(i64::try_from(v).map_or(Dynamic::UInt(v), Dynamic::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Dynamic, E> {
        Ok(Dynamic::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Dynamic, E> {
        Ok(Dynamic::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Dynamic, E> {
        Ok(Dynamic::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Dynamic, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Dynamic::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Dynamic, A::Error> {
        let mut map = DynMap::new();
        while let Some((key, value)) = access.next_entry::<String, Dynamic>()? {
            map.insert(key, value);
        }
        Ok(Dynamic::Map(map))
    }
}

impl From<serde_json::Value> for Dynamic {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as JsonValue;
        match value {
            JsonValue::Null => Dynamic::Null,
            JsonValue::Bool(b) => Dynamic::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Dynamic::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Dynamic::UInt(u)
                } else {
                    Dynamic::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Dynamic::String(s),
            JsonValue::Array(items) => {
                Dynamic::List(items.into_iter().map(Dynamic::from).collect())
            }
            JsonValue::Object(map) => Dynamic::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Dynamic::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Dynamic {
    fn from(value: &str) -> Self {
        Dynamic::String(value.to_string())
    }
}

impl From<String> for Dynamic {
    fn from(value: String) -> Self {
        Dynamic::String(value)
    }
}

impl From<bool> for Dynamic {
    fn from(value: bool) -> Self {
        Dynamic::Bool(value)
    }
}

impl From<i64> for Dynamic {
    fn from(value: i64) -> Self {
        Dynamic::Int(value)
    }
}

impl From<f64> for Dynamic {
    fn from(value: f64) -> Self {
        Dynamic::Float(value)
    }
}

impl From<Vec<Dynamic>> for Dynamic {
    fn from(value: Vec<Dynamic>) -> Self {
        Dynamic::List(value)
    }
}

impl From<DynMap> for Dynamic {
    fn from(value: DynMap) -> Self {
        Dynamic::Map(value)
    }
}
