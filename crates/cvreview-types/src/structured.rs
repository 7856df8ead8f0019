//! Canonical structured value used on the violation wire.
//!
//! Mirrors JSON's data model exactly: null, boolean, number, string, ordered
//! list and an object whose key order carries no meaning. Numbers keep the
//! integer/float distinction of the text they were parsed from.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum StructuredValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<StructuredValue>),
    Struct(BTreeMap<String, StructuredValue>),
}

impl StructuredValue {
    /// Parse JSON text into a structured value.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Decode back into a plain JSON value.
    pub fn to_json(&self) -> JsonValue {
        match self {
            StructuredValue::Null => JsonValue::Null,
            StructuredValue::Bool(b) => JsonValue::Bool(*b),
            StructuredValue::Number(n) => JsonValue::Number(n.clone()),
            StructuredValue::String(s) => JsonValue::String(s.clone()),
            StructuredValue::List(items) => {
                JsonValue::Array(items.iter().map(StructuredValue::to_json).collect())
            }
            StructuredValue::Struct(fields) => JsonValue::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }

    pub fn as_struct(&self) -> Option<&BTreeMap<String, StructuredValue>> {
        match self {
            StructuredValue::Struct(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<StructuredValue> for JsonValue {
    fn from(value: StructuredValue) -> Self {
        value.to_json()
    }
}

impl Serialize for StructuredValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StructuredValue::Null => serializer.serialize_unit(),
            StructuredValue::Bool(b) => serializer.serialize_bool(*b),
            StructuredValue::Number(n) => n.serialize(serializer),
            StructuredValue::String(s) => serializer.serialize_str(s),
            StructuredValue::List(items) => items.serialize(serializer),
            StructuredValue::Struct(fields) => fields.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StructuredValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StructuredVisitor)
    }
}

struct StructuredVisitor;

impl<'de> Visitor<'de> for StructuredVisitor {
    type Value = StructuredValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<StructuredValue, E> {
        Ok(StructuredValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<StructuredValue, E> {
        Ok(StructuredValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<StructuredValue, D::Error> {
        StructuredValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<StructuredValue, E> {
        Ok(StructuredValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StructuredValue, E> {
        Ok(StructuredValue::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StructuredValue, E> {
        Ok(StructuredValue::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<StructuredValue, E> {
        Number::from_f64(v)
            .map(StructuredValue::Number)
            .ok_or_else(|| E::custom(format_args!("number {v} has no JSON representation")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StructuredValue, E> {
        Ok(StructuredValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<StructuredValue, E> {
        Ok(StructuredValue::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StructuredValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(StructuredValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StructuredValue, A::Error> {
        let mut fields = BTreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, StructuredValue>()? {
            fields.insert(key, value);
        }
        Ok(StructuredValue::Struct(fields))
    }
}
