use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// A typed log field value.
///
/// One variant per typed setter on the entry builder. `Error(None)` is the
/// "no error" marker: the error setter records the `"error"` key even when
/// there is no error to attach.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Uint(u64),
    Bool(bool),
    Float(f64),
    Time(DateTime<Utc>),
    Duration(Duration),
    Error(Option<String>),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Str(v) => serializer.serialize_str(v),
            FieldValue::Int(v) => serializer.serialize_i64(*v),
            FieldValue::Uint(v) => serializer.serialize_u64(*v),
            FieldValue::Bool(v) => serializer.serialize_bool(*v),
            FieldValue::Float(v) => serializer.serialize_f64(*v),
            FieldValue::Time(v) => serializer.serialize_str(&v.to_rfc3339()),
            // Durations encode as fractional seconds
            FieldValue::Duration(v) => serializer.serialize_f64(v.as_secs_f64()),
            FieldValue::Error(Some(v)) => serializer.serialize_str(v),
            FieldValue::Error(None) => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(v) => f.write_str(v),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Uint(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Time(v) => f.write_str(&v.to_rfc3339()),
            FieldValue::Duration(v) => write!(f, "{}s", v.as_secs_f64()),
            FieldValue::Error(Some(v)) => f.write_str(v),
            FieldValue::Error(None) => f.write_str("<none>"),
        }
    }
}

/// A named, typed value attached to a log record.
///
/// Engines receive fields as an unordered list; the entry builder keeps them
/// keyed in a [`FieldMap`] until emission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

/// Keyed field storage. Later writes to the same key replace earlier ones.
pub type FieldMap = HashMap<String, FieldValue>;
