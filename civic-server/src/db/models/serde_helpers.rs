//! Serde helpers for SurrealDB RecordId fields
//!
//! Record ids cross two boundaries with different shapes: the store hands
//! them back in SurrealDB's native format, while the API serializes them
//! as `"table:key"` strings. These helpers accept both on the way in and
//! always emit the string form on the way out.

use serde::{Deserialize, Deserializer, Serializer, de};
use std::fmt;
use surrealdb::RecordId;

fn record_id_from_str<E: de::Error>(value: &str) -> Result<RecordId, E> {
    match value.split_once(':') {
        Some((table, key)) => Ok(RecordId::from_table_key(table, key)),
        None => Err(de::Error::custom(format!(
            "invalid record id '{value}', expected 'table:key'"
        ))),
    }
}

struct RecordIdVisitor;

impl<'de> de::Visitor<'de> for RecordIdVisitor {
    type Value = RecordId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a RecordId or a string like 'table:key'")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        record_id_from_str(value)
    }

    fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
    where
        M: de::MapAccess<'de>,
    {
        // Native SurrealDB format
        RecordId::deserialize(de::value::MapAccessDeserializer::new(map))
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        RecordId::deserialize(deserializer)
    }
}

/// `Option<RecordId>` as an optional `"table:key"` string
pub mod option_record_id {
    use super::*;

    pub fn serialize<S>(id: &Option<RecordId>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => s.serialize_some(&id.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptionVisitor;

        impl<'de> de::Visitor<'de> for OptionVisitor {
            type Value = Option<RecordId>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("null, a RecordId, or a string like 'table:key'")
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(RecordIdVisitor).map(Some)
            }
        }

        d.deserialize_option(OptionVisitor)
    }
}
