// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serde-driven conversion between plain structs and column values.
//!
//! Column names are the struct's serialized field names, so
//! `#[serde(rename = "...")]` picks the column a field maps to. Field values
//! are parsed from their text by the field's type: numbers, `bool`, `char`,
//! strings, unit enum variants and `Option`s of those (an empty value is
//! `None`).

use std::fmt::Display;
use std::str::FromStr;

use serde::de::value::{Error as DeError, MapDeserializer, StrDeserializer};
use serde::de::{self, DeserializeOwned, Deserializer, IntoDeserializer, Visitor};
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::mapping::ColumnValues;

/// Field names of struct `T`, in declaration order.
pub(crate) fn column_names<T: DeserializeOwned>() -> Result<Vec<String>> {
    let mut names = FieldNames(None);
    // Fails on purpose once the names are captured.
    let _ = T::deserialize(&mut names);
    match names.0 {
        Some(fields) => Ok(fields.iter().map(|f| f.to_string()).collect()),
        None => Err(Error::Mapping(format!(
            "{} is not a struct with named fields",
            std::any::type_name::<T>()
        ))),
    }
}

pub(crate) fn from_columns<T: DeserializeOwned>(values: &ColumnValues) -> Result<T> {
    let entries = values.iter().map(|(column, raw)| {
        (
            column.as_str(),
            FieldValue {
                column: column.as_str(),
                raw: raw.as_str(),
            },
        )
    });
    let deserializer: MapDeserializer<'_, _, DeError> = MapDeserializer::new(entries);
    T::deserialize(deserializer).map_err(|e| Error::Mapping(e.to_string()))
}

pub(crate) fn to_columns<T: Serialize>(record: &T) -> Result<ColumnValues> {
    let value = serde_json::to_value(record).map_err(|e| Error::Mapping(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(Error::Mapping(format!(
            "{} does not serialize to named fields",
            std::any::type_name::<T>()
        )));
    };
    Ok(fields
        .into_iter()
        .map(|(column, value)| (column, text_of(value)))
        .collect())
}

fn text_of(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Records the field list a derived `Deserialize` asks for.
struct FieldNames(Option<&'static [&'static str]>);

impl<'de> Deserializer<'de> for &mut FieldNames {
    type Error = DeError;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> std::result::Result<V::Value, DeError> {
        Err(de::Error::custom("not a struct"))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        _visitor: V,
    ) -> std::result::Result<V::Value, DeError> {
        self.0 = Some(fields);
        Err(de::Error::custom("field names captured"))
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

/// One column's text, parsed on demand as whatever the field asks for.
struct FieldValue<'a> {
    column: &'a str,
    raw: &'a str,
}

impl FieldValue<'_> {
    fn parse<T>(&self) -> std::result::Result<T, DeError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.raw
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("column {}: {:?}: {e}", self.column, self.raw)))
    }
}

impl<'de> IntoDeserializer<'de, DeError> for FieldValue<'_> {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

macro_rules! parse_into {
    ($($method:ident => $visit:ident,)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> std::result::Result<V::Value, DeError> {
                visitor.$visit(self.parse()?)
            }
        )*
    };
}

impl<'de> Deserializer<'de> for FieldValue<'_> {
    type Error = DeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> std::result::Result<V::Value, DeError> {
        visitor.visit_str(self.raw)
    }

    parse_into! {
        deserialize_bool => visit_bool,
        deserialize_i8 => visit_i8,
        deserialize_i16 => visit_i16,
        deserialize_i32 => visit_i32,
        deserialize_i64 => visit_i64,
        deserialize_i128 => visit_i128,
        deserialize_u8 => visit_u8,
        deserialize_u16 => visit_u16,
        deserialize_u32 => visit_u32,
        deserialize_u64 => visit_u64,
        deserialize_u128 => visit_u128,
        deserialize_f32 => visit_f32,
        deserialize_f64 => visit_f64,
        deserialize_char => visit_char,
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> std::result::Result<V::Value, DeError> {
        if self.raw.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> std::result::Result<V::Value, DeError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> std::result::Result<V::Value, DeError> {
        let variant: StrDeserializer<'_, DeError> = self.raw.into_deserializer();
        visitor.visit_enum(variant)
    }

    serde::forward_to_deserialize_any! {
        str string bytes byte_buf unit unit_struct seq tuple tuple_struct map
        struct identifier ignored_any
    }
}

#[cfg(test)]
#[path = "typed_tests.rs"]
mod tests;
