/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Schema-driven JSON reading.

use super::serializer::check;
use super::DecodePolicy;
use crate::error::kind;
use crate::{Fields, SerializationError};
use rds_types::{MemberSchema, ShapeType};
use serde_json::{Map, Value};

/// Reads JSON documents into member values.
pub(crate) struct Deserializer {
    policy: DecodePolicy,
}

impl Deserializer {
    pub(crate) fn new(policy: DecodePolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn read_object<'a>(
        &self,
        members: impl IntoIterator<Item = &'a MemberSchema>,
        input: &[u8],
    ) -> Result<Fields, SerializationError> {
        let value: Value = serde_json::from_slice(input).map_err(SerializationError::Decode)?;
        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(SerializationError::NotAnObject {
                    found: kind(&other),
                })
            }
        };
        let mut fields = Fields::new();
        for member in members {
            if let Some(value) = self.take(&mut object, member, member.name())? {
                fields.insert(member.name(), value);
            }
        }
        Ok(fields)
    }

    pub(crate) fn read_payload(
        &self,
        member: &MemberSchema,
        input: &[u8],
    ) -> Result<Option<Value>, SerializationError> {
        if input.iter().all(u8::is_ascii_whitespace) {
            return self.absent(member, member.name());
        }
        match serde_json::from_slice(input).map_err(SerializationError::Decode)? {
            Value::Null => self.absent(member, member.name()),
            value => self
                .read_value(member.name(), member.shape(), value)
                .map(Some),
        }
    }

    fn take(
        &self,
        object: &mut Map<String, Value>,
        member: &MemberSchema,
        path: &str,
    ) -> Result<Option<Value>, SerializationError> {
        match object.remove(member.name()) {
            None | Some(Value::Null) => self.absent(member, path),
            Some(value) => self.read_value(path, member.shape(), value).map(Some),
        }
    }

    fn absent(
        &self,
        member: &MemberSchema,
        path: &str,
    ) -> Result<Option<Value>, SerializationError> {
        if !member.is_required() {
            return Ok(None);
        }
        match self.policy {
            DecodePolicy::Strict => Err(SerializationError::missing(path)),
            DecodePolicy::ZeroFill => Ok(Some(zero(member.shape()))),
        }
    }

    fn read_value(
        &self,
        path: &str,
        shape: &ShapeType,
        value: Value,
    ) -> Result<Value, SerializationError> {
        match (shape, value) {
            (ShapeType::Document, value) => Ok(value),
            (ShapeType::List(element), Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| self.read_value(&format!("{path}[{i}]"), element, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            (ShapeType::Map(element), Value::Object(entries)) => entries
                .into_iter()
                .map(|(key, item)| {
                    let item = self.read_value(&format!("{path}.{key}"), element, item)?;
                    Ok((key, item))
                })
                .collect::<Result<Map<_, _>, _>>()
                .map(Value::Object),
            (ShapeType::Structure(schema), Value::Object(mut entries)) => {
                let mut out = Map::new();
                for member in schema.members() {
                    let member_path = format!("{path}.{}", member.name());
                    if let Some(item) = self.take(&mut entries, member, &member_path)? {
                        out.insert(member.name().to_owned(), item);
                    }
                }
                Ok(Value::Object(out))
            }
            (shape, value) => {
                check(path, shape, &value)?;
                Ok(value)
            }
        }
    }
}

/// Zero value of a shape. Structures get their required members zero-filled.
fn zero(shape: &ShapeType) -> Value {
    match shape {
        ShapeType::Boolean => Value::Bool(false),
        ShapeType::Integer | ShapeType::Long => Value::from(0),
        ShapeType::Double => Value::from(0.0),
        ShapeType::String => Value::String(String::new()),
        ShapeType::List(_) => Value::Array(Vec::new()),
        ShapeType::Map(_) | ShapeType::Document => Value::Object(Map::new()),
        ShapeType::Structure(schema) => Value::Object(
            schema
                .members()
                .iter()
                .filter(|member| member.is_required())
                .map(|member| (member.name().to_owned(), zero(member.shape())))
                .collect(),
        ),
    }
}
