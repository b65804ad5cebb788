/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON codec implementation for schema-based serialization.

use crate::{Fields, SerializationError};
use rds_types::MemberSchema;
use serde_json::Value;

mod deserializer;
mod serializer;

/// What the deserializer does when a required member is missing from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Fail with [`SerializationError::MissingRequired`].
    Strict,
    /// Fill the member with the zero value of its shape: `""`, `0`, `false`, `[]`, `{}`, or a
    /// structure whose required members are themselves zero-filled.
    ///
    /// The service often omits members its documentation marks as mandatory.
    #[default]
    ZeroFill,
}

/// Configuration for JSON codec behavior.
#[derive(Debug, Clone, Default)]
pub struct JsonCodecSettings {
    /// Handling of missing required members when decoding.
    pub decode_policy: DecodePolicy,
}

/// JSON codec for schema-based serialization and deserialization.
///
/// # Examples
///
/// ```
/// use rds_json::{Fields, JsonCodec};
/// use rds_types::{MemberSchema, ShapeType};
///
/// const MEMBERS: &[MemberSchema] = &[
///     MemberSchema::required("instance_id", ShapeType::String),
///     MemberSchema::optional("db_name", ShapeType::String),
/// ];
///
/// let codec = JsonCodec::default();
/// let mut fields = Fields::new();
/// fields.insert("instance_id", "abc123".into());
/// let bytes = codec.serialize(MEMBERS, &fields).unwrap();
/// assert_eq!(bytes, br#"{"instance_id":"abc123"}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    settings: JsonCodecSettings,
}

impl JsonCodec {
    /// Creates a new JSON codec with the given settings.
    pub fn new(settings: JsonCodecSettings) -> Self {
        Self { settings }
    }

    /// Returns the codec settings.
    pub fn settings(&self) -> &JsonCodecSettings {
        &self.settings
    }

    /// Checks that `value` conforms to `member`'s shape.
    ///
    /// Nested structures may not contain undeclared keys or `null`s, and their required members
    /// must be present. Only [`Document`](rds_types::ShapeType::Document) members accept
    /// arbitrary JSON.
    pub fn check(&self, member: &MemberSchema, value: &Value) -> Result<(), SerializationError> {
        serializer::check(member.name(), member.shape(), value)
    }

    /// Writes `fields` as a JSON object holding the set values of `members`, in order.
    ///
    /// Unset optional members are omitted. Fails if a required member is unset or a value
    /// doesn't conform to its shape.
    pub fn serialize<'a>(
        &self,
        members: impl IntoIterator<Item = &'a MemberSchema>,
        fields: &Fields,
    ) -> Result<Vec<u8>, SerializationError> {
        serializer::serialize_members(members, fields)
    }

    /// Writes a single member's value as a whole JSON document.
    pub fn serialize_payload(
        &self,
        member: &MemberSchema,
        value: &Value,
    ) -> Result<Vec<u8>, SerializationError> {
        serializer::serialize_value(member, value)
    }

    /// Reads `members` out of a JSON object.
    ///
    /// Keys that aren't members are ignored. A `null` reads as absent.
    pub fn deserialize<'a>(
        &self,
        members: impl IntoIterator<Item = &'a MemberSchema>,
        input: &[u8],
    ) -> Result<Fields, SerializationError> {
        deserializer::Deserializer::new(self.settings.decode_policy).read_object(members, input)
    }

    /// Reads a single member's value from a whole JSON document.
    ///
    /// Empty input and `null` read as absent.
    pub fn deserialize_payload(
        &self,
        member: &MemberSchema,
        input: &[u8],
    ) -> Result<Option<Value>, SerializationError> {
        deserializer::Deserializer::new(self.settings.decode_policy).read_payload(member, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rds_types::{ShapeType, StructSchema};
    use serde_json::json;

    const POLICY: StructSchema = {
        const MEMBERS: &[MemberSchema] = &[
            MemberSchema::required("keep_days", ShapeType::Integer),
            MemberSchema::optional("start_time", ShapeType::String),
            MemberSchema::optional("period", ShapeType::String),
        ];
        StructSchema::new("BackupPolicy", MEMBERS)
    };

    const MEMBERS: &[MemberSchema] = &[
        MemberSchema::required("instance_id", ShapeType::String).in_path(),
        MemberSchema::required("backup_policy", ShapeType::Structure(&POLICY)),
        MemberSchema::optional("reserve_backups", ShapeType::Boolean),
        MemberSchema::optional("size", ShapeType::Long),
        MemberSchema::optional("ratio", ShapeType::Double),
    ];

    #[test]
    fn test_default_settings() {
        let codec = JsonCodec::default();
        assert_eq!(codec.settings().decode_policy, DecodePolicy::ZeroFill);
    }

    #[test]
    fn strict_is_opt_in() {
        let fields = JsonCodec::default().deserialize(MEMBERS, b"{}").unwrap();
        assert_eq!(fields.get("instance_id"), Some(&json!("")));
        assert_eq!(fields.get("backup_policy"), Some(&json!({"keep_days": 0})));
        assert!(!fields.contains_key("reserve_backups"));

        let strict = JsonCodec::new(JsonCodecSettings {
            decode_policy: DecodePolicy::Strict,
        });
        assert!(strict.deserialize(MEMBERS, b"{}").is_err());
    }

    #[test]
    fn check_uses_the_member_name_as_path() {
        let err = JsonCodec::default()
            .check(&MEMBERS[1], &json!({"keep_days": "7"}))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "member `backup_policy.keep_days` expected integer, found string"
        );
    }

    fn policy() -> impl Strategy<Value = Value> {
        (
            any::<i32>(),
            proptest::option::of("[0-9]{2}:[0-9]{2}-[0-9]{2}:[0-9]{2}"),
            proptest::option::of("[1-7](,[1-7]){0,6}"),
        )
            .prop_map(|(keep_days, start_time, period)| {
                let mut policy = serde_json::Map::new();
                policy.insert("keep_days".into(), keep_days.into());
                if let Some(start_time) = start_time {
                    policy.insert("start_time".into(), start_time.into());
                }
                if let Some(period) = period {
                    policy.insert("period".into(), period.into());
                }
                Value::Object(policy)
            })
    }

    proptest! {
        #[test]
        fn set_members_survive_a_round_trip(
            instance_id in "[a-z0-9]{1,32}",
            backup_policy in policy(),
            reserve_backups in proptest::option::of(any::<bool>()),
            size in proptest::option::of(any::<i64>()),
            ratio in proptest::option::of(-1.0e12..1.0e12f64),
        ) {
            let mut fields = Fields::new();
            fields.insert("instance_id", instance_id.into());
            fields.insert("backup_policy", backup_policy);
            if let Some(v) = reserve_backups { fields.insert("reserve_backups", v.into()); }
            if let Some(v) = size { fields.insert("size", v.into()); }
            if let Some(v) = ratio { fields.insert("ratio", v.into()); }

            let codec = JsonCodec::default();
            let bytes = codec.serialize(MEMBERS, &fields).unwrap();
            let decoded = codec.deserialize(MEMBERS, &bytes).unwrap();
            prop_assert_eq!(decoded, fields);
        }
    }
}
