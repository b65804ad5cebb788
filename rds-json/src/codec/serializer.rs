/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape checking and schema-ordered JSON output.

use crate::{Fields, SerializationError};
use rds_types::{MemberSchema, ShapeType};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

/// Checks `value` against `shape`. `path` names the value in errors.
pub(crate) fn check(path: &str, shape: &ShapeType, value: &Value) -> Result<(), SerializationError> {
    match (shape, value) {
        (ShapeType::Document, _) => Ok(()),
        (ShapeType::Boolean, Value::Bool(_)) => Ok(()),
        (ShapeType::String, Value::String(_)) => Ok(()),
        (ShapeType::Integer, Value::Number(n))
            if n.as_i64().is_some_and(|v| i32::try_from(v).is_ok()) =>
        {
            Ok(())
        }
        (ShapeType::Long, Value::Number(n)) if n.is_i64() => Ok(()),
        (ShapeType::Double, Value::Number(_)) => Ok(()),
        (ShapeType::List(element), Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                check(&format!("{path}[{i}]"), element, item)?;
            }
            Ok(())
        }
        (ShapeType::Map(element), Value::Object(entries)) => {
            for (key, item) in entries {
                check(&format!("{path}.{key}"), element, item)?;
            }
            Ok(())
        }
        (ShapeType::Structure(schema), Value::Object(entries)) => {
            if let Some(key) = entries.keys().find(|key| schema.member(key).is_none()) {
                return Err(SerializationError::UnknownMember {
                    member: format!("{path}.{key}"),
                    structure: schema.name(),
                });
            }
            for member in schema.members() {
                let member_path = format!("{path}.{}", member.name());
                match entries.get(member.name()) {
                    None | Some(Value::Null) if member.is_required() => {
                        return Err(SerializationError::missing(member_path))
                    }
                    Some(item) => check(&member_path, member.shape(), item)?,
                    None => {}
                }
            }
            Ok(())
        }
        _ => Err(SerializationError::mismatch(path, shape.name(), value)),
    }
}

pub(crate) fn serialize_members<'a>(
    members: impl IntoIterator<Item = &'a MemberSchema>,
    fields: &Fields,
) -> Result<Vec<u8>, SerializationError> {
    let members: Vec<&MemberSchema> = members.into_iter().collect();
    for member in &members {
        match fields.get(member.name()) {
            Some(value) => check(member.name(), member.shape(), value)?,
            None if member.is_required() => return Err(SerializationError::missing(member.name())),
            None => {}
        }
    }
    serde_json::to_vec(&Members {
        members: &members,
        fields,
    })
    .map_err(SerializationError::Encode)
}

pub(crate) fn serialize_value(
    member: &MemberSchema,
    value: &Value,
) -> Result<Vec<u8>, SerializationError> {
    check(member.name(), member.shape(), value)?;
    serde_json::to_vec(&Shaped {
        shape: member.shape(),
        value,
    })
    .map_err(SerializationError::Encode)
}

/// Top-level members of a body, in declaration order.
struct Members<'a> {
    members: &'a [&'a MemberSchema],
    fields: &'a Fields,
}

impl Serialize for Members<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for member in self.members {
            if let Some(value) = self.fields.get(member.name()) {
                map.serialize_entry(
                    member.name(),
                    &Shaped {
                        shape: member.shape(),
                        value,
                    },
                )?;
            }
        }
        map.end()
    }
}

/// A checked value written with its structures in declaration order.
struct Shaped<'a> {
    shape: &'a ShapeType,
    value: &'a Value,
}

impl Serialize for Shaped<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self.shape, self.value) {
            (ShapeType::List(element), Value::Array(items)) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Shaped {
                        shape: element,
                        value: item,
                    })?;
                }
                seq.end()
            }
            (ShapeType::Map(element), Value::Object(entries)) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, item) in entries {
                    map.serialize_entry(
                        key,
                        &Shaped {
                            shape: element,
                            value: item,
                        },
                    )?;
                }
                map.end()
            }
            (ShapeType::Structure(schema), Value::Object(entries)) => {
                let mut map = serializer.serialize_map(None)?;
                for member in schema.members() {
                    if let Some(item) = entries.get(member.name()) {
                        map.serialize_entry(
                            member.name(),
                            &Shaped {
                                shape: member.shape(),
                                value: item,
                            },
                        )?;
                    }
                }
                map.end()
            }
            (_, value) => value.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rds_types::StructSchema;
    use serde_json::json;

    const USER: StructSchema = {
        const MEMBERS: &[MemberSchema] = &[
            MemberSchema::required("name", ShapeType::String),
            MemberSchema::optional("comment", ShapeType::String),
            MemberSchema::optional("databases", ShapeType::List(&ShapeType::String)),
        ];
        StructSchema::new("UserForCreation", MEMBERS)
    };

    const USER_SHAPE: ShapeType = ShapeType::Structure(&USER);

    #[test]
    fn integers_must_fit_their_width() {
        assert!(check("port", &ShapeType::Integer, &json!(3306)).is_ok());
        assert!(matches!(
            check("port", &ShapeType::Integer, &json!(4_294_967_296_i64)),
            Err(SerializationError::TypeMismatch { expected: "integer", .. })
        ));
        assert!(check("size", &ShapeType::Long, &json!(4_294_967_296_i64)).is_ok());
        assert!(check("size", &ShapeType::Long, &json!(1.5)).is_err());
        assert!(check("ratio", &ShapeType::Double, &json!(3)).is_ok());
    }

    #[test]
    fn mismatch_reports_path_and_kinds() {
        let err = check(
            "users",
            &ShapeType::List(&USER_SHAPE),
            &json!([{"name": "a"}, {"name": 7}]),
        )
        .unwrap_err();
        match err {
            SerializationError::TypeMismatch {
                member,
                expected,
                found,
            } => {
                assert_eq!(member, "users[1].name");
                assert_eq!(expected, "string");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn structures_reject_unknown_keys() {
        let err = check("user", &USER_SHAPE, &json!({"name": "a", "pwd": "x"})).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::UnknownMember { ref member, structure: "UserForCreation" } if member == "user.pwd"
        ));
    }

    #[test]
    fn structures_need_their_required_members() {
        let err = check("user", &USER_SHAPE, &json!({"comment": "c"})).unwrap_err();
        assert!(matches!(err, SerializationError::MissingRequired { ref member } if member == "user.name"));
        let err = check("user", &USER_SHAPE, &json!({"name": null})).unwrap_err();
        assert!(matches!(err, SerializationError::MissingRequired { .. }));
    }

    #[test]
    fn nested_nulls_are_rejected_outside_documents() {
        assert!(check("user", &USER_SHAPE, &json!({"name": "a", "comment": null})).is_err());
        assert!(check("tags", &ShapeType::List(&ShapeType::String), &json!(["a", null])).is_err());
        assert!(check("extra", &ShapeType::Document, &json!({"k": null})).is_ok());
    }

    #[test]
    fn members_are_written_in_declaration_order() {
        let mut fields = Fields::new();
        fields.insert("databases", json!(["db2", "db1"]));
        fields.insert("name", json!("rds_user"));
        let bytes = serialize_members(USER.members(), &fields).unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"name":"rds_user","databases":["db2","db1"]}"#
        );
    }

    #[test]
    fn nested_structures_are_written_in_declaration_order() {
        const LIST: MemberSchema =
            MemberSchema::required("users", ShapeType::List(&USER_SHAPE)).as_payload();
        let bytes =
            serialize_value(&LIST, &json!([{"comment": "c", "name": "u1"}])).unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"[{"name":"u1","comment":"c"}]"#
        );
    }

    #[test]
    fn unset_required_member_fails() {
        let err = serialize_members(USER.members(), &Fields::new()).unwrap_err();
        assert_eq!(err.to_string(), "missing required member `name`");
    }
}
