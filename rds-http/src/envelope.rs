/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The generic operation envelope.
//!
//! Every RDS operation's request and response is an [`Envelope`] over the operation's
//! [`OperationSchema`]. Members are checked against the schema when they are set, so a
//! serialized envelope only fails if a required member was never set.

use rds_json::{Fields, JsonCodec, SerializationError, Value};
use rds_types::{MemberSchema, OperationSchema, StructSchema};
use std::fmt;

mod private {
    pub trait Sealed {}
    impl Sealed for super::Input {}
    impl Sealed for super::Output {}
}

/// Which half of an operation an envelope holds.
pub trait Direction: private::Sealed + fmt::Debug + Clone + PartialEq + 'static {
    /// Out-of-band state carried beside the members.
    #[doc(hidden)]
    type State: fmt::Debug + Clone + Default + PartialEq + Send + Sync;

    /// The operation's structure for this direction.
    #[doc(hidden)]
    fn schema(operation: &'static OperationSchema) -> &'static StructSchema;
}

/// Request direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input;

/// Response direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output;

impl Direction for Input {
    type State = ();

    fn schema(operation: &'static OperationSchema) -> &'static StructSchema {
        operation.input()
    }
}

impl Direction for Output {
    type State = u16;

    fn schema(operation: &'static OperationSchema) -> &'static StructSchema {
        operation.output()
    }
}

/// Request of an operation.
pub type OperationInput = Envelope<Input>;

/// Response of an operation.
pub type OperationOutput = Envelope<Output>;

/// Set members of one request or response.
///
/// An unset member has no entry: setting `null` unsets it, and a `null` on the wire
/// deserializes as unset.
///
/// # Examples
///
/// ```
/// use rds_http::envelope::OperationInput;
/// use rds_types::{HttpTrait, MemberSchema, OperationSchema, ShapeType, StructSchema};
///
/// const DELETE: OperationSchema = {
///     const INPUT: &[MemberSchema] =
///         &[MemberSchema::required("instance_id", ShapeType::String).in_path()];
///     const OUTPUT: &[MemberSchema] = &[MemberSchema::optional("job_id", ShapeType::String)];
///     OperationSchema::new(
///         "DeleteInstance",
///         HttpTrait::new("DELETE", "/v3/{project_id}/instances/{instance_id}"),
///         StructSchema::new("DeleteInstanceRequest", INPUT),
///         StructSchema::new("DeleteInstanceResponse", OUTPUT),
///     )
/// };
/// static OPERATION: OperationSchema = DELETE;
///
/// let request = OperationInput::new(&OPERATION)
///     .with("instance_id", "abc123")
///     .unwrap();
/// assert_eq!(request.to_json().unwrap(), br#"{"instance_id":"abc123"}"#);
/// assert_eq!(
///     request.to_string(),
///     r#"DeleteInstanceRequest {"instance_id":"abc123"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<D: Direction> {
    operation: &'static OperationSchema,
    fields: Fields,
    state: D::State,
}

impl<D: Direction> Envelope<D> {
    /// Creates an envelope with no members set.
    pub fn new(operation: &'static OperationSchema) -> Self {
        Envelope {
            operation,
            fields: Fields::new(),
            state: Default::default(),
        }
    }

    /// The operation this envelope belongs to.
    pub fn operation(&self) -> &'static OperationSchema {
        self.operation
    }

    /// The structure whose members this envelope holds.
    pub fn schema(&self) -> &'static StructSchema {
        D::schema(self.operation)
    }

    /// Type label, eg. `CreateDatabaseRequest`.
    pub fn label(&self) -> &'static str {
        self.schema().name()
    }

    /// Sets member `name` to `value`, or unsets it if `value` is `null`.
    ///
    /// Fails if `name` isn't a member or `value` doesn't conform to the member's shape. The
    /// envelope is unchanged on failure.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), SerializationError> {
        let member = self.member(name)?;
        let value = value.into();
        if value.is_null() {
            self.fields.remove(member.name());
            return Ok(());
        }
        JsonCodec::default().check(member, &value)?;
        self.fields.insert(member.name(), value);
        Ok(())
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self, SerializationError> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Value of member `name`, if set.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Value of member `name`, if set to a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Whether member `name` is set.
    pub fn is_set(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Unsets member `name`, returning its previous value.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// Set members, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static MemberSchema, &Value)> + '_ {
        self.schema()
            .members()
            .iter()
            .filter_map(|member| self.fields.get(member.name()).map(|value| (member, value)))
    }

    pub(crate) fn raw_fields(&self) -> &Fields {
        &self.fields
    }

    /// Serializes every set member as one JSON object, in schema order.
    pub fn to_json(&self) -> Result<Vec<u8>, SerializationError> {
        JsonCodec::default().serialize(self.schema().members(), &self.fields)
    }

    /// Deserializes a JSON object with the default [`JsonCodec`].
    pub fn from_json(
        operation: &'static OperationSchema,
        input: &[u8],
    ) -> Result<Self, SerializationError> {
        Self::from_json_with(operation, input, &JsonCodec::default())
    }

    /// Deserializes a JSON object with `codec`.
    pub fn from_json_with(
        operation: &'static OperationSchema,
        input: &[u8],
        codec: &JsonCodec,
    ) -> Result<Self, SerializationError> {
        let mut envelope = Self::new(operation);
        envelope.fields = codec.deserialize(envelope.schema().members(), input)?;
        Ok(envelope)
    }

    /// Label followed by the serialized members, eg. `ListDatabasesRequest {"page":1}`.
    ///
    /// Falls back to `<Label> struct{}` if the envelope can't be serialized.
    pub fn describe(&self) -> String {
        match self.to_json() {
            Ok(json) => format!("{} {}", self.label(), String::from_utf8_lossy(&json)),
            Err(_) => format!("{} struct{{}}", self.label()),
        }
    }

    pub(crate) fn insert(&mut self, member: &'static MemberSchema, value: Value) {
        self.fields.insert(member.name(), value);
    }

    pub(crate) fn extend(&mut self, fields: Fields) {
        self.fields.extend(fields);
    }

    fn member(&self, name: &str) -> Result<&'static MemberSchema, SerializationError> {
        let schema = self.schema();
        schema
            .member(name)
            .ok_or_else(|| SerializationError::UnknownMember {
                member: name.to_owned(),
                structure: schema.name(),
            })
    }
}

impl Envelope<Output> {
    /// HTTP status code of the exchange. Zero until the transport sets it.
    pub fn status_code(&self) -> u16 {
        self.state
    }

    /// Records the HTTP status code. It is never serialized.
    pub fn set_status_code(&mut self, status_code: u16) {
        self.state = status_code;
    }
}

impl<D: Direction> fmt::Display for Envelope<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rds_types::{HttpTrait, ShapeType};
    use serde_json::json;

    const USER: StructSchema = {
        const MEMBERS: &[MemberSchema] = &[
            MemberSchema::required("name", ShapeType::String),
            MemberSchema::required("password", ShapeType::String),
            MemberSchema::optional("comment", ShapeType::String),
        ];
        StructSchema::new("UserForCreation", MEMBERS)
    };

    static CREATE_USER: OperationSchema = {
        const INPUT: &[MemberSchema] = &[
            MemberSchema::optional("X-Language", ShapeType::String).in_header(),
            MemberSchema::required("instance_id", ShapeType::String).in_path(),
            MemberSchema::required("body", ShapeType::Structure(&USER)).as_payload(),
        ];
        const OUTPUT: &[MemberSchema] = &[MemberSchema::optional("resp", ShapeType::String)];
        OperationSchema::new(
            "CreateDbUser",
            HttpTrait::new("POST", "/v3/{project_id}/instances/{instance_id}/db_user"),
            StructSchema::new("CreateDbUserRequest", INPUT),
            StructSchema::new("CreateDbUserResponse", OUTPUT),
        )
    };

    #[test]
    fn set_checks_the_schema() {
        let mut request = OperationInput::new(&CREATE_USER);
        let err = request.set("db_name", "x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "`db_name` is not a member of CreateDbUserRequest"
        );
        assert!(request.set("instance_id", 5).is_err());
        assert!(request
            .set("body", json!({"name": "u1", "password": "p", "host": "%"}))
            .is_err());
        assert!(request.fields().next().is_none());
    }

    #[test]
    fn null_unsets() {
        let mut request = OperationInput::new(&CREATE_USER)
            .with("X-Language", "en-us")
            .unwrap();
        assert!(request.is_set("X-Language"));
        request.set("X-Language", Value::Null).unwrap();
        assert!(!request.is_set("X-Language"));
        assert_eq!(request.unset("X-Language"), None);
    }

    #[test]
    fn fields_are_in_schema_order() {
        let request = OperationInput::new(&CREATE_USER)
            .with("body", json!({"name": "u1", "password": "p"}))
            .unwrap()
            .with("instance_id", "i1")
            .unwrap();
        let names: Vec<_> = request.fields().map(|(member, _)| member.name()).collect();
        assert_eq!(names, vec!["instance_id", "body"]);
        assert_eq!(request.get_str("instance_id"), Some("i1"));
        assert_eq!(request.get_str("body"), None);
    }

    #[test]
    fn describe_falls_back_when_unserializable() {
        let request = OperationInput::new(&CREATE_USER)
            .with("instance_id", "i1")
            .unwrap();
        assert_eq!(request.describe(), "CreateDbUserRequest struct{}");
        assert!(request.describe().contains("CreateDbUser"));
    }

    #[test]
    fn status_code_is_out_of_band() {
        let mut response = OperationOutput::from_json(&CREATE_USER, br#"{"resp":"successful"}"#)
            .unwrap();
        assert_eq!(response.status_code(), 0);
        response.set_status_code(202);
        assert_eq!(response.status_code(), 202);
        assert_eq!(response.to_json().unwrap(), br#"{"resp":"successful"}"#);
        assert_eq!(
            response.to_string(),
            r#"CreateDbUserResponse {"resp":"successful"}"#
        );
    }

    #[test]
    fn equality_includes_status_code() {
        let a = OperationOutput::from_json(&CREATE_USER, br#"{"resp":"ok"}"#).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set_status_code(200);
        assert_ne!(a, b);
    }

    #[test]
    fn requests_and_responses_have_separate_schemas() {
        let request = OperationInput::new(&CREATE_USER);
        let response = OperationOutput::new(&CREATE_USER);
        assert_eq!(request.label(), "CreateDbUserRequest");
        assert_eq!(response.label(), "CreateDbUserResponse");
        assert!(response.schema().member("instance_id").is_none());
    }
}
