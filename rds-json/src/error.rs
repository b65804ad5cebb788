/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde_json::Value;

/// A payload could not be encoded or decoded against its declared schema.
///
/// Member paths are dotted from the top-level member, eg. `body.users[1].name`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SerializationError {
    /// A required member was not set.
    #[error("missing required member `{member}`")]
    MissingRequired {
        /// Path of the member
        member: String,
    },

    /// A value does not have the member's declared shape.
    #[error("member `{member}` expected {expected}, found {found}")]
    TypeMismatch {
        /// Path of the member
        member: String,
        /// Name of the declared shape
        expected: &'static str,
        /// Kind of the value that was found
        found: &'static str,
    },

    /// A member name is not declared by the structure.
    #[error("`{member}` is not a member of {structure}")]
    UnknownMember {
        /// Path of the member
        member: String,
        /// Name of the structure
        structure: &'static str,
    },

    /// The top level of a body was not a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// Kind of the value that was found
        found: &'static str,
    },

    /// A header value could not be read as the member's shape.
    #[error("header `{member}` could not be parsed as {expected}")]
    InvalidHeader {
        /// Name of the header
        member: String,
        /// Name of the declared shape
        expected: &'static str,
    },

    /// JSON could not be written.
    #[error("failed to encode JSON")]
    Encode(#[source] serde_json::Error),

    /// Bytes were not valid JSON.
    #[error("malformed JSON")]
    Decode(#[source] serde_json::Error),
}

impl SerializationError {
    pub(crate) fn missing(member: impl Into<String>) -> Self {
        Self::MissingRequired {
            member: member.into(),
        }
    }

    pub(crate) fn mismatch(member: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            member: member.into(),
            expected,
            found: kind(found),
        }
    }
}

/// JSON kind of a value, for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
