/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use rds_types::error::{Builder as ErrorBuilder, ErrorResponse};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct WireError {
    error_code: Option<Value>,
    error_msg: Option<Value>,
    request_id: Option<Value>,
    error: Option<Value>,
}

/// Text of a string or number field. Anything else reads as absent.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parses the error envelope out of a failed response body.
///
/// Both `{"error_code": .., "error_msg": ..}` and the gateway's `{"error": {"code": .., "message": ..}}`
/// are understood. A string `error` is read as the message. Fields of an unexpected type are
/// ignored rather than failing the whole envelope. Returns `None` if the body isn't a JSON object
/// carrying either a code or a message.
pub fn parse_error_response(body: &[u8]) -> Option<ErrorBuilder> {
    let wire: WireError = serde_json::from_slice(body).ok()?;
    let (nested_code, nested_message) = match &wire.error {
        Some(nested @ Value::Object(_)) => (text(nested.get("code")), text(nested.get("message"))),
        Some(Value::String(message)) => (None, Some(message.clone())),
        _ => (None, None),
    };
    let code = text(wire.error_code.as_ref()).or(nested_code);
    let message = text(wire.error_msg.as_ref()).or(nested_message);
    if code.is_none() && message.is_none() {
        return None;
    }
    let mut builder = ErrorResponse::builder();
    if let Some(code) = code {
        builder = builder.code(code);
    }
    if let Some(message) = message {
        builder = builder.message(message);
    }
    if let Some(request_id) = text(wire.request_id.as_ref()) {
        builder = builder.request_id(request_id);
    }
    Some(builder)
}
