/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Utilities for reading and writing header members

use crate::label::scalar_text;
use http::HeaderMap;
use rds_json::{SerializationError, Value};
use rds_types::{MemberSchema, ShapeType};
use std::str::FromStr;

/// Header text for a member value. Lists are comma delimited.
///
/// Returns `None` if the value has no header representation.
pub(crate) fn fmt_value(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(scalar_text)
            .collect::<Option<Vec<_>>>()
            .map(|items| items.join(",")),
        other => scalar_text(other),
    }
}

/// Reads `member` from `headers` according to its shape.
///
/// Lists are read from every header with the member's name, split on commas. Returns `Ok(None)`
/// if no such header was sent. A `Double` header that parses to a non-finite number (`NaN`,
/// `inf`) has no JSON form and fails with [`SerializationError::InvalidHeader`].
pub(crate) fn read_member(
    headers: &HeaderMap,
    member: &MemberSchema,
) -> Result<Option<Value>, SerializationError> {
    let name = member.name();
    let invalid = || SerializationError::InvalidHeader {
        member: name.to_owned(),
        expected: member.shape().name(),
    };
    if !headers.contains_key(name) {
        return Ok(None);
    }
    let value = match member.shape() {
        ShapeType::List(element) => {
            let mut items = vec![];
            for header in headers.get_all(name) {
                let mut header = header.as_bytes();
                while !header.is_empty() {
                    let (raw, next) = read_one::<String>(header).map_err(|_| invalid())?;
                    items.push(parse_scalar(element, &raw).ok_or_else(invalid)?);
                    header = next;
                }
            }
            Value::Array(items)
        }
        shape => {
            let header = headers
                .get(name)
                .and_then(|header| header.to_str().ok())
                .ok_or_else(invalid)?;
            parse_scalar(shape, header.trim()).ok_or_else(invalid)?
        }
    };
    Ok(Some(value))
}

fn parse_scalar(shape: &ShapeType, raw: &str) -> Option<Value> {
    match shape {
        ShapeType::String => Some(Value::String(raw.to_owned())),
        ShapeType::Boolean => raw.parse::<bool>().ok().map(Value::Bool),
        ShapeType::Integer => raw.parse::<i32>().ok().map(Value::from),
        ShapeType::Long => raw.parse::<i64>().ok().map(Value::from),
        ShapeType::Double => raw
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number),
        _ => None,
    }
}

#[derive(Debug)]
struct ParseError;

/// Read one comma delimited value for `FromStr` types
fn read_one<T>(s: &[u8]) -> Result<(T, &[u8]), ParseError>
where
    T: FromStr,
{
    let next_delim = s.iter().position(|b| b == &b',').unwrap_or(s.len());
    let (head, rest) = s.split_at(next_delim);
    let rest = rest.strip_prefix(b",").unwrap_or(rest);
    let head = std::str::from_utf8(head).map_err(|_| ParseError)?;
    Ok((T::from_str(head.trim()).map_err(|_| ParseError)?, rest))
}

#[cfg(test)]
mod test {
    use super::{fmt_value, read_member};
    use rds_json::SerializationError;
    use pretty_assertions::assert_eq;
    use rds_types::{MemberSchema, ShapeType};
    use serde_json::json;

    fn headers() -> http::HeaderMap {
        let response = http::Response::builder()
            .header("X-Int-Multi", "1,2")
            .header("X-Int-Multi", "3")
            .header("X-Int", "777")
            .header("X-Int-Invalid", "12ef3")
            .header("X-Bool", "true")
            .header("X-Nan", "NaN")
            .header("X-Inf", "inf")
            .header("X-Name", " rds-1, primary ")
            .body(())
            .unwrap();
        response.headers().clone()
    }

    #[test]
    fn read_lists() {
        const MULTI: MemberSchema =
            MemberSchema::optional("X-Int-Multi", ShapeType::List(&ShapeType::Integer)).in_header();
        assert_eq!(
            read_member(&headers(), &MULTI).unwrap(),
            Some(json!([1, 2, 3]))
        );
    }

    #[test]
    fn read_scalars() {
        let read = |name: &'static str, shape: ShapeType| {
            read_member(&headers(), &MemberSchema::optional(name, shape).in_header())
        };
        assert_eq!(read("X-Int", ShapeType::Integer).unwrap(), Some(json!(777)));
        assert_eq!(read("X-Int", ShapeType::Double).unwrap(), Some(json!(777.0)));
        assert_eq!(read("X-Bool", ShapeType::Boolean).unwrap(), Some(json!(true)));
        assert_eq!(
            read("X-Name", ShapeType::String).unwrap(),
            Some(json!("rds-1, primary"))
        );
        assert_eq!(read("X-Absent", ShapeType::String).unwrap(), None);
        for name in ["X-Nan", "X-Inf"] {
            assert!(matches!(
                read(name, ShapeType::Double),
                Err(SerializationError::InvalidHeader { ref member, .. }) if member == name
            ));
        }
        let err = read("X-Int-Invalid", ShapeType::Integer).unwrap_err();
        assert_eq!(
            err.to_string(),
            "header `X-Int-Invalid` could not be parsed as integer"
        );
    }

    #[test]
    fn write_values() {
        assert_eq!(fmt_value(&json!("en-us")).as_deref(), Some("en-us"));
        assert_eq!(fmt_value(&json!([1, 2])).as_deref(), Some("1,2"));
        assert_eq!(fmt_value(&json!({"a": 1})), None);
    }
}
