/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Formatting values as URI path labels

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;

/// Characters percent-encoded in path labels and query strings.
pub(crate) const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

/// Percent-encodes `s` for use as a single path segment.
pub fn fmt_string<T: AsRef<str>>(s: T) -> String {
    utf8_percent_encode(s.as_ref(), BASE_SET).to_string()
}

/// Text of a scalar value as it appears in a path, query string or header, before encoding.
///
/// Returns `None` for `null`s, arrays and objects.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod test {
    use super::{fmt_string, scalar_text};
    use serde_json::json;

    #[test]
    fn scalars_as_text() {
        assert_eq!(scalar_text(&json!("zh-cn")).as_deref(), Some("zh-cn"));
        assert_eq!(scalar_text(&json!(10)).as_deref(), Some("10"));
        assert_eq!(scalar_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(scalar_text(&json!(["a"])), None);
        assert_eq!(scalar_text(&json!(null)), None);
    }

    #[test]
    fn slashes_are_encoded() {
        assert_eq!(fmt_string("a/b c"), "a%2Fb%20c");
        assert_eq!(fmt_string("0a1b2c3d4e5fin01"), "0a1b2c3d4e5fin01");
        assert_eq!(fmt_string("数据库"), "%E6%95%B0%E6%8D%AE%E5%BA%93");
    }
}
