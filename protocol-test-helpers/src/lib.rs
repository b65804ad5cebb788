/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Checks over HTTP requests built for RDS operations.
//!
//! Every check returns a [`RequestCheckFailure`] describing the first mismatch, so that tests can
//! report it with [`assert_ok`].

use assert_json_diff::{assert_json_matches_no_panic, CompareMode, Config};
use http::{Request, Uri};
use std::collections::HashSet;
use thiserror::Error;

/// First difference between a request and what was expected of it.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RequestCheckFailure {
    /// The path differs.
    #[error("path mismatch: expected `{expected}`, found `{found}`")]
    PathMismatch {
        /// Expected path
        expected: String,
        /// Actual path
        found: String,
    },
    /// An expected `key=value` pair is missing.
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        /// Expected pair
        expected: String,
        /// Pairs that were sent
        found: Vec<String>,
    },
    /// A key that must not be sent was sent.
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam {
        /// Forbidden key
        expected: String,
    },
    /// A key that must be sent wasn't.
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam {
        /// Required key
        expected: String,
    },
    /// A header has the wrong value.
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        /// Header name
        key: String,
        /// Expected value
        expected: String,
        /// Values that were sent, comma delimited
        found: String,
    },
    /// A header that must be sent wasn't.
    #[error("missing required header: `{expected}`")]
    MissingHeader {
        /// Header name
        expected: String,
    },
    /// A header that must not be sent was sent.
    #[error("forbidden header present: `{forbidden}`")]
    ForbiddenHeader {
        /// Header name
        forbidden: String,
    },
    /// The body isn't the expected JSON.
    #[error("body mismatch: {comparison}\nexpected: {expected}\nfound: {found}")]
    BodyMismatch {
        /// Differences found by the JSON comparison
        comparison: String,
        /// Expected body
        expected: String,
        /// Actual body
        found: String,
    },
    /// The body was expected to be empty.
    #[error("expected an empty body, found `{found}`")]
    UnexpectedBody {
        /// Actual body
        found: String,
    },
}

/// Panics with the failure's message if a check failed.
#[track_caller]
pub fn assert_ok(inp: Result<(), RequestCheckFailure>) {
    if let Err(e) = inp {
        panic!("request check failed: {}", e);
    }
}

#[derive(Eq, PartialEq, Hash)]
struct QueryParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> QueryParam<'a> {
    fn parse(s: &'a str) -> Self {
        match s.split_once('=') {
            Some((key, value)) => QueryParam {
                key,
                value: Some(value),
            },
            None => QueryParam {
                key: s,
                value: None,
            },
        }
    }
}

fn extract_params(uri: &Uri) -> Vec<&str> {
    uri.query()
        .unwrap_or_default()
        .split('&')
        .filter(|param| !param.is_empty())
        .collect()
}

fn extract_keys(uri: &Uri) -> HashSet<&str> {
    extract_params(uri)
        .into_iter()
        .map(|param| QueryParam::parse(param).key)
        .collect()
}

/// Checks the path of the request, label encoding included.
pub fn validate_path<B>(request: &Request<B>, expected: &str) -> Result<(), RequestCheckFailure> {
    let found = request.uri().path();
    if found != expected {
        return Err(RequestCheckFailure::PathMismatch {
            expected: expected.to_owned(),
            found: found.to_owned(),
        });
    }
    Ok(())
}

/// Checks that every `key=value` pair of `expected_params` is in the query string, as encoded.
pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), RequestCheckFailure> {
    let actual_params = extract_params(request.uri());
    for param in expected_params {
        if !actual_params.contains(param) {
            return Err(RequestCheckFailure::MissingQueryParam {
                expected: param.to_string(),
                found: actual_params.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}

/// Checks that none of `forbid_keys` is in the query string.
pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), RequestCheckFailure> {
    let actual_keys = extract_keys(request.uri());
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(RequestCheckFailure::ForbiddenQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks that every key of `require_keys` is in the query string.
pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), RequestCheckFailure> {
    let actual_keys = extract_keys(request.uri());
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(RequestCheckFailure::RequiredQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks header values. Repeated headers are compared comma delimited.
pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), RequestCheckFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(RequestCheckFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(RequestCheckFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

/// Checks that none of `forbidden_headers` was sent.
pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), RequestCheckFailure> {
    for key in forbidden_headers {
        if request.headers().contains_key(*key) {
            return Err(RequestCheckFailure::ForbiddenHeader {
                forbidden: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks that the body is the same JSON document as `expected`, ignoring key order and
/// whitespace.
pub fn validate_body<B: AsRef<[u8]>>(
    request: &Request<B>,
    expected: &str,
) -> Result<(), RequestCheckFailure> {
    let found = String::from_utf8_lossy(request.body().as_ref()).into_owned();
    let mismatch = |comparison: String| RequestCheckFailure::BodyMismatch {
        comparison,
        expected: expected.to_owned(),
        found: found.clone(),
    };
    let expected_json: serde_json::Value = serde_json::from_str(expected)
        .map_err(|err| mismatch(format!("expected body is not JSON: {}", err)))?;
    let found_json: serde_json::Value = serde_json::from_str(&found)
        .map_err(|err| mismatch(format!("body is not JSON: {}", err)))?;
    assert_json_matches_no_panic(
        &found_json,
        &expected_json,
        Config::new(CompareMode::Strict),
    )
    .map_err(mismatch)
}

/// Checks that the request has no body.
pub fn validate_empty_body<B: AsRef<[u8]>>(
    request: &Request<B>,
) -> Result<(), RequestCheckFailure> {
    let body = request.body().as_ref();
    if !body.is_empty() {
        return Err(RequestCheckFailure::UnexpectedBody {
            found: String::from_utf8_lossy(body).into_owned(),
        });
    }
    Ok(())
}
