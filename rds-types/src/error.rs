/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Error envelope returned by the service

use std::collections::HashMap;
use std::fmt;

/// Key under which the request ID of a failed call is recorded.
pub const REQUEST_ID: &str = "request_id";

/// Error envelope of a failed call.
///
/// RDS reports failures as an `error_code` / `error_msg` pair next to the HTTP status code. The
/// envelope is carried separately from the operation's response type so that callers can inspect
/// it without every response declaring the two members.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct ErrorResponse {
    code: Option<String>,
    message: Option<String>,
    extras: Option<HashMap<&'static str, String>>,
}

/// Builder for [`ErrorResponse`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: ErrorResponse,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request ID.
    pub fn request_id(self, request_id: impl Into<String>) -> Self {
        self.custom(REQUEST_ID, request_id)
    }

    /// Set a custom field on the error envelope
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner
            .extras
            .get_or_insert_with(HashMap::new)
            .insert(key, value.into());
        self
    }

    /// Creates the error envelope.
    pub fn build(self) -> ErrorResponse {
        self.inner
    }
}

impl ErrorResponse {
    /// Returns the error code, eg. `DBS.280238`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request ID if the service sent one.
    pub fn request_id(&self) -> Option<&str> {
        self.extra(REQUEST_ID)
    }

    /// Returns additional information about the error if it's present.
    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras
            .as_ref()
            .and_then(|extras| extras.get(key).map(|k| k.as_str()))
    }

    /// Creates an `ErrorResponse` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `ErrorResponse` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("ErrorResponse");
        if let Some(code) = &self.code {
            fmt.field("error_code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("error_msg", message);
        }
        if let Some(extras) = &self.extras {
            let mut extras: Vec<_> = extras.iter().collect();
            extras.sort();
            for (k, v) in extras {
                fmt.field(k, &v);
            }
        }
        fmt.finish()
    }
}

impl std::error::Error for ErrorResponse {}
