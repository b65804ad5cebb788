/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Parsing HTTP responses into output envelopes

use crate::config::Config;
use crate::envelope::OperationOutput;
use crate::header;
use crate::result::SdkError;
use bytes::Bytes;
use http::Response;
use rds_json::{parse_error_response, JsonCodec, SerializationError};
use rds_types::{ErrorResponse, Location, OperationSchema};

/// Header carrying the ID the service assigned to the request.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Parses a fully loaded response.
///
/// RDS responses are small JSON documents, so the body is always read to the end before
/// parsing.
pub trait ParseStrictResponse {
    /// Result of parsing, typically `Result<_, SdkError>`.
    type Output;

    /// Parses `response`.
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

/// Parses the response of one operation into an [`OperationOutput`].
///
/// 2xx responses are decoded against the operation's output schema and carry the status code.
/// Any other status becomes [`SdkError::ServiceError`].
#[derive(Debug, Clone)]
pub struct ParseOperationOutput {
    operation: &'static OperationSchema,
    codec: JsonCodec,
}

impl ParseOperationOutput {
    /// Creates a parser using the default codec.
    pub fn new(operation: &'static OperationSchema) -> Self {
        Self {
            operation,
            codec: JsonCodec::default(),
        }
    }

    /// Creates a parser using the codec of `config`.
    pub fn from_config(config: &Config, operation: &'static OperationSchema) -> Self {
        Self {
            operation,
            codec: config.codec().clone(),
        }
    }

    fn parse_success(
        &self,
        response: &Response<Bytes>,
    ) -> Result<OperationOutput, SerializationError> {
        let mut output = OperationOutput::new(self.operation);
        let schema = output.schema();
        let body = response.body();
        match schema.payload() {
            Some(member) => {
                if let Some(value) = self.codec.deserialize_payload(member, body)? {
                    output.insert(member, value);
                }
            }
            None => {
                let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
                    b"{}"
                } else {
                    body
                };
                output.extend(self.codec.deserialize(schema.located(Location::Body), body)?);
            }
        }
        for member in schema.located(Location::Header) {
            if let Some(value) = header::read_member(response.headers(), member)? {
                output.insert(member, value);
            }
        }
        output.set_status_code(response.status().as_u16());
        Ok(output)
    }

    fn parse_error(&self, response: &Response<Bytes>) -> Option<ErrorResponse> {
        let error = parse_error_response(response.body())?.build();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok());
        Some(match request_id {
            Some(request_id) if error.request_id().is_none() => {
                error.into_builder().request_id(request_id).build()
            }
            _ => error,
        })
    }
}

impl ParseStrictResponse for ParseOperationOutput {
    type Output = Result<OperationOutput, SdkError>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        let status = response.status();
        if !status.is_success() {
            let error = self.parse_error(response);
            tracing::debug!(
                operation = self.operation.name(),
                status = status.as_u16(),
                error = ?error,
                "service returned an error"
            );
            return Err(SdkError::ServiceError { status, error });
        }
        let output = self
            .parse_success(response)
            .map_err(|err| SdkError::ResponseError {
                status,
                source: err.into(),
            })?;
        tracing::trace!(
            operation = self.operation.name(),
            status = status.as_u16(),
            "parsed response"
        );
        Ok(output)
    }
}
