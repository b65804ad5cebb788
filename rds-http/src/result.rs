/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors returned by request construction and response parsing.

use http::StatusCode;
use rds_types::ErrorResponse;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Failure of an RDS call, as seen by the code on either side of the transport.
#[derive(Debug)]
#[non_exhaustive]
pub enum SdkError {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// A response was received but it could not be parsed against the operation's schema.
    ResponseError {
        /// Status code of the response
        status: StatusCode,
        /// Why the body or headers could not be read
        source: BoxError,
    },

    /// The service answered with a non-2xx status.
    ServiceError {
        /// Status code of the response
        status: StatusCode,
        /// Error envelope, if the body carried one
        error: Option<ErrorResponse>,
    },
}

impl SdkError {
    /// Status code of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SdkError::ConstructionFailure(_) => None,
            SdkError::ResponseError { status, .. } | SdkError::ServiceError { status, .. } => {
                Some(*status)
            }
        }
    }

    /// The service's error envelope, if this is a service error that carried one.
    pub fn service_error(&self) -> Option<&ErrorResponse> {
        match self {
            SdkError::ServiceError { error, .. } => error.as_ref(),
            _ => None,
        }
    }
}

impl Display for SdkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(_) => write!(f, "failed to construct request"),
            SdkError::ResponseError { status, .. } => {
                write!(f, "failed to parse response (status {})", status.as_u16())
            }
            SdkError::ServiceError {
                status,
                error: Some(error),
            } => write!(f, "service error (status {}): {}", status.as_u16(), error),
            SdkError::ServiceError {
                status,
                error: None,
            } => write!(f, "service error (status {})", status.as_u16()),
        }
    }
}

impl Error for SdkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err) | SdkError::ResponseError { source: err, .. } => {
                Some(err.as_ref())
            }
            SdkError::ServiceError { error, .. } => {
                error.as_ref().map(|err| err as &(dyn Error + 'static))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::SdkError;
    use http::StatusCode;
    use rds_types::ErrorResponse;
    use std::error::Error;

    #[test]
    fn service_error_display() {
        let err = SdkError::ServiceError {
            status: StatusCode::BAD_REQUEST,
            error: Some(ErrorResponse::builder().code("DBS.200823").build()),
        };
        assert_eq!(
            err.to_string(),
            r#"service error (status 400): ErrorResponse { error_code: "DBS.200823" }"#
        );
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.service_error().and_then(|e| e.code()), Some("DBS.200823"));
        assert!(err.source().is_some());
    }

    #[test]
    fn construction_failure_has_no_status() {
        let err = SdkError::ConstructionFailure("no endpoint".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("no endpoint"));
    }
}
