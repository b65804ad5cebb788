/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation metadata carried on built requests.

use std::borrow::Cow;

/// Service name recorded in every request's [`Metadata`].
pub const SERVICE_NAME: &str = "RDS";

/// Identifies the operation a request was built for.
///
/// [`build_request`](crate::request::build_request) stores one in the request's extensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    /// Name of the operation, eg. `CreateDatabase`.
    pub fn name(&self) -> &str {
        &self.operation
    }

    /// Name of the service, eg. `RDS`.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Creates metadata for `operation` of `service`.
    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}
