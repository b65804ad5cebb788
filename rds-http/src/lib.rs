/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation envelopes for the RDS API and their HTTP bindings.
//!
//! An [`OperationInput`] is turned into an `http::Request<Bytes>` by
//! [`build_request`](request::build_request). Sending it is left to the caller. The received
//! `http::Response<Bytes>` is turned into an [`OperationOutput`] or an [`SdkError`] by
//! [`ParseOperationOutput`](response::ParseOperationOutput).

#![warn(missing_docs, rustdoc::missing_crate_level_docs, rust_2018_idioms)]

pub mod config;
pub mod envelope;
mod header;
pub mod label;
pub mod operation;
pub mod query;
pub mod request;
pub mod response;
pub mod result;

pub use config::{Config, ConfigError};
pub use envelope::{Envelope, OperationInput, OperationOutput};
pub use request::{build_request, BuildError};
pub use response::{ParseOperationOutput, ParseStrictResponse};
pub use result::SdkError;
