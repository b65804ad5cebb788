/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Request and response schemas of the RDS v3 API.
//!
//! Operations are declarative data: each is an [`OperationSchema`] naming its HTTP binding and
//! the members of its request and response. Requests and responses are [`Envelope`]s over
//! those schemas.
//!
//! ```
//! use rds::operation::database::DELETE_DATABASE;
//! use rds::{build_request, Config, OperationInput};
//!
//! let config = Config::builder()
//!     .endpoint("https://rds.example.com")
//!     .project_id("p1")
//!     .build()
//!     .unwrap();
//! let input = OperationInput::new(&DELETE_DATABASE)
//!     .with("instance_id", "i1")
//!     .unwrap()
//!     .with("db_name", "orders")
//!     .unwrap();
//! let request = build_request(&config, &input).unwrap();
//! assert_eq!(
//!     request.uri(),
//!     "https://rds.example.com/v3/p1/instances/i1/database/orders"
//! );
//! ```

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

#[macro_use]
mod macros;

pub mod model;
pub mod operation;

pub use rds_http::operation::SERVICE_NAME;
pub use rds_http::{
    build_request, BuildError, Config, ConfigError, Envelope, OperationInput, OperationOutput,
    ParseOperationOutput, ParseStrictResponse, SdkError,
};
pub use rds_json::{DecodePolicy, JsonCodec, JsonCodecSettings, SerializationError, Value};
pub use rds_types::{
    ErrorResponse, HttpTrait, Location, MemberSchema, OperationSchema, ShapeType, StructSchema,
};
