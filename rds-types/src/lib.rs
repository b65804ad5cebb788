/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Runtime schema types for the RDS API bindings.
//!
//! Every request and response of the RDS API is described by an [`OperationSchema`]: the
//! operation's name, its HTTP binding, and one [`StructSchema`] for each direction. The schemas
//! are plain `const` data so that a whole service can be declared as a table and shared by
//! reference for the lifetime of the program.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

pub mod error;
mod schema;
mod shape;

pub use error::ErrorResponse;
pub use schema::{HttpTrait, Location, MemberSchema, OperationSchema, StructSchema};
pub use shape::ShapeType;
