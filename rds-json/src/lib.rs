/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Schema-driven JSON codec for RDS request and response bodies.
//!
//! Values are held as [`serde_json::Value`]s keyed by wire name. The codec checks every value
//! against the [`ShapeType`](rds_types::ShapeType) declared for its member, writes members in
//! declaration order, and ignores keys the schema doesn't know about when reading.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

use std::collections::BTreeMap;

pub mod codec;
mod error;
mod json_errors;

pub use codec::{DecodePolicy, JsonCodec, JsonCodecSettings};
pub use error::SerializationError;
pub use json_errors::parse_error_response;
pub use serde_json::Value;

/// Member values keyed by wire name.
///
/// Presence is the presence of the key: an absent optional member has no entry, never a `null`
/// or zero placeholder.
pub type Fields = BTreeMap<&'static str, Value>;
