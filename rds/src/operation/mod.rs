/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Every RDS operation, grouped by API area.
//!
//! Each module declares its operations as `OperationSchema` constants and lists them in an
//! `OPERATIONS` slice.

use crate::OperationSchema;

pub mod backup;
pub mod configuration;
pub mod database;
pub mod instance;
pub mod log;
pub mod postgresql;
pub mod sqlserver;
pub mod version;

const GROUPS: &[&[&OperationSchema]] = &[
    instance::OPERATIONS,
    database::OPERATIONS,
    backup::OPERATIONS,
    configuration::OPERATIONS,
    log::OPERATIONS,
    postgresql::OPERATIONS,
    sqlserver::OPERATIONS,
    version::OPERATIONS,
];

/// Iterates over every operation.
pub fn all() -> impl Iterator<Item = &'static OperationSchema> {
    GROUPS.iter().flat_map(|group| group.iter().copied())
}

/// Looks up an operation by name, eg. `CreateDatabase`.
pub fn find(name: &str) -> Option<&'static OperationSchema> {
    all().find(|operation| operation.name() == name)
}
