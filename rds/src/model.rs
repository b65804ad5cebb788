/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Members and structures shared by several operations.

use crate::{MemberSchema, ShapeType};

/// `X-Language` request header, eg. `en-us` or `zh-cn`.
pub const LANGUAGE: MemberSchema = MemberSchema::optional("X-Language", ShapeType::String).in_header();

/// The instance an operation acts on.
pub const INSTANCE_ID: MemberSchema = MemberSchema::required("instance_id", ShapeType::String).in_path();

/// Index of the first result to return.
pub const OFFSET: MemberSchema = MemberSchema::optional("offset", ShapeType::Integer).in_query();

/// Maximum number of results to return.
pub const LIMIT: MemberSchema = MemberSchema::optional("limit", ShapeType::Integer).in_query();

/// Asynchronous task started by the operation.
pub const JOB_ID: MemberSchema = MemberSchema::optional("job_id", ShapeType::String);

/// Workflow started by the operation. The service spells it in camel case.
pub const WORKFLOW_ID: MemberSchema = MemberSchema::optional("workflowId", ShapeType::String);

/// Result of a synchronous operation, eg. `successful`.
pub const RESP: MemberSchema = MemberSchema::optional("resp", ShapeType::String);

/// Number of matching results, for paged listings.
pub const TOTAL_COUNT: MemberSchema = MemberSchema::optional("total_count", ShapeType::Integer);

/// Number of matching results, for log listings.
pub const TOTAL_RECORD: MemberSchema = MemberSchema::optional("total_record", ShapeType::Integer);

structure! {
    /// Database engine and version.
    pub DATASTORE = "Datastore" [
        MemberSchema::required("type", ShapeType::String),
        MemberSchema::required("version", ShapeType::String),
        MemberSchema::optional("complete_version", ShapeType::String),
    ];

    /// Storage of an instance.
    pub VOLUME = "Volume" [
        MemberSchema::required("type", ShapeType::String),
        MemberSchema::required("size", ShapeType::Integer),
    ];

    /// Primary/standby setup of an instance.
    pub HA = "Ha" [
        MemberSchema::required("mode", ShapeType::String),
        MemberSchema::optional("replication_mode", ShapeType::String),
    ];

    /// Automated backup window and retention.
    pub BACKUP_STRATEGY = "BackupStrategy" [
        MemberSchema::required("start_time", ShapeType::String),
        MemberSchema::optional("keep_days", ShapeType::Integer),
    ];

    /// Billing of a yearly or monthly instance.
    pub CHARGE_INFO = "ChargeInfo" [
        MemberSchema::required("charge_mode", ShapeType::String),
        MemberSchema::optional("period_type", ShapeType::String),
        MemberSchema::optional("period_num", ShapeType::Integer),
        MemberSchema::optional("is_auto_renew", ShapeType::Boolean),
        MemberSchema::optional("is_auto_pay", ShapeType::Boolean),
    ];

    /// Resource tag.
    pub TAG = "Tag" [
        MemberSchema::required("key", ShapeType::String),
        MemberSchema::optional("value", ShapeType::String),
    ];

    /// Node of an instance.
    pub NODE = "Node" [
        MemberSchema::optional("id", ShapeType::String),
        MemberSchema::optional("name", ShapeType::String),
        MemberSchema::optional("role", ShapeType::String),
        MemberSchema::optional("status", ShapeType::String),
        MemberSchema::optional("availability_zone", ShapeType::String),
    ];

    /// Database named in a backup or grant.
    pub DATABASE_NAME = "BackupDatabase" [
        MemberSchema::required("name", ShapeType::String),
    ];
}
