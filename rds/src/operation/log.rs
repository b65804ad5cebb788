/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Slow query, error and audit logs.

use crate::model::{INSTANCE_ID, LANGUAGE, LIMIT, OFFSET, RESP, TOTAL_RECORD};
use crate::{MemberSchema, ShapeType};

const START_DATE: MemberSchema = MemberSchema::required("start_date", ShapeType::String).in_query();
const END_DATE: MemberSchema = MemberSchema::required("end_date", ShapeType::String).in_query();

structure! {
    /// Slow query log entry.
    pub SLOW_LOG = "SlowLogList" [
        MemberSchema::required("count", ShapeType::String),
        MemberSchema::required("time", ShapeType::String),
        MemberSchema::required("lock_time", ShapeType::String),
        MemberSchema::required("rows_sent", ShapeType::String),
        MemberSchema::required("rows_examined", ShapeType::String),
        MemberSchema::required("database", ShapeType::String),
        MemberSchema::required("users", ShapeType::String),
        MemberSchema::required("query_sample", ShapeType::String),
        MemberSchema::required("type", ShapeType::String),
        MemberSchema::required("start_time", ShapeType::String),
        MemberSchema::optional("client_ip", ShapeType::String),
    ];

    /// Error log entry.
    pub ERROR_LOG = "ErrorLog" [
        MemberSchema::required("time", ShapeType::String),
        MemberSchema::required("level", ShapeType::String),
        MemberSchema::required("content", ShapeType::String),
    ];

    /// Audit log file.
    pub AUDITLOG = "Auditlog" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("size", ShapeType::Double),
        MemberSchema::required("begin_time", ShapeType::String),
        MemberSchema::required("end_time", ShapeType::String),
    ];

    /// Download link of a slow query log file.
    pub SLOWLOG_LINK = "SlowlogDownloadInfo" [
        MemberSchema::required("node_id", ShapeType::String),
        MemberSchema::required("status", ShapeType::String),
        MemberSchema::required("file_name", ShapeType::String),
        MemberSchema::required("file_size", ShapeType::String),
        MemberSchema::required("file_link", ShapeType::String),
        MemberSchema::required("update_at", ShapeType::Long),
    ];
}

operations! {
    /// Lists slow query log entries.
    LIST_SLOW_LOGS = ListSlowLogs(GET "/v3/{project_id}/instances/{instance_id}/slowlog") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            START_DATE,
            END_DATE,
            OFFSET,
            LIMIT,
            MemberSchema::optional("type", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::required("slow_log_list", ShapeType::List(&ShapeType::Structure(&SLOW_LOG))),
            MemberSchema::required("total_record", ShapeType::Integer),
        ],
    }

    /// Lists error log entries.
    LIST_ERROR_LOGS = ListErrorLogs(GET "/v3/{project_id}/instances/{instance_id}/errorlog") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            START_DATE,
            END_DATE,
            OFFSET,
            LIMIT,
            MemberSchema::optional("level", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::optional("error_log_list", ShapeType::List(&ShapeType::Structure(&ERROR_LOG))),
            TOTAL_RECORD,
        ],
    }

    /// Lists audit log files.
    LIST_AUDITLOGS = ListAuditlogs(GET "/v3/{project_id}/instances/{instance_id}/auditlog") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("start_time", ShapeType::String).in_query(),
            MemberSchema::required("end_time", ShapeType::String).in_query(),
            MemberSchema::required("offset", ShapeType::Integer).in_query(),
            MemberSchema::required("limit", ShapeType::Integer).in_query(),
        ],
        output: [
            MemberSchema::optional("auditlogs", ShapeType::List(&ShapeType::Structure(&AUDITLOG))),
            TOTAL_RECORD,
        ],
    }

    /// Shows the audit log policy.
    SHOW_AUDITLOG_POLICY = ShowAuditlogPolicy(GET "/v3/{project_id}/instances/{instance_id}/auditlog-policy") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [
            MemberSchema::optional("keep_days", ShapeType::Integer),
            MemberSchema::optional("audit_types", ShapeType::List(&ShapeType::String)),
        ],
    }

    /// Sets the audit log policy. A retention of zero disables auditing.
    SET_AUDITLOG_POLICY = SetAuditlogPolicy(PUT "/v3/{project_id}/instances/{instance_id}/auditlog-policy") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("keep_days", ShapeType::Integer),
            MemberSchema::optional("reserve_auditlogs", ShapeType::Boolean),
            MemberSchema::optional("audit_types", ShapeType::List(&ShapeType::String)),
        ],
        output: [],
    }

    /// Shows how long binlogs are kept.
    SHOW_BINLOG_CLEAR_POLICY = ShowBinlogClearPolicy(GET "/v3/{project_id}/instances/{instance_id}/binlog/clear-policy") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [
            MemberSchema::optional("instance_id", ShapeType::String),
            MemberSchema::optional("binlog_retention_hours", ShapeType::Long),
            MemberSchema::optional("binlog_clear_type", ShapeType::String),
        ],
    }

    /// Sets how long binlogs are kept.
    SET_BINLOG_CLEAR_POLICY = SetBinlogClearPolicy(PUT "/v3/{project_id}/instances/{instance_id}/binlog/clear-policy") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("binlog_retention_hours", ShapeType::Long),
        ],
        output: [RESP],
    }

    /// Requests download links for slow query log files.
    DOWNLOAD_SLOWLOG = DownloadSlowlog(POST "/v3/{project_id}/instances/{instance_id}/slowlog-download") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::optional("file_name_list", ShapeType::List(&ShapeType::String)),
        ],
        output: [
            MemberSchema::optional("list", ShapeType::List(&ShapeType::Structure(&SLOWLOG_LINK))),
            MemberSchema::optional("status", ShapeType::String),
            MemberSchema::optional("count", ShapeType::Integer),
        ],
    }
}
