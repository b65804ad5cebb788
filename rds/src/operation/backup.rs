/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Backups, backup policies and restoration.

use super::instance::CREATED_INSTANCE;
use crate::model::{
    BACKUP_STRATEGY, CHARGE_INFO, DATABASE_NAME, DATASTORE, HA, INSTANCE_ID, JOB_ID, LANGUAGE,
    LIMIT, OFFSET, TAG, TOTAL_COUNT, VOLUME,
};
use crate::{MemberSchema, ShapeType};

structure! {
    /// Body of `CreateManualBackup`.
    pub CREATE_MANUAL_BACKUP_REQUEST = "CreateManualBackupRequestBody" [
        MemberSchema::required("instance_id", ShapeType::String),
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("description", ShapeType::String),
        MemberSchema::optional("databases", ShapeType::List(&ShapeType::Structure(&DATABASE_NAME))),
    ];

    /// Backup as returned by `CreateManualBackup`.
    pub CREATED_BACKUP = "CreateManualBackupResponseBodyBackup" [
        MemberSchema::optional("id", ShapeType::String),
        MemberSchema::optional("instance_id", ShapeType::String),
        MemberSchema::optional("name", ShapeType::String),
        MemberSchema::optional("description", ShapeType::String),
        MemberSchema::optional("databases", ShapeType::List(&ShapeType::Structure(&DATABASE_NAME))),
        MemberSchema::optional("begin_time", ShapeType::String),
        MemberSchema::optional("status", ShapeType::String),
        MemberSchema::optional("type", ShapeType::String),
    ];

    /// Backup as returned by `ListBackups`.
    pub BACKUP = "BackupForList" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("type", ShapeType::String),
        MemberSchema::required("size", ShapeType::Long),
        MemberSchema::required("status", ShapeType::String),
        MemberSchema::required("begin_time", ShapeType::String),
        MemberSchema::optional("end_time", ShapeType::String),
        MemberSchema::required("datastore", ShapeType::Structure(&DATASTORE)),
        MemberSchema::optional("databases", ShapeType::List(&ShapeType::Structure(&DATABASE_NAME))),
        MemberSchema::required("instance_id", ShapeType::String),
        MemberSchema::optional("associated_with_ddm", ShapeType::Boolean),
    ];

    /// Automated backup policy.
    pub BACKUP_POLICY = "BackupPolicy" [
        MemberSchema::required("keep_days", ShapeType::Integer),
        MemberSchema::optional("start_time", ShapeType::String),
        MemberSchema::optional("period", ShapeType::String),
    ];

    /// Window in which an instance can be restored to a point in time. Times are epoch millis.
    pub RESTORE_TIME = "GetRestoreTimeResponseRestoreTime" [
        MemberSchema::required("start_time", ShapeType::Long),
        MemberSchema::required("end_time", ShapeType::Long),
    ];

    /// Restoration source.
    pub RESTORE_SOURCE = "RestoreSource" [
        MemberSchema::required("instance_id", ShapeType::String),
        MemberSchema::required("type", ShapeType::String),
        MemberSchema::optional("backup_id", ShapeType::String),
        MemberSchema::optional("restore_time", ShapeType::Long),
        MemberSchema::optional("database_name", ShapeType::Map(&ShapeType::String)),
    ];

    /// Restoration target.
    pub RESTORE_TARGET = "TargetInstanceRequest" [
        MemberSchema::required("instance_id", ShapeType::String),
    ];

    /// Body of `RestoreExistInstance`.
    pub RESTORE_EXIST_INSTANCE_REQUEST = "RestoreExistInstanceRequestBody" [
        MemberSchema::required("source", ShapeType::Structure(&RESTORE_SOURCE)),
        MemberSchema::required("target", ShapeType::Structure(&RESTORE_TARGET)),
    ];

    /// Body of `CreateRestoreInstance`. The new instance is built from `restore_point`.
    pub RESTORE_INSTANCE_REQUEST = "CreateRestoreInstanceRequestBody" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("ha", ShapeType::Structure(&HA)),
        MemberSchema::optional("configuration_id", ShapeType::String),
        MemberSchema::optional("port", ShapeType::String),
        MemberSchema::optional("password", ShapeType::String),
        MemberSchema::optional("backup_strategy", ShapeType::Structure(&BACKUP_STRATEGY)),
        MemberSchema::optional("enterprise_project_id", ShapeType::String),
        MemberSchema::optional("disk_encryption_id", ShapeType::String),
        MemberSchema::required("flavor_ref", ShapeType::String),
        MemberSchema::required("volume", ShapeType::Structure(&VOLUME)),
        MemberSchema::required("availability_zone", ShapeType::String),
        MemberSchema::optional("vpc_id", ShapeType::String),
        MemberSchema::optional("subnet_id", ShapeType::String),
        MemberSchema::optional("data_vip", ShapeType::String),
        MemberSchema::optional("security_group_id", ShapeType::String),
        MemberSchema::required("restore_point", ShapeType::Structure(&RESTORE_SOURCE)),
        MemberSchema::optional("charge_info", ShapeType::Structure(&CHARGE_INFO)),
        MemberSchema::optional("time_zone", ShapeType::String),
        MemberSchema::optional("tags", ShapeType::List(&ShapeType::Structure(&TAG))),
    ];

    /// Backup as returned by `ListOffSiteBackups`.
    pub OFFSITE_BACKUP = "OffSiteBackupForList" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("type", ShapeType::String),
        MemberSchema::optional("size", ShapeType::Long),
        MemberSchema::optional("status", ShapeType::String),
        MemberSchema::optional("begin_time", ShapeType::String),
        MemberSchema::optional("end_time", ShapeType::String),
        MemberSchema::optional("datastore", ShapeType::Structure(&DATASTORE)),
        MemberSchema::optional("databases", ShapeType::List(&ShapeType::Structure(&DATABASE_NAME))),
        MemberSchema::optional("instance_id", ShapeType::String),
        MemberSchema::optional("associated_with_ddm", ShapeType::Boolean),
    ];

    /// Off-site backup policy of one backup type.
    pub OFFSITE_POLICY = "OffsiteBackupPolicy" [
        MemberSchema::required("backup_type", ShapeType::String),
        MemberSchema::required("keep_days", ShapeType::Integer),
        MemberSchema::required("destination_region", ShapeType::String),
        MemberSchema::required("destination_project_id", ShapeType::String),
    ];

    /// Instance with off-site backups enabled.
    pub OFFSITE_INSTANCE = "OffsiteBackupInstance" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::optional("name", ShapeType::String),
        MemberSchema::optional("source_region", ShapeType::String),
        MemberSchema::optional("source_project_id", ShapeType::String),
        MemberSchema::optional("datastore", ShapeType::Structure(&DATASTORE)),
        MemberSchema::optional("destination_region", ShapeType::String),
        MemberSchema::optional("destination_project_id", ShapeType::String),
        MemberSchema::optional("keep_days", ShapeType::Long),
    ];

    /// Downloadable file of a backup.
    pub BACKUP_FILE = "BackupFile" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("size", ShapeType::Long),
        MemberSchema::optional("download_link", ShapeType::String),
        MemberSchema::optional("link_expired_time", ShapeType::String),
        MemberSchema::optional("database_name", ShapeType::String),
    ];

    /// Table to restore, and the name it gets.
    pub RESTORE_TABLE = "TableInfo" [
        MemberSchema::required("oldName", ShapeType::String),
        MemberSchema::required("newName", ShapeType::String),
    ];

    /// Tables of one database to restore.
    pub RESTORE_DATABASE = "RestoreDatabaseInfo" [
        MemberSchema::required("database", ShapeType::String),
        MemberSchema::required("tables", ShapeType::List(&ShapeType::Structure(&RESTORE_TABLE))),
    ];

    /// Outcome of deleting one backup in a batch.
    pub DELETED_BACKUP = "BatchDeleteBackupResult" [
        MemberSchema::required("backup_id", ShapeType::String),
        MemberSchema::optional("status", ShapeType::String),
        MemberSchema::optional("error_code", ShapeType::String),
    ];
}

operations! {
    /// Creates a manual full backup.
    CREATE_MANUAL_BACKUP = CreateManualBackup(POST "/v3/{project_id}/backups") {
        input: [
            LANGUAGE,
            MemberSchema::required("body", ShapeType::Structure(&CREATE_MANUAL_BACKUP_REQUEST)).as_payload(),
        ],
        output: [MemberSchema::optional("backup", ShapeType::Structure(&CREATED_BACKUP))],
    }

    /// Deletes a manual backup.
    DELETE_MANUAL_BACKUP = DeleteManualBackup(DELETE "/v3/{project_id}/backups/{backup_id}") {
        input: [
            LANGUAGE,
            MemberSchema::required("backup_id", ShapeType::String).in_path(),
        ],
        output: [],
    }

    /// Lists the backups of an instance.
    LIST_BACKUPS = ListBackups(GET "/v3/{project_id}/backups") {
        input: [
            LANGUAGE,
            MemberSchema::required("instance_id", ShapeType::String).in_query(),
            MemberSchema::optional("backup_id", ShapeType::String).in_query(),
            MemberSchema::optional("backup_type", ShapeType::String).in_query(),
            OFFSET,
            LIMIT,
            MemberSchema::optional("begin_time", ShapeType::String).in_query(),
            MemberSchema::optional("end_time", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::required("backups", ShapeType::List(&ShapeType::Structure(&BACKUP))),
            MemberSchema::required("total_count", ShapeType::Long),
        ],
    }

    /// Sets the automated backup policy.
    SET_BACKUP_POLICY = SetBackupPolicy(PUT "/v3/{project_id}/instances/{instance_id}/backups/policy") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("backup_policy", ShapeType::Structure(&BACKUP_POLICY)),
            MemberSchema::optional("reserve_backups", ShapeType::Boolean),
        ],
        output: [],
    }

    /// Shows the automated backup policy.
    SHOW_BACKUP_POLICY = ShowBackupPolicy(GET "/v3/{project_id}/instances/{instance_id}/backups/policy") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [MemberSchema::optional("backup_policy", ShapeType::Structure(&BACKUP_POLICY))],
    }

    /// Lists the point-in-time restoration windows of an instance.
    LIST_RESTORE_TIMES = ListRestoreTimes(GET "/v3/{project_id}/instances/{instance_id}/restore-time") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::optional("date", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::required("restore_time", ShapeType::List(&ShapeType::Structure(&RESTORE_TIME))),
        ],
    }

    /// Restores a backup or a point in time to an existing instance.
    RESTORE_EXIST_INSTANCE = RestoreExistInstance(POST "/v3/{project_id}/instances/recovery") {
        input: [
            LANGUAGE,
            MemberSchema::required("body", ShapeType::Structure(&RESTORE_EXIST_INSTANCE_REQUEST)).as_payload(),
        ],
        output: [JOB_ID],
    }

    /// Creates a new instance from a backup or a point in time.
    CREATE_RESTORE_INSTANCE = CreateRestoreInstance(POST "/v3/{project_id}/instances") {
        input: [
            LANGUAGE,
            MemberSchema::required("body", ShapeType::Structure(&RESTORE_INSTANCE_REQUEST)).as_payload(),
        ],
        output: [
            MemberSchema::optional("instance", ShapeType::Structure(&CREATED_INSTANCE)),
            JOB_ID,
            MemberSchema::optional("order_id", ShapeType::String),
        ],
    }

    /// Restores tables to a point in time, in place.
    RESTORE_TABLES = RestoreTables(POST "/v3/{project_id}/instances/{instance_id}/restore/tables") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("restoreTime", ShapeType::Long),
            MemberSchema::required(
                "restoreTables",
                ShapeType::List(&ShapeType::Structure(&RESTORE_DATABASE)),
            ),
        ],
        output: [MemberSchema::optional("jobId", ShapeType::String)],
    }

    /// Deletes several manual backups.
    BATCH_DELETE_MANUAL_BACKUP = BatchDeleteManualBackup(POST "/v3/{project_id}/backups/batch-delete") {
        input: [
            LANGUAGE,
            MemberSchema::required("backup_ids", ShapeType::List(&ShapeType::String)),
        ],
        output: [
            MemberSchema::optional("backups", ShapeType::List(&ShapeType::Structure(&DELETED_BACKUP))),
        ],
    }

    /// Shows download links for the files of a backup.
    SHOW_BACKUP_DOWNLOAD_LINK = ShowBackupDownloadLink(GET "/v3/{project_id}/backup-files") {
        input: [
            LANGUAGE,
            MemberSchema::required("backup_id", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::optional("files", ShapeType::List(&ShapeType::Structure(&BACKUP_FILE))),
            MemberSchema::optional("bucket", ShapeType::String),
        ],
    }

    /// Lists off-site backups of an instance.
    LIST_OFF_SITE_BACKUPS = ListOffSiteBackups(GET "/v3/{project_id}/offsite-backups") {
        input: [
            LANGUAGE,
            MemberSchema::required("instance_id", ShapeType::String).in_query(),
            MemberSchema::optional("backup_id", ShapeType::String).in_query(),
            MemberSchema::optional("backup_type", ShapeType::String).in_query(),
            OFFSET,
            LIMIT,
            MemberSchema::optional("begin_time", ShapeType::String).in_query(),
            MemberSchema::optional("end_time", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::optional("backups", ShapeType::List(&ShapeType::Structure(&OFFSITE_BACKUP))),
            TOTAL_COUNT,
        ],
    }

    /// Sets the off-site backup policy.
    SET_OFF_SITE_BACKUP_POLICY = SetOffSiteBackupPolicy(PUT "/v3/{project_id}/instances/{instance_id}/backups/offsite-policy") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("policy_para", ShapeType::Structure(&OFFSITE_POLICY)),
        ],
        output: [],
    }

    /// Shows the off-site backup policies.
    SHOW_OFF_SITE_BACKUP_POLICY = ShowOffSiteBackupPolicy(GET "/v3/{project_id}/instances/{instance_id}/backups/offsite-policy") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [
            MemberSchema::optional("policy_para", ShapeType::List(&ShapeType::Structure(&OFFSITE_POLICY))),
        ],
    }

    /// Lists instances with off-site backups enabled.
    LIST_OFF_SITE_INSTANCES = ListOffSiteInstances(GET "/v3/{project_id}/backups/offsite-backup-instance") {
        input: [LANGUAGE, OFFSET, LIMIT],
        output: [
            MemberSchema::optional(
                "offsite_backup_instance_info",
                ShapeType::List(&ShapeType::Structure(&OFFSITE_INSTANCE)),
            ),
            TOTAL_COUNT,
        ],
    }
}
