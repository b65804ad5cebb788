/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Microsoft SQL Server databases.

use crate::model::{INSTANCE_ID, LANGUAGE, RESP, TOTAL_COUNT};
use crate::{MemberSchema, ShapeType};

structure! {
    /// Database named in `CreateSqlserverDatabase`.
    pub SQLSERVER_DATABASE_FOR_CREATION = "SqlserverDatabaseForCreation" [
        MemberSchema::required("name", ShapeType::String),
    ];

    /// Database as returned by `ListSqlserverDatabases`.
    pub SQLSERVER_DATABASE = "SqlserverDatabaseForDetail" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("state", ShapeType::String),
    ];
}

operations! {
    /// Creates SQL Server databases.
    CREATE_SQLSERVER_DATABASE = CreateSqlserverDatabase(POST "/v3/{project_id}/instances/{instance_id}/database") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required(
                "databases",
                ShapeType::List(&ShapeType::Structure(&SQLSERVER_DATABASE_FOR_CREATION)),
            ),
        ],
        output: [RESP],
    }

    /// Lists SQL Server databases, one page at a time.
    LIST_SQLSERVER_DATABASES = ListSqlserverDatabases(GET "/v3/{project_id}/instances/{instance_id}/database/detail") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("page", ShapeType::Integer).in_query(),
            MemberSchema::required("limit", ShapeType::Integer).in_query(),
            MemberSchema::optional("db-name", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::optional("databases", ShapeType::List(&ShapeType::Structure(&SQLSERVER_DATABASE))),
            TOTAL_COUNT,
        ],
    }

    /// Deletes a SQL Server database.
    DELETE_SQLSERVER_DATABASE = DeleteSqlserverDatabase(DELETE "/v3/{project_id}/instances/{instance_id}/database/{db_name}") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("db_name", ShapeType::String).in_path(),
        ],
        output: [RESP],
    }

    /// Lists the collations SQL Server instances support.
    LIST_COLLATIONS = ListCollations(GET "/v3/{project_id}/collations") {
        input: [LANGUAGE],
        output: [MemberSchema::optional("charSets", ShapeType::List(&ShapeType::String))],
    }
}
