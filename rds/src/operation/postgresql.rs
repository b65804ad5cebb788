/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! PostgreSQL databases, schemas, extensions and `pg_hba.conf`.

use crate::model::{INSTANCE_ID, LANGUAGE, LIMIT, OFFSET, RESP, TOTAL_COUNT};
use crate::{MemberSchema, ShapeType};

structure! {
    /// Body of `CreatePostgresqlDatabase`.
    pub POSTGRESQL_DATABASE_FOR_CREATION = "PostgresqlDatabaseForCreation" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("owner", ShapeType::String),
        MemberSchema::optional("character_set", ShapeType::String),
        MemberSchema::optional("template", ShapeType::String),
        MemberSchema::optional("lc_collate", ShapeType::String),
        MemberSchema::optional("lc_ctype", ShapeType::String),
        MemberSchema::optional("comment", ShapeType::String),
    ];

    /// Database as returned by `ListPostgresqlDatabases`.
    pub POSTGRESQL_DATABASE = "PostgresqlListDatabase" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("owner", ShapeType::String),
        MemberSchema::required("character_set", ShapeType::String),
        MemberSchema::required("collate_set", ShapeType::String),
        MemberSchema::required("size", ShapeType::Long),
        MemberSchema::optional("comment", ShapeType::String),
    ];

    /// Schema and its owner.
    pub POSTGRESQL_SCHEMA = "PostgresqlSchema" [
        MemberSchema::required("schema_name", ShapeType::String),
        MemberSchema::required("owner", ShapeType::String),
    ];

    /// Body of `CreatePostgresqlDatabaseSchema`.
    pub POSTGRESQL_SCHEMA_REQUEST = "PostgresqlDatabaseSchemaReq" [
        MemberSchema::required("db_name", ShapeType::String),
        MemberSchema::required("schemas", ShapeType::List(&ShapeType::Structure(&POSTGRESQL_SCHEMA))),
    ];

    /// One line of `pg_hba.conf`.
    pub HBA = "PostgresqlHbaConf" [
        MemberSchema::required("type", ShapeType::String),
        MemberSchema::required("database", ShapeType::String),
        MemberSchema::required("user", ShapeType::String),
        MemberSchema::required("address", ShapeType::String),
        MemberSchema::optional("mask", ShapeType::String),
        MemberSchema::required("method", ShapeType::String),
        MemberSchema::required("priority", ShapeType::Integer),
    ];

    /// One recorded change of `pg_hba.conf`, with the lines before and after it.
    pub HBA_HISTORY = "PostgresqlHbaHistory" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::required("status", ShapeType::String),
        MemberSchema::optional("time", ShapeType::String),
        MemberSchema::optional("fail_reason", ShapeType::String),
        MemberSchema::optional("before_confs", HBA_LIST),
        MemberSchema::optional("after_confs", HBA_LIST),
    ];

    /// Extension available in a database.
    pub EXTENSION = "ExtensionsResponse" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("database_name", ShapeType::String),
        MemberSchema::optional("version", ShapeType::String),
        MemberSchema::optional("shared_preload_libraries", ShapeType::String),
        MemberSchema::optional("created", ShapeType::Boolean),
        MemberSchema::optional("description", ShapeType::String),
    ];
}

const HBA_LIST: ShapeType = ShapeType::List(&ShapeType::Structure(&HBA));
const DATABASE_NAME: MemberSchema = MemberSchema::required("database_name", ShapeType::String);
const EXTENSION_NAME: MemberSchema = MemberSchema::required("extension_name", ShapeType::String);

/// Outcome of a `pg_hba.conf` change, zero on success.
const CODE: MemberSchema = MemberSchema::optional("code", ShapeType::Integer);
const MESSAGE: MemberSchema = MemberSchema::optional("message", ShapeType::String);

operations! {
    /// Creates a PostgreSQL database.
    CREATE_POSTGRESQL_DATABASE = CreatePostgresqlDatabase(POST "/v3/{project_id}/instances/{instance_id}/database") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("body", ShapeType::Structure(&POSTGRESQL_DATABASE_FOR_CREATION)).as_payload(),
        ],
        output: [RESP],
    }

    /// Lists PostgreSQL databases, one page at a time.
    LIST_POSTGRESQL_DATABASES = ListPostgresqlDatabases(GET "/v3/{project_id}/instances/{instance_id}/database/detail") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("page", ShapeType::Integer).in_query(),
            MemberSchema::required("limit", ShapeType::Integer).in_query(),
        ],
        output: [
            MemberSchema::optional("databases", ShapeType::List(&ShapeType::Structure(&POSTGRESQL_DATABASE))),
            TOTAL_COUNT,
        ],
    }

    /// Creates schemas in a PostgreSQL database.
    CREATE_POSTGRESQL_DATABASE_SCHEMA = CreatePostgresqlDatabaseSchema(POST "/v3/{project_id}/instances/{instance_id}/schema") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("body", ShapeType::Structure(&POSTGRESQL_SCHEMA_REQUEST)).as_payload(),
        ],
        output: [RESP],
    }

    /// Shows the `pg_hba.conf` of an instance.
    LIST_POSTGRESQL_HBA_INFO = ListPostgresqlHbaInfo(GET "/v3/{project_id}/instances/{instance_id}/hba-info") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [MemberSchema::optional("body", HBA_LIST).as_payload()],
    }

    /// Appends lines to `pg_hba.conf`.
    ADD_POSTGRESQL_HBA_CONF = AddPostgresqlHbaConf(POST "/v3/{project_id}/instances/{instance_id}/hba-info") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::optional("body", HBA_LIST).as_payload(),
        ],
        output: [CODE, MESSAGE],
    }

    /// Changes lines of `pg_hba.conf`.
    MODIFY_POSTGRESQL_HBA_CONF = ModifyPostgresqlHbaConf(PUT "/v3/{project_id}/instances/{instance_id}/hba-info") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::optional("body", HBA_LIST).as_payload(),
        ],
        output: [CODE, MESSAGE],
    }

    /// Deletes lines of `pg_hba.conf`.
    DELETE_POSTGRESQL_HBA_CONF = DeletePostgresqlHbaConf(DELETE "/v3/{project_id}/instances/{instance_id}/hba-info") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::optional("body", HBA_LIST).as_payload(),
        ],
        output: [CODE, MESSAGE],
    }

    /// Lists past changes of `pg_hba.conf`.
    LIST_POSTGRESQL_HBA_INFO_HISTORY = ListPostgresqlHbaInfoHistory(GET "/v3/{project_id}/instances/{instance_id}/hba-info/histories") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::optional("start_time", ShapeType::String).in_query(),
            MemberSchema::optional("end_time", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::optional("body", ShapeType::List(&ShapeType::Structure(&HBA_HISTORY))).as_payload(),
        ],
    }

    /// Lists the extensions of a database.
    LIST_POSTGRESQL_EXTENSION = ListPostgresqlExtension(GET "/v3/{project_id}/instances/{instance_id}/extensions") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("database_name", ShapeType::String).in_query(),
            OFFSET,
            LIMIT,
        ],
        output: [
            MemberSchema::optional("extensions", ShapeType::List(&ShapeType::Structure(&EXTENSION))),
            TOTAL_COUNT,
        ],
    }

    /// Installs an extension in a database.
    CREATE_POSTGRESQL_EXTENSION = CreatePostgresqlExtension(POST "/v3/{project_id}/instances/{instance_id}/extensions") {
        input: [LANGUAGE, INSTANCE_ID, DATABASE_NAME, EXTENSION_NAME],
        output: [MemberSchema::optional("created", ShapeType::Boolean)],
    }

    /// Removes an extension from a database.
    DELETE_POSTGRESQL_EXTENSION = DeletePostgresqlExtension(DELETE "/v3/{project_id}/instances/{instance_id}/extensions") {
        input: [LANGUAGE, INSTANCE_ID, DATABASE_NAME, EXTENSION_NAME],
        output: [MemberSchema::optional("deleted", ShapeType::Boolean)],
    }

    /// Lists the schemas of a database, one page at a time.
    LIST_POSTGRESQL_DATABASE_SCHEMAS = ListPostgresqlDatabaseSchemas(GET "/v3/{project_id}/instances/{instance_id}/schema/detail") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("db_name", ShapeType::String).in_query(),
            MemberSchema::required("page", ShapeType::Integer).in_query(),
            MemberSchema::required("limit", ShapeType::Integer).in_query(),
        ],
        output: [
            MemberSchema::optional(
                "database_schemas",
                ShapeType::List(&ShapeType::Structure(&POSTGRESQL_SCHEMA)),
            ),
            TOTAL_COUNT,
        ],
    }
}
