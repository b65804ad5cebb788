/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! MySQL databases, accounts and privileges.

use crate::model::{INSTANCE_ID, JOB_ID, LANGUAGE, RESP, TOTAL_COUNT};
use crate::{MemberSchema, ShapeType};

const PAGE: MemberSchema = MemberSchema::required("page", ShapeType::Integer).in_query();
const LIMIT: MemberSchema = MemberSchema::required("limit", ShapeType::Integer).in_query();

structure! {
    /// Body of `CreateDatabase`.
    pub DATABASE_FOR_CREATION = "DatabaseForCreation" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("character_set", ShapeType::String),
        MemberSchema::optional("comment", ShapeType::String),
        MemberSchema::optional("users", ShapeType::List(&ShapeType::Structure(&USER_WITH_PRIVILEGE))),
    ];

    /// Body of `UpdateDatabase`.
    pub UPDATE_DATABASE_REQUEST = "UpdateDatabaseReq" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("comment", ShapeType::String),
    ];

    /// Database as returned by `ListDatabases`.
    pub DATABASE_FOR_LIST = "DatabaseForList" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("character_set", ShapeType::String),
        MemberSchema::optional("comment", ShapeType::String),
    ];

    /// Body of `CreateDbUser`.
    pub USER_FOR_CREATION = "UserForCreation" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("password", ShapeType::String),
        MemberSchema::optional("comment", ShapeType::String),
        MemberSchema::optional("hosts", ShapeType::List(&ShapeType::String)),
        MemberSchema::optional("databases", ShapeType::List(&ShapeType::Structure(&DATABASE_WITH_PRIVILEGE))),
    ];

    /// Account as returned by `ListDbUsers`.
    pub USER_FOR_LIST = "UserForList" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("comment", ShapeType::String),
        MemberSchema::optional("hosts", ShapeType::List(&ShapeType::String)),
        MemberSchema::optional("databases", ShapeType::List(&ShapeType::Structure(&DATABASE_WITH_PRIVILEGE))),
    ];

    /// Account and its access mode on one database.
    pub USER_WITH_PRIVILEGE = "UserWithPrivilege" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("readonly", ShapeType::Boolean),
    ];

    /// Database and the access mode an account has on it.
    pub DATABASE_WITH_PRIVILEGE = "DatabaseWithPrivilegeObject" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("readonly", ShapeType::Boolean),
    ];

    /// Body of `AllowDbUserPrivilege`.
    pub GRANT_REQUEST = "GrantRequest" [
        MemberSchema::required("db_name", ShapeType::String),
        MemberSchema::required("users", ShapeType::List(&ShapeType::Structure(&USER_WITH_PRIVILEGE))),
    ];

    /// Account named in `Revoke`.
    pub REVOKED_USER = "RevokeRequestBodyUsers" [
        MemberSchema::required("name", ShapeType::String),
    ];

    /// Body of `Revoke`.
    pub REVOKE_REQUEST = "RevokeRequestBody" [
        MemberSchema::required("db_name", ShapeType::String),
        MemberSchema::required("users", ShapeType::List(&ShapeType::Structure(&REVOKED_USER))),
    ];

    /// Body of `SetDbUserPwd`.
    pub DB_USER_PWD_REQUEST = "DbUserPwdRequest" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("password", ShapeType::String),
    ];
}

operations! {
    /// Creates a database.
    CREATE_DATABASE = CreateDatabase(POST "/v3/{project_id}/instances/{instance_id}/database") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("body", ShapeType::Structure(&DATABASE_FOR_CREATION)).as_payload(),
        ],
        output: [RESP],
    }

    /// Deletes a database.
    DELETE_DATABASE = DeleteDatabase(DELETE "/v3/{project_id}/instances/{instance_id}/database/{db_name}") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("db_name", ShapeType::String).in_path(),
        ],
        output: [RESP],
    }

    /// Changes the remarks of a database.
    UPDATE_DATABASE = UpdateDatabase(POST "/v3/{project_id}/instances/{instance_id}/database/update") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("body", ShapeType::Structure(&UPDATE_DATABASE_REQUEST)).as_payload(),
        ],
        output: [JOB_ID],
    }

    /// Lists databases, one page at a time.
    LIST_DATABASES = ListDatabases(GET "/v3/{project_id}/instances/{instance_id}/database/detail") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            PAGE,
            LIMIT,
            MemberSchema::optional("db-name", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::optional("databases", ShapeType::List(&ShapeType::Structure(&DATABASE_FOR_LIST))),
            TOTAL_COUNT,
        ],
    }

    /// Creates a database account.
    CREATE_DB_USER = CreateDbUser(POST "/v3/{project_id}/instances/{instance_id}/db_user") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("body", ShapeType::Structure(&USER_FOR_CREATION)).as_payload(),
        ],
        output: [RESP],
    }

    /// Deletes a database account.
    DELETE_DB_USER = DeleteDbUser(DELETE "/v3/{project_id}/instances/{instance_id}/db_user/{user_name}") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("user_name", ShapeType::String).in_path(),
        ],
        output: [RESP],
    }

    /// Lists database accounts, one page at a time.
    LIST_DB_USERS = ListDbUsers(GET "/v3/{project_id}/instances/{instance_id}/db_user/detail") {
        input: [LANGUAGE, INSTANCE_ID, PAGE, LIMIT],
        output: [
            MemberSchema::optional("users", ShapeType::List(&ShapeType::Structure(&USER_FOR_LIST))),
            TOTAL_COUNT,
        ],
    }

    /// Resets the password of a database account.
    SET_DB_USER_PWD = SetDbUserPwd(POST "/v3/{project_id}/instances/{instance_id}/db_user/resetpwd") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("body", ShapeType::Structure(&DB_USER_PWD_REQUEST)).as_payload(),
        ],
        output: [RESP],
    }

    /// Grants accounts access to a database.
    ALLOW_DB_USER_PRIVILEGE = AllowDbUserPrivilege(POST "/v3/{project_id}/instances/{instance_id}/db_privilege") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("body", ShapeType::Structure(&GRANT_REQUEST)).as_payload(),
        ],
        output: [RESP],
    }

    /// Revokes the access of accounts to a database.
    REVOKE = Revoke(DELETE "/v3/{project_id}/instances/{instance_id}/db_privilege") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("body", ShapeType::Structure(&REVOKE_REQUEST)).as_payload(),
        ],
        output: [RESP],
    }

    /// Lists the databases an account may access.
    LIST_AUTHORIZED_DATABASES = ListAuthorizedDatabases(GET "/v3/{project_id}/instances/{instance_id}/db_user/database") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("user-name", ShapeType::String).in_query(),
            PAGE,
            LIMIT,
        ],
        output: [
            MemberSchema::optional(
                "databases",
                ShapeType::List(&ShapeType::Structure(&DATABASE_WITH_PRIVILEGE)),
            ),
            TOTAL_COUNT,
        ],
    }

    /// Lists the accounts that may access a database.
    LIST_AUTHORIZED_DB_USERS = ListAuthorizedDbUsers(GET "/v3/{project_id}/instances/{instance_id}/database/db_user") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("db-name", ShapeType::String).in_query(),
            PAGE,
            LIMIT,
        ],
        output: [
            MemberSchema::optional("users", ShapeType::List(&ShapeType::Structure(&USER_WITH_PRIVILEGE))),
            TOTAL_COUNT,
        ],
    }
}
