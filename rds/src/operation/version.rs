/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! API versions. These aren't scoped to a project.

use crate::model::LANGUAGE;
use crate::{MemberSchema, ShapeType};

structure! {
    /// Link to a version's documentation.
    pub LINK = "Links" [
        MemberSchema::required("href", ShapeType::String),
        MemberSchema::required("rel", ShapeType::String),
    ];

    /// One API version.
    pub API_VERSION = "ApiVersion" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::required("links", ShapeType::List(&ShapeType::Structure(&LINK))),
        MemberSchema::required("status", ShapeType::String),
        MemberSchema::required("version", ShapeType::String),
        MemberSchema::required("min_version", ShapeType::String),
        MemberSchema::required("updated", ShapeType::String),
    ];
}

operations! {
    /// Lists the versions of the API.
    LIST_API_VERSION = ListApiVersion(GET "/rds") {
        input: [LANGUAGE],
        output: [MemberSchema::optional("versions", ShapeType::List(&ShapeType::Structure(&API_VERSION)))],
    }

    /// Shows one version of the API.
    SHOW_API_VERSION = ShowApiVersion(GET "/rds/{version}") {
        input: [
            LANGUAGE,
            MemberSchema::required("version", ShapeType::String).in_path(),
        ],
        output: [MemberSchema::optional("version", ShapeType::Structure(&API_VERSION))],
    }
}
