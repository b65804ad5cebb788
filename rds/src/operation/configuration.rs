/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Parameter templates and instance parameters.

use crate::model::{DATASTORE, INSTANCE_ID, JOB_ID, LANGUAGE, LIMIT, OFFSET, TOTAL_COUNT};
use crate::{MemberSchema, ShapeType};

const CONFIG_ID: MemberSchema = MemberSchema::required("config_id", ShapeType::String).in_path();

/// Parameter names to their new values, all as strings.
const VALUES: ShapeType = ShapeType::Map(&ShapeType::String);

structure! {
    /// Parameter template as returned by `ListConfigurations`.
    pub CONFIGURATION_SUMMARY = "ConfigurationSummary" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("description", ShapeType::String),
        MemberSchema::optional("datastore_version_name", ShapeType::String),
        MemberSchema::optional("datastore_name", ShapeType::String),
        MemberSchema::optional("created", ShapeType::String),
        MemberSchema::optional("updated", ShapeType::String),
        MemberSchema::optional("user_defined", ShapeType::Boolean),
    ];

    /// Body of `CreateConfiguration`.
    pub CONFIGURATION_FOR_CREATION = "ConfigurationForCreation" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("description", ShapeType::String),
        MemberSchema::optional("values", VALUES),
        MemberSchema::required("datastore", ShapeType::Structure(&DATASTORE)),
    ];

    /// One parameter with its current value and allowed range.
    pub PARAMETER = "ConfigurationParameter" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::optional("value", ShapeType::String),
        MemberSchema::optional("restart_required", ShapeType::Boolean),
        MemberSchema::optional("readonly", ShapeType::Boolean),
        MemberSchema::optional("value_range", ShapeType::String),
        MemberSchema::optional("type", ShapeType::String),
        MemberSchema::optional("description", ShapeType::String),
    ];

    /// Outcome of applying a template to one instance.
    pub APPLY_RESULT = "ApplyConfigurationResponseApplyResults" [
        MemberSchema::optional("instance_id", ShapeType::String),
        MemberSchema::optional("instance_name", ShapeType::String),
        MemberSchema::optional("restart_required", ShapeType::Boolean),
        MemberSchema::optional("success", ShapeType::Boolean),
    ];

    /// One recorded parameter change.
    pub PARAM_HISTORY = "ParamGroupHistoryResult" [
        MemberSchema::required("parameter_name", ShapeType::String),
        MemberSchema::optional("old_value", ShapeType::String),
        MemberSchema::optional("new_value", ShapeType::String),
        MemberSchema::optional("update_result", ShapeType::String),
        MemberSchema::optional("applied", ShapeType::Boolean),
        MemberSchema::optional("update_time", ShapeType::String),
        MemberSchema::optional("apply_time", ShapeType::String),
    ];
}

const PARAMETERS: ShapeType = ShapeType::List(&ShapeType::Structure(&PARAMETER));

operations! {
    /// Lists parameter templates, built-in ones included.
    LIST_CONFIGURATIONS = ListConfigurations(GET "/v3/{project_id}/configurations") {
        input: [LANGUAGE],
        output: [
            MemberSchema::optional(
                "configurations",
                ShapeType::List(&ShapeType::Structure(&CONFIGURATION_SUMMARY)),
            ),
        ],
    }

    /// Creates a parameter template.
    CREATE_CONFIGURATION = CreateConfiguration(POST "/v3/{project_id}/configurations") {
        input: [
            LANGUAGE,
            MemberSchema::required("body", ShapeType::Structure(&CONFIGURATION_FOR_CREATION)).as_payload(),
        ],
        output: [
            MemberSchema::optional("configuration", ShapeType::Structure(&CONFIGURATION_SUMMARY)),
        ],
    }

    /// Shows a parameter template and its parameters.
    SHOW_CONFIGURATION = ShowConfiguration(GET "/v3/{project_id}/configurations/{config_id}") {
        input: [LANGUAGE, CONFIG_ID],
        output: [
            MemberSchema::optional("id", ShapeType::String),
            MemberSchema::optional("name", ShapeType::String),
            MemberSchema::optional("datastore_version_name", ShapeType::String),
            MemberSchema::optional("datastore_name", ShapeType::String),
            MemberSchema::optional("description", ShapeType::String),
            MemberSchema::optional("created", ShapeType::String),
            MemberSchema::optional("updated", ShapeType::String),
            MemberSchema::optional("configuration_parameters", PARAMETERS),
        ],
    }

    /// Changes the name, description or values of a parameter template.
    UPDATE_CONFIGURATION = UpdateConfiguration(PUT "/v3/{project_id}/configurations/{config_id}") {
        input: [
            LANGUAGE,
            CONFIG_ID,
            MemberSchema::optional("name", ShapeType::String),
            MemberSchema::optional("description", ShapeType::String),
            MemberSchema::optional("values", VALUES),
        ],
        output: [
            MemberSchema::optional("configuration", ShapeType::Structure(&CONFIGURATION_SUMMARY)),
        ],
    }

    /// Deletes a custom parameter template.
    DELETE_CONFIGURATION = DeleteConfiguration(DELETE "/v3/{project_id}/configurations/{config_id}") {
        input: [LANGUAGE, CONFIG_ID],
        output: [],
    }

    /// Applies a parameter template to instances.
    APPLY_CONFIGURATION_ASYNC = ApplyConfigurationAsync(PUT "/v3/{project_id}/configurations/{config_id}/apply") {
        input: [
            LANGUAGE,
            CONFIG_ID,
            MemberSchema::required("instance_ids", ShapeType::List(&ShapeType::String)),
        ],
        output: [
            MemberSchema::optional("configuration_id", ShapeType::String),
            MemberSchema::optional("configuration_name", ShapeType::String),
            MemberSchema::optional(
                "apply_results",
                ShapeType::List(&ShapeType::Structure(&APPLY_RESULT)),
            ),
            MemberSchema::optional("success", ShapeType::Boolean),
            JOB_ID,
        ],
    }

    /// Copies a parameter template.
    COPY_CONFIGURATION = CopyConfiguration(POST "/v3/{project_id}/configurations/{config_id}/copy") {
        input: [
            LANGUAGE,
            CONFIG_ID,
            MemberSchema::required("name", ShapeType::String),
            MemberSchema::optional("description", ShapeType::String),
        ],
        output: [MemberSchema::optional("configuration_id", ShapeType::String)],
    }

    /// Shows the parameters in effect on an instance.
    SHOW_INSTANCE_CONFIGURATION = ShowInstanceConfiguration(GET "/v3/{project_id}/instances/{instance_id}/configurations") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [
            MemberSchema::optional("datastore_version_name", ShapeType::String),
            MemberSchema::optional("datastore_name", ShapeType::String),
            MemberSchema::optional("created", ShapeType::String),
            MemberSchema::optional("updated", ShapeType::String),
            MemberSchema::optional("configuration_parameters", PARAMETERS),
        ],
    }

    /// Changes parameters of an instance.
    UPDATE_INSTANCE_CONFIGURATION = UpdateInstanceConfiguration(PUT "/v3/{project_id}/instances/{instance_id}/configurations") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("values", VALUES),
        ],
        output: [
            JOB_ID,
            MemberSchema::optional("restart_required", ShapeType::Boolean),
        ],
    }

    /// Lists parameter changes made on an instance.
    LIST_INSTANCE_PARAM_HISTORIES = ListInstanceParamHistories(GET "/v3/{project_id}/instances/{instance_id}/configuration-histories") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            OFFSET,
            LIMIT,
            MemberSchema::optional("start_time", ShapeType::String).in_query(),
            MemberSchema::optional("end_time", ShapeType::String).in_query(),
            MemberSchema::optional("param_name", ShapeType::String).in_query(),
        ],
        output: [
            TOTAL_COUNT,
            MemberSchema::optional(
                "histories",
                ShapeType::List(&ShapeType::Structure(&PARAM_HISTORY)),
            ),
        ],
    }
}
