/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use protocol_test_helpers::{
    assert_ok, forbid_headers, forbid_query_params, require_query_params, validate_body,
    validate_empty_body, validate_headers, validate_path, validate_query_string,
};
use rds::operation::backup::{LIST_BACKUPS, SHOW_BACKUP_DOWNLOAD_LINK};
use rds::operation::configuration::{APPLY_CONFIGURATION_ASYNC, UPDATE_INSTANCE_CONFIGURATION};
use rds::operation::database::{CREATE_DATABASE, DELETE_DATABASE, LIST_DATABASES};
use rds::operation::instance::DELETE_INSTANCE;
use rds::operation::postgresql::DELETE_POSTGRESQL_EXTENSION;
use rds::operation::version::LIST_API_VERSION;
use rds::{build_request, BuildError, Config, OperationInput, SdkError};
use serde_json::json;
use tracing_test::traced_test;

fn config() -> Config {
    Config::builder()
        .endpoint("https://rds.eu-west-0.example.com/")
        .project_id("0549b4a43100d4f32f51c01c2fe4acdb")
        .language("en-us")
        .build()
        .unwrap()
}

#[test]
#[traced_test]
fn create_database() {
    let input = OperationInput::new(&CREATE_DATABASE)
        .with("instance_id", "dsfae23fsfdsae3435in01")
        .unwrap()
        .with(
            "body",
            json!({"name": "rds-test", "character_set": "utf8", "comment": "orders"}),
        )
        .unwrap();
    let request = build_request(&config(), &input).unwrap();

    assert_eq!(request.method(), http::Method::POST);
    assert_ok(validate_path(
        &request,
        "/v3/0549b4a43100d4f32f51c01c2fe4acdb/instances/dsfae23fsfdsae3435in01/database",
    ));
    assert_ok(validate_headers(
        &request,
        &[
            ("Content-Type", "application/json;charset=UTF-8"),
            ("X-Language", "en-us"),
        ],
    ));
    assert_ok(validate_body(
        &request,
        r#"{"name":"rds-test","character_set":"utf8","comment":"orders"}"#,
    ));
    assert_eq!(request.uri().query(), None);
    assert!(logs_contain("built request"));
}

#[test]
fn delete_database_encodes_labels() {
    let input = OperationInput::new(&DELETE_DATABASE)
        .with("instance_id", "i1")
        .unwrap()
        .with("db_name", "sales/2024 q1")
        .unwrap()
        .with("X-Language", "zh-cn")
        .unwrap();
    let request = build_request(&config(), &input).unwrap();

    assert_eq!(request.method(), http::Method::DELETE);
    assert_ok(validate_path(
        &request,
        "/v3/0549b4a43100d4f32f51c01c2fe4acdb/instances/i1/database/sales%2F2024%20q1",
    ));
    assert_ok(validate_headers(&request, &[("X-Language", "zh-cn")]));
    assert_ok(forbid_headers(&request, &["Content-Type"]));
    assert_ok(validate_empty_body(&request));
}

#[test]
fn list_databases_query() {
    let input = OperationInput::new(&LIST_DATABASES)
        .with("instance_id", "i1")
        .unwrap()
        .with("page", 1)
        .unwrap()
        .with("limit", 10)
        .unwrap();
    let request = build_request(&config(), &input).unwrap();

    assert_ok(validate_query_string(&request, &["page=1", "limit=10"]));
    assert_ok(forbid_query_params(&request, &["db-name", "instance_id"]));
    assert_ok(validate_empty_body(&request));
}

#[test]
fn list_backups_requires_instance_query() {
    let input = OperationInput::new(&LIST_BACKUPS)
        .with("instance_id", "i1")
        .unwrap()
        .with("begin_time", "2024-01-01T00:00:00+0800")
        .unwrap();
    let request = build_request(&config(), &input).unwrap();
    assert_ok(require_query_params(&request, &["instance_id", "begin_time"]));
    assert_ok(validate_query_string(
        &request,
        &["begin_time=2024-01-01T00%3A00%3A00%2B0800"],
    ));

    let err = build_request(&config(), &OperationInput::new(&LIST_BACKUPS)).unwrap_err();
    assert!(matches!(err, BuildError::Serialization { .. }));
}

#[test]
fn missing_path_label() {
    let err = build_request(&config(), &OperationInput::new(&DELETE_INSTANCE)).unwrap_err();
    assert!(matches!(err, BuildError::MissingLabel("instance_id")));

    let without_project = Config::builder()
        .endpoint("https://rds.example.com")
        .build()
        .unwrap();
    let input = OperationInput::new(&DELETE_INSTANCE)
        .with("instance_id", "i1")
        .unwrap();
    let err = build_request(&without_project, &input).unwrap_err();
    assert!(matches!(err, BuildError::MissingLabel("project_id")));
    assert!(matches!(
        SdkError::from(err),
        SdkError::ConstructionFailure(_)
    ));
}

#[test]
fn unscoped_operation() {
    let request = build_request(&config(), &OperationInput::new(&LIST_API_VERSION)).unwrap();
    assert_eq!(request.uri(), "https://rds.eu-west-0.example.com/rds");
    assert_eq!(request.method(), http::Method::GET);
}

#[test]
fn apply_configuration() {
    let input = OperationInput::new(&APPLY_CONFIGURATION_ASYNC)
        .with("config_id", "7b4e07d9c2d04df28fa0f4fbe7a4c6dfpr01")
        .unwrap()
        .with("instance_ids", json!(["i1", "i2"]))
        .unwrap();
    let request = build_request(&config(), &input).unwrap();

    assert_eq!(request.method(), http::Method::PUT);
    assert_ok(validate_path(
        &request,
        "/v3/0549b4a43100d4f32f51c01c2fe4acdb/configurations/7b4e07d9c2d04df28fa0f4fbe7a4c6dfpr01/apply",
    ));
    assert_ok(validate_body(&request, r#"{"instance_ids":["i1","i2"]}"#));
}

#[test]
fn update_instance_parameters() {
    let input = OperationInput::new(&UPDATE_INSTANCE_CONFIGURATION)
        .with("instance_id", "i1")
        .unwrap()
        .with("values", json!({"max_connections": "10", "autocommit": "OFF"}))
        .unwrap();
    let request = build_request(&config(), &input).unwrap();
    assert_ok(validate_path(
        &request,
        "/v3/0549b4a43100d4f32f51c01c2fe4acdb/instances/i1/configurations",
    ));
    assert_ok(validate_body(
        &request,
        r#"{"values":{"max_connections":"10","autocommit":"OFF"}}"#,
    ));

    let err = build_request(
        &config(),
        &OperationInput::new(&UPDATE_INSTANCE_CONFIGURATION)
            .with("instance_id", "i1")
            .unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::Serialization { .. }));
}

#[test]
fn backup_download_link_query() {
    let input = OperationInput::new(&SHOW_BACKUP_DOWNLOAD_LINK)
        .with("backup_id", "c0c9f155c7b7423a9d30f0175998b63bbr01")
        .unwrap();
    let request = build_request(&config(), &input).unwrap();
    assert_ok(validate_path(
        &request,
        "/v3/0549b4a43100d4f32f51c01c2fe4acdb/backup-files",
    ));
    assert_ok(validate_query_string(
        &request,
        &["backup_id=c0c9f155c7b7423a9d30f0175998b63bbr01"],
    ));
    assert_ok(validate_empty_body(&request));
}

#[test]
fn delete_extension_sends_a_body() {
    let input = OperationInput::new(&DELETE_POSTGRESQL_EXTENSION)
        .with("instance_id", "i1")
        .unwrap()
        .with("database_name", "orders")
        .unwrap()
        .with("extension_name", "pg_stat_statements")
        .unwrap();
    let request = build_request(&config(), &input).unwrap();
    assert_eq!(request.method(), http::Method::DELETE);
    assert_ok(validate_headers(
        &request,
        &[("Content-Type", "application/json;charset=UTF-8")],
    ));
    assert_ok(validate_body(
        &request,
        r#"{"database_name":"orders","extension_name":"pg_stat_statements"}"#,
    ));
}
