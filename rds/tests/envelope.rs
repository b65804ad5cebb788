/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rds::operation::backup::LIST_BACKUPS;
use rds::operation::database::{CREATE_DATABASE, DELETE_DATABASE};
use rds::operation::instance::{DELETE_INSTANCE, LIST_INSTANCES};
use rds::{
    DecodePolicy, JsonCodec, JsonCodecSettings, OperationInput, OperationOutput,
    SerializationError, Value,
};
use serde_json::json;

#[test]
fn unset_optionals_are_omitted() {
    let request = OperationInput::new(&DELETE_DATABASE)
        .with("instance_id", "abc123")
        .unwrap()
        .with("db_name", "orders")
        .unwrap();
    assert_eq!(
        request.to_json().unwrap(),
        br#"{"instance_id":"abc123","db_name":"orders"}"#
    );
    assert!(!String::from_utf8(request.to_json().unwrap())
        .unwrap()
        .contains("X-Language"));
}

#[test]
fn required_member_only() {
    let request = OperationInput::new(&DELETE_INSTANCE)
        .with("instance_id", "abc123")
        .unwrap();
    assert_eq!(request.to_json().unwrap(), br#"{"instance_id":"abc123"}"#);
}

#[test]
fn status_code_stays_out_of_band() {
    let mut response = OperationOutput::from_json(&DELETE_INSTANCE, br#"{"job_id":"job-1"}"#)
        .unwrap();
    response.set_status_code(200);
    assert_eq!(response.get_str("job_id"), Some("job-1"));
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.to_json().unwrap(), br#"{"job_id":"job-1"}"#);
    assert_eq!(
        response.describe(),
        r#"DeleteInstanceResponse {"job_id":"job-1"}"#
    );
}

#[test]
fn unknown_keys_are_dropped() {
    let response = OperationOutput::from_json(
        &DELETE_INSTANCE,
        br#"{"job_id":"job-1","statusCode":500,"extra":{"nested":[1,2]}}"#,
    )
    .unwrap();
    assert!(!response.is_set("statusCode"));
    assert!(!response.is_set("extra"));
    assert_eq!(response.status_code(), 0);
    assert_eq!(response.to_json().unwrap(), br#"{"job_id":"job-1"}"#);
}

#[test]
fn null_on_the_wire_reads_as_unset() {
    let response = OperationOutput::from_json(&DELETE_INSTANCE, br#"{"job_id":null}"#).unwrap();
    assert!(!response.is_set("job_id"));
    assert_eq!(response.to_json().unwrap(), b"{}");
}

#[test]
fn zero_values_of_required_members_are_written() {
    let request = OperationInput::new(&CREATE_DATABASE)
        .with("instance_id", "i1")
        .unwrap()
        .with("body", json!({"name": "", "character_set": ""}))
        .unwrap();
    assert_eq!(
        request.to_json().unwrap(),
        br#"{"instance_id":"i1","body":{"name":"","character_set":""}}"#
    );
}

#[test]
fn missing_required_member_fails() {
    let request = OperationInput::new(&DELETE_DATABASE)
        .with("instance_id", "abc123")
        .unwrap();
    assert!(matches!(
        request.to_json(),
        Err(SerializationError::MissingRequired { ref member }) if member == "db_name"
    ));
    let strict = JsonCodec::new(JsonCodecSettings {
        decode_policy: DecodePolicy::Strict,
    });
    let err = OperationOutput::from_json_with(&LIST_BACKUPS, br#"{"total_count":0}"#, &strict)
        .unwrap_err();
    assert!(matches!(err, SerializationError::MissingRequired { .. }));
}

#[test]
fn sparse_list_items_are_zero_filled() {
    let response = OperationOutput::from_json(
        &LIST_INSTANCES,
        br#"{"instances":[{"id":"i1","name":"rds-1","status":"ACTIVE"}],"total_count":1}"#,
    )
    .unwrap();
    let instance = &response.get("instances").unwrap()[0];
    assert_eq!(instance["id"], json!("i1"));
    assert!(instance.get("port").is_none());
    assert!(instance.get("private_ips").is_none());
    assert!(instance.get("switch_strategy").is_none());
    assert!(instance.get("related_instance").is_none());
    assert_eq!(response.get("total_count"), Some(&Value::from(1)));
}

#[test]
fn describe_never_fails() {
    let request = OperationInput::new(&DELETE_DATABASE)
        .with("instance_id", "abc123")
        .unwrap();
    let description = request.describe();
    assert_eq!(description, "DeleteDatabaseRequest struct{}");
    assert!(description.contains("DeleteDatabase"));
    assert_eq!(request.to_string(), description);
}

#[test]
fn type_mismatch_on_decode() {
    let err = OperationOutput::from_json(&LIST_INSTANCES, br#"{"total_count":"many"}"#)
        .unwrap_err();
    assert!(matches!(err, SerializationError::TypeMismatch { .. }));
    assert!(OperationOutput::from_json(&LIST_INSTANCES, b"not json").is_err());
}

#[test]
fn integers_must_fit_their_shape() {
    let mut request = OperationInput::new(&LIST_INSTANCES);
    assert!(request.set("limit", i64::from(i32::MAX) + 1).is_err());
    request.set("limit", 100).unwrap();
    assert_eq!(request.get("limit"), Some(&Value::from(100)));
}

#[test]
fn envelopes_are_independent() {
    let first = OperationInput::new(&DELETE_INSTANCE)
        .with("instance_id", "a")
        .unwrap();
    let mut second = first.clone();
    second.set("instance_id", "b").unwrap();
    assert_eq!(first.get_str("instance_id"), Some("a"));
    assert_eq!(second.get_str("instance_id"), Some("b"));
}

fn list_instances_request() -> impl Strategy<Value = OperationInput> {
    (
        proptest::option::of("[a-z0-9-]{1,16}"),
        proptest::option::of("\\PC{0,12}"),
        proptest::option::of(prop_oneof![Just("Single"), Just("Ha"), Just("Replica")]),
        proptest::option::of(any::<i32>()),
        proptest::option::of(0..=100i32),
        proptest::option::of(prop_oneof![Just("en-us"), Just("zh-cn")]),
    )
        .prop_map(|(id, name, kind, offset, limit, language)| {
            let mut request = OperationInput::new(&LIST_INSTANCES);
            let members = [
                ("id", id.map(Value::from)),
                ("name", name.map(Value::from)),
                ("type", kind.map(Value::from)),
                ("offset", offset.map(Value::from)),
                ("limit", limit.map(Value::from)),
                ("X-Language", language.map(Value::from)),
            ];
            for (name, value) in members {
                if let Some(value) = value {
                    request.set(name, value).expect("value conforms");
                }
            }
            request
        })
}

proptest! {
    #[test]
    fn requests_round_trip(request in list_instances_request()) {
        let json = request.to_json().unwrap();
        let decoded = OperationInput::from_json(&LIST_INSTANCES, &json).unwrap();
        prop_assert_eq!(&decoded, &request);
        let keys: Vec<String> = match serde_json::from_slice::<Value>(&json).unwrap() {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("not an object: {other}"),
        };
        for key in keys {
            prop_assert!(request.is_set(&key));
        }
    }

    #[test]
    fn responses_round_trip(job_id in proptest::option::of("\\PC{0,24}"), status in 100u16..600) {
        let mut response = OperationOutput::new(&DELETE_INSTANCE);
        if let Some(job_id) = job_id {
            response.set("job_id", job_id).unwrap();
        }
        let json = response.to_json().unwrap();
        let mut decoded = OperationOutput::from_json(&DELETE_INSTANCE, &json).unwrap();
        prop_assert_eq!(&decoded, &response);
        decoded.set_status_code(status);
        prop_assert_eq!(decoded.to_json().unwrap(), json);
    }
}
