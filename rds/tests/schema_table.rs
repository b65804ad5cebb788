/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use rds::operation;
use rds::{
    DecodePolicy, JsonCodec, JsonCodecSettings, Location, OperationOutput, ShapeType, StructSchema,
};
use std::collections::HashSet;

#[test]
fn operation_names_are_unique() {
    let mut seen = HashSet::new();
    for op in operation::all() {
        assert!(seen.insert(op.name()), "{} declared twice", op.name());
    }
}

#[test]
fn structures_are_labelled_after_their_operation() {
    for op in operation::all() {
        assert_eq!(op.input().name(), format!("{}Request", op.name()));
        assert_eq!(op.output().name(), format!("{}Response", op.name()));
    }
}

#[test]
fn every_label_is_bound_to_one_path_member() {
    for op in operation::all() {
        let labels: Vec<_> = op.http().labels().collect();
        for label in &labels {
            if *label == "project_id" {
                continue;
            }
            let bound: Vec<_> = op
                .input()
                .located(Location::Path)
                .filter(|member| member.name() == *label)
                .collect();
            assert_eq!(bound.len(), 1, "{}: label `{}`", op.name(), label);
        }
        for member in op.input().located(Location::Path) {
            assert!(
                labels.contains(&member.name()),
                "{}: `{}` is not in {}",
                op.name(),
                member.name(),
                op.http().uri()
            );
            assert!(member.is_required(), "{}: {}", op.name(), member.name());
        }
    }
}

#[test]
fn payload_members_stand_alone() {
    for op in operation::all() {
        for schema in [op.input(), op.output()] {
            let payloads = schema.located(Location::Payload).count();
            assert!(payloads <= 1, "{}", schema.name());
            if payloads == 1 {
                assert_eq!(
                    schema.located(Location::Body).count(),
                    0,
                    "{} mixes a payload with body members",
                    schema.name()
                );
            }
        }
    }
}

#[test]
fn responses_bind_nothing_to_the_request_line() {
    for op in operation::all() {
        assert_eq!(op.output().located(Location::Path).count(), 0, "{}", op.name());
        assert_eq!(op.output().located(Location::Query).count(), 0, "{}", op.name());
    }
}

fn assert_unique_members(schema: &StructSchema, visited: &mut HashSet<&'static str>) {
    let mut names = HashSet::new();
    for member in schema.members() {
        assert!(
            names.insert(member.name()),
            "{} declares `{}` twice",
            schema.name(),
            member.name()
        );
        let mut shape = member.shape();
        while let ShapeType::List(element) | ShapeType::Map(element) = shape {
            shape = *element;
        }
        if let ShapeType::Structure(nested) = shape {
            if visited.insert(nested.name()) {
                assert_unique_members(nested, visited);
            }
        }
    }
}

#[test]
fn member_names_are_unique_within_each_structure() {
    let mut visited = HashSet::new();
    for op in operation::all() {
        assert_unique_members(op.input(), &mut visited);
        assert_unique_members(op.output(), &mut visited);
    }
}

#[test]
fn language_header_is_optional_everywhere() {
    for op in operation::all() {
        let language = op
            .input()
            .member("X-Language")
            .unwrap_or_else(|| panic!("{} has no X-Language", op.name()));
        assert!(matches!(language.location(), Location::Header));
        assert!(!language.is_required());
    }
}

#[test]
fn zero_filled_empty_responses_serialize() {
    let codec = JsonCodec::new(JsonCodecSettings {
        decode_policy: DecodePolicy::ZeroFill,
    });
    for op in operation::all() {
        let output = OperationOutput::from_json_with(op, b"{}", &codec)
            .unwrap_or_else(|err| panic!("{}: {}", op.name(), err));
        output
            .to_json()
            .unwrap_or_else(|err| panic!("{}: {}", op.name(), err));
    }
}
