/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Building HTTP requests from input envelopes

use crate::config::Config;
use crate::envelope::OperationInput;
use crate::header;
use crate::label::{self, scalar_text};
use crate::operation::{Metadata, SERVICE_NAME};
use crate::query::QueryWriter;
use crate::result::SdkError;
use bytes::Bytes;
use rds_json::{SerializationError, Value};
use rds_types::{Location, MemberSchema};

/// `Content-Type` of every request that has a body.
pub const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8";

/// Header selecting the language of error messages.
pub const LANGUAGE_HEADER: &str = "X-Language";

/// URI label filled from [`Config::project_id`].
pub const PROJECT_ID_LABEL: &str = "project_id";

/// Errors produced while building a request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A member could not be serialized.
    #[error("failed to serialize {operation} request")]
    Serialization {
        /// Name of the operation
        operation: &'static str,
        /// Underlying failure
        #[source]
        source: SerializationError,
    },

    /// A URI label had no value.
    #[error("no value for URI label `{0}`")]
    MissingLabel(&'static str),

    /// A member value has no representation in its location, eg. an object bound to a header.
    #[error("member `{member}` cannot be sent in the {location:?}")]
    Unbindable {
        /// Name of the member
        member: &'static str,
        /// Where the member is bound
        location: Location,
    },

    /// The method, URI or a header was rejected by `http`.
    #[error("invalid HTTP request")]
    Http(#[from] http::Error),
}

impl From<BuildError> for SdkError {
    fn from(err: BuildError) -> Self {
        SdkError::ConstructionFailure(err.into())
    }
}

/// Builds the HTTP request for `input`.
///
/// Members are routed by location: path labels are expanded into the URI template, query
/// members are appended in schema order (lists as repeated keys), header members become
/// headers, and the body is either the JSON object of `Body` members or the serialized
/// `Payload` member. An unset `X-Language` header falls back to [`Config::language`].
///
/// The request's extensions carry the operation's [`Metadata`].
pub fn build_request(
    config: &Config,
    input: &OperationInput,
) -> Result<http::Request<Bytes>, BuildError> {
    let operation = input.operation();
    let schema = input.schema();
    let serialization = |source| BuildError::Serialization {
        operation: operation.name(),
        source,
    };

    for member in schema.members() {
        let location = member.location();
        if member.is_required()
            && !input.is_set(member.name())
            && matches!(location, Location::Query | Location::Header)
            && !is_language(member)
        {
            return Err(serialization(SerializationError::MissingRequired {
                member: member.name().to_owned(),
            }));
        }
    }

    let mut query = QueryWriter::new(expand_uri(config, input)?);
    for member in schema.located(Location::Query) {
        let err = || unbindable(member);
        match input.get(member.name()) {
            None => {}
            Some(Value::Array(items)) => {
                for item in items {
                    query.insert(member.name(), &scalar_text(item).ok_or_else(err)?);
                }
            }
            Some(value) => query.insert(member.name(), &scalar_text(value).ok_or_else(err)?),
        }
    }
    let uri = format!("{}{}", config.endpoint(), query.finish());

    let mut builder = http::Request::builder()
        .method(operation.http().method())
        .uri(uri.as_str())
        .extension(Metadata::new(operation.name(), SERVICE_NAME));
    for member in schema.located(Location::Header) {
        let value = match (input.get(member.name()), config.language()) {
            (Some(value), _) => header::fmt_value(value).ok_or_else(|| unbindable(member))?,
            (None, Some(language)) if is_language(member) => language.to_owned(),
            (None, _) => continue,
        };
        builder = builder.header(member.name(), value);
    }

    let body = match schema.payload() {
        Some(member) => match input.get(member.name()) {
            Some(value) => Some(
                config
                    .codec()
                    .serialize_payload(member, value)
                    .map_err(serialization)?,
            ),
            None if member.is_required() => {
                return Err(serialization(SerializationError::MissingRequired {
                    member: member.name().to_owned(),
                }))
            }
            None => None,
        },
        None if schema.located(Location::Body).next().is_some() => Some(
            config
                .codec()
                .serialize(schema.located(Location::Body), input.raw_fields())
                .map_err(serialization)?,
        ),
        None => None,
    };
    if body.is_some() {
        builder = builder.header(http::header::CONTENT_TYPE, CONTENT_TYPE_JSON);
    }

    tracing::debug!(
        operation = operation.name(),
        method = operation.http().method(),
        uri = %uri,
        "built request"
    );
    Ok(builder.body(body.map(Bytes::from).unwrap_or_default())?)
}

fn expand_uri(config: &Config, input: &OperationInput) -> Result<String, BuildError> {
    let mut path = input.operation().http().uri().to_owned();
    for name in input.operation().http().labels() {
        let value = match input.get(name) {
            Some(value) => scalar_text(value),
            None if name == PROJECT_ID_LABEL => config.project_id().map(str::to_owned),
            None => None,
        }
        .filter(|value| !value.is_empty())
        .ok_or(BuildError::MissingLabel(name))?;
        path = path.replace(&format!("{{{name}}}"), &label::fmt_string(value));
    }
    Ok(path)
}

fn is_language(member: &MemberSchema) -> bool {
    member.name().eq_ignore_ascii_case(LANGUAGE_HEADER)
}

fn unbindable(member: &'static MemberSchema) -> BuildError {
    BuildError::Unbindable {
        member: member.name(),
        location: member.location(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rds_types::{HttpTrait, OperationSchema, ShapeType, StructSchema};
    use serde_json::json;
    use tracing_test::traced_test;

    static LIST_SLOW_LOGS: OperationSchema = {
        const INPUT: &[MemberSchema] = &[
            MemberSchema::optional("X-Language", ShapeType::String).in_header(),
            MemberSchema::required("instance_id", ShapeType::String).in_path(),
            MemberSchema::required("start_date", ShapeType::String).in_query(),
            MemberSchema::optional("type", ShapeType::List(&ShapeType::String)).in_query(),
            MemberSchema::optional("limit", ShapeType::Integer).in_query(),
        ];
        const OUTPUT: &[MemberSchema] = &[];
        OperationSchema::new(
            "ListSlowLogs",
            HttpTrait::new("GET", "/v3/{project_id}/instances/{instance_id}/slowlog"),
            StructSchema::new("ListSlowLogsRequest", INPUT),
            StructSchema::new("ListSlowLogsResponse", OUTPUT),
        )
    };

    static UPDATE_PORT: OperationSchema = {
        const INPUT: &[MemberSchema] = &[
            MemberSchema::required("instance_id", ShapeType::String).in_path(),
            MemberSchema::required("port", ShapeType::Integer),
            MemberSchema::optional("comment", ShapeType::String),
        ];
        const OUTPUT: &[MemberSchema] = &[];
        OperationSchema::new(
            "UpdatePort",
            HttpTrait::new("PUT", "/v3/{project_id}/instances/{instance_id}/port"),
            StructSchema::new("UpdatePortRequest", INPUT),
            StructSchema::new("UpdatePortResponse", OUTPUT),
        )
    };

    fn config() -> Config {
        Config::builder()
            .endpoint("https://rds.example.com")
            .project_id("p1")
            .language("en-us")
            .build()
            .unwrap()
    }

    #[test]
    #[traced_test]
    fn query_and_headers() {
        let input = OperationInput::new(&LIST_SLOW_LOGS)
            .with("instance_id", "i/1")
            .unwrap()
            .with("start_date", "2024-01-01T00:00:00+0800")
            .unwrap()
            .with("type", json!(["INSERT", "SELECT"]))
            .unwrap();
        let request = build_request(&config(), &input).unwrap();
        assert_eq!(request.method(), http::Method::GET);
        assert_eq!(
            request.uri().to_string(),
            "https://rds.example.com/v3/p1/instances/i%2F1/slowlog?start_date=2024-01-01T00%3A00%3A00%2B0800&type=INSERT&type=SELECT"
        );
        assert_eq!(request.headers()["X-Language"], "en-us");
        assert!(request.headers().get(http::header::CONTENT_TYPE).is_none());
        assert!(request.body().is_empty());
        assert_eq!(
            request.extensions().get::<Metadata>(),
            Some(&Metadata::new("ListSlowLogs", "RDS"))
        );
        assert!(logs_contain("built request"));
    }

    #[test]
    fn explicit_language_wins() {
        let input = OperationInput::new(&LIST_SLOW_LOGS)
            .with("instance_id", "i1")
            .unwrap()
            .with("start_date", "2024-01-01T00:00:00+0800")
            .unwrap()
            .with("X-Language", "zh-cn")
            .unwrap();
        let request = build_request(&config(), &input).unwrap();
        assert_eq!(request.headers()["X-Language"], "zh-cn");
    }

    #[test]
    fn required_query_member() {
        let input = OperationInput::new(&LIST_SLOW_LOGS)
            .with("instance_id", "i1")
            .unwrap();
        let err = build_request(&config(), &input).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Serialization {
                operation: "ListSlowLogs",
                source: SerializationError::MissingRequired { .. }
            }
        ));
    }

    #[test]
    fn body_members() {
        let input = OperationInput::new(&UPDATE_PORT)
            .with("instance_id", "i1")
            .unwrap()
            .with("port", 8635)
            .unwrap();
        let request = build_request(&config(), &input).unwrap();
        assert_eq!(request.method(), http::Method::PUT);
        assert_eq!(
            request.headers()[http::header::CONTENT_TYPE],
            CONTENT_TYPE_JSON
        );
        assert_eq!(request.body().as_ref(), br#"{"port":8635}"#);
    }

    #[test]
    fn missing_labels() {
        let input = OperationInput::new(&UPDATE_PORT).with("port", 1).unwrap();
        assert!(matches!(
            build_request(&config(), &input),
            Err(BuildError::MissingLabel("instance_id"))
        ));

        let input = input.with("instance_id", "i1").unwrap();
        let config = Config::builder()
            .endpoint("https://rds.example.com")
            .build()
            .unwrap();
        assert!(matches!(
            build_request(&config, &input),
            Err(BuildError::MissingLabel("project_id"))
        ));
    }
}
