/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::shape::ShapeType;

/// Where a member is carried when an operation is bound to HTTP.
///
/// The location only matters to request construction and response parsing. The envelope's own
/// JSON form contains every member regardless of location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// A key of the JSON body object
    Body,
    /// The member's value is the entire JSON body
    Payload,
    /// A `{label}` of the URI template
    Path,
    /// A query string parameter
    Query,
    /// An HTTP header
    Header,
}

/// Schema for a single member of a structure.
///
/// `name` is the exact wire name. RDS mixes conventions freely (`job_id`, `workflowId`,
/// `X-Language`), so no case conversion is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberSchema {
    name: &'static str,
    shape: ShapeType,
    required: bool,
    location: Location,
}

impl MemberSchema {
    /// A member that must be present on the wire.
    pub const fn required(name: &'static str, shape: ShapeType) -> Self {
        Self {
            name,
            shape,
            required: true,
            location: Location::Body,
        }
    }

    /// A member that may be absent on the wire.
    pub const fn optional(name: &'static str, shape: ShapeType) -> Self {
        Self {
            name,
            shape,
            required: false,
            location: Location::Body,
        }
    }

    /// Binds this member to a URI label of the same name.
    pub const fn in_path(self) -> Self {
        self.at(Location::Path)
    }

    /// Binds this member to a query string parameter.
    pub const fn in_query(self) -> Self {
        self.at(Location::Query)
    }

    /// Binds this member to an HTTP header.
    pub const fn in_header(self) -> Self {
        self.at(Location::Header)
    }

    /// Binds this member to the entire HTTP body.
    pub const fn as_payload(self) -> Self {
        self.at(Location::Payload)
    }

    const fn at(self, location: Location) -> Self {
        Self { location, ..self }
    }

    /// Wire name of the member.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Shape of the member's value.
    pub fn shape(&self) -> &ShapeType {
        &self.shape
    }

    /// Returns true if the member must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// HTTP location of the member.
    pub fn location(&self) -> Location {
        self.location
    }
}

/// Schema for a structure: an ordered list of members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StructSchema {
    name: &'static str,
    members: &'static [MemberSchema],
}

impl StructSchema {
    /// Creates a structure schema.
    pub const fn new(name: &'static str, members: &'static [MemberSchema]) -> Self {
        Self { name, members }
    }

    /// Type label of the structure, eg. `CreateDatabaseRequest`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Members in declaration order.
    pub fn members(&self) -> &'static [MemberSchema] {
        self.members
    }

    /// Looks up a member by wire name.
    pub fn member(&self, name: &str) -> Option<&'static MemberSchema> {
        self.members.iter().find(|member| member.name == name)
    }

    /// Members bound to `location`, in declaration order.
    pub fn located(&self, location: Location) -> impl Iterator<Item = &'static MemberSchema> {
        self.members
            .iter()
            .filter(move |member| member.location == location)
    }

    /// The member bound to the entire body, if any.
    pub fn payload(&self) -> Option<&'static MemberSchema> {
        self.located(Location::Payload).next()
    }
}

/// HTTP binding of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpTrait {
    method: &'static str,
    uri: &'static str,
}

impl HttpTrait {
    /// Creates an HTTP binding from a method and a URI template such as
    /// `/v3/{project_id}/instances/{instance_id}`.
    pub const fn new(method: &'static str, uri: &'static str) -> Self {
        Self { method, uri }
    }

    /// HTTP method, eg. `POST`.
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// URI template.
    pub fn uri(&self) -> &'static str {
        self.uri
    }

    /// Names of the `{label}` placeholders of the URI template, in order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.uri
            .split('{')
            .skip(1)
            .filter_map(|segment| segment.split_once('}').map(|(label, _)| label))
    }
}

/// Schema for one API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationSchema {
    name: &'static str,
    http: HttpTrait,
    input: StructSchema,
    output: StructSchema,
}

impl OperationSchema {
    /// Creates an operation schema.
    pub const fn new(
        name: &'static str,
        http: HttpTrait,
        input: StructSchema,
        output: StructSchema,
    ) -> Self {
        Self {
            name,
            http,
            input,
            output,
        }
    }

    /// Operation name, eg. `CreateDatabase`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// HTTP binding of the operation.
    pub fn http(&self) -> &HttpTrait {
        &self.http
    }

    /// Request structure.
    pub fn input(&self) -> &StructSchema {
        &self.input
    }

    /// Response structure.
    pub fn output(&self) -> &StructSchema {
        &self.output
    }
}
