/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::schema::StructSchema;

/// Enumeration of the shapes a member value can take on the wire.
///
/// Aggregate shapes carry a `'static` reference to their element or structure schema so that a
/// complete model can be written as `const` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    // Simple types
    /// Boolean type
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 64-bit floating point
    Double,
    /// UTF-8 string
    String,
    /// Open content with no schema
    Document,

    // Aggregate types
    /// List of non-null elements
    List(&'static ShapeType),
    /// Map from string keys to non-null values
    Map(&'static ShapeType),
    /// Structure with named members
    Structure(&'static StructSchema),
}

impl ShapeType {
    /// Returns true if this is a simple type.
    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Integer
                | Self::Long
                | Self::Double
                | Self::String
                | Self::Document
        )
    }

    /// Returns true if this is an aggregate type.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_) | Self::Structure(_))
    }

    /// Returns true if values of this shape can be written as a single header or query value.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Boolean | Self::Integer | Self::Long | Self::Double | Self::String
        )
    }

    /// Short name of the shape, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Double => "double",
            Self::String => "string",
            Self::Document => "document",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Structure(schema) => schema.name(),
        }
    }
}
