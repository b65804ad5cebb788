/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Declares structure schemas as constants.
///
/// ```ignore
/// structure! {
///     pub TAG = "Tag" [
///         MemberSchema::required("key", ShapeType::String),
///         MemberSchema::optional("value", ShapeType::String),
///     ];
/// }
/// ```
macro_rules! structure {
    ($(
        $(#[$meta:meta])*
        $vis:vis $konst:ident = $name:literal [$($member:expr),* $(,)?];
    )*) => {
        $(
            $(#[$meta])*
            $vis const $konst: $crate::StructSchema = {
                const MEMBERS: &[$crate::MemberSchema] = &[$($member),*];
                $crate::StructSchema::new($name, MEMBERS)
            };
        )*
    };
}

/// Declares the operations of one API area, plus an `OPERATIONS` slice listing them.
///
/// Request and response structures are labelled `<Name>Request` and `<Name>Response`.
///
/// ```ignore
/// operations! {
///     /// Deletes a database instance.
///     DELETE_INSTANCE = DeleteInstance(DELETE "/v3/{project_id}/instances/{instance_id}") {
///         input: [LANGUAGE, INSTANCE_ID],
///         output: [JOB_ID],
///     }
/// }
/// ```
macro_rules! operations {
    ($(
        $(#[$meta:meta])*
        $konst:ident = $name:ident($method:ident $uri:literal) {
            input: [$($input:expr),* $(,)?],
            output: [$($output:expr),* $(,)?] $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            pub const $konst: $crate::OperationSchema = {
                const INPUT: &[$crate::MemberSchema] = &[$($input),*];
                const OUTPUT: &[$crate::MemberSchema] = &[$($output),*];
                $crate::OperationSchema::new(
                    stringify!($name),
                    $crate::HttpTrait::new(stringify!($method), $uri),
                    $crate::StructSchema::new(concat!(stringify!($name), "Request"), INPUT),
                    $crate::StructSchema::new(concat!(stringify!($name), "Response"), OUTPUT),
                )
            };
        )*

        /// Every operation declared in this module, in declaration order.
        pub const OPERATIONS: &[&$crate::OperationSchema] = &[$(&$konst),*];
    };
}
