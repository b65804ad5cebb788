/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Writing query strings

use crate::label::BASE_SET;
use percent_encoding::utf8_percent_encode;

/// Percent-encodes a query key or value.
pub fn fmt_string<T: AsRef<str>>(s: T) -> String {
    utf8_percent_encode(s.as_ref(), BASE_SET).to_string()
}

/// Appends `key=value` pairs to a path.
#[derive(Debug)]
pub(crate) struct QueryWriter {
    path_and_query: String,
    prefix: char,
}

impl QueryWriter {
    pub(crate) fn new(path: String) -> Self {
        QueryWriter {
            path_and_query: path,
            prefix: '?',
        }
    }

    pub(crate) fn insert(&mut self, k: &str, v: &str) {
        self.path_and_query.push(self.prefix);
        self.prefix = '&';
        self.path_and_query.push_str(&fmt_string(k));
        self.path_and_query.push('=');
        self.path_and_query.push_str(&fmt_string(v));
    }

    pub(crate) fn finish(self) -> String {
        self.path_and_query
    }
}

#[cfg(test)]
mod test {
    use super::QueryWriter;

    #[test]
    fn no_params() {
        let writer = QueryWriter::new("/v3/p/instances".to_owned());
        assert_eq!(writer.finish(), "/v3/p/instances");
    }

    #[test]
    fn params_are_joined_and_encoded() {
        let mut writer = QueryWriter::new("/v3/p/instances".to_owned());
        writer.insert("name", "rds&1");
        writer.insert("limit", "10");
        writer.insert("start_date", "2024-01-01T00:00:00+0800");
        assert_eq!(
            writer.finish(),
            "/v3/p/instances?name=rds%261&limit=10&start_date=2024-01-01T00%3A00%3A00%2B0800"
        );
    }
}
