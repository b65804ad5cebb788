/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Client configuration

use http::Uri;
use rds_json::{DecodePolicy, JsonCodec, JsonCodecSettings};

/// Errors produced while building a [`Config`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No endpoint was configured.
    #[error("an endpoint is required")]
    MissingEndpoint,

    /// The endpoint could not be parsed as a URI.
    #[error("invalid endpoint `{endpoint}`")]
    InvalidEndpoint {
        /// The rejected endpoint
        endpoint: String,
        /// Parse failure
        #[source]
        source: http::uri::InvalidUri,
    },

    /// The endpoint lacks a scheme or host, or carries a query.
    #[error("endpoint `{0}` must be an absolute URI such as `https://rds.example.com`")]
    NotAbsolute(String),
}

/// Settings shared by every request built for one account and region.
#[derive(Debug, Clone)]
pub struct Config {
    endpoint: String,
    project_id: Option<String>,
    language: Option<String>,
    codec: JsonCodec,
}

impl Config {
    /// Creates a configuration builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Base URI of the service, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Project that fills the `{project_id}` URI label.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Default `X-Language` for requests that don't set one.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Codec used for request and response bodies.
    pub fn codec(&self) -> &JsonCodec {
        &self.codec
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct Builder {
    endpoint: Option<String>,
    project_id: Option<String>,
    language: Option<String>,
    decode_policy: Option<DecodePolicy>,
}

impl Builder {
    /// Sets the service endpoint, eg. `https://rds.cn-north-4.myhuaweicloud.com`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the project ID.
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Sets the default request language, eg. `en-us`.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets what happens when a response omits a required member.
    ///
    /// Defaults to [`DecodePolicy::ZeroFill`].
    pub fn decode_policy(mut self, decode_policy: DecodePolicy) -> Self {
        self.decode_policy = Some(decode_policy);
        self
    }

    /// Validates the endpoint and builds the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let endpoint = self.endpoint.ok_or(ConfigError::MissingEndpoint)?;
        let uri: Uri = endpoint
            .parse()
            .map_err(|source| ConfigError::InvalidEndpoint {
                endpoint: endpoint.clone(),
                source,
            })?;
        if uri.scheme().is_none() || uri.authority().is_none() || uri.query().is_some() {
            return Err(ConfigError::NotAbsolute(endpoint));
        }
        Ok(Config {
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            project_id: self.project_id,
            language: self.language,
            codec: JsonCodec::new(JsonCodecSettings {
                decode_policy: self.decode_policy.unwrap_or_default(),
            }),
        })
    }
}
