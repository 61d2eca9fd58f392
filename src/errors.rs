// Copyright 2024 CoreOS, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error taxonomy for resource client operations.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The provider rejected the credentials attached to the request.
    #[error("authorization failed: {status}")]
    AuthorizationFailure { status: StatusCode },

    /// A write targeted a resource the provider does not know about.
    ///
    /// Reads never produce this; a 404 on a read is a valid empty
    /// outcome.
    #[error("resource not found: {url}")]
    ResourceNotFound { url: String },

    /// Any other non-2xx response, with the raw body kept for
    /// diagnostics.
    #[error("request failed with status {status}: {body}")]
    RequestFailure { status: StatusCode, body: String },

    #[error("failed to reach the provider endpoint")]
    Transport(#[from] reqwest::Error),

    #[error("failed json deserialization")]
    Deserialize(#[from] serde_json::Error),

    #[error("invalid header value")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("failed to parse public key: {0}")]
    PublicKey(String),

    #[error("unknown region '{0}'")]
    UnknownRegion(String),
}
