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

//! Credential material for authenticated requests.
//!
//! Session negotiation happens outside this crate. These types carry
//! credentials which already exist and render them as request headers.

use base64::Engine;
use reqwest::header::HeaderValue;

use crate::errors::Result;

/// Identity/credential pair rendered as an HTTP basic-auth header.
#[derive(Clone, Debug)]
pub struct BasicAuth {
    identity: String,
    credential: String,
}

impl BasicAuth {
    pub fn new<S: Into<String>>(identity: S, credential: S) -> Self {
        BasicAuth {
            identity: identity.into(),
            credential: credential.into(),
        }
    }

    /// Render as an `Authorization` header value.
    pub fn header_value(&self) -> Result<HeaderValue> {
        let raw = format!("{}:{}", self.identity, self.credential);
        let encoded = base64::engine::general_purpose::STANDARD.encode(raw);
        Ok(HeaderValue::from_str(&format!("Basic {encoded}"))?)
    }
}

/// Session token from a prior authentication exchange, rendered as an
/// `X-Auth-Token` header.
#[derive(Clone, Debug)]
pub struct TokenAuth {
    token: String,
}

impl TokenAuth {
    pub fn new<S: Into<String>>(token: S) -> Self {
        TokenAuth {
            token: token.into(),
        }
    }

    /// Render as an `X-Auth-Token` header value.
    pub fn header_value(&self) -> Result<HeaderValue> {
        Ok(HeaderValue::from_str(&self.token)?)
    }
}
