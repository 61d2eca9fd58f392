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

//! Resource clients for the Joyent SmartDataCenter (SDC) CloudAPI.
//!
//! Every request carries the API version marker, a JSON accept header
//! and the account's basic-auth credential.

use reqwest::header::{self, HeaderName, HeaderValue};
use reqwest::Url;

use crate::auth::BasicAuth;
use crate::errors::{Error, Result};
use crate::http;

pub mod keys;

#[cfg(test)]
mod mock_tests;

/// API version marker attached to every SDC request.
pub const SDC_API_VERSION: &str = "~6.5";

/// Entry point for one SDC datacenter endpoint.
///
/// Holds the shared HTTP client with the version, accept and credential
/// headers pre-loaded; resource clients are handed out from here.
#[derive(Clone, Debug)]
pub struct SdcClient {
    client: http::Client,
    endpoint: Url,
}

impl SdcClient {
    pub fn try_new(endpoint: &str, auth: &BasicAuth) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| Error::InvalidUrl(e.to_string()))?;
        let client = http::Client::try_new()?
            .header(
                HeaderName::from_static("x-api-version"),
                HeaderValue::from_static(SDC_API_VERSION),
            )
            .header(header::ACCEPT, HeaderValue::from_static("application/json"))
            .header(header::AUTHORIZATION, auth.header_value()?);
        Ok(SdcClient { client, endpoint })
    }

    /// Client for the SSH key resources of the authenticated account.
    pub fn keys(&self) -> keys::KeyClient {
        keys::KeyClient::new(self.client.clone(), self.endpoint.clone())
    }
}
