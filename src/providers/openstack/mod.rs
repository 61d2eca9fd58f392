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

//! Resource clients for the OpenStack Quantum network service (v1.0).
//!
//! Quantum is multi-region: the Keystone service catalog hands back one
//! network endpoint per region, and a resource client is selected by
//! region name at the call site. Catalog endpoints are already
//! version-qualified (`.../v1.0`), so requests carry no separate version
//! header, only the accept and token headers.

use std::collections::HashMap;

use reqwest::header::{self, HeaderName, HeaderValue};
use reqwest::Url;

use crate::auth::TokenAuth;
use crate::errors::{Error, Result};
use crate::http;

pub mod networks;


/// Entry point for one tenant's Quantum session.
///
/// Built from a pre-negotiated Keystone exchange: the tenant id, the
/// session token, and the per-region network service endpoints from the
/// service catalog.
#[derive(Clone, Debug)]
pub struct QuantumClient {
    tenant: String,
    token: TokenAuth,
    regions: HashMap<String, String>,
}

impl QuantumClient {
    pub fn new(tenant: &str, token: TokenAuth, regions: HashMap<String, String>) -> Self {
        QuantumClient {
            tenant: tenant.to_string(),
            token,
            regions,
        }
    }

    /// Network resource client for one region.
    pub fn networks_for_region(&self, region: &str) -> Result<networks::NetworkClient> {
        let endpoint = self
            .regions
            .get(region)
            .ok_or_else(|| Error::UnknownRegion(region.to_string()))?;
        let endpoint = Url::parse(endpoint).map_err(|e| Error::InvalidUrl(e.to_string()))?;
        let client = http::Client::try_new()?
            .header(header::ACCEPT, HeaderValue::from_static("application/json"))
            .header(
                HeaderName::from_static("x-auth-token"),
                self.token.header_value()?,
            );
        Ok(networks::NetworkClient::new(client, endpoint, &self.tenant))
    }
}
