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

//! SSH key resources of the authenticated account, under `/my/keys`.

use std::borrow::Cow;
use std::collections::HashSet;

use openssh_keys::PublicKey;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::http;

/// An SSH public key stored with the provider.
///
/// `created` is provider-issued and absent from create requests.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct Key {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub created: Option<String>,
}

impl Key {
    /// Parse the key material into its OpenSSH form.
    pub fn public_key(&self) -> Result<PublicKey> {
        PublicKey::parse(&self.key).map_err(|e| Error::PublicKey(e.to_string()))
    }
}

#[derive(Serialize)]
struct KeyCreate<'a> {
    name: &'a str,
    key: &'a str,
}

/// Resource client for the account's SSH keys.
#[derive(Clone, Debug)]
pub struct KeyClient {
    client: http::Client,
    endpoint: Url,
}

impl KeyClient {
    pub(crate) fn new(client: http::Client, endpoint: Url) -> Self {
        KeyClient { client, endpoint }
    }

    fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// List all keys. An account with no keys yields an empty set.
    pub fn list(&self) -> Result<HashSet<Key>> {
        let keys: Option<Vec<Key>> = self.client.get(self.url_for(&["my", "keys"])?).send()?;
        Ok(keys.unwrap_or_default().into_iter().collect())
    }

    /// Fetch a single key by name.
    pub fn get(&self, name: &str) -> Result<Option<Key>> {
        self.client.get(self.url_for(&["my", "keys", name])?).send()
    }

    /// Upload a named key. The provider answers 202 Accepted and echoes
    /// the stored key back.
    pub fn create(&self, name: &str, key: &str) -> Result<Key> {
        let body = serde_json::to_string(&KeyCreate { name, key })?;
        self.client
            .post(self.url_for(&["my", "keys"])?, Some(Cow::from(body)))
            .dispatch_create()
    }

    /// Delete a key by name.
    pub fn delete(&self, name: &str) -> Result<()> {
        self.client
            .delete(self.url_for(&["my", "keys", name])?)
            .dispatch_write()
    }
}
