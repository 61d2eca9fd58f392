//! Network resources under `/tenants/{tenant}/networks`.

use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::Hash;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::http;

/// Minimal identifier-only handle for a network.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct Reference {
    pub id: String,
}

/// A named network.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct Network {
    pub id: String,
    pub name: String,
}

/// A network together with its attached ports.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NetworkDetails {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ports: Vec<Port>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct Port {
    pub id: String,
    pub state: String,
}

#[derive(Deserialize)]
struct NetworkList<T> {
    networks: Vec<T>,
}

#[derive(Deserialize)]
struct NetworkEnvelope<T> {
    network: T,
}

#[derive(Serialize)]
struct NetworkRequest<'a> {
    network: NetworkName<'a>,
}

#[derive(Serialize)]
struct NetworkName<'a> {
    name: &'a str,
}

/// Resource client for one tenant's networks in one region.
#[derive(Clone, Debug)]
pub struct NetworkClient {
    client: http::Client,
    endpoint: Url,
    tenant: String,
}

impl NetworkClient {
    pub(crate) fn new(client: http::Client, endpoint: Url, tenant: &str) -> Self {
        NetworkClient {
            client,
            endpoint,
            tenant: tenant.to_string(),
        }
    }

    fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend(["tenants", self.tenant.as_str()])
            .extend(segments);
        Ok(url)
    }

    /// List id-only references to the tenant's networks.
    pub fn list_references(&self) -> Result<HashSet<Reference>> {
        let list: Option<NetworkList<Reference>> =
            self.client.get(self.url_for(&["networks"])?).send()?;
        Ok(collect(list))
    }

    /// List the tenant's networks with their names.
    pub fn list(&self) -> Result<HashSet<Network>> {
        let list: Option<NetworkList<Network>> = self
            .client
            .get(self.url_for(&["networks", "detail"])?)
            .send()?;
        Ok(collect(list))
    }

    /// Fetch a single network.
    pub fn get(&self, id: &str) -> Result<Option<Network>> {
        let env: Option<NetworkEnvelope<Network>> =
            self.client.get(self.url_for(&["networks", id])?).send()?;
        Ok(env.map(|e| e.network))
    }

    /// Fetch a single network together with its ports.
    pub fn get_details(&self, id: &str) -> Result<Option<NetworkDetails>> {
        let env: Option<NetworkEnvelope<NetworkDetails>> = self
            .client
            .get(self.url_for(&["networks", id, "detail"])?)
            .send()?;
        Ok(env.map(|e| e.network))
    }

    /// Create a named network; the provider answers with its new id.
    pub fn create(&self, name: &str) -> Result<Reference> {
        let body = serde_json::to_string(&NetworkRequest {
            network: NetworkName { name },
        })?;
        let env: NetworkEnvelope<Reference> = self
            .client
            .post(self.url_for(&["networks"])?, Some(Cow::from(body)))
            .dispatch_create()?;
        Ok(env.network)
    }

    /// Rename an existing network. The provider answers a bare 2xx with
    /// no body.
    pub fn rename(&self, id: &str, name: &str) -> Result<()> {
        let body = serde_json::to_string(&NetworkRequest {
            network: NetworkName { name },
        })?;
        self.client
            .put(self.url_for(&["networks", id])?, Some(Cow::from(body)))
            .dispatch_write()
    }

    /// Delete a network.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete(self.url_for(&["networks", id])?)
            .dispatch_write()
    }
}

fn collect<T>(list: Option<NetworkList<T>>) -> HashSet<T>
where
    T: Eq + Hash,
{
    list.map(|l| l.networks.into_iter().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_details_deserialize() {
        let body = r#"{
            "network": {
                "id": "16dba3bc-f3fa-4775-afdc-237e12c72f6a",
                "name": "port-test",
                "ports": [
                    { "id": "98017ddc-efc8-4c25-a915-774b2a633855", "state": "ACTIVE" },
                    { "id": "2a6f84f2-9b9f-4372-8309-24b3a3ff54ba", "state": "DOWN" }
                ]
            }
        }"#;

        let env: NetworkEnvelope<NetworkDetails> = serde_json::from_str(body).unwrap();
        let details = env.network;
        assert_eq!(details.id, "16dba3bc-f3fa-4775-afdc-237e12c72f6a");
        assert_eq!(details.name, "port-test");
        assert_eq!(details.ports.len(), 2);
        assert_eq!(details.ports[0].state, "ACTIVE");
    }

    #[test]
    fn test_network_details_deserialize_without_ports() {
        let details: NetworkDetails =
            serde_json::from_str(r#"{"id":"12345","name":"wibble"}"#).unwrap();
        assert!(details.ports.is_empty());
    }

    #[test]
    fn test_request_body() {
        let body = serde_json::to_string(&NetworkRequest {
            network: NetworkName {
                name: "another-test",
            },
        })
        .unwrap();
        assert_eq!(body, r#"{"network":{"name":"another-test"}}"#);
    }
}
