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

use std::borrow::Cow;

use reqwest::{blocking, header, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use slog_scope::info;

use crate::errors::{Error, Result};

#[derive(Debug, Clone)]
pub struct Client {
    client: blocking::Client,
    headers: header::HeaderMap,
}

impl Client {
    pub fn try_new() -> Result<Self> {
        let client = blocking::Client::builder().build()?;
        Ok(Client {
            client,
            headers: header::HeaderMap::new(),
        })
    }

    pub fn header(mut self, k: header::HeaderName, v: header::HeaderValue) -> Self {
        self.headers.append(k, v);
        self
    }

    pub fn get(&self, url: Url) -> RequestBuilder {
        self.request(Method::GET, url, None)
    }

    pub fn post(&self, url: Url, body: Option<Cow<str>>) -> RequestBuilder {
        self.request(Method::POST, url, body)
    }

    pub fn put(&self, url: Url, body: Option<Cow<str>>) -> RequestBuilder {
        self.request(Method::PUT, url, body)
    }

    pub fn delete(&self, url: Url) -> RequestBuilder {
        self.request(Method::DELETE, url, None)
    }

    fn request(&self, method: Method, url: Url, body: Option<Cow<str>>) -> RequestBuilder {
        RequestBuilder {
            method,
            url,
            body: body.map(Cow::into_owned),
            client: self.client.clone(),
            headers: self.headers.clone(),
        }
    }
}

pub struct RequestBuilder {
    method: Method,
    url: Url,
    body: Option<String>,
    client: blocking::Client,
    headers: header::HeaderMap,
}

impl RequestBuilder {
    pub fn header(mut self, k: header::HeaderName, v: header::HeaderValue) -> Self {
        self.headers.append(k, v);
        self
    }

    /// Dispatch a read.
    ///
    /// A 404 is a valid absent outcome here: the provider answers 404
    /// both for a missing resource and for a collection with no entries
    /// yet.
    pub fn send<T>(self) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let req = self.build()?;
        info!("Fetching {}", req.url());
        let resp = self.client.execute(req)?;
        let status = resp.status();
        match status {
            s if s.is_success() => {
                info!("Fetch successful");
                let value = serde_json::from_reader(resp)?;
                Ok(Some(value))
            }
            StatusCode::NOT_FOUND => {
                info!("Fetch failed with 404: resource not found");
                Ok(None)
            }
            s => Err(failure_for(s, resp)),
        }
    }

    /// Dispatch a create, parsing the response body.
    ///
    /// Unlike reads, a 404 is a hard failure: the target collection was
    /// expected to exist.
    pub fn dispatch_create<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url.clone();
        let req = self.build()?;
        info!("Posting {}", req.url());
        let resp = self.client.execute(req)?;
        let status = resp.status();
        match status {
            s if s.is_success() => {
                let value = serde_json::from_reader(resp)?;
                Ok(value)
            }
            StatusCode::NOT_FOUND => Err(Error::ResourceNotFound {
                url: url.to_string(),
            }),
            s => Err(failure_for(s, resp)),
        }
    }

    /// Dispatch an update or delete, discarding any response body.
    ///
    /// Success is any 2xx; the provider answers renames and deletes with
    /// an empty body. A 404 is a hard failure since the target resource
    /// was expected to exist.
    pub fn dispatch_write(self) -> Result<()> {
        let url = self.url.clone();
        let req = self.build()?;
        info!("Dispatching {} {}", req.method(), req.url());
        let resp = self.client.execute(req)?;
        let status = resp.status();
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(Error::ResourceNotFound {
                url: url.to_string(),
            }),
            s => Err(failure_for(s, resp)),
        }
    }

    fn build(&self) -> Result<blocking::Request> {
        let mut builder = self
            .client
            .request(self.method.clone(), self.url.clone())
            .headers(self.headers.clone());
        if let Some(ref content) = self.body {
            builder = builder
                .header(
                    header::CONTENT_TYPE,
                    header::HeaderValue::from_static("application/json"),
                )
                .body(content.clone());
        }
        Ok(builder.build()?)
    }
}

fn failure_for(status: StatusCode, resp: blocking::Response) -> Error {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        info!("Authorization failed: {}", status);
        return Error::AuthorizationFailure { status };
    }
    info!("Failed to fetch: {}", status);
    let body = resp.text().unwrap_or_default();
    Error::RequestFailure { status, body }
}
