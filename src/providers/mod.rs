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

//! Providers
//!
//! These are the cloud providers which contrail knows how to talk to.
//! Internally, each one handles the ins and outs of its provider's REST
//! surface, and externally each exposes typed resource clients over the
//! resources that provider manages.
//!
//! To add a provider, put a `pub mod provider;` line in this file and
//! export a client type which hands out resource clients built on
//! `crate::http`.

pub mod joyent;
pub mod openstack;
