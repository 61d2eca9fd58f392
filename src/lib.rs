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

//! contrail
//!
//! Typed resource clients for cloud provider REST APIs. Each provider
//! module exposes a small client which builds requests against that
//! provider's HTTP surface and maps responses back into plain domain
//! values. Authentication exchanges and transport tuning stay with the
//! caller; this crate only consumes credentials which already exist.

pub mod auth;
pub mod errors;
pub mod http;
pub mod providers;

pub use crate::errors::{Error, Result};
