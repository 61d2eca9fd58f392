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

//! http
//!
//! this is a thin abstraction over the blocking reqwest client. It owns
//! the headers shared by every request of one provider client, takes
//! care of automatically deserializing JSON responses, and maps response
//! status codes to typed outcomes. Each dispatch is a single exchange;
//! there is no retrying, caching or batching at this layer.

mod client;
pub use self::client::*;
