// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::time::Duration;

/// Production base uri.
pub const PRODUCTION_BASE_URI: &str = "https://api.geniza.ai/v1/";
/// Sandbox base uri.
pub const SANDBOX_BASE_URI: &str = "https://sandbox.geniza.ai/v1/";

/// Timeout applied to every call unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `User-Agent` sent with every request.
///
/// The runtime segment is the version of the rustc that built this crate.
pub const USER_AGENT: &str = concat!(
    "Geniza.ai-SDK-Rust/",
    env!("CARGO_PKG_VERSION"),
    ", Rust/",
    env!("GENIZA_RUSTC_VERSION")
);

// Env values used to configure the client.
/// `sandbox` or `production`.
pub const GENIZA_ENVIRONMENT: &str = "GENIZA_ENVIRONMENT";
/// Overrides the environment's base uri.
pub const GENIZA_BASE_URI: &str = "GENIZA_BASE_URI";
/// Per call timeout, in seconds.
pub const GENIZA_REQUEST_TIMEOUT: &str = "GENIZA_REQUEST_TIMEOUT";
