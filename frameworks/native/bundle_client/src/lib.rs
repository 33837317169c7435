// Copyright (C) 2024 Huawei Device Co., Ltd.
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

//! Native Rust client for the bundle manager services.
//!
//! The `bundle_client` crate talks to the bundle manager service and its
//! side services over IPC. It resolves query arguments, caches hot bundle
//! and application queries per calling identity, and dispatches bundle
//! change events to registered listeners.

/// Argument validation helpers shared by the binding layers.
pub mod check;

/// Identity-gated cache for bundle and application queries.
pub mod cache;

/// Bundle change event subscription and dispatch.
pub mod monitor;

/// Internal proxy implementation for service communication.
mod proxy;

/// Re-export of the service proxies.
pub use proxy::{ArchiveProxy, BundleMgrProxy, DistributedBmsProxy};

// Import utility macros
#[macro_use]
extern crate bundle_utils;

cfg_ohos! {
    use hilog_rust::{HiLogLabel, LogType};

    /// Log label for the BmsClient component.
    ///
    /// Used for consistent logging across the bundle_client crate, with the
    /// domain 0xD001120 (hexadecimal) and the tag "BmsClient".
    pub(crate) const LOG_LABEL: HiLogLabel = HiLogLabel {
        log_type: LogType::LogCore,
        domain: 0xD001120,
        tag: "BmsClient",
    };
}
