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

//! Common utilities for the bundle manager bindings.
//!
//! This crate provides the conditional-compilation helpers and logging macros
//! shared by the bundle manager client and ANI crates.

#![warn(missing_docs)]
#![allow(clippy::crate_in_macro_def)]

/// Internal macros module.
#[macro_use]
mod macros;

// Conditional compilation for non-OHOS platforms
// Provides standard logging macros from the log crate
cfg_not_ohos! {
    pub use log::{debug, error, info};
}

// Conditional compilation for OHOS platform
cfg_ohos! {
    /// HarmonyOS-specific logging module.
    #[macro_use]
    pub mod bms_hilog;
}
