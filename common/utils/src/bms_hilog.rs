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

//! HarmonyOS logging macros for the bundle manager bindings.
//!
//! Thin wrappers over the `hilog_rust` crate that log against the consuming
//! crate's `LOG_LABEL`. All format arguments are logged as public.

/// Logs a debug-level message using HarmonyOS logging.
///
/// Uses the crate's configured `LOG_LABEL` for consistent log identification.
///
/// # Examples
///
/// ```rust
/// use bundle_utils::debug;
///
/// let flags = 0x1;
/// debug!("query flags: {}", flags);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt: literal $(, $args:expr)* $(,)?) => {{
        use std::ffi::{CString, c_char};
        use hilog_rust::{debug, hilog};
        use crate::LOG_LABEL;

        hilog_rust::debug!(LOG_LABEL, $fmt $(, @public($args))*);
    }}
}

/// Logs an info-level message using HarmonyOS logging.
///
/// Uses the crate's configured `LOG_LABEL` for consistent log identification.
///
/// # Examples
///
/// ```rust
/// use bundle_utils::info;
///
/// info!("service connected");
/// ```
#[macro_export]
macro_rules! info {
    ($fmt: literal $(, $args:expr)* $(,)?) => {{
        use std::ffi::{CString, c_char};
        use hilog_rust::{info, hilog};
        use crate::LOG_LABEL;

        hilog_rust::info!(LOG_LABEL, $fmt $(, @public($args))*);
    }}
}

/// Logs an error-level message using HarmonyOS logging.
///
/// Uses the crate's configured `LOG_LABEL` for consistent log identification.
///
/// # Examples
///
/// ```rust
/// use bundle_utils::error;
///
/// let code = 17700001;
/// error!("query failed: {}", code);
/// ```
#[macro_export]
macro_rules! error {
    ($fmt: literal $(, $args:expr)* $(,)?) => {{
        use std::ffi::{CString, c_char};
        use hilog_rust::{error, hilog};
        use crate::LOG_LABEL;

        hilog_rust::error!(LOG_LABEL, $fmt $(, @public($args))*);
    }}
}
