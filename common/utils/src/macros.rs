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

//! Conditional compilation utility macros.
//!
//! Gate items on the test configuration or on the `ohos` cargo feature so
//! that device-only code stays out of host builds.

/// Includes the wrapped items only when compiled in test mode.
#[macro_export]
macro_rules! cfg_test {
    ($($item:item)*) => {
        $(
            #[cfg(test)]
            $item
        )*
    }
}

/// Includes the wrapped items only when not compiled in test mode.
#[macro_export]
macro_rules! cfg_not_test {
    ($($item:item)*) => {
        $(
            #[cfg(not(test))]
            $item
        )*
    }
}

/// Includes the wrapped items only when the "ohos" feature is enabled.
///
/// # Examples
///
/// ```rust
/// use bundle_utils::cfg_ohos;
///
/// cfg_ohos! {
///     fn device_only() -> &'static str {
///         "OHOS specific implementation"
///     }
/// }
/// ```
#[macro_export]
macro_rules! cfg_ohos {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "ohos")]
            $item
        )*
    }
}

/// Includes the wrapped items only when the "ohos" feature is not enabled.
///
/// # Examples
///
/// ```rust
/// use bundle_utils::cfg_not_ohos;
///
/// cfg_not_ohos! {
///     fn host_only() -> &'static str {
///         "Standard implementation"
///     }
/// }
/// ```
#[macro_export]
macro_rules! cfg_not_ohos {
    ($($item:item)*) => {
        $(
            #[cfg(not(feature = "ohos"))]
            $item
        )*
    }
}
