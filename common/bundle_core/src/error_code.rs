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

//! Error codes surfaced to API callers.
//!
//! The public constants are the stable contract callers match on. Services
//! report their own result codes in reply parcels; [`convert_server_code`]
//! and [`convert_install_code`] fold those into the public contract.

// General status codes
/// Operation completed successfully.
pub const SUCCESS: i32 = 0;

// Permission and access error codes
/// Caller lacks the permission the operation requires.
pub const PERMISSION_DENIED: i32 = 201;

/// A non-system application called a system API.
pub const NOT_SYSTEM_APP: i32 = 202;

/// Invalid or missing required parameters.
pub const PARAM_CHECK_ERROR: i32 = 401;

/// The device does not support the requested capability.
pub const CAPABILITY_NOT_SUPPORTED: i32 = 801;

// Bundle manager error codes
/// The specified bundle name is not found.
pub const BUNDLE_NOT_EXIST: i32 = 17700001;

/// The specified module name is not found.
pub const MODULE_NOT_EXIST: i32 = 17700002;

/// The specified ability name is not found.
pub const ABILITY_NOT_EXIST: i32 = 17700003;

/// The specified user id is not found.
pub const INVALID_USER_ID: i32 = 17700004;

/// The specified app id is an empty string.
pub const INVALID_APPID: i32 = 17700005;

/// The specified permission is not declared on the device.
pub const PERMISSION_NOT_EXIST: i32 = 17700006;

/// The specified device id is not found.
pub const DEVICE_ID_NOT_EXIST: i32 = 17700007;

// Installation error codes
/// Failed to install because parsing the HAP failed.
pub const INSTALL_PARSE_FAILED: i32 = 17700010;

/// Failed to install because signature verification failed.
pub const INSTALL_VERIFY_SIGNATURE_FAILED: i32 = 17700011;

/// The HAP file path is invalid or the file is too large.
pub const INSTALL_HAP_FILEPATH_INVALID: i32 = 17700012;

/// Multiple HAPs carry inconsistent configuration information.
pub const INSTALL_HAP_INFO_INCONSISTENT: i32 = 17700015;

/// No enough disk space left for installation.
pub const INSTALL_NO_DISK_SPACE: i32 = 17700016;

/// The new version is lower than the installed one.
pub const INSTALL_VERSION_DOWNGRADE: i32 = 17700017;

/// A module the HAP depends on is not installed.
pub const INSTALL_DEPENDENT_MODULE_NOT_EXIST: i32 = 17700018;

/// Preinstalled applications cannot be uninstalled.
pub const UNINSTALL_PREINSTALLED_APP: i32 = 17700020;

/// The specified uid is invalid.
pub const INVALID_UID: i32 = 17700021;

/// The input source file is invalid.
pub const INVALID_HAP_PATH: i32 = 17700022;

// Default application error codes
/// The specified default application does not exist.
pub const DEFAULT_APP_NOT_EXIST: i32 = 17700023;

/// The specified profile is not found in the HAP.
pub const PROFILE_NOT_EXIST: i32 = 17700024;

/// The specified type name is invalid.
pub const INVALID_TYPE: i32 = 17700025;

/// The specified bundle is disabled.
pub const BUNDLE_IS_DISABLED: i32 = 17700026;

/// The distributed bundle management service is not running.
pub const DISTRIBUTED_SERVICE_NOT_RUNNING: i32 = 17700027;

/// The ability does not match the given type.
pub const ABILITY_AND_TYPE_MISMATCH: i32 = 17700028;

/// The specified ability is disabled.
pub const ABILITY_IS_DISABLED: i32 = 17700029;

/// The application cannot clear its cache files.
pub const CLEAR_CACHE_UNSUPPORTED: i32 = 17700030;

/// The bundle manager service is abnormal. Fallback for every server code
/// with no entry in the translation table.
pub const BUNDLE_SERVICE_EXCEPTION: i32 = 17700101;

// Archive error codes
/// The source file for an archive operation is invalid.
pub const ZLIB_SRC_FILE_INVALID: i32 = 900001;

/// The destination file for an archive operation is invalid.
pub const ZLIB_DEST_FILE_INVALID: i32 = 900002;

/// Result codes the services write into reply parcels and through the
/// install status receiver. Client code never surfaces these directly.
pub mod server {
    /// Operation completed successfully.
    pub const OK: i32 = 0;

    // Query result codes
    pub const PERMISSION_DENIED: i32 = 8520001;
    pub const PARAM_ERROR: i32 = 8520002;
    pub const BUNDLE_NOT_EXIST: i32 = 8520003;
    pub const MODULE_NOT_EXIST: i32 = 8520004;
    pub const ABILITY_NOT_EXIST: i32 = 8520005;
    pub const INVALID_USER_ID: i32 = 8520006;
    pub const QUERY_PERMISSION_DEFINE_FAILED: i32 = 8520007;
    pub const DEVICE_ID_NOT_EXIST: i32 = 8520008;
    pub const INVALID_UID: i32 = 8520009;
    pub const INVALID_HAP_PATH: i32 = 8520010;
    pub const DEFAULT_APP_NOT_EXIST: i32 = 8520011;
    pub const INVALID_TYPE: i32 = 8520012;
    pub const ABILITY_AND_TYPE_MISMATCH: i32 = 8520013;
    pub const PROFILE_NOT_EXIST: i32 = 8520014;
    pub const APPLICATION_DISABLED: i32 = 8520015;
    pub const ABILITY_DISABLED: i32 = 8520016;
    pub const CAN_NOT_CLEAR_USER_DATA: i32 = 8520017;
    pub const SYSTEM_API_DENIED: i32 = 8520018;
    pub const ZLIB_SRC_FILE_DISABLED: i32 = 8520019;
    pub const ZLIB_DEST_FILE_DISABLED: i32 = 8520020;

    // Install statuses reported through the status receiver
    pub const INSTALL_PARSE_FAILED: i32 = 8521001;
    pub const INSTALL_VERIFY_SIGNATURE_FAILED: i32 = 8521002;
    pub const INSTALL_FILE_PATH_INVALID: i32 = 8521003;
    pub const INSTALL_INVALID_HAP_NAME: i32 = 8521004;
    pub const INSTALL_INVALID_HAP_SIZE: i32 = 8521005;
    pub const INSTALL_HAP_INFO_INCONSISTENT: i32 = 8521006;
    pub const INSTALL_DISK_MEM_INSUFFICIENT: i32 = 8521007;
    pub const INSTALL_VERSION_DOWNGRADE: i32 = 8521008;
    pub const INSTALL_DEPENDENT_MODULE_NOT_EXIST: i32 = 8521009;
    pub const INSTALL_PERMISSION_DENIED: i32 = 8521010;
    pub const UNINSTALL_PERMISSION_DENIED: i32 = 8521011;
    pub const UNINSTALL_PREINSTALLED_APP: i32 = 8521012;
    pub const UNINSTALL_MISSING_INSTALLED_BUNDLE: i32 = 8521013;
    pub const UNINSTALL_MISSING_INSTALLED_MODULE: i32 = 8521014;
    pub const USER_NOT_EXIST: i32 = 8521015;
    pub const RECOVER_INVALID_BUNDLE_NAME: i32 = 8521016;
}

/// Translates a server reply code into the public contract.
///
/// Every code without a table entry folds to [`BUNDLE_SERVICE_EXCEPTION`].
/// The distributed service reports the public code directly, so 17700027
/// passes through unchanged.
pub fn convert_server_code(code: i32) -> i32 {
    match code {
        server::OK => SUCCESS,
        server::PERMISSION_DENIED => PERMISSION_DENIED,
        server::PARAM_ERROR => PARAM_CHECK_ERROR,
        server::BUNDLE_NOT_EXIST => BUNDLE_NOT_EXIST,
        server::MODULE_NOT_EXIST => MODULE_NOT_EXIST,
        server::ABILITY_NOT_EXIST => ABILITY_NOT_EXIST,
        server::INVALID_USER_ID => INVALID_USER_ID,
        server::QUERY_PERMISSION_DEFINE_FAILED => PERMISSION_NOT_EXIST,
        server::DEVICE_ID_NOT_EXIST => DEVICE_ID_NOT_EXIST,
        server::INVALID_UID => INVALID_UID,
        server::INVALID_HAP_PATH => INVALID_HAP_PATH,
        server::DEFAULT_APP_NOT_EXIST => DEFAULT_APP_NOT_EXIST,
        server::INVALID_TYPE => INVALID_TYPE,
        server::ABILITY_AND_TYPE_MISMATCH => ABILITY_AND_TYPE_MISMATCH,
        server::PROFILE_NOT_EXIST => PROFILE_NOT_EXIST,
        server::APPLICATION_DISABLED => BUNDLE_IS_DISABLED,
        server::ABILITY_DISABLED => ABILITY_IS_DISABLED,
        server::CAN_NOT_CLEAR_USER_DATA => CLEAR_CACHE_UNSUPPORTED,
        server::SYSTEM_API_DENIED => NOT_SYSTEM_APP,
        server::ZLIB_SRC_FILE_DISABLED => ZLIB_SRC_FILE_INVALID,
        server::ZLIB_DEST_FILE_DISABLED => ZLIB_DEST_FILE_INVALID,
        DISTRIBUTED_SERVICE_NOT_RUNNING => DISTRIBUTED_SERVICE_NOT_RUNNING,
        _ => BUNDLE_SERVICE_EXCEPTION,
    }
}

/// Translates an install status from the status receiver into the public
/// contract. Unknown statuses fold to [`BUNDLE_SERVICE_EXCEPTION`].
pub fn convert_install_code(code: i32) -> i32 {
    match code {
        server::OK => SUCCESS,
        server::INSTALL_PARSE_FAILED => INSTALL_PARSE_FAILED,
        server::INSTALL_VERIFY_SIGNATURE_FAILED => INSTALL_VERIFY_SIGNATURE_FAILED,
        server::INSTALL_FILE_PATH_INVALID
        | server::INSTALL_INVALID_HAP_NAME
        | server::INSTALL_INVALID_HAP_SIZE => INSTALL_HAP_FILEPATH_INVALID,
        server::INSTALL_HAP_INFO_INCONSISTENT => INSTALL_HAP_INFO_INCONSISTENT,
        server::INSTALL_DISK_MEM_INSUFFICIENT => INSTALL_NO_DISK_SPACE,
        server::INSTALL_VERSION_DOWNGRADE => INSTALL_VERSION_DOWNGRADE,
        server::INSTALL_DEPENDENT_MODULE_NOT_EXIST => INSTALL_DEPENDENT_MODULE_NOT_EXIST,
        server::INSTALL_PERMISSION_DENIED | server::UNINSTALL_PERMISSION_DENIED => {
            PERMISSION_DENIED
        }
        server::UNINSTALL_PREINSTALLED_APP => UNINSTALL_PREINSTALLED_APP,
        server::UNINSTALL_MISSING_INSTALLED_BUNDLE | server::RECOVER_INVALID_BUNDLE_NAME => {
            BUNDLE_NOT_EXIST
        }
        server::UNINSTALL_MISSING_INSTALLED_MODULE => MODULE_NOT_EXIST,
        server::USER_NOT_EXIST => INVALID_USER_ID,
        _ => BUNDLE_SERVICE_EXCEPTION,
    }
}

#[cfg(test)]
mod ut_error_code {
    include!("../tests/ut/ut_error_code.rs");
}
