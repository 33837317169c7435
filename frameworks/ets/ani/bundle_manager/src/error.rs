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

//! Business errors raised to ArkTS callers.
//!
//! Every public error code has one fixed message body; the permission
//! denial and capability bodies interpolate the calling api and the
//! permission it requires.

use ani_rs::business_error::BusinessError;
use bundle_core::error_code;

pub(crate) const PERMISSION_GET_BUNDLE_INFO: &str =
    "ohos.permission.GET_BUNDLE_INFO or ohos.permission.GET_BUNDLE_INFO_PRIVILEGED";
pub(crate) const PERMISSION_GET_BUNDLE_INFO_PRIVILEGED: &str =
    "ohos.permission.GET_BUNDLE_INFO_PRIVILEGED";
pub(crate) const PERMISSION_GET_SENSITIVE_PERMISSIONS: &str =
    "ohos.permission.GET_SENSITIVE_PERMISSIONS";
pub(crate) const PERMISSION_INSTALL_BUNDLE: &str = "ohos.permission.INSTALL_BUNDLE";
pub(crate) const PERMISSION_LISTEN_BUNDLE_CHANGE: &str = "ohos.permission.LISTEN_BUNDLE_CHANGE";
pub(crate) const PERMISSION_REMOVE_CACHE_FILES: &str = "ohos.permission.REMOVE_CACHE_FILES";
pub(crate) const PERMISSION_CHANGE_ABILITY_ENABLED_STATE: &str =
    "ohos.permission.CHANGE_ABILITY_ENABLED_STATE";
pub(crate) const PERMISSION_GET_DEFAULT_APPLICATION: &str =
    "ohos.permission.GET_DEFAULT_APPLICATION";
pub(crate) const PERMISSION_SET_DEFAULT_APPLICATION: &str =
    "ohos.permission.SET_DEFAULT_APPLICATION";
pub(crate) const PERMISSION_MANAGE_DISPOSED_APP_STATUS: &str =
    "ohos.permission.MANAGE_DISPOSED_APP_STATUS";
pub(crate) const PERMISSION_NONE: &str = "";

/// Builds the error raised when an operation answers a nonzero public
/// code. `api_name` and `permission` only show up in the codes whose
/// bodies name the call.
pub fn common_error(code: i32, api_name: &str, permission: &str) -> BusinessError {
    BusinessError::new(code, common_error_message(code, api_name, permission))
}

/// Parameter error naming the argument and the type it must have.
pub fn parameter_type_error(name: &str, ty: &str) -> BusinessError {
    BusinessError::new(
        error_code::PARAM_CHECK_ERROR,
        parameter_type_message(name, ty),
    )
}

fn parameter_type_message(name: &str, ty: &str) -> String {
    format!(
        "BusinessError {}: Parameter error. The type of \"{}\" must be {}.",
        error_code::PARAM_CHECK_ERROR,
        name,
        ty
    )
}

fn common_error_message(code: i32, api_name: &str, permission: &str) -> String {
    let body = match code {
        error_code::PERMISSION_DENIED => {
            return format!(
                "BusinessError {}: Permission denied. An attempt was made to {} forbidden by permission: {}.",
                code, api_name, permission
            );
        }
        error_code::NOT_SYSTEM_APP => "Permission denied, non-system app called system api.",
        error_code::PARAM_CHECK_ERROR => "Parameter error.",
        error_code::CAPABILITY_NOT_SUPPORTED => {
            return format!(
                "BusinessError {}: Capability not supported. Failed to call {} due to limited device capabilities.",
                code, api_name
            );
        }
        error_code::BUNDLE_NOT_EXIST => "The specified bundle name is not found.",
        error_code::MODULE_NOT_EXIST => "The specified module name is not found.",
        error_code::ABILITY_NOT_EXIST => "The specified ability name is not found.",
        error_code::INVALID_USER_ID => "The specified user ID is not found.",
        error_code::INVALID_APPID => "The specified app ID is an empty string.",
        error_code::PERMISSION_NOT_EXIST => "The specified permission is not found.",
        error_code::DEVICE_ID_NOT_EXIST => "The specified device ID is not found.",
        error_code::INSTALL_PARSE_FAILED => {
            "Failed to install the HAP because the HAP fails to be parsed."
        }
        error_code::INSTALL_VERIFY_SIGNATURE_FAILED => {
            "Failed to install the HAP because the HAP signature fails to be verified."
        }
        error_code::INSTALL_HAP_FILEPATH_INVALID => {
            "Failed to install the HAP because the HAP path is invalid or the HAP is too large."
        }
        error_code::INSTALL_HAP_INFO_INCONSISTENT => {
            "Failed to install the HAPs because they have different configuration information."
        }
        error_code::INSTALL_NO_DISK_SPACE => {
            "Failed to install the HAP because of insufficient system disk space."
        }
        error_code::INSTALL_VERSION_DOWNGRADE => {
            "Failed to install the HAP since the version of the HAP to install is too early."
        }
        error_code::INSTALL_DEPENDENT_MODULE_NOT_EXIST => {
            "Failed to install because the dependent module does not exist."
        }
        error_code::UNINSTALL_PREINSTALLED_APP => {
            "The specified bundle is a pre-installed bundle and cannot be uninstalled."
        }
        error_code::INVALID_UID => "The specified uid is not found.",
        error_code::INVALID_HAP_PATH => "The input source file is invalid.",
        error_code::DEFAULT_APP_NOT_EXIST => "The specified default app does not exist.",
        error_code::PROFILE_NOT_EXIST => "The specified profile is not found in the HAP.",
        error_code::INVALID_TYPE => "The specified type is invalid.",
        error_code::BUNDLE_IS_DISABLED => "The specified bundle is disabled.",
        error_code::DISTRIBUTED_SERVICE_NOT_RUNNING => "The distributed service is not running.",
        error_code::ABILITY_AND_TYPE_MISMATCH => "The ability does not match the type.",
        error_code::ABILITY_IS_DISABLED => "The specified ability is disabled.",
        error_code::CLEAR_CACHE_UNSUPPORTED => {
            "The specified bundle does not support clearing of cache files."
        }
        error_code::ZLIB_SRC_FILE_INVALID => "The input source file is invalid.",
        error_code::ZLIB_DEST_FILE_INVALID => "The input destination file is invalid.",
        _ => "The bundle manager service is abnormal.",
    };
    format!("BusinessError {}: {}", code, body)
}

#[cfg(test)]
mod ut_error {
    include!("../tests/ut/ut_error.rs");
}
