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

use super::*;

// @tc.name: ut_error_code_values
// @tc.desc: Test the values of the public error code constants
// @tc.precon: NA
// @tc.step: 1. Assert each public error code constant matches its published value
// @tc.expect: All constants have the published values
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_error_code_values() {
    assert_eq!(SUCCESS, 0);
    assert_eq!(PERMISSION_DENIED, 201);
    assert_eq!(NOT_SYSTEM_APP, 202);
    assert_eq!(PARAM_CHECK_ERROR, 401);
    assert_eq!(CAPABILITY_NOT_SUPPORTED, 801);
    assert_eq!(BUNDLE_NOT_EXIST, 17700001);
    assert_eq!(MODULE_NOT_EXIST, 17700002);
    assert_eq!(ABILITY_NOT_EXIST, 17700003);
    assert_eq!(INVALID_USER_ID, 17700004);
    assert_eq!(INVALID_APPID, 17700005);
    assert_eq!(PERMISSION_NOT_EXIST, 17700006);
    assert_eq!(DEVICE_ID_NOT_EXIST, 17700007);
    assert_eq!(INSTALL_PARSE_FAILED, 17700010);
    assert_eq!(INSTALL_VERIFY_SIGNATURE_FAILED, 17700011);
    assert_eq!(INSTALL_HAP_FILEPATH_INVALID, 17700012);
    assert_eq!(INSTALL_HAP_INFO_INCONSISTENT, 17700015);
    assert_eq!(INSTALL_NO_DISK_SPACE, 17700016);
    assert_eq!(INSTALL_VERSION_DOWNGRADE, 17700017);
    assert_eq!(INSTALL_DEPENDENT_MODULE_NOT_EXIST, 17700018);
    assert_eq!(UNINSTALL_PREINSTALLED_APP, 17700020);
    assert_eq!(INVALID_UID, 17700021);
    assert_eq!(INVALID_HAP_PATH, 17700022);
    assert_eq!(DEFAULT_APP_NOT_EXIST, 17700023);
    assert_eq!(PROFILE_NOT_EXIST, 17700024);
    assert_eq!(INVALID_TYPE, 17700025);
    assert_eq!(BUNDLE_IS_DISABLED, 17700026);
    assert_eq!(DISTRIBUTED_SERVICE_NOT_RUNNING, 17700027);
    assert_eq!(ABILITY_AND_TYPE_MISMATCH, 17700028);
    assert_eq!(ABILITY_IS_DISABLED, 17700029);
    assert_eq!(CLEAR_CACHE_UNSUPPORTED, 17700030);
    assert_eq!(BUNDLE_SERVICE_EXCEPTION, 17700101);
    assert_eq!(ZLIB_SRC_FILE_INVALID, 900001);
    assert_eq!(ZLIB_DEST_FILE_INVALID, 900002);
}

// @tc.name: ut_convert_server_code
// @tc.desc: Test the mapping from server query codes to public error codes
// @tc.precon: NA
// @tc.step: 1. Convert each server query code
//           2. Assert the published public code is returned
// @tc.expect: Every server query code maps to its documented public code
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_convert_server_code() {
    assert_eq!(convert_server_code(server::OK), SUCCESS);
    assert_eq!(convert_server_code(server::PERMISSION_DENIED), PERMISSION_DENIED);
    assert_eq!(convert_server_code(server::PARAM_ERROR), PARAM_CHECK_ERROR);
    assert_eq!(convert_server_code(server::BUNDLE_NOT_EXIST), BUNDLE_NOT_EXIST);
    assert_eq!(convert_server_code(server::MODULE_NOT_EXIST), MODULE_NOT_EXIST);
    assert_eq!(convert_server_code(server::ABILITY_NOT_EXIST), ABILITY_NOT_EXIST);
    assert_eq!(convert_server_code(server::INVALID_USER_ID), INVALID_USER_ID);
    assert_eq!(
        convert_server_code(server::QUERY_PERMISSION_DEFINE_FAILED),
        PERMISSION_NOT_EXIST
    );
    assert_eq!(
        convert_server_code(server::DEVICE_ID_NOT_EXIST),
        DEVICE_ID_NOT_EXIST
    );
    assert_eq!(convert_server_code(server::INVALID_UID), INVALID_UID);
    assert_eq!(
        convert_server_code(server::INVALID_HAP_PATH),
        INVALID_HAP_PATH
    );
    assert_eq!(
        convert_server_code(server::DEFAULT_APP_NOT_EXIST),
        DEFAULT_APP_NOT_EXIST
    );
    assert_eq!(convert_server_code(server::INVALID_TYPE), INVALID_TYPE);
    assert_eq!(
        convert_server_code(server::ABILITY_AND_TYPE_MISMATCH),
        ABILITY_AND_TYPE_MISMATCH
    );
    assert_eq!(
        convert_server_code(server::PROFILE_NOT_EXIST),
        PROFILE_NOT_EXIST
    );
    assert_eq!(
        convert_server_code(server::APPLICATION_DISABLED),
        BUNDLE_IS_DISABLED
    );
    assert_eq!(
        convert_server_code(server::ABILITY_DISABLED),
        ABILITY_IS_DISABLED
    );
    assert_eq!(
        convert_server_code(server::CAN_NOT_CLEAR_USER_DATA),
        CLEAR_CACHE_UNSUPPORTED
    );
    assert_eq!(convert_server_code(server::SYSTEM_API_DENIED), NOT_SYSTEM_APP);
    assert_eq!(
        convert_server_code(server::ZLIB_SRC_FILE_DISABLED),
        ZLIB_SRC_FILE_INVALID
    );
    assert_eq!(
        convert_server_code(server::ZLIB_DEST_FILE_DISABLED),
        ZLIB_DEST_FILE_INVALID
    );
}

// @tc.name: ut_convert_server_code_passthrough
// @tc.desc: Test that already-public codes survive conversion unchanged
// @tc.precon: NA
// @tc.step: 1. Convert a code that is already a public code
// @tc.expect: The distributed-service code is returned unchanged
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_convert_server_code_passthrough() {
    assert_eq!(
        convert_server_code(DISTRIBUTED_SERVICE_NOT_RUNNING),
        DISTRIBUTED_SERVICE_NOT_RUNNING
    );
}

// @tc.name: ut_convert_server_code_fallback
// @tc.desc: Test that unknown server codes fall back to the service exception
// @tc.precon: NA
// @tc.step: 1. Convert codes outside the mapping table
// @tc.expect: BUNDLE_SERVICE_EXCEPTION is returned for each
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_convert_server_code_fallback() {
    assert_eq!(convert_server_code(-1), BUNDLE_SERVICE_EXCEPTION);
    assert_eq!(convert_server_code(1), BUNDLE_SERVICE_EXCEPTION);
    assert_eq!(convert_server_code(8520999), BUNDLE_SERVICE_EXCEPTION);
    assert_eq!(convert_server_code(i32::MAX), BUNDLE_SERVICE_EXCEPTION);
}

// @tc.name: ut_convert_install_code
// @tc.desc: Test the mapping from installer statuses to public error codes
// @tc.precon: NA
// @tc.step: 1. Convert each installer status
//           2. Assert the published public code is returned
// @tc.expect: Every installer status maps to its documented public code
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_convert_install_code() {
    assert_eq!(convert_install_code(server::OK), SUCCESS);
    assert_eq!(
        convert_install_code(server::INSTALL_PARSE_FAILED),
        INSTALL_PARSE_FAILED
    );
    assert_eq!(
        convert_install_code(server::INSTALL_VERIFY_SIGNATURE_FAILED),
        INSTALL_VERIFY_SIGNATURE_FAILED
    );
    assert_eq!(
        convert_install_code(server::INSTALL_FILE_PATH_INVALID),
        INSTALL_HAP_FILEPATH_INVALID
    );
    assert_eq!(
        convert_install_code(server::INSTALL_INVALID_HAP_NAME),
        INSTALL_HAP_FILEPATH_INVALID
    );
    assert_eq!(
        convert_install_code(server::INSTALL_INVALID_HAP_SIZE),
        INSTALL_HAP_FILEPATH_INVALID
    );
    assert_eq!(
        convert_install_code(server::INSTALL_HAP_INFO_INCONSISTENT),
        INSTALL_HAP_INFO_INCONSISTENT
    );
    assert_eq!(
        convert_install_code(server::INSTALL_DISK_MEM_INSUFFICIENT),
        INSTALL_NO_DISK_SPACE
    );
    assert_eq!(
        convert_install_code(server::INSTALL_VERSION_DOWNGRADE),
        INSTALL_VERSION_DOWNGRADE
    );
    assert_eq!(
        convert_install_code(server::INSTALL_DEPENDENT_MODULE_NOT_EXIST),
        INSTALL_DEPENDENT_MODULE_NOT_EXIST
    );
    assert_eq!(
        convert_install_code(server::INSTALL_PERMISSION_DENIED),
        PERMISSION_DENIED
    );
    assert_eq!(
        convert_install_code(server::UNINSTALL_PERMISSION_DENIED),
        PERMISSION_DENIED
    );
    assert_eq!(
        convert_install_code(server::UNINSTALL_PREINSTALLED_APP),
        UNINSTALL_PREINSTALLED_APP
    );
    assert_eq!(
        convert_install_code(server::UNINSTALL_MISSING_INSTALLED_BUNDLE),
        BUNDLE_NOT_EXIST
    );
    assert_eq!(
        convert_install_code(server::RECOVER_INVALID_BUNDLE_NAME),
        BUNDLE_NOT_EXIST
    );
    assert_eq!(
        convert_install_code(server::UNINSTALL_MISSING_INSTALLED_MODULE),
        MODULE_NOT_EXIST
    );
    assert_eq!(convert_install_code(server::USER_NOT_EXIST), INVALID_USER_ID);
}

// @tc.name: ut_convert_install_code_fallback
// @tc.desc: Test that unknown installer statuses fall back to the service exception
// @tc.precon: NA
// @tc.step: 1. Convert statuses outside the mapping table
// @tc.expect: BUNDLE_SERVICE_EXCEPTION is returned for each
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_convert_install_code_fallback() {
    assert_eq!(convert_install_code(-1), BUNDLE_SERVICE_EXCEPTION);
    assert_eq!(convert_install_code(8521999), BUNDLE_SERVICE_EXCEPTION);
    assert_eq!(convert_install_code(i32::MIN), BUNDLE_SERVICE_EXCEPTION);
}
