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

// @tc.name: ut_common_error_permission_denied
// @tc.desc: Test the permission denied message interpolation
// @tc.precon: NA
// @tc.step: 1. Build a 201 message with an api name and a permission
// @tc.expect: Both the api name and the permission appear in the body
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_common_error_permission_denied() {
    let message = common_error_message(
        error_code::PERMISSION_DENIED,
        "GetDefaultApplication",
        PERMISSION_GET_DEFAULT_APPLICATION,
    );
    assert_eq!(
        message,
        "BusinessError 201: Permission denied. An attempt was made to GetDefaultApplication \
         forbidden by permission: ohos.permission.GET_DEFAULT_APPLICATION."
    );
}

// @tc.name: ut_common_error_capability
// @tc.desc: Test the capability message interpolation
// @tc.precon: NA
// @tc.step: 1. Build an 801 message with an api name
// @tc.expect: The api name appears in the body
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_common_error_capability() {
    let message = common_error_message(error_code::CAPABILITY_NOT_SUPPORTED, "ZipFile", "");
    assert_eq!(
        message,
        "BusinessError 801: Capability not supported. Failed to call ZipFile due to limited \
         device capabilities."
    );
}

// @tc.name: ut_common_error_fixed_bodies
// @tc.desc: Test the fixed message bodies of the common codes
// @tc.precon: NA
// @tc.step: 1. Build messages for system api, parameter, bundle manager
//              and zlib codes plus a code with no entry
// @tc.expect: Each code renders its documented sentence, unknown codes
//             fall back to the service exception sentence
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_common_error_fixed_bodies() {
    let cases = [
        (
            error_code::NOT_SYSTEM_APP,
            "BusinessError 202: Permission denied, non-system app called system api.",
        ),
        (
            error_code::PARAM_CHECK_ERROR,
            "BusinessError 401: Parameter error.",
        ),
        (
            error_code::BUNDLE_NOT_EXIST,
            "BusinessError 17700001: The specified bundle name is not found.",
        ),
        (
            error_code::INVALID_APPID,
            "BusinessError 17700005: The specified app ID is an empty string.",
        ),
        (
            error_code::PROFILE_NOT_EXIST,
            "BusinessError 17700024: The specified profile is not found in the HAP.",
        ),
        (
            error_code::ZLIB_SRC_FILE_INVALID,
            "BusinessError 900001: The input source file is invalid.",
        ),
        (
            error_code::ZLIB_DEST_FILE_INVALID,
            "BusinessError 900002: The input destination file is invalid.",
        ),
        (
            error_code::BUNDLE_SERVICE_EXCEPTION,
            "BusinessError 17700101: The bundle manager service is abnormal.",
        ),
        (
            12345,
            "BusinessError 12345: The bundle manager service is abnormal.",
        ),
    ];
    for (code, expected) in cases {
        assert_eq!(common_error_message(code, "Unused", "unused"), expected);
    }
}

// @tc.name: ut_parameter_type_message
// @tc.desc: Test the parameter type error template
// @tc.precon: NA
// @tc.step: 1. Build the message for a named argument and expected type
// @tc.expect: The argument name is quoted and the type follows
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_parameter_type_message() {
    assert_eq!(
        parameter_type_message("type", "BundleChangedEvent"),
        "BusinessError 401: Parameter error. The type of \"type\" must be BundleChangedEvent."
    );
    assert_eq!(
        parameter_type_message("parameters", "corresponding type"),
        "BusinessError 401: Parameter error. The type of \"parameters\" must be corresponding type."
    );
}
