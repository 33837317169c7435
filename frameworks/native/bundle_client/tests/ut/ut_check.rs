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

// @tc.name: ut_check_names
// @tc.desc: Test the error codes the name checks answer for empty input
// @tc.precon: NA
// @tc.step: 1. Run each name check with an empty and a non-empty value
// @tc.expect: Empty values fail with the code of the missing entity
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_check_names() {
    assert_eq!(check_bundle_name(""), Err(error_code::BUNDLE_NOT_EXIST));
    assert_eq!(check_bundle_name("com.example.app"), Ok(()));

    assert_eq!(check_module_name(""), Err(error_code::MODULE_NOT_EXIST));
    assert_eq!(check_module_name("entry"), Ok(()));

    assert_eq!(check_ability_name(""), Err(error_code::ABILITY_NOT_EXIST));
    assert_eq!(check_ability_name("MainAbility"), Ok(()));

    assert_eq!(check_app_id(""), Err(error_code::INVALID_APPID));
    assert_eq!(check_app_id("com.example.app_BNtg4JBClbl"), Ok(()));

    assert_eq!(check_hap_path(""), Err(error_code::INVALID_HAP_PATH));
    assert_eq!(check_hap_path("/data/storage/el2/base/entry.hap"), Ok(()));
}

// @tc.name: ut_check_element_names
// @tc.desc: Test the size bounds of remote ability batches
// @tc.precon: NA
// @tc.step: 1. Check an empty batch, a full batch and an oversized batch
// @tc.expect: Only batches of one through ten element names pass
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_check_element_names() {
    let element = ElementName {
        device_id: "udid-1".to_string(),
        bundle_name: "com.example.app".to_string(),
        ability_name: "MainAbility".to_string(),
        ..Default::default()
    };

    assert_eq!(check_element_names(&[]), Err(error_code::PARAM_CHECK_ERROR));
    assert_eq!(check_element_names(&vec![element.clone(); 10]), Ok(()));
    assert_eq!(
        check_element_names(&vec![element; 11]),
        Err(error_code::PARAM_CHECK_ERROR)
    );
}
