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

use bundle_core::ability_info::{AbilityInfo, ExtensionAbilityInfo};
use bundle_core::bundle_info::HapModuleInfo;

fn profile_fixture() -> BundleInfo {
    let ability = AbilityInfo {
        bundle_name: "com.example.app".to_string(),
        module_name: "entry".to_string(),
        name: "MainAbility".to_string(),
        metadata: vec![
            Metadata {
                name: "ohos.ability.form".to_string(),
                value: "{\"forms\":[]}".to_string(),
                resource: "$profile:form_config".to_string(),
            },
            Metadata {
                name: "ohos.ability.shortcuts".to_string(),
                value: "{\"shortcuts\":[]}".to_string(),
                resource: "$profile:shortcuts_config".to_string(),
            },
        ],
        ..Default::default()
    };
    let bare_ability = AbilityInfo {
        bundle_name: "com.example.app".to_string(),
        module_name: "entry".to_string(),
        name: "BareAbility".to_string(),
        ..Default::default()
    };
    let extension = ExtensionAbilityInfo {
        bundle_name: "com.example.app".to_string(),
        module_name: "entry".to_string(),
        name: "FormExtension".to_string(),
        metadata: vec![Metadata {
            name: "ohos.extension.form".to_string(),
            value: "{\"privacy\":true}".to_string(),
            resource: "$profile:form_ext".to_string(),
        }],
        ..Default::default()
    };
    let module = HapModuleInfo {
        name: "entry".to_string(),
        abilities: vec![ability, bare_ability],
        extension_abilities: vec![extension],
        ..Default::default()
    };
    BundleInfo {
        name: "com.example.app".to_string(),
        hap_module_infos: vec![module],
        ..Default::default()
    }
}

// @tc.name: ut_search_ability_profile
// @tc.desc: Test profile collection for one ability
// @tc.precon: NA
// @tc.step: 1. Build a bundle with two metadata entries on one ability
//           2. Search with a metadata name and with an empty name
// @tc.expect: Named search returns the one value, empty name returns both
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_search_ability_profile() {
    let info = profile_fixture();

    let profiles = search_ability_profile(&info, "entry", "MainAbility", "ohos.ability.form");
    assert_eq!(profiles, Ok(vec!["{\"forms\":[]}".to_string()]));

    let profiles = search_ability_profile(&info, "entry", "MainAbility", "").unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0], "{\"forms\":[]}");
    assert_eq!(profiles[1], "{\"shortcuts\":[]}");
}

// @tc.name: ut_search_ability_profile_missing
// @tc.desc: Test profile search error precedence
// @tc.precon: NA
// @tc.step: 1. Search for an unknown ability, a wrong module and an ability
//              without metadata
// @tc.expect: Unknown targets report 17700003, missing profiles 17700024
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_search_ability_profile_missing() {
    let info = profile_fixture();

    assert_eq!(
        search_ability_profile(&info, "entry", "NoSuchAbility", ""),
        Err(error_code::ABILITY_NOT_EXIST)
    );
    assert_eq!(
        search_ability_profile(&info, "feature", "MainAbility", ""),
        Err(error_code::ABILITY_NOT_EXIST)
    );
    assert_eq!(
        search_ability_profile(&info, "entry", "BareAbility", ""),
        Err(error_code::PROFILE_NOT_EXIST)
    );
    assert_eq!(
        search_ability_profile(&info, "entry", "MainAbility", "no.such.metadata"),
        Err(error_code::PROFILE_NOT_EXIST)
    );
}

// @tc.name: ut_search_extension_profile
// @tc.desc: Test profile collection for one extension ability
// @tc.precon: NA
// @tc.step: 1. Search the extension ability of the fixture bundle
// @tc.expect: The matching metadata value is returned, misses report errors
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_search_extension_profile() {
    let info = profile_fixture();

    let profiles =
        search_extension_profile(&info, "entry", "FormExtension", "ohos.extension.form");
    assert_eq!(profiles, Ok(vec!["{\"privacy\":true}".to_string()]));

    assert_eq!(
        search_extension_profile(&info, "entry", "MainAbility", ""),
        Err(error_code::ABILITY_NOT_EXIST)
    );
    assert_eq!(
        search_extension_profile(&info, "entry", "FormExtension", "other"),
        Err(error_code::PROFILE_NOT_EXIST)
    );
}
