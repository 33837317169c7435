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

use bundle_core::app_info::ApplicationInfo;

// @tc.name: ut_home_want
// @tc.desc: Test the implicit want used to resolve home screen abilities
// @tc.precon: NA
// @tc.step: 1. Build the want for one bundle and for all bundles
// @tc.expect: Action and entity carry the home markers, name is optional
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_home_want() {
    let want = home_want("com.example.launcher");
    assert_eq!(want.bundle_name, "com.example.launcher");
    assert_eq!(want.action, "action.system.home");
    assert_eq!(want.entities, vec!["entity.system.home".to_string()]);
    assert!(want.ability_name.is_empty());

    let want = home_want("");
    assert!(want.bundle_name.is_empty());
    assert_eq!(want.action, "action.system.home");
}

// @tc.name: ut_launcher_info_from_ability
// @tc.desc: Test the client-side launcher ability conversion
// @tc.precon: NA
// @tc.step: 1. Convert a resolved home ability with a known install time
// @tc.expect: Element name, resource ids, user id and install time carry over
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_launcher_info_from_ability() {
    let ability = AbilityInfo {
        bundle_name: "com.example.app".to_string(),
        module_name: "entry".to_string(),
        name: "MainAbility".to_string(),
        label_id: 101,
        icon_id: 202,
        application_info: ApplicationInfo {
            name: "com.example.app".to_string(),
            uid: 20010041,
            ..Default::default()
        },
        ..Default::default()
    };

    let info = launcher_info_from_ability(ability, 1700000000000, 100);

    assert_eq!(info.element_name.bundle_name, "com.example.app");
    assert_eq!(info.element_name.module_name, "entry");
    assert_eq!(info.element_name.ability_name, "MainAbility");
    assert!(info.element_name.device_id.is_empty());
    assert_eq!(info.label_id, 101);
    assert_eq!(info.icon_id, 202);
    assert_eq!(info.user_id, 100);
    assert_eq!(info.install_time, 1700000000000);
    assert_eq!(info.application_info.uid, 20010041);
}
