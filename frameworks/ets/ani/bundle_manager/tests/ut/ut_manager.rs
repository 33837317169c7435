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

// @tc.name: ut_check_want_explicit
// @tc.desc: Test the explicit form of an ability query want
// @tc.precon: NA
// @tc.step: 1. Check a want naming both a bundle and an ability
// @tc.expect: The want passes without any implicit condition
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_check_want_explicit() {
    let want = Want {
        bundle_name: "com.example.app".to_string(),
        ability_name: "MainAbility".to_string(),
        ..Default::default()
    };
    assert!(check_want(&want));
}

// @tc.name: ut_check_want_implicit
// @tc.desc: Test the implicit forms of an ability query want
// @tc.precon: NA
// @tc.step: 1. Check wants carrying exactly one implicit condition each
// @tc.expect: Action, entities, uri and type each carry the query alone
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_check_want_implicit() {
    let action = Want {
        action: "ohos.want.action.viewData".to_string(),
        ..Default::default()
    };
    assert!(check_want(&action));

    let entities = Want {
        entities: vec!["entity.system.home".to_string()],
        ..Default::default()
    };
    assert!(check_want(&entities));

    let uri = Want {
        uri: "file://docs/a.txt".to_string(),
        ..Default::default()
    };
    assert!(check_want(&uri));

    let mime_type = Want {
        mime_type: "text/plain".to_string(),
        ..Default::default()
    };
    assert!(check_want(&mime_type));
}

// @tc.name: ut_check_want_rejected
// @tc.desc: Test the wants no query can be built from
// @tc.precon: NA
// @tc.step: 1. Check an empty want and wants naming only half an
//              explicit condition
// @tc.expect: Each is rejected
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_check_want_rejected() {
    assert!(!check_want(&Want::default()));

    let bundle_only = Want {
        bundle_name: "com.example.app".to_string(),
        ..Default::default()
    };
    assert!(!check_want(&bundle_only));

    let ability_only = Want {
        ability_name: "MainAbility".to_string(),
        ..Default::default()
    };
    assert!(!check_want(&ability_only));

    // Module and device id never form a query on their own.
    let names_only = Want {
        module_name: "entry".to_string(),
        device_id: "udid-1".to_string(),
        flags: 1,
        ..Default::default()
    };
    assert!(!check_want(&names_only));
}
