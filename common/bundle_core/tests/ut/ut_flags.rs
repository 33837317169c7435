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

// @tc.name: ut_flag_values
// @tc.desc: Test the values of the query flag constants
// @tc.precon: NA
// @tc.step: 1. Assert each flag constant matches its published bit
// @tc.expect: All flags match their published bits
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_flag_values() {
    assert_eq!(bundle_flag::GET_BUNDLE_INFO_DEFAULT, 0x00000000);
    assert_eq!(bundle_flag::GET_BUNDLE_INFO_WITH_APPLICATION, 0x00000001);
    assert_eq!(bundle_flag::GET_BUNDLE_INFO_WITH_HAP_MODULE, 0x00000002);
    assert_eq!(bundle_flag::GET_BUNDLE_INFO_WITH_ABILITY, 0x00000004);
    assert_eq!(
        bundle_flag::GET_BUNDLE_INFO_WITH_EXTENSION_ABILITY,
        0x00000008
    );
    assert_eq!(
        bundle_flag::GET_BUNDLE_INFO_WITH_REQUESTED_PERMISSION,
        0x00000010
    );
    assert_eq!(bundle_flag::GET_BUNDLE_INFO_WITH_METADATA, 0x00000020);
    assert_eq!(bundle_flag::GET_BUNDLE_INFO_WITH_DISABLE, 0x00000040);
    assert_eq!(bundle_flag::GET_BUNDLE_INFO_WITH_SIGNATURE_INFO, 0x00000080);

    assert_eq!(application_flag::GET_APPLICATION_INFO_DEFAULT, 0x00000000);
    assert_eq!(
        application_flag::GET_APPLICATION_INFO_WITH_PERMISSION,
        0x00000001
    );
    assert_eq!(
        application_flag::GET_APPLICATION_INFO_WITH_METADATA,
        0x00000002
    );
    assert_eq!(
        application_flag::GET_APPLICATION_INFO_WITH_DISABLE,
        0x00000004
    );

    assert_eq!(ability_flag::GET_ABILITY_INFO_DEFAULT, 0x00000000);
    assert_eq!(ability_flag::GET_ABILITY_INFO_WITH_PERMISSION, 0x00000001);
    assert_eq!(ability_flag::GET_ABILITY_INFO_WITH_APPLICATION, 0x00000002);
    assert_eq!(ability_flag::GET_ABILITY_INFO_WITH_METADATA, 0x00000004);
    assert_eq!(ability_flag::GET_ABILITY_INFO_WITH_DISABLE, 0x00000008);
    assert_eq!(ability_flag::GET_ABILITY_INFO_ONLY_SYSTEM_APP, 0x00000010);

    assert_eq!(
        extension_ability_flag::GET_EXTENSION_ABILITY_INFO_DEFAULT,
        0x00000000
    );
    assert_eq!(
        extension_ability_flag::GET_EXTENSION_ABILITY_INFO_WITH_PERMISSION,
        0x00000001
    );
    assert_eq!(
        extension_ability_flag::GET_EXTENSION_ABILITY_INFO_WITH_APPLICATION,
        0x00000002
    );
    assert_eq!(
        extension_ability_flag::GET_EXTENSION_ABILITY_INFO_WITH_METADATA,
        0x00000004
    );

    assert_eq!(bundle_pack_flag::GET_PACK_INFO_ALL, 0x00000000);
    assert_eq!(bundle_pack_flag::GET_PACKAGES, 0x00000001);
    assert_eq!(bundle_pack_flag::GET_BUNDLE_SUMMARY, 0x00000002);
    assert_eq!(bundle_pack_flag::GET_MODULE_SUMMARY, 0x00000004);
}

// @tc.name: ut_upgrade_flag
// @tc.desc: Test upgrade flag values and validation
// @tc.precon: NA
// @tc.step: 1. Assert the declared values
//           2. Validate in-range and out-of-range flags
// @tc.expect: Only the three declared flags validate
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_upgrade_flag() {
    assert_eq!(upgrade_flag::NOT_UPGRADE, 0);
    assert_eq!(upgrade_flag::SINGLE_UPGRADE, 1);
    assert_eq!(upgrade_flag::RELATION_UPGRADE, 2);

    assert!(upgrade_flag::is_valid(0));
    assert!(upgrade_flag::is_valid(1));
    assert!(upgrade_flag::is_valid(2));
    assert!(!upgrade_flag::is_valid(-1));
    assert!(!upgrade_flag::is_valid(3));
}

// @tc.name: ut_resolve_user_id
// @tc.desc: Test user id resolution from an optional argument and a uid
// @tc.precon: NA
// @tc.step: 1. Resolve with an explicit id, the unspecified id and no id
// @tc.expect: Explicit ids pass through, the rest derive from the uid
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_resolve_user_id() {
    assert_eq!(user_id_from_uid(0), 0);
    assert_eq!(user_id_from_uid(20010043), 100);
    assert_eq!(user_id_from_uid(200000), 1);

    assert_eq!(resolve_user_id(Some(100), 0), 100);
    assert_eq!(resolve_user_id(Some(0), 20010043), 0);
    assert_eq!(resolve_user_id(Some(UNSPECIFIED_USERID), 20010043), 100);
    assert_eq!(resolve_user_id(None, 20010043), 100);
    assert_eq!(resolve_user_id(None, 0), 0);
}
