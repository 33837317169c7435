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

// @tc.name: ut_install_flag
// @tc.desc: Test install flag values and validation
// @tc.precon: NA
// @tc.step: 1. Assert the declared values
//           2. Validate accepted and rejected flags
// @tc.expect: Only 0, 1 and 16 validate
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_install_flag() {
    assert_eq!(install_flag::NORMAL, 0);
    assert_eq!(install_flag::REPLACE_EXISTING, 1);
    assert_eq!(install_flag::FREE_INSTALL, 16);

    assert!(install_flag::is_valid(0));
    assert!(install_flag::is_valid(1));
    assert!(install_flag::is_valid(16));
    assert!(!install_flag::is_valid(-1));
    assert!(!install_flag::is_valid(2));
    assert!(!install_flag::is_valid(15));
    assert!(!install_flag::is_valid(17));
}

// @tc.name: ut_install_param_default
// @tc.desc: Test the default installation parameters
// @tc.precon: NA
// @tc.step: 1. Construct the default parameters
// @tc.expect: Unspecified user, replace existing, no kept data, no
//             hashes, no crowdtest deadline
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_install_param_default() {
    let param = InstallParam::default();
    assert_eq!(param.user_id, UNSPECIFIED_USERID);
    assert_eq!(param.install_flag, install_flag::REPLACE_EXISTING);
    assert!(!param.is_keep_data);
    assert!(param.hash_params.is_empty());
    assert_eq!(param.crowdtest_deadline, INVALID_CROWDTEST_DEADLINE);
}

// @tc.name: ut_collect_hash_params
// @tc.desc: Test hash parameter collection and duplicate rejection
// @tc.precon: NA
// @tc.step: 1. Collect distinct pairs
//           2. Collect pairs with a repeated module name
// @tc.expect: Distinct pairs collect into a map; repeats return None
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_collect_hash_params() {
    let collected = collect_hash_params([
        ("entry".to_string(), "11aa".to_string()),
        ("feature".to_string(), "22bb".to_string()),
    ])
    .unwrap();
    assert_eq!(collected.len(), 2);
    assert_eq!(collected.get("entry").map(String::as_str), Some("11aa"));
    assert_eq!(collected.get("feature").map(String::as_str), Some("22bb"));

    assert!(collect_hash_params([]).is_some_and(|map| map.is_empty()));

    let duplicated = collect_hash_params([
        ("entry".to_string(), "11aa".to_string()),
        ("entry".to_string(), "33cc".to_string()),
    ]);
    assert!(duplicated.is_none());
}
