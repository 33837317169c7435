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

use crate::bridge::HashParamBridge;

fn empty_bridge() -> InstallParamBridge {
    InstallParamBridge {
        user_id: None,
        install_flag: None,
        is_keep_data: None,
        hash_params: None,
        crowdtest_deadline: None,
    }
}

// @tc.name: ut_convert_install_param_defaults
// @tc.desc: Test the install parameters built from absent options
// @tc.precon: NA
// @tc.step: 1. Convert a bridge param with every field absent
// @tc.expect: The wire defaults come out unchanged
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_convert_install_param_defaults() {
    let converted = convert_install_param(empty_bridge()).unwrap();
    assert_eq!(converted, InstallParam::default());
}

// @tc.name: ut_convert_install_param_flags
// @tc.desc: Test the install flag whitelist and the plain install
//           promotion
// @tc.precon: NA
// @tc.step: 1. Convert params carrying each declared flag and one
//              undeclared flag
// @tc.expect: A plain install is promoted to replacement, free install
//             passes through, undeclared flags are parameter errors
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_convert_install_param_flags() {
    let mut bridge = empty_bridge();
    bridge.install_flag = Some(install_flag::NORMAL);
    let converted = convert_install_param(bridge).unwrap();
    assert_eq!(converted.install_flag, install_flag::REPLACE_EXISTING);

    let mut bridge = empty_bridge();
    bridge.install_flag = Some(install_flag::FREE_INSTALL);
    let converted = convert_install_param(bridge).unwrap();
    assert_eq!(converted.install_flag, install_flag::FREE_INSTALL);

    let mut bridge = empty_bridge();
    bridge.install_flag = Some(7);
    assert!(convert_install_param(bridge).is_err());
}

// @tc.name: ut_convert_install_param_hash_params
// @tc.desc: Test the hash parameter collection
// @tc.precon: NA
// @tc.step: 1. Convert params with two distinct modules
//           2. Convert params repeating a module name
// @tc.expect: Distinct modules collect into the map, a repeat is a
//             parameter error
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_convert_install_param_hash_params() {
    let mut bridge = empty_bridge();
    bridge.hash_params = Some(vec![
        HashParamBridge {
            module_name: "entry".to_string(),
            hash_value: "8f00b2".to_string(),
        },
        HashParamBridge {
            module_name: "feature".to_string(),
            hash_value: "1c9a4e".to_string(),
        },
    ]);
    let converted = convert_install_param(bridge).unwrap();
    assert_eq!(converted.hash_params.len(), 2);
    assert_eq!(
        converted.hash_params.get("entry"),
        Some(&"8f00b2".to_string())
    );

    let mut bridge = empty_bridge();
    bridge.hash_params = Some(vec![
        HashParamBridge {
            module_name: "entry".to_string(),
            hash_value: "8f00b2".to_string(),
        },
        HashParamBridge {
            module_name: "entry".to_string(),
            hash_value: "1c9a4e".to_string(),
        },
    ]);
    assert!(convert_install_param(bridge).is_err());
}

// @tc.name: ut_convert_install_param_values
// @tc.desc: Test the pass through of set option fields
// @tc.precon: NA
// @tc.step: 1. Convert params with user, keep data and deadline set
// @tc.expect: Each set value lands in the wire parameters
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_convert_install_param_values() {
    let bridge = InstallParamBridge {
        user_id: Some(100),
        install_flag: None,
        is_keep_data: Some(true),
        hash_params: None,
        crowdtest_deadline: Some(1700000000),
    };
    let converted = convert_install_param(bridge).unwrap();
    assert_eq!(converted.user_id, 100);
    assert!(converted.is_keep_data);
    assert!(converted.hash_params.is_empty());
    assert_eq!(converted.crowdtest_deadline, 1700000000);
}
