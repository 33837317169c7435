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

// @tc.name: ut_zip_options_validate_default
// @tc.desc: Test that empty options validate
// @tc.precon: NA
// @tc.step: 1. Validate default options with every field absent
// @tc.expect: Validation succeeds
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_zip_options_validate_default() {
    assert!(ZipOptions::default().validate().is_ok());
}

// @tc.name: ut_zip_options_validate_level
// @tc.desc: Test the accepted compression levels
// @tc.precon: NA
// @tc.step: 1. Validate each accepted level and several rejected ones
// @tc.expect: Only 0, 1, 9 and -1 validate; failures name "level"
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_zip_options_validate_level() {
    for level in [
        compress_level::NO_COMPRESSION,
        compress_level::BEST_SPEED,
        compress_level::BEST_COMPRESSION,
        compress_level::DEFAULT_COMPRESSION,
    ] {
        let options = ZipOptions {
            level: Some(level),
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }
    for level in [2, 8, 10, -2] {
        let options = ZipOptions {
            level: Some(level),
            ..Default::default()
        };
        assert_eq!(options.validate(), Err("level"));
    }
}

// @tc.name: ut_zip_options_validate_mem_level
// @tc.desc: Test the accepted memory levels
// @tc.precon: NA
// @tc.step: 1. Validate each accepted memory level and several rejected ones
// @tc.expect: Only 1, 8 and 9 validate; failures name "memLevel"
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_zip_options_validate_mem_level() {
    for mem_level in [
        mem_level::MEM_LEVEL_MIN,
        mem_level::MEM_LEVEL_DEFAULT,
        mem_level::MEM_LEVEL_MAX,
    ] {
        let options = ZipOptions {
            mem_level: Some(mem_level),
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }
    for mem_level in [0, 2, 7, 10] {
        let options = ZipOptions {
            mem_level: Some(mem_level),
            ..Default::default()
        };
        assert_eq!(options.validate(), Err("memLevel"));
    }
}

// @tc.name: ut_zip_options_validate_strategy
// @tc.desc: Test the accepted compression strategies
// @tc.precon: NA
// @tc.step: 1. Validate each accepted strategy and out-of-range values
// @tc.expect: Only 0 through 4 validate; failures name "strategy"
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_zip_options_validate_strategy() {
    for strategy in 0..=4 {
        let options = ZipOptions {
            strategy: Some(strategy),
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }
    for strategy in [-1, 5, 100] {
        let options = ZipOptions {
            strategy: Some(strategy),
            ..Default::default()
        };
        assert_eq!(options.validate(), Err("strategy"));
    }
}

// @tc.name: ut_zip_options_validate_first_failure
// @tc.desc: Test that validation reports the first offending field
// @tc.precon: NA
// @tc.step: 1. Validate options where both level and strategy are rejected
// @tc.expect: The level field is reported
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_zip_options_validate_first_failure() {
    let options = ZipOptions {
        level: Some(5),
        mem_level: Some(8),
        strategy: Some(9),
    };
    assert_eq!(options.validate(), Err("level"));
}
