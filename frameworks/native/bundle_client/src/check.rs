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

//! Argument checks shared by the query surfaces.
//!
//! Obviously invalid arguments are rejected here with the same error codes
//! the service would answer, saving the round trip.

use bundle_core::error_code;
use bundle_core::want::ElementName;

/// How many element names one remote ability query may carry.
const REMOTE_ABILITY_QUERY_MAX: usize = 10;

/// Rejects an empty bundle name.
pub fn check_bundle_name(bundle_name: &str) -> Result<(), i32> {
    if bundle_name.is_empty() {
        return Err(error_code::BUNDLE_NOT_EXIST);
    }
    Ok(())
}

/// Rejects an empty module name.
pub fn check_module_name(module_name: &str) -> Result<(), i32> {
    if module_name.is_empty() {
        return Err(error_code::MODULE_NOT_EXIST);
    }
    Ok(())
}

/// Rejects an empty ability name.
pub fn check_ability_name(ability_name: &str) -> Result<(), i32> {
    if ability_name.is_empty() {
        return Err(error_code::ABILITY_NOT_EXIST);
    }
    Ok(())
}

/// Rejects an empty app id.
pub fn check_app_id(app_id: &str) -> Result<(), i32> {
    if app_id.is_empty() {
        return Err(error_code::INVALID_APPID);
    }
    Ok(())
}

/// Rejects an empty hap file path.
pub fn check_hap_path(hap_path: &str) -> Result<(), i32> {
    if hap_path.is_empty() {
        return Err(error_code::INVALID_HAP_PATH);
    }
    Ok(())
}

/// Rejects a remote ability batch that is empty or oversized.
pub fn check_element_names(element_names: &[ElementName]) -> Result<(), i32> {
    if element_names.is_empty() || element_names.len() > REMOTE_ABILITY_QUERY_MAX {
        return Err(error_code::PARAM_CHECK_ERROR);
    }
    Ok(())
}

#[cfg(test)]
mod ut_check {
    include!("../tests/ut/ut_check.rs");
}
