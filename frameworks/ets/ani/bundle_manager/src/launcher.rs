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

//! Natives of the launcherBundleManager namespace.

use ani_rs::business_error::BusinessError;
use bundle_client::check;
use bundle_client::BundleMgrProxy;

use crate::bridge::{LauncherAbilityInfoBridge, ShortcutInfoBridge};
use crate::error::{common_error, PERMISSION_GET_BUNDLE_INFO_PRIVILEGED};

/// Returns the home screen entries of one bundle for a user.
#[ani_rs::native]
pub fn get_launcher_ability_info(
    bundle_name: String,
    user_id: i32,
) -> Result<Vec<LauncherAbilityInfoBridge>, BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(
            code,
            "GetLauncherAbilityInfo",
            PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
        ));
    }
    match BundleMgrProxy::get_instance().get_launcher_ability_info(&bundle_name, user_id) {
        Ok(infos) => Ok(infos.into_iter().map(Into::into).collect()),
        Err(code) => {
            error!("GetLauncherAbilityInfo of {} failed: {}", bundle_name, code);
            Err(common_error(
                code,
                "GetLauncherAbilityInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_all_launcher_ability_info(
    user_id: i32,
) -> Result<Vec<LauncherAbilityInfoBridge>, BusinessError> {
    match BundleMgrProxy::get_instance().get_all_launcher_ability_info(user_id) {
        Ok(infos) => Ok(infos.into_iter().map(Into::into).collect()),
        Err(code) => {
            error!("GetAllLauncherAbilityInfo failed: {}", code);
            Err(common_error(
                code,
                "GetAllLauncherAbilityInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_shortcut_info(
    bundle_name: String,
    user_id: i32,
) -> Result<Vec<ShortcutInfoBridge>, BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(
            code,
            "GetShortcutInfo",
            PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
        ));
    }
    match BundleMgrProxy::get_instance().get_shortcut_info(&bundle_name, user_id) {
        Ok(infos) => Ok(infos.into_iter().map(Into::into).collect()),
        Err(code) => {
            error!("GetShortcutInfo of {} failed: {}", bundle_name, code);
            Err(common_error(
                code,
                "GetShortcutInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}
