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

//! Launcher and shortcut queries.
//!
//! Launcher ability information has no transaction of its own. The home
//! screen abilities are resolved with an implicit want query and converted
//! client-side, picking the install time up from the owning bundle.

// Standard library imports
use std::collections::HashMap;

// External dependencies
use ipc::parcel::MsgParcel;

// Bundle core dependencies
use bundle_core::ability_info::AbilityInfo;
use bundle_core::error_code::{self, convert_server_code};
use bundle_core::flags::{ability_flag, bundle_flag};
use bundle_core::interface::{self, bundle_mgr};
use bundle_core::shortcut::{LauncherAbilityInfo, ShortcutInfo};
use bundle_core::want::{ElementName, Want};

// Local dependencies
use crate::proxy::BundleMgrProxy;

/// Action carried by the home screen want.
const ACTION_HOME: &str = "action.system.home";
/// Entity carried by the home screen want.
const ENTITY_HOME: &str = "entity.system.home";

impl BundleMgrProxy {
    /// Retrieves the launcher abilities of one bundle.
    pub fn get_launcher_ability_info(
        &self,
        bundle_name: &str,
        user_id: i32,
    ) -> Result<Vec<LauncherAbilityInfo>, i32> {
        let want = home_want(bundle_name);
        let abilities = self.query_ability_infos(
            &want,
            ability_flag::GET_ABILITY_INFO_WITH_APPLICATION as i32,
            user_id,
        )?;
        self.compose_launcher_infos(abilities, user_id)
    }

    /// Retrieves the launcher abilities of every bundle installed for a
    /// user.
    pub fn get_all_launcher_ability_info(
        &self,
        user_id: i32,
    ) -> Result<Vec<LauncherAbilityInfo>, i32> {
        let want = home_want("");
        let abilities = self.query_ability_infos(
            &want,
            ability_flag::GET_ABILITY_INFO_WITH_APPLICATION as i32,
            user_id,
        )?;
        self.compose_launcher_infos(abilities, user_id)
    }

    /// Retrieves the shortcuts declared by one bundle.
    pub fn get_shortcut_info(
        &self,
        bundle_name: &str,
        user_id: i32,
    ) -> Result<Vec<ShortcutInfo>, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&user_id).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_SHORTCUT_INFO, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }

        let len = reply.read::<u32>().unwrap();
        let mut infos = Vec::with_capacity(len as usize);
        for _ in 0..len {
            infos.push(reply.read::<ShortcutInfo>().unwrap());
        }
        Ok(infos)
    }

    /// Converts home screen abilities into launcher ability information.
    ///
    /// The install time lives on the bundle, not the ability, so each
    /// distinct bundle is fetched once.
    fn compose_launcher_infos(
        &self,
        abilities: Vec<AbilityInfo>,
        user_id: i32,
    ) -> Result<Vec<LauncherAbilityInfo>, i32> {
        let mut install_times: HashMap<String, i64> = HashMap::new();
        let mut infos = Vec::with_capacity(abilities.len());
        for ability in abilities {
            let install_time = match install_times.get(&ability.bundle_name) {
                Some(time) => *time,
                None => {
                    let bundle = self.get_bundle_info(
                        &ability.bundle_name,
                        bundle_flag::GET_BUNDLE_INFO_DEFAULT as i32,
                        user_id,
                    )?;
                    install_times.insert(ability.bundle_name.clone(), bundle.install_time);
                    bundle.install_time
                }
            };
            infos.push(launcher_info_from_ability(ability, install_time, user_id));
        }
        Ok(infos)
    }
}

/// Builds the implicit want matching the home screen abilities of
/// `bundle_name`, or of every bundle when the name is empty.
fn home_want(bundle_name: &str) -> Want {
    Want {
        bundle_name: bundle_name.to_string(),
        action: ACTION_HOME.to_string(),
        entities: vec![ENTITY_HOME.to_string()],
        ..Default::default()
    }
}

/// Builds one launcher ability information from a resolved home ability.
fn launcher_info_from_ability(
    ability: AbilityInfo,
    install_time: i64,
    user_id: i32,
) -> LauncherAbilityInfo {
    let element_name = ElementName {
        bundle_name: ability.bundle_name.clone(),
        module_name: ability.module_name.clone(),
        ability_name: ability.name.clone(),
        ..Default::default()
    };
    LauncherAbilityInfo {
        application_info: ability.application_info,
        element_name,
        label_id: ability.label_id,
        icon_id: ability.icon_id,
        user_id,
        install_time,
    }
}

#[cfg(test)]
mod ut_launcher {
    include!("../../tests/ut/ut_launcher.rs");
}
