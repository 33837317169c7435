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

//! Shortcut and launcher information used by home screen applications.

use ipc::parcel::{Deserialize, MsgParcel};
use ipc::IpcResult;

use crate::app_info::ApplicationInfo;
use crate::want::ElementName;

/// Target of one shortcut.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortcutWant {
    /// Bundle the shortcut launches.
    pub target_bundle: String,
    /// Module the shortcut launches.
    pub target_module: String,
    /// Ability the shortcut launches.
    pub target_ability: String,
}

impl Deserialize for ShortcutWant {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let target_bundle = parcel.read::<String>().unwrap();
        let target_module = parcel.read::<String>().unwrap();
        let target_ability = parcel.read::<String>().unwrap();
        Ok(ShortcutWant {
            target_bundle,
            target_module,
            target_ability,
        })
    }
}

/// One shortcut a bundle declares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortcutInfo {
    /// Shortcut id, unique within the bundle.
    pub id: String,
    /// Owning bundle name.
    pub bundle_name: String,
    /// Owning module name.
    pub module_name: String,
    /// Ability hosting the shortcut.
    pub host_ability: String,
    /// Icon resource value.
    pub icon: String,
    /// Icon resource id.
    pub icon_id: u32,
    /// Label resource value.
    pub label: String,
    /// Label resource id.
    pub label_id: u32,
    /// Launch targets of the shortcut.
    pub wants: Vec<ShortcutWant>,
}

impl Deserialize for ShortcutInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let id = parcel.read::<String>().unwrap();
        let bundle_name = parcel.read::<String>().unwrap();
        let module_name = parcel.read::<String>().unwrap();
        let host_ability = parcel.read::<String>().unwrap();
        let icon = parcel.read::<String>().unwrap();
        let icon_id = parcel.read::<u32>().unwrap();
        let label = parcel.read::<String>().unwrap();
        let label_id = parcel.read::<u32>().unwrap();

        let wants_len = parcel.read::<u32>().unwrap() as usize;
        let mut wants = Vec::with_capacity(wants_len);
        for _ in 0..wants_len {
            wants.push(parcel.read::<ShortcutWant>().unwrap());
        }

        Ok(ShortcutInfo {
            id,
            bundle_name,
            module_name,
            host_ability,
            icon,
            icon_id,
            label,
            label_id,
            wants,
        })
    }
}

/// Launcher view of one launchable ability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LauncherAbilityInfo {
    /// Owning application information.
    pub application_info: ApplicationInfo,
    /// The launchable element.
    pub element_name: ElementName,
    /// Label resource id.
    pub label_id: u32,
    /// Icon resource id.
    pub icon_id: u32,
    /// User the information was resolved for.
    pub user_id: i32,
    /// Installation time.
    pub install_time: i64,
}

