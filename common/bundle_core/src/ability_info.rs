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

//! Ability and extension ability information.

use ipc::parcel::{Deserialize, MsgParcel};
use ipc::IpcResult;

use crate::app_info::{ApplicationInfo, Metadata};

/// Information about one ability of a module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityInfo {
    /// Owning bundle name.
    pub bundle_name: String,
    /// Owning module name.
    pub module_name: String,
    /// Ability name.
    pub name: String,
    /// Label resource value.
    pub label: String,
    /// Label resource id.
    pub label_id: u32,
    /// Description resource value.
    pub description: String,
    /// Description resource id.
    pub description_id: u32,
    /// Icon resource value.
    pub icon: String,
    /// Icon resource id.
    pub icon_id: u32,
    /// Process the ability runs in.
    pub process: String,
    /// Whether other bundles may launch the ability.
    pub exported: bool,
    /// Display orientation.
    pub orientation: u32,
    /// Launch type.
    pub launch_type: u32,
    /// Permissions required to launch the ability.
    pub permissions: Vec<String>,
    /// Device types the ability supports.
    pub device_types: Vec<String>,
    /// Uri the ability serves.
    pub uri: String,
    /// Metadata entries.
    pub metadata: Vec<Metadata>,
    /// Whether the ability is enabled.
    pub enabled: bool,
    /// Owning application information.
    pub application_info: ApplicationInfo,
}

impl Deserialize for AbilityInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let bundle_name = parcel.read::<String>().unwrap();
        let module_name = parcel.read::<String>().unwrap();
        let name = parcel.read::<String>().unwrap();
        let label = parcel.read::<String>().unwrap();
        let label_id = parcel.read::<u32>().unwrap();
        let description = parcel.read::<String>().unwrap();
        let description_id = parcel.read::<u32>().unwrap();
        let icon = parcel.read::<String>().unwrap();
        let icon_id = parcel.read::<u32>().unwrap();
        let process = parcel.read::<String>().unwrap();
        let exported = parcel.read::<bool>().unwrap();
        let orientation = parcel.read::<u32>().unwrap();
        let launch_type = parcel.read::<u32>().unwrap();

        let permissions_len = parcel.read::<u32>().unwrap() as usize;
        let mut permissions = Vec::with_capacity(permissions_len);
        for _ in 0..permissions_len {
            permissions.push(parcel.read::<String>().unwrap());
        }

        let device_types_len = parcel.read::<u32>().unwrap() as usize;
        let mut device_types = Vec::with_capacity(device_types_len);
        for _ in 0..device_types_len {
            device_types.push(parcel.read::<String>().unwrap());
        }

        let uri = parcel.read::<String>().unwrap();

        let metadata_len = parcel.read::<u32>().unwrap() as usize;
        let mut metadata = Vec::with_capacity(metadata_len);
        for _ in 0..metadata_len {
            metadata.push(parcel.read::<Metadata>().unwrap());
        }

        let enabled = parcel.read::<bool>().unwrap();
        let application_info = parcel.read::<ApplicationInfo>().unwrap();

        Ok(AbilityInfo {
            bundle_name,
            module_name,
            name,
            label,
            label_id,
            description,
            description_id,
            icon,
            icon_id,
            process,
            exported,
            orientation,
            launch_type,
            permissions,
            device_types,
            uri,
            metadata,
            enabled,
            application_info,
        })
    }
}

/// Information about one extension ability of a module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtensionAbilityInfo {
    /// Owning bundle name.
    pub bundle_name: String,
    /// Owning module name.
    pub module_name: String,
    /// Extension ability name.
    pub name: String,
    /// Label resource id.
    pub label_id: u32,
    /// Description resource id.
    pub description_id: u32,
    /// Icon resource id.
    pub icon_id: u32,
    /// Whether other bundles may use the extension.
    pub exported: bool,
    /// Extension kind.
    pub extension_ability_type: u32,
    /// Permissions required to use the extension.
    pub permissions: Vec<String>,
    /// Metadata entries.
    pub metadata: Vec<Metadata>,
    /// Whether the extension is enabled.
    pub enabled: bool,
    /// Permission required to read from the extension.
    pub read_permission: String,
    /// Permission required to write to the extension.
    pub write_permission: String,
    /// Owning application information.
    pub application_info: ApplicationInfo,
}

impl Deserialize for ExtensionAbilityInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let bundle_name = parcel.read::<String>().unwrap();
        let module_name = parcel.read::<String>().unwrap();
        let name = parcel.read::<String>().unwrap();
        let label_id = parcel.read::<u32>().unwrap();
        let description_id = parcel.read::<u32>().unwrap();
        let icon_id = parcel.read::<u32>().unwrap();
        let exported = parcel.read::<bool>().unwrap();
        let extension_ability_type = parcel.read::<u32>().unwrap();

        let permissions_len = parcel.read::<u32>().unwrap() as usize;
        let mut permissions = Vec::with_capacity(permissions_len);
        for _ in 0..permissions_len {
            permissions.push(parcel.read::<String>().unwrap());
        }

        let metadata_len = parcel.read::<u32>().unwrap() as usize;
        let mut metadata = Vec::with_capacity(metadata_len);
        for _ in 0..metadata_len {
            metadata.push(parcel.read::<Metadata>().unwrap());
        }

        let enabled = parcel.read::<bool>().unwrap();
        let read_permission = parcel.read::<String>().unwrap();
        let write_permission = parcel.read::<String>().unwrap();
        let application_info = parcel.read::<ApplicationInfo>().unwrap();

        Ok(ExtensionAbilityInfo {
            bundle_name,
            module_name,
            name,
            label_id,
            description_id,
            icon_id,
            exported,
            extension_ability_type,
            permissions,
            metadata,
            enabled,
            read_permission,
            write_permission,
            application_info,
        })
    }
}
