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

//! Application level information returned by the bundle manager service.

use ipc::parcel::{Deserialize, MsgParcel};
use ipc::IpcResult;

/// One metadata entry declared in a module configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Metadata name.
    pub name: String,
    /// Metadata value.
    pub value: String,
    /// Resource the entry points at.
    pub resource: String,
}

impl Deserialize for Metadata {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let name = parcel.read::<String>().unwrap();
        let value = parcel.read::<String>().unwrap();
        let resource = parcel.read::<String>().unwrap();
        Ok(Metadata {
            name,
            value,
            resource,
        })
    }
}

/// Metadata entries of one module, keyed by the module name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleMetadata {
    /// Name of the module the entries belong to.
    pub module_name: String,
    /// Metadata entries of the module.
    pub metadata: Vec<Metadata>,
}

impl Deserialize for ModuleMetadata {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let module_name = parcel.read::<String>().unwrap();
        let metadata_len = parcel.read::<u32>().unwrap() as usize;
        let mut metadata = Vec::with_capacity(metadata_len);
        for _ in 0..metadata_len {
            metadata.push(parcel.read::<Metadata>().unwrap());
        }
        Ok(ModuleMetadata {
            module_name,
            metadata,
        })
    }
}

/// Information about one installed application.
///
/// Populated entirely by the bundle manager service; the optional
/// sections follow the application query flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationInfo {
    /// Application name.
    pub name: String,
    /// Description resource value.
    pub description: String,
    /// Description resource id.
    pub description_id: u32,
    /// Whether the application is enabled.
    pub enabled: bool,
    /// Label resource value.
    pub label: String,
    /// Label resource id.
    pub label_id: u32,
    /// Icon resource value.
    pub icon: String,
    /// Icon resource id.
    pub icon_id: u32,
    /// Process the application runs in.
    pub process: String,
    /// Permissions the application holds.
    pub permissions: Vec<String>,
    /// Installation directory.
    pub code_path: String,
    /// Whether the application can be removed.
    pub removable: bool,
    /// Access token of the application.
    pub access_token_id: u32,
    /// Uid of the application under its user.
    pub uid: i32,
    /// Distribution type of the signing certificate.
    pub app_distribution_type: String,
    /// Provision type of the signing certificate.
    pub app_provision_type: String,
    /// Whether this is a system application.
    pub system_app: bool,
    /// Whether the application is a debug build.
    pub debug: bool,
    /// Metadata grouped by module.
    pub metadata: Vec<ModuleMetadata>,
}

impl Deserialize for ApplicationInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let name = parcel.read::<String>().unwrap();
        let description = parcel.read::<String>().unwrap();
        let description_id = parcel.read::<u32>().unwrap();
        let enabled = parcel.read::<bool>().unwrap();
        let label = parcel.read::<String>().unwrap();
        let label_id = parcel.read::<u32>().unwrap();
        let icon = parcel.read::<String>().unwrap();
        let icon_id = parcel.read::<u32>().unwrap();
        let process = parcel.read::<String>().unwrap();

        let permissions_len = parcel.read::<u32>().unwrap() as usize;
        let mut permissions = Vec::with_capacity(permissions_len);
        for _ in 0..permissions_len {
            permissions.push(parcel.read::<String>().unwrap());
        }

        let code_path = parcel.read::<String>().unwrap();
        let removable = parcel.read::<bool>().unwrap();
        let access_token_id = parcel.read::<u32>().unwrap();
        let uid = parcel.read::<i32>().unwrap();
        let app_distribution_type = parcel.read::<String>().unwrap();
        let app_provision_type = parcel.read::<String>().unwrap();
        let system_app = parcel.read::<bool>().unwrap();
        let debug = parcel.read::<bool>().unwrap();

        let metadata_len = parcel.read::<u32>().unwrap() as usize;
        let mut metadata = Vec::with_capacity(metadata_len);
        for _ in 0..metadata_len {
            metadata.push(parcel.read::<ModuleMetadata>().unwrap());
        }

        Ok(ApplicationInfo {
            name,
            description,
            description_id,
            enabled,
            label,
            label_id,
            icon,
            icon_id,
            process,
            permissions,
            code_path,
            removable,
            access_token_id,
            uid,
            app_distribution_type,
            app_provision_type,
            system_app,
            debug,
            metadata,
        })
    }
}
