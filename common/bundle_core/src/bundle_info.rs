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

//! Bundle level information returned by the bundle manager service.

use ipc::parcel::{Deserialize, MsgParcel};
use ipc::IpcResult;

use crate::ability_info::{AbilityInfo, ExtensionAbilityInfo};
use crate::app_info::{ApplicationInfo, Metadata};

/// Signing certificate identity of a bundle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureInfo {
    /// Application identifier derived from the certificate.
    pub app_id: String,
    /// Certificate fingerprint.
    pub fingerprint: String,
}

impl Deserialize for SignatureInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let app_id = parcel.read::<String>().unwrap();
        let fingerprint = parcel.read::<String>().unwrap();
        Ok(SignatureInfo {
            app_id,
            fingerprint,
        })
    }
}

/// One permission a bundle requests, with the declared reason.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReqPermissionDetail {
    /// Permission name.
    pub name: String,
    /// Module requesting the permission.
    pub module_name: String,
    /// Reason resource value.
    pub reason: String,
    /// Reason resource id.
    pub reason_id: u32,
}

impl Deserialize for ReqPermissionDetail {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let name = parcel.read::<String>().unwrap();
        let module_name = parcel.read::<String>().unwrap();
        let reason = parcel.read::<String>().unwrap();
        let reason_id = parcel.read::<u32>().unwrap();
        Ok(ReqPermissionDetail {
            name,
            module_name,
            reason,
            reason_id,
        })
    }
}

/// Information about one HAP module of a bundle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HapModuleInfo {
    /// Module name.
    pub name: String,
    /// Icon resource value.
    pub icon: String,
    /// Icon resource id.
    pub icon_id: u32,
    /// Label resource value.
    pub label: String,
    /// Label resource id.
    pub label_id: u32,
    /// Description resource value.
    pub description: String,
    /// Description resource id.
    pub description_id: u32,
    /// Entry ability of the module.
    pub main_element_name: String,
    /// Abilities declared by the module.
    pub abilities: Vec<AbilityInfo>,
    /// Extension abilities declared by the module.
    pub extension_abilities: Vec<ExtensionAbilityInfo>,
    /// Metadata entries.
    pub metadata: Vec<Metadata>,
    /// Device types the module supports.
    pub device_types: Vec<String>,
    /// Whether the module supports free install.
    pub installation_free: bool,
    /// Hash of the module file.
    pub hash_value: String,
}

impl Deserialize for HapModuleInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let name = parcel.read::<String>().unwrap();
        let icon = parcel.read::<String>().unwrap();
        let icon_id = parcel.read::<u32>().unwrap();
        let label = parcel.read::<String>().unwrap();
        let label_id = parcel.read::<u32>().unwrap();
        let description = parcel.read::<String>().unwrap();
        let description_id = parcel.read::<u32>().unwrap();
        let main_element_name = parcel.read::<String>().unwrap();

        let abilities_len = parcel.read::<u32>().unwrap() as usize;
        let mut abilities = Vec::with_capacity(abilities_len);
        for _ in 0..abilities_len {
            abilities.push(parcel.read::<AbilityInfo>().unwrap());
        }

        let extension_abilities_len = parcel.read::<u32>().unwrap() as usize;
        let mut extension_abilities = Vec::with_capacity(extension_abilities_len);
        for _ in 0..extension_abilities_len {
            extension_abilities.push(parcel.read::<ExtensionAbilityInfo>().unwrap());
        }

        let metadata_len = parcel.read::<u32>().unwrap() as usize;
        let mut metadata = Vec::with_capacity(metadata_len);
        for _ in 0..metadata_len {
            metadata.push(parcel.read::<Metadata>().unwrap());
        }

        let device_types_len = parcel.read::<u32>().unwrap() as usize;
        let mut device_types = Vec::with_capacity(device_types_len);
        for _ in 0..device_types_len {
            device_types.push(parcel.read::<String>().unwrap());
        }

        let installation_free = parcel.read::<bool>().unwrap();
        let hash_value = parcel.read::<String>().unwrap();

        Ok(HapModuleInfo {
            name,
            icon,
            icon_id,
            label,
            label_id,
            description,
            description_id,
            main_element_name,
            abilities,
            extension_abilities,
            metadata,
            device_types,
            installation_free,
            hash_value,
        })
    }
}

/// Information about one installed bundle.
///
/// The optional sections follow the bundle query flags; sections the
/// query did not request arrive empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BundleInfo {
    /// Bundle name.
    pub name: String,
    /// Vendor of the bundle.
    pub vendor: String,
    /// Version code.
    pub version_code: u32,
    /// Version name.
    pub version_name: String,
    /// Earliest compatible version.
    pub min_compatible_version_code: i32,
    /// API version the bundle targets.
    pub target_version: i32,
    /// Application information section.
    pub application_info: ApplicationInfo,
    /// HAP module section.
    pub hap_module_infos: Vec<HapModuleInfo>,
    /// Requested permission names.
    pub req_permissions: Vec<String>,
    /// Requested permission details.
    pub req_permission_details: Vec<ReqPermissionDetail>,
    /// Grant state per requested permission.
    pub permission_grant_states: Vec<i32>,
    /// Signature section.
    pub signature_info: SignatureInfo,
    /// Installation time.
    pub install_time: i64,
    /// Last update time.
    pub update_time: i64,
    /// Uid of the bundle under the queried user.
    pub uid: i32,
}

impl Deserialize for BundleInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let name = parcel.read::<String>().unwrap();
        let vendor = parcel.read::<String>().unwrap();
        let version_code = parcel.read::<u32>().unwrap();
        let version_name = parcel.read::<String>().unwrap();
        let min_compatible_version_code = parcel.read::<i32>().unwrap();
        let target_version = parcel.read::<i32>().unwrap();
        let application_info = parcel.read::<ApplicationInfo>().unwrap();

        let hap_module_infos_len = parcel.read::<u32>().unwrap() as usize;
        let mut hap_module_infos = Vec::with_capacity(hap_module_infos_len);
        for _ in 0..hap_module_infos_len {
            hap_module_infos.push(parcel.read::<HapModuleInfo>().unwrap());
        }

        let req_permissions_len = parcel.read::<u32>().unwrap() as usize;
        let mut req_permissions = Vec::with_capacity(req_permissions_len);
        for _ in 0..req_permissions_len {
            req_permissions.push(parcel.read::<String>().unwrap());
        }

        let req_permission_details_len = parcel.read::<u32>().unwrap() as usize;
        let mut req_permission_details = Vec::with_capacity(req_permission_details_len);
        for _ in 0..req_permission_details_len {
            req_permission_details.push(parcel.read::<ReqPermissionDetail>().unwrap());
        }

        let permission_grant_states_len = parcel.read::<u32>().unwrap() as usize;
        let mut permission_grant_states = Vec::with_capacity(permission_grant_states_len);
        for _ in 0..permission_grant_states_len {
            permission_grant_states.push(parcel.read::<i32>().unwrap());
        }

        let signature_info = parcel.read::<SignatureInfo>().unwrap();
        let install_time = parcel.read::<i64>().unwrap();
        let update_time = parcel.read::<i64>().unwrap();
        let uid = parcel.read::<i32>().unwrap();

        Ok(BundleInfo {
            name,
            vendor,
            version_code,
            version_name,
            min_compatible_version_code,
            target_version,
            application_info,
            hap_module_infos,
            req_permissions,
            req_permission_details,
            permission_grant_states,
            signature_info,
            install_time,
            update_time,
            uid,
        })
    }
}

/// Definition of one permission, as the service publishes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionDef {
    /// Permission name.
    pub permission_name: String,
    /// How the permission is granted.
    pub grant_mode: i32,
    /// Label resource id.
    pub label_id: u32,
    /// Description resource id.
    pub description_id: u32,
}

impl Deserialize for PermissionDef {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let permission_name = parcel.read::<String>().unwrap();
        let grant_mode = parcel.read::<i32>().unwrap();
        let label_id = parcel.read::<u32>().unwrap();
        let description_id = parcel.read::<u32>().unwrap();
        Ok(PermissionDef {
            permission_name,
            grant_mode,
            label_id,
            description_id,
        })
    }
}
