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

//! Bundle, application and ability queries.
//!
//! This module extends `BundleMgrProxy` with the query operations of the
//! bundle manager service. Every operation writes the interface token and
//! its arguments in wire order, reads the service result code from the
//! reply and converts it into the public error contract before reading the
//! payload.

// External dependencies
use ipc::parcel::MsgParcel;
use ipc::remote::RemoteObj;

// Bundle core dependencies
use bundle_core::ability_info::{AbilityInfo, ExtensionAbilityInfo};
use bundle_core::app_info::{ApplicationInfo, Metadata};
use bundle_core::bundle_info::{BundleInfo, PermissionDef};
use bundle_core::error_code::{self, convert_server_code};
use bundle_core::flags::bundle_flag;
use bundle_core::interface::{self, bundle_mgr};
use bundle_core::want::Want;

// Local dependencies
use crate::proxy::BundleMgrProxy;

impl BundleMgrProxy {
    /// Retrieves the calling bundle's own information.
    ///
    /// The service resolves the bundle from the calling identity, so no
    /// bundle name or user id travels with the request.
    pub fn get_bundle_info_for_self(&self, flags: i32) -> Result<BundleInfo, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&flags).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_BUNDLE_INFO_FOR_SELF, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<BundleInfo>().unwrap())
    }

    /// Retrieves the information of one installed bundle.
    pub fn get_bundle_info(
        &self,
        bundle_name: &str,
        flags: i32,
        user_id: i32,
    ) -> Result<BundleInfo, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&flags).unwrap();
        data.write(&user_id).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_BUNDLE_INFO, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<BundleInfo>().unwrap())
    }

    /// Retrieves the information of every bundle installed for a user.
    pub fn get_all_bundle_info(&self, flags: i32, user_id: i32) -> Result<Vec<BundleInfo>, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&flags).unwrap();
        data.write(&user_id).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_BUNDLE_INFOS, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }

        let len = reply.read::<u32>().unwrap();
        let mut infos = Vec::with_capacity(len as usize);
        for _ in 0..len {
            infos.push(reply.read::<BundleInfo>().unwrap());
        }
        Ok(infos)
    }

    /// Retrieves the information of one application.
    pub fn get_application_info(
        &self,
        bundle_name: &str,
        flags: i32,
        user_id: i32,
    ) -> Result<ApplicationInfo, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&flags).unwrap();
        data.write(&user_id).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_APPLICATION_INFO, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<ApplicationInfo>().unwrap())
    }

    /// Retrieves the information of every application installed for a user.
    pub fn get_all_application_info(
        &self,
        flags: i32,
        user_id: i32,
    ) -> Result<Vec<ApplicationInfo>, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&flags).unwrap();
        data.write(&user_id).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_APPLICATION_INFOS, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }

        let len = reply.read::<u32>().unwrap();
        let mut infos = Vec::with_capacity(len as usize);
        for _ in 0..len {
            infos.push(reply.read::<ApplicationInfo>().unwrap());
        }
        Ok(infos)
    }

    /// Queries the abilities matching a want.
    pub fn query_ability_infos(
        &self,
        want: &Want,
        flags: i32,
        user_id: i32,
    ) -> Result<Vec<AbilityInfo>, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(want).unwrap();
        data.write(&flags).unwrap();
        data.write(&user_id).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::QUERY_ABILITY_INFOS, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }

        let len = reply.read::<u32>().unwrap();
        let mut infos = Vec::with_capacity(len as usize);
        for _ in 0..len {
            infos.push(reply.read::<AbilityInfo>().unwrap());
        }
        Ok(infos)
    }

    /// Queries the extension abilities matching a want.
    ///
    /// An `extension_type` of 0 matches any type and routes to the
    /// without-type transaction; the type is only written for typed queries.
    pub fn query_extension_infos(
        &self,
        want: &Want,
        extension_type: u32,
        flags: i32,
        user_id: i32,
    ) -> Result<Vec<ExtensionAbilityInfo>, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(want).unwrap();
        let request = if extension_type == 0 {
            bundle_mgr::QUERY_EXTENSION_INFO_WITHOUT_TYPE
        } else {
            data.write(&extension_type).unwrap();
            bundle_mgr::QUERY_EXTENSION_INFO
        };
        data.write(&flags).unwrap();
        data.write(&user_id).unwrap();

        let mut reply = remote
            .send_request(request, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }

        let len = reply.read::<u32>().unwrap();
        let mut infos = Vec::with_capacity(len as usize);
        for _ in 0..len {
            infos.push(reply.read::<ExtensionAbilityInfo>().unwrap());
        }
        Ok(infos)
    }

    /// Retrieves the bundle name owning a uid.
    pub fn get_bundle_name_by_uid(&self, uid: i32) -> Result<String, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&uid).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_NAME_FOR_UID, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<String>().unwrap())
    }

    /// Reads the bundle information out of a HAP archive on disk.
    pub fn get_bundle_archive_info(&self, hap_path: &str, flags: i32) -> Result<BundleInfo, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&hap_path.to_string()).unwrap();
        data.write(&flags).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_BUNDLE_ARCHIVE_INFO, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<BundleInfo>().unwrap())
    }

    /// Retrieves the label of one ability.
    pub fn get_ability_label(
        &self,
        bundle_name: &str,
        module_name: &str,
        ability_name: &str,
    ) -> Result<String, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&module_name.to_string()).unwrap();
        data.write(&ability_name.to_string()).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_ABILITY_LABEL_WITH_MODULE_NAME, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<String>().unwrap())
    }

    /// Queries whether an application is enabled.
    pub fn is_application_enabled(&self, bundle_name: &str) -> Result<bool, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::IS_APPLICATION_ENABLED, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<bool>().unwrap())
    }

    /// Enables or disables an application.
    pub fn set_application_enabled(&self, bundle_name: &str, enabled: bool) -> Result<(), i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&enabled).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::SET_APPLICATION_ENABLED, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }

    /// Queries whether an ability is enabled.
    ///
    /// Only the identifying names travel with the request.
    pub fn is_ability_enabled(&self, ability: &AbilityInfo) -> Result<bool, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&ability.bundle_name).unwrap();
        data.write(&ability.module_name).unwrap();
        data.write(&ability.name).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::IS_ABILITY_ENABLED, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<bool>().unwrap())
    }

    /// Enables or disables an ability.
    pub fn set_ability_enabled(&self, ability: &AbilityInfo, enabled: bool) -> Result<(), i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&ability.bundle_name).unwrap();
        data.write(&ability.module_name).unwrap();
        data.write(&ability.name).unwrap();
        data.write(&enabled).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::SET_ABILITY_ENABLED, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }

    /// Removes the cache files of a bundle for a user.
    pub fn clean_bundle_cache_files(&self, bundle_name: &str, user_id: i32) -> Result<(), i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&user_id).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::CLEAN_BUNDLE_CACHE_FILES, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }

    /// Retrieves the want used to launch a bundle.
    pub fn get_launch_want_for_bundle(
        &self,
        bundle_name: &str,
        user_id: i32,
    ) -> Result<Want, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&user_id).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_LAUNCH_WANT_FOR_BUNDLE, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<Want>().unwrap())
    }

    /// Retrieves the definition of one permission.
    pub fn get_permission_def(&self, permission_name: &str) -> Result<PermissionDef, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&permission_name.to_string()).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_PERMISSION_DEF, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<PermissionDef>().unwrap())
    }

    /// Collects the profile strings attached to one ability of the calling
    /// bundle.
    ///
    /// There is no dedicated transaction for profiles; the caller's own
    /// bundle information is fetched with module, ability and metadata
    /// flags and searched locally.
    pub fn get_profile_by_ability(
        &self,
        module_name: &str,
        ability_name: &str,
        metadata_name: &str,
    ) -> Result<Vec<String>, i32> {
        if ability_name.is_empty() {
            return Err(error_code::ABILITY_NOT_EXIST);
        }
        if module_name.is_empty() {
            return Err(error_code::MODULE_NOT_EXIST);
        }

        let flags = (bundle_flag::GET_BUNDLE_INFO_WITH_HAP_MODULE
            | bundle_flag::GET_BUNDLE_INFO_WITH_METADATA
            | bundle_flag::GET_BUNDLE_INFO_WITH_ABILITY) as i32;
        let info = self.get_bundle_info_for_self(flags)?;
        search_ability_profile(&info, module_name, ability_name, metadata_name)
    }

    /// Collects the profile strings attached to one extension ability of
    /// the calling bundle.
    pub fn get_profile_by_extension_ability(
        &self,
        module_name: &str,
        extension_name: &str,
        metadata_name: &str,
    ) -> Result<Vec<String>, i32> {
        if extension_name.is_empty() {
            return Err(error_code::ABILITY_NOT_EXIST);
        }
        if module_name.is_empty() {
            return Err(error_code::MODULE_NOT_EXIST);
        }

        let flags = (bundle_flag::GET_BUNDLE_INFO_WITH_HAP_MODULE
            | bundle_flag::GET_BUNDLE_INFO_WITH_METADATA
            | bundle_flag::GET_BUNDLE_INFO_WITH_EXTENSION_ABILITY) as i32;
        let info = self.get_bundle_info_for_self(flags)?;
        search_extension_profile(&info, module_name, extension_name, metadata_name)
    }

    /// Verifies that the caller is a system application.
    pub fn verify_system_api(&self) -> Result<bool, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::VERIFY_SYSTEM_API, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<bool>().unwrap())
    }

    /// Verifies that the caller holds a named permission.
    pub fn verify_calling_permission(&self, permission_name: &str) -> Result<bool, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&permission_name.to_string()).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::VERIFY_CALLING_PERMISSION, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<bool>().unwrap())
    }

    /// Registers a bundle event callback with the service.
    pub(crate) fn register_bundle_event_callback(&self, callback: RemoteObj) -> Result<(), i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write_remote(callback).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::REGISTER_BUNDLE_EVENT_CALLBACK, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }

    /// Unregisters the calling process's bundle event callback.
    ///
    /// The service keys registrations on the calling identity, so no
    /// callback object travels with the request.
    pub(crate) fn unregister_bundle_event_callback(&self) -> Result<(), i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::UNREGISTER_BUNDLE_EVENT_CALLBACK, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }
}

/// Searches a bundle's modules for one ability and collects its matching
/// profile strings.
fn search_ability_profile(
    info: &BundleInfo,
    module_name: &str,
    ability_name: &str,
    metadata_name: &str,
) -> Result<Vec<String>, i32> {
    for module in &info.hap_module_infos {
        for ability in &module.abilities {
            if ability.name == ability_name && ability.module_name == module_name {
                return profiles_from_metadata(&ability.metadata, metadata_name);
            }
        }
    }
    Err(error_code::ABILITY_NOT_EXIST)
}

/// Searches a bundle's modules for one extension ability and collects its
/// matching profile strings.
fn search_extension_profile(
    info: &BundleInfo,
    module_name: &str,
    extension_name: &str,
    metadata_name: &str,
) -> Result<Vec<String>, i32> {
    for module in &info.hap_module_infos {
        for extension in &module.extension_abilities {
            if extension.name == extension_name && extension.module_name == module_name {
                return profiles_from_metadata(&extension.metadata, metadata_name);
            }
        }
    }
    Err(error_code::ABILITY_NOT_EXIST)
}

/// Collects the profile values of the metadata entries matching
/// `metadata_name`. An empty name matches every entry.
fn profiles_from_metadata(metadata: &[Metadata], metadata_name: &str) -> Result<Vec<String>, i32> {
    let profiles: Vec<String> = metadata
        .iter()
        .filter(|entry| metadata_name.is_empty() || entry.name == metadata_name)
        .map(|entry| entry.value.clone())
        .collect();
    if profiles.is_empty() {
        return Err(error_code::PROFILE_NOT_EXIST);
    }
    Ok(profiles)
}

#[cfg(test)]
mod ut_profile {
    include!("../../tests/ut/ut_profile.rs");
}
