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

//! Query natives of the bundleManager namespace.

use ani_rs::business_error::BusinessError;
use bundle_client::cache::BundleInfoCache;
use bundle_client::check;
use bundle_client::BundleMgrProxy;
use bundle_core::error_code;
use bundle_core::flags::resolve_user_id;
use bundle_core::want::Want;

use crate::bridge::{
    AbilityInfoBridge, ApplicationInfoBridge, BundleInfoBridge, ExtensionAbilityInfoBridge,
    PermissionDefBridge, WantBridge,
};
use crate::error::{
    common_error, PERMISSION_CHANGE_ABILITY_ENABLED_STATE, PERMISSION_GET_BUNDLE_INFO,
    PERMISSION_GET_BUNDLE_INFO_PRIVILEGED, PERMISSION_GET_SENSITIVE_PERMISSIONS, PERMISSION_NONE,
    PERMISSION_REMOVE_CACHE_FILES,
};

const INVALID_WANT_MESSAGE: &str =
    "implicit query condition, at least one query param(action entities uri type) non-empty.";

/// A want either names an ability explicitly or carries at least one
/// implicit query condition.
fn check_want(want: &Want) -> bool {
    if !want.bundle_name.is_empty() && !want.ability_name.is_empty() {
        return true;
    }
    !want.action.is_empty()
        || !want.entities.is_empty()
        || !want.uri.is_empty()
        || !want.mime_type.is_empty()
}

#[ani_rs::native]
pub fn get_bundle_info_for_self(bundle_flags: i32) -> Result<BundleInfoBridge, BusinessError> {
    match BundleMgrProxy::get_instance().get_bundle_info_for_self(bundle_flags) {
        Ok(info) => Ok(info.into()),
        Err(code) => {
            error!("GetBundleInfoForSelf failed: {}", code);
            Err(common_error(
                code,
                "GetBundleInfoForSelf",
                PERMISSION_NONE,
            ))
        }
    }
}

/// Returns the bundle information of one bundle, served from the query
/// cache when the caller asked about itself before.
#[ani_rs::native]
pub fn get_bundle_info(
    bundle_name: String,
    bundle_flags: i32,
    user_id: i32,
) -> Result<BundleInfoBridge, BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(
            code,
            "GetBundleInfo",
            PERMISSION_GET_BUNDLE_INFO,
        ));
    }
    let calling_uid = ipc::Skeleton::calling_uid();
    let user_id = resolve_user_id(Some(user_id), calling_uid);

    let cache = BundleInfoCache::get_instance();
    if let Some(info) = cache.get_bundle_info(&bundle_name, bundle_flags, user_id) {
        return Ok(info.as_ref().clone().into());
    }
    match BundleMgrProxy::get_instance().get_bundle_info(&bundle_name, bundle_flags, user_id) {
        Ok(info) => {
            let info = cache.check_to_cache_bundle_info(
                info,
                &bundle_name,
                bundle_flags,
                user_id,
                calling_uid,
            );
            Ok(info.as_ref().clone().into())
        }
        Err(code) => {
            error!("GetBundleInfo of {} failed: {}", bundle_name, code);
            Err(common_error(
                code,
                "GetBundleInfo",
                PERMISSION_GET_BUNDLE_INFO,
            ))
        }
    }
}

/// Returns the application information of one bundle, cached like
/// bundle information.
#[ani_rs::native]
pub fn get_application_info(
    bundle_name: String,
    application_flags: i32,
    user_id: i32,
) -> Result<ApplicationInfoBridge, BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(
            code,
            "GetApplicationInfo",
            PERMISSION_GET_BUNDLE_INFO,
        ));
    }
    let calling_uid = ipc::Skeleton::calling_uid();
    let user_id = resolve_user_id(Some(user_id), calling_uid);

    let cache = BundleInfoCache::get_instance();
    if let Some(info) = cache.get_application_info(&bundle_name, application_flags, user_id) {
        return Ok(info.as_ref().clone().into());
    }
    match BundleMgrProxy::get_instance().get_application_info(
        &bundle_name,
        application_flags,
        user_id,
    ) {
        Ok(info) => {
            let info = cache.check_to_cache_application_info(
                info,
                &bundle_name,
                application_flags,
                user_id,
                calling_uid,
            );
            Ok(info.as_ref().clone().into())
        }
        Err(code) => {
            error!("GetApplicationInfo of {} failed: {}", bundle_name, code);
            Err(common_error(
                code,
                "GetApplicationInfo",
                PERMISSION_GET_BUNDLE_INFO,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_all_bundle_info(
    bundle_flags: i32,
    user_id: i32,
) -> Result<Vec<BundleInfoBridge>, BusinessError> {
    let user_id = resolve_user_id(Some(user_id), ipc::Skeleton::calling_uid());
    match BundleMgrProxy::get_instance().get_all_bundle_info(bundle_flags, user_id) {
        Ok(infos) => Ok(infos.into_iter().map(Into::into).collect()),
        Err(code) => {
            error!("GetAllBundleInfo failed: {}", code);
            Err(common_error(
                code,
                "GetAllBundleInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_all_application_info(
    application_flags: i32,
    user_id: i32,
) -> Result<Vec<ApplicationInfoBridge>, BusinessError> {
    let user_id = resolve_user_id(Some(user_id), ipc::Skeleton::calling_uid());
    match BundleMgrProxy::get_instance().get_all_application_info(application_flags, user_id) {
        Ok(infos) => Ok(infos.into_iter().map(Into::into).collect()),
        Err(code) => {
            error!("GetAllApplicationInfo failed: {}", code);
            Err(common_error(
                code,
                "GetAllApplicationInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}

/// Queries the abilities matched by a want, explicitly or implicitly.
#[ani_rs::native]
pub fn query_ability_infos(
    want: WantBridge,
    ability_flags: i32,
    user_id: i32,
) -> Result<Vec<AbilityInfoBridge>, BusinessError> {
    let want: Want = want.into();
    if !check_want(&want) {
        return Err(BusinessError::new_static(
            error_code::PARAM_CHECK_ERROR,
            INVALID_WANT_MESSAGE,
        ));
    }
    let user_id = resolve_user_id(Some(user_id), ipc::Skeleton::calling_uid());
    match BundleMgrProxy::get_instance().query_ability_infos(&want, ability_flags, user_id) {
        Ok(infos) => Ok(infos.into_iter().map(Into::into).collect()),
        Err(code) => {
            error!("QueryAbilityInfos failed: {}", code);
            Err(common_error(
                code,
                "QueryAbilityInfos",
                PERMISSION_GET_BUNDLE_INFO,
            ))
        }
    }
}

/// Queries extension abilities. Type 0 queries across every extension
/// type, matching the wire contract of the without-type transaction.
#[ani_rs::native]
pub fn query_extension_ability_infos(
    want: WantBridge,
    extension_ability_type: i32,
    extension_flags: i32,
    user_id: i32,
) -> Result<Vec<ExtensionAbilityInfoBridge>, BusinessError> {
    let want: Want = want.into();
    if !check_want(&want) {
        return Err(BusinessError::new_static(
            error_code::PARAM_CHECK_ERROR,
            INVALID_WANT_MESSAGE,
        ));
    }
    let user_id = resolve_user_id(Some(user_id), ipc::Skeleton::calling_uid());
    match BundleMgrProxy::get_instance().query_extension_infos(
        &want,
        extension_ability_type as u32,
        extension_flags,
        user_id,
    ) {
        Ok(infos) => Ok(infos.into_iter().map(Into::into).collect()),
        Err(code) => {
            error!("QueryExtensionAbilityInfos failed: {}", code);
            Err(common_error(
                code,
                "QueryExtensionAbilityInfos",
                PERMISSION_GET_BUNDLE_INFO,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_bundle_name_by_uid(uid: i32) -> Result<String, BusinessError> {
    match BundleMgrProxy::get_instance().get_bundle_name_by_uid(uid) {
        Ok(name) => Ok(name),
        Err(code) => {
            error!("GetBundleNameByUid of {} failed: {}", uid, code);
            Err(common_error(
                code,
                "GetBundleNameByUid",
                PERMISSION_GET_BUNDLE_INFO,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_bundle_archive_info(
    hap_file_path: String,
    bundle_flags: i32,
) -> Result<BundleInfoBridge, BusinessError> {
    if let Err(code) = check::check_hap_path(&hap_file_path) {
        return Err(common_error(
            code,
            "GetBundleArchiveInfo",
            PERMISSION_GET_BUNDLE_INFO,
        ));
    }
    match BundleMgrProxy::get_instance().get_bundle_archive_info(&hap_file_path, bundle_flags) {
        Ok(info) => Ok(info.into()),
        Err(code) => {
            error!("GetBundleArchiveInfo failed: {}", code);
            Err(common_error(
                code,
                "GetBundleArchiveInfo",
                PERMISSION_GET_BUNDLE_INFO,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_ability_label(
    bundle_name: String,
    module_name: String,
    ability_name: String,
) -> Result<String, BusinessError> {
    let checks = check::check_bundle_name(&bundle_name)
        .and_then(|_| check::check_module_name(&module_name))
        .and_then(|_| check::check_ability_name(&ability_name));
    if let Err(code) = checks {
        return Err(common_error(
            code,
            "GetAbilityLabel",
            PERMISSION_GET_BUNDLE_INFO,
        ));
    }
    match BundleMgrProxy::get_instance().get_ability_label(
        &bundle_name,
        &module_name,
        &ability_name,
    ) {
        Ok(label) => Ok(label),
        Err(code) => {
            error!("GetAbilityLabel of {} failed: {}", ability_name, code);
            Err(common_error(
                code,
                "GetAbilityLabel",
                PERMISSION_GET_BUNDLE_INFO,
            ))
        }
    }
}

#[ani_rs::native]
pub fn set_application_enabled(bundle_name: String, enabled: bool) -> Result<(), BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(
            code,
            "SetApplicationEnabled",
            PERMISSION_CHANGE_ABILITY_ENABLED_STATE,
        ));
    }
    match BundleMgrProxy::get_instance().set_application_enabled(&bundle_name, enabled) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("SetApplicationEnabled of {} failed: {}", bundle_name, code);
            Err(common_error(
                code,
                "SetApplicationEnabled",
                PERMISSION_CHANGE_ABILITY_ENABLED_STATE,
            ))
        }
    }
}

#[ani_rs::native]
pub fn is_application_enabled(bundle_name: String) -> Result<bool, BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(code, "IsApplicationEnabled", PERMISSION_NONE));
    }
    match BundleMgrProxy::get_instance().is_application_enabled(&bundle_name) {
        Ok(enabled) => Ok(enabled),
        Err(code) => {
            error!("IsApplicationEnabled of {} failed: {}", bundle_name, code);
            Err(common_error(code, "IsApplicationEnabled", PERMISSION_NONE))
        }
    }
}

#[ani_rs::native]
pub fn set_ability_enabled(info: AbilityInfoBridge, enabled: bool) -> Result<(), BusinessError> {
    let ability = info.into();
    match BundleMgrProxy::get_instance().set_ability_enabled(&ability, enabled) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("SetAbilityEnabled of {} failed: {}", ability.name, code);
            Err(common_error(
                code,
                "SetAbilityEnabled",
                PERMISSION_CHANGE_ABILITY_ENABLED_STATE,
            ))
        }
    }
}

#[ani_rs::native]
pub fn is_ability_enabled(info: AbilityInfoBridge) -> Result<bool, BusinessError> {
    let ability = info.into();
    match BundleMgrProxy::get_instance().is_ability_enabled(&ability) {
        Ok(enabled) => Ok(enabled),
        Err(code) => {
            error!("IsAbilityEnabled of {} failed: {}", ability.name, code);
            Err(common_error(code, "IsAbilityEnabled", PERMISSION_NONE))
        }
    }
}

/// Clears the cache directories of one bundle under the caller's user.
#[ani_rs::native]
pub fn clean_bundle_cache_files(bundle_name: String) -> Result<(), BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(
            code,
            "CleanBundleCacheFiles",
            PERMISSION_REMOVE_CACHE_FILES,
        ));
    }
    let user_id = resolve_user_id(None, ipc::Skeleton::calling_uid());
    match BundleMgrProxy::get_instance().clean_bundle_cache_files(&bundle_name, user_id) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("CleanBundleCacheFiles of {} failed: {}", bundle_name, code);
            Err(common_error(
                code,
                "CleanBundleCacheFiles",
                PERMISSION_REMOVE_CACHE_FILES,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_launch_want_for_bundle(
    bundle_name: String,
    user_id: i32,
) -> Result<WantBridge, BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(
            code,
            "GetLaunchWantForBundle",
            PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
        ));
    }
    let user_id = resolve_user_id(Some(user_id), ipc::Skeleton::calling_uid());
    match BundleMgrProxy::get_instance().get_launch_want_for_bundle(&bundle_name, user_id) {
        Ok(want) => Ok(want.into()),
        Err(code) => {
            error!("GetLaunchWantForBundle of {} failed: {}", bundle_name, code);
            Err(common_error(
                code,
                "GetLaunchWantForBundle",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}

/// Reads the profile strings attached to one ability of the caller.
#[ani_rs::native]
pub fn get_profile_by_ability(
    module_name: String,
    ability_name: String,
    metadata_name: String,
) -> Result<Vec<String>, BusinessError> {
    match BundleMgrProxy::get_instance().get_profile_by_ability(
        &module_name,
        &ability_name,
        &metadata_name,
    ) {
        Ok(profiles) => Ok(profiles),
        Err(code) => {
            error!("GetProfileByAbility of {} failed: {}", ability_name, code);
            Err(common_error(code, "GetProfileByAbility", PERMISSION_NONE))
        }
    }
}

#[ani_rs::native]
pub fn get_profile_by_extension_ability(
    module_name: String,
    extension_ability_name: String,
    metadata_name: String,
) -> Result<Vec<String>, BusinessError> {
    match BundleMgrProxy::get_instance().get_profile_by_extension_ability(
        &module_name,
        &extension_ability_name,
        &metadata_name,
    ) {
        Ok(profiles) => Ok(profiles),
        Err(code) => {
            error!(
                "GetProfileByExtensionAbility of {} failed: {}",
                extension_ability_name, code
            );
            Err(common_error(
                code,
                "GetProfileByExtensionAbility",
                PERMISSION_NONE,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_permission_def(permission_name: String) -> Result<PermissionDefBridge, BusinessError> {
    if permission_name.is_empty() {
        return Err(common_error(
            error_code::PERMISSION_NOT_EXIST,
            "GetPermissionDef",
            PERMISSION_GET_SENSITIVE_PERMISSIONS,
        ));
    }
    match BundleMgrProxy::get_instance().get_permission_def(&permission_name) {
        Ok(def) => Ok(def.into()),
        Err(code) => {
            error!("GetPermissionDef of {} failed: {}", permission_name, code);
            Err(common_error(
                code,
                "GetPermissionDef",
                PERMISSION_GET_SENSITIVE_PERMISSIONS,
            ))
        }
    }
}

#[cfg(test)]
mod ut_manager {
    include!("../tests/ut/ut_manager.rs");
}
