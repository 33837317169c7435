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

//! Natives of the freeInstall namespace.

use ani_rs::business_error::BusinessError;
use bundle_client::check;
use bundle_client::BundleMgrProxy;
use bundle_core::error_code;
use bundle_core::flags::upgrade_flag;
use bundle_core::pack_info::DispatchInfo;

use crate::bridge::{BundlePackInfoBridge, DispatchInfoBridge};
use crate::error::{
    common_error, parameter_type_error, PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
    PERMISSION_INSTALL_BUNDLE,
};

const DISPATCH_INFO_VERSION: &str = "1";
const DISPATCH_INFO_DISPATCH_API: &str = "1.0";

#[ani_rs::native]
pub fn set_hap_module_upgrade_flag(
    bundle_name: String,
    module_name: String,
    flag: i32,
) -> Result<(), BusinessError> {
    let checks =
        check::check_bundle_name(&bundle_name).and_then(|_| check::check_module_name(&module_name));
    if let Err(code) = checks {
        return Err(common_error(
            code,
            "setHapModuleUpgradeFlag",
            PERMISSION_INSTALL_BUNDLE,
        ));
    }
    if !upgrade_flag::is_valid(flag) {
        return Err(parameter_type_error("upgradeFlag", "UpgradeFlag"));
    }
    match BundleMgrProxy::get_instance().set_module_upgrade_flag(&bundle_name, &module_name, flag) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!(
                "setHapModuleUpgradeFlag of {} in {} failed: {}",
                module_name, bundle_name, code
            );
            Err(common_error(
                code,
                "setHapModuleUpgradeFlag",
                PERMISSION_INSTALL_BUNDLE,
            ))
        }
    }
}

#[ani_rs::native]
pub fn is_hap_module_removable(
    bundle_name: String,
    module_name: String,
) -> Result<bool, BusinessError> {
    let checks =
        check::check_bundle_name(&bundle_name).and_then(|_| check::check_module_name(&module_name));
    if let Err(code) = checks {
        return Err(common_error(
            code,
            "isHapModuleRemovable",
            PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
        ));
    }
    match BundleMgrProxy::get_instance().is_module_removable(&bundle_name, &module_name) {
        Ok(removable) => Ok(removable),
        Err(code) => {
            error!(
                "isHapModuleRemovable of {} in {} failed: {}",
                module_name, bundle_name, code
            );
            Err(common_error(
                code,
                "isHapModuleRemovable",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_bundle_pack_info(
    bundle_name: String,
    bundle_pack_flag: i32,
) -> Result<BundlePackInfoBridge, BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(
            code,
            "getBundlePackInfo",
            PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
        ));
    }
    match BundleMgrProxy::get_instance().get_bundle_pack_info(&bundle_name, bundle_pack_flag) {
        Ok(info) => Ok(info.into()),
        Err(code) => {
            error!("getBundlePackInfo of {} failed: {}", bundle_name, code);
            Err(common_error(
                code,
                "getBundlePackInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}

/// Answers the constant dispatcher version pair. The checks run through
/// the service; the values themselves never change.
#[ani_rs::native]
pub fn get_dispatch_info() -> Result<DispatchInfoBridge, BusinessError> {
    match BundleMgrProxy::get_instance().verify_system_api() {
        Ok(true) => {}
        Ok(false) => {
            return Err(common_error(
                error_code::NOT_SYSTEM_APP,
                "getDispatchInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ));
        }
        Err(code) => {
            error!("getDispatchInfo system api check failed: {}", code);
            return Err(common_error(
                code,
                "getDispatchInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ));
        }
    }
    match BundleMgrProxy::get_instance()
        .verify_calling_permission(PERMISSION_GET_BUNDLE_INFO_PRIVILEGED)
    {
        Ok(true) => Ok(DispatchInfo {
            version: DISPATCH_INFO_VERSION.to_string(),
            dispatch_api_version: DISPATCH_INFO_DISPATCH_API.to_string(),
        }
        .into()),
        Ok(false) => Err(common_error(
            error_code::PERMISSION_DENIED,
            "getDispatchInfo",
            PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
        )),
        Err(code) => {
            error!("getDispatchInfo permission check failed: {}", code);
            Err(common_error(
                code,
                "getDispatchInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}
