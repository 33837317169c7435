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

//! Install, uninstall and recover natives of the installer namespace.

use ani_rs::business_error::BusinessError;
use bundle_client::check;
use bundle_client::BundleMgrProxy;
use bundle_core::install::{collect_hash_params, install_flag, InstallParam};

use crate::bridge::InstallParamBridge;
use crate::error::{common_error, parameter_type_error, PERMISSION_INSTALL_BUNDLE};

/// Builds the wire install parameters from the bridge options.
///
/// Absent fields keep the defaults. A flag outside the declared install
/// flags or a repeated hash-param module name is a parameter error, the
/// same answer the original binding gives for a malformed options object.
fn convert_install_param(param: InstallParamBridge) -> Result<InstallParam, BusinessError> {
    let mut converted = InstallParam::default();
    if let Some(user_id) = param.user_id {
        converted.user_id = user_id;
    }
    if let Some(flag) = param.install_flag {
        if !install_flag::is_valid(flag) {
            return Err(parameter_type_error("parameters", "corresponding type"));
        }
        // A plain install replaces an existing bundle, matching the
        // promotion the original binding performs before sending.
        converted.install_flag = if flag == install_flag::NORMAL {
            install_flag::REPLACE_EXISTING
        } else {
            flag
        };
    }
    if let Some(keep_data) = param.is_keep_data {
        converted.is_keep_data = keep_data;
    }
    if let Some(hash_params) = param.hash_params {
        let pairs = hash_params
            .into_iter()
            .map(|param| (param.module_name, param.hash_value));
        match collect_hash_params(pairs) {
            Some(collected) => converted.hash_params = collected,
            None => return Err(parameter_type_error("parameters", "corresponding type")),
        }
    }
    if let Some(deadline) = param.crowdtest_deadline {
        converted.crowdtest_deadline = deadline;
    }
    Ok(converted)
}

/// Gate of the `getBundleInstaller` entry: only system applications may
/// obtain an installer. The installer object itself lives in ArkTS.
#[ani_rs::native]
pub fn get_bundle_installer() -> Result<(), BusinessError> {
    match BundleMgrProxy::get_instance().verify_system_api() {
        Ok(true) => Ok(()),
        Ok(false) => Err(common_error(
            bundle_core::error_code::NOT_SYSTEM_APP,
            "GetBundleInstaller",
            PERMISSION_INSTALL_BUNDLE,
        )),
        Err(code) => {
            error!("GetBundleInstaller failed: {}", code);
            Err(common_error(
                code,
                "GetBundleInstaller",
                PERMISSION_INSTALL_BUNDLE,
            ))
        }
    }
}

#[ani_rs::native]
pub fn install(
    hap_file_paths: Vec<String>,
    param: InstallParamBridge,
) -> Result<(), BusinessError> {
    let param = convert_install_param(param)?;
    match BundleMgrProxy::get_instance().install(&hap_file_paths, &param) {
        Ok(()) => Ok(()),
        Err((code, message)) => {
            error!("Install failed: {} {}", code, message);
            Err(common_error(code, "Install", PERMISSION_INSTALL_BUNDLE))
        }
    }
}

#[ani_rs::native]
pub fn uninstall(bundle_name: String, param: InstallParamBridge) -> Result<(), BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(code, "Uninstall", PERMISSION_INSTALL_BUNDLE));
    }
    let param = convert_install_param(param)?;
    match BundleMgrProxy::get_instance().uninstall(&bundle_name, &param) {
        Ok(()) => Ok(()),
        Err((code, message)) => {
            error!("Uninstall of {} failed: {} {}", bundle_name, code, message);
            Err(common_error(code, "Uninstall", PERMISSION_INSTALL_BUNDLE))
        }
    }
}

#[ani_rs::native]
pub fn uninstall_module(
    bundle_name: String,
    module_name: String,
    param: InstallParamBridge,
) -> Result<(), BusinessError> {
    let checks =
        check::check_bundle_name(&bundle_name).and_then(|_| check::check_module_name(&module_name));
    if let Err(code) = checks {
        return Err(common_error(code, "Uninstall", PERMISSION_INSTALL_BUNDLE));
    }
    let param = convert_install_param(param)?;
    match BundleMgrProxy::get_instance().uninstall_module(&bundle_name, &module_name, &param) {
        Ok(()) => Ok(()),
        Err((code, message)) => {
            error!(
                "Uninstall of module {} of {} failed: {} {}",
                module_name, bundle_name, code, message
            );
            Err(common_error(code, "Uninstall", PERMISSION_INSTALL_BUNDLE))
        }
    }
}

#[ani_rs::native]
pub fn recover(bundle_name: String, param: InstallParamBridge) -> Result<(), BusinessError> {
    if let Err(code) = check::check_bundle_name(&bundle_name) {
        return Err(common_error(code, "Recover", PERMISSION_INSTALL_BUNDLE));
    }
    let param = convert_install_param(param)?;
    match BundleMgrProxy::get_instance().recover(&bundle_name, &param) {
        Ok(()) => Ok(()),
        Err((code, message)) => {
            error!("Recover of {} failed: {} {}", bundle_name, code, message);
            Err(common_error(code, "Recover", PERMISSION_INSTALL_BUNDLE))
        }
    }
}

#[cfg(test)]
mod ut_installer {
    include!("../tests/ut/ut_installer.rs");
}
