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

//! Bundle manager ANI (Ark Native Interface) implementation.
//!
//! This crate backs the ArkTS bundle management APIs: bundle, application
//! and ability queries, installation, bundle change monitoring, default
//! application management, app control, free install, distributed queries
//! and the zlib archive operations. Marshalling between ArkTS objects and
//! the native types happens in [`bridge`]; everything else is one module
//! per exported namespace calling into `bundle_client`.

use ani_rs::ani_constructor;

pub mod bridge;

pub mod app_control;
pub mod default_app;
pub mod distributed;
pub mod free_install;
pub mod installer;
pub mod launcher;
pub mod manager;
pub mod monitor;
pub mod zip;

mod error;

#[macro_use]
extern crate bundle_utils;

cfg_ohos! {
    use hilog_rust::{HiLogLabel, LogType};

    /// Log label for the BmsAni component, sharing the bundle manager
    /// domain with the client crate.
    pub(crate) const LOG_LABEL: HiLogLabel = HiLogLabel {
        log_type: LogType::LogCore,
        domain: 0xD001120,
        tag: "BmsAni",
    };
}

// Register the natives with the ANI framework. Each entry binds one
// exported ArkTS declaration to its Rust implementation.
ani_constructor!(
    namespace "L@ohos/bundle/bundleManager/bundleManager"
    [
        "getBundleInfoForSelfSync": manager::get_bundle_info_for_self,
        "getBundleInfoSync": manager::get_bundle_info,
        "getApplicationInfoSync": manager::get_application_info,
        "getAllBundleInfoSync": manager::get_all_bundle_info,
        "getAllApplicationInfoSync": manager::get_all_application_info,
        "queryAbilityInfosSync": manager::query_ability_infos,
        "queryExtensionAbilityInfosSync": manager::query_extension_ability_infos,
        "getBundleNameByUidSync": manager::get_bundle_name_by_uid,
        "getBundleArchiveInfoSync": manager::get_bundle_archive_info,
        "getAbilityLabelSync": manager::get_ability_label,
        "setApplicationEnabledSync": manager::set_application_enabled,
        "isApplicationEnabledSync": manager::is_application_enabled,
        "setAbilityEnabledSync": manager::set_ability_enabled,
        "isAbilityEnabledSync": manager::is_ability_enabled,
        "cleanBundleCacheFilesSync": manager::clean_bundle_cache_files,
        "getLaunchWantForBundleSync": manager::get_launch_want_for_bundle,
        "getProfileByAbilitySync": manager::get_profile_by_ability,
        "getProfileByExtensionAbilitySync": manager::get_profile_by_extension_ability,
        "getPermissionDefSync": manager::get_permission_def,
    ]
    namespace "L@ohos/bundle/installer/installer"
    [
        "getBundleInstallerSync": installer::get_bundle_installer, // System app gate
        "installSync": installer::install,
        "uninstallSync": installer::uninstall,
        "uninstallModuleSync": installer::uninstall_module,
        "recoverSync": installer::recover,
    ]
    namespace "L@ohos/bundle/bundleMonitor/bundleMonitor"
    [
        "onEvent": monitor::on_event,
        "offEvent": monitor::off_event,   // Remove one callback
        "offEvents": monitor::off_events, // Remove every callback of an event
    ]
    namespace "L@ohos/bundle/defaultAppManager/defaultAppManager"
    [
        "isDefaultApplicationSync": default_app::is_default_application,
        "getDefaultApplicationSync": default_app::get_default_application,
        "setDefaultApplicationSync": default_app::set_default_application,
        "resetDefaultApplicationSync": default_app::reset_default_application,
    ]
    namespace "L@ohos/bundle/freeInstall/freeInstall"
    [
        "setHapModuleUpgradeFlagSync": free_install::set_hap_module_upgrade_flag,
        "isHapModuleRemovableSync": free_install::is_hap_module_removable,
        "getBundlePackInfoSync": free_install::get_bundle_pack_info,
        "getDispatchInfoSync": free_install::get_dispatch_info,
    ]
    namespace "L@ohos/bundle/appControl/appControl"
    [
        "setDisposedStatusSync": app_control::set_disposed_status,
        "getDisposedStatusSync": app_control::get_disposed_status,
        "deleteDisposedStatusSync": app_control::delete_disposed_status,
    ]
    namespace "L@ohos/bundle/distributedBundleManager/distributedBundle"
    [
        "getRemoteAbilityInfoSync": distributed::get_remote_ability_info,
        "getRemoteAbilityInfosSync": distributed::get_remote_ability_infos,
    ]
    namespace "L@ohos/bundle/launcherBundleManager/launcherBundleManager"
    [
        "getLauncherAbilityInfoSync": launcher::get_launcher_ability_info,
        "getAllLauncherAbilityInfoSync": launcher::get_all_launcher_ability_info,
        "getShortcutInfoSync": launcher::get_shortcut_info,
    ]
    namespace "L@ohos/zlib/zlib"
    [
        "zipFileSync": zip::zip_file,
        "unzipFileSync": zip::unzip_file,
        "compressFileSync": zip::compress_file,
        "decompressFileSync": zip::decompress_file,
    ]
);

// Library initialization that runs when the module is loaded.
#[used]
#[link_section = ".init_array"]
static A: extern "C" fn() = {
    #[link_section = ".text.startup"]
    extern "C" fn init() {
        info!("begin bundle manager ani init");

        // Panics must reach the log, the loader would swallow them.
        std::panic::set_hook(Box::new(|info| {
            info!("Panic occurred: {:?}", info);
        }));
    }
    init
};
