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

//! Bundle manager IPC codes, interface tokens and service ids.

/// Interface token of the bundle manager service.
pub const BUNDLE_MGR_TOKEN: &str = "ohos.appexecfwk.BundleMgr";

/// Interface token of the bundle installer.
pub const INSTALLER_TOKEN: &str = "ohos.appexecfwk.BundleInstaller";

/// Interface token of the install status receiver.
pub const STATUS_RECEIVER_TOKEN: &str = "ohos.appexecfwk.StatusReceiver";

/// Interface token of the default application service.
pub const DEFAULT_APP_TOKEN: &str = "ohos.appexecfwk.DefaultApp";

/// Interface token of the application control service.
pub const APP_CONTROL_TOKEN: &str = "ohos.appexecfwk.AppControl";

/// Interface token of the distributed bundle manager service.
pub const DISTRIBUTED_BMS_TOKEN: &str = "ohos.appexecfwk.DistributedBms";

/// Interface token of the bundle event callback.
pub const BUNDLE_EVENT_CALLBACK_TOKEN: &str = "ohos.appexecfwk.BundleEventCallback";

/// Interface token of the archive service.
pub const ARCHIVE_TOKEN: &str = "ohos.appexecfwk.ArchiveMgr";

/// System ability id of the bundle manager service.
pub const BUNDLE_MGR_SERVICE_ID: i32 = 401;

/// System ability id of the distributed bundle manager service.
pub const DISTRIBUTED_BMS_SERVICE_ID: i32 = 511;

/// System ability id of the archive service.
pub const ARCHIVE_SERVICE_ID: i32 = 4821;

/// Bundle manager service transaction codes. The values follow the
/// service's transaction ordinal table; only the codes the client
/// dispatches are declared.
pub mod bundle_mgr {
    /// Get the bundle name owning a uid.
    pub const GET_NAME_FOR_UID: u32 = 9;
    /// Get an ability label by bundle, module and ability name.
    pub const GET_ABILITY_LABEL_WITH_MODULE_NAME: u32 = 21;
    /// Get the launch want of a bundle.
    pub const GET_LAUNCH_WANT_FOR_BUNDLE: u32 = 24;
    /// Get one permission definition.
    pub const GET_PERMISSION_DEF: u32 = 26;
    /// Clean the cache files of a bundle.
    pub const CLEAN_BUNDLE_CACHE_FILES: u32 = 30;
    /// Query whether an application is enabled.
    pub const IS_APPLICATION_ENABLED: u32 = 36;
    /// Enable or disable an application.
    pub const SET_APPLICATION_ENABLED: u32 = 37;
    /// Query whether an ability is enabled.
    pub const IS_ABILITY_ENABLED: u32 = 38;
    /// Enable or disable an ability.
    pub const SET_ABILITY_ENABLED: u32 = 39;
    /// Get the installer remote object.
    pub const GET_BUNDLE_INSTALLER: u32 = 47;
    /// Get bundle package information.
    pub const GET_BUNDLE_PACK_INFO_WITH_INT_FLAGS: u32 = 54;
    /// Verify a named permission of the caller.
    pub const VERIFY_CALLING_PERMISSION: u32 = 64;
    /// Query whether a module is removable.
    pub const IS_MODULE_REMOVABLE: u32 = 67;
    /// Set the upgrade flag of a module.
    pub const SET_MODULE_NEED_UPDATE: u32 = 72;
    /// Get the default application service remote object.
    pub const GET_DEFAULT_APP_PROXY: u32 = 81;
    /// Get the application control service remote object.
    pub const GET_APP_CONTROL_PROXY: u32 = 92;
    /// Query ability information matching a want.
    pub const QUERY_ABILITY_INFOS: u32 = 94;
    /// Query extension ability information matching a want, any type.
    pub const QUERY_EXTENSION_INFO_WITHOUT_TYPE: u32 = 95;
    /// Query extension ability information matching a want and type.
    pub const QUERY_EXTENSION_INFO: u32 = 96;
    /// Get information of all installed applications.
    pub const GET_APPLICATION_INFOS: u32 = 97;
    /// Get information of one application.
    pub const GET_APPLICATION_INFO: u32 = 98;
    /// Get bundle information from a HAP archive.
    pub const GET_BUNDLE_ARCHIVE_INFO: u32 = 99;
    /// Get information of one bundle.
    pub const GET_BUNDLE_INFO: u32 = 100;
    /// Get information of all installed bundles.
    pub const GET_BUNDLE_INFOS: u32 = 101;
    /// Get the shortcut information of a bundle.
    pub const GET_SHORTCUT_INFO: u32 = 102;
    /// Register a bundle event callback.
    pub const REGISTER_BUNDLE_EVENT_CALLBACK: u32 = 103;
    /// Unregister a bundle event callback.
    pub const UNREGISTER_BUNDLE_EVENT_CALLBACK: u32 = 104;
    /// Get the calling bundle's own information.
    pub const GET_BUNDLE_INFO_FOR_SELF: u32 = 105;
    /// Verify that the caller is a system application.
    pub const VERIFY_SYSTEM_API: u32 = 106;
}

/// Bundle installer transaction codes.
pub mod installer {
    /// Install from a single HAP path.
    pub const INSTALL: u32 = 0;
    /// Install from multiple HAP paths.
    pub const INSTALL_MULTIPLE_HAPS: u32 = 1;
    /// Uninstall a bundle.
    pub const UNINSTALL: u32 = 2;
    /// Uninstall one module of a bundle.
    pub const UNINSTALL_MODULE: u32 = 3;
    /// Recover a preinstalled bundle.
    pub const RECOVER: u32 = 4;
}

/// Install status receiver transaction codes.
pub mod status_receiver {
    /// Final installation result.
    pub const ON_FINISHED: u32 = 0;
}

/// Bundle event callback transaction codes.
pub mod bundle_event {
    /// One bundle change event.
    pub const ON_RECEIVE_EVENT: u32 = 0;
}

/// Default application service transaction codes.
pub mod default_app {
    /// Query whether the caller is the default application of a type.
    pub const IS_DEFAULT_APPLICATION: u32 = 0;
    /// Get the default application of a type.
    pub const GET_DEFAULT_APPLICATION: u32 = 1;
    /// Set the default application of a type.
    pub const SET_DEFAULT_APPLICATION: u32 = 2;
    /// Reset the default application of a type.
    pub const RESET_DEFAULT_APPLICATION: u32 = 3;
}

/// Application control service transaction codes.
pub mod app_control {
    /// Set the disposed status of an application.
    pub const SET_DISPOSED_STATUS: u32 = 0;
    /// Get the disposed status of an application.
    pub const GET_DISPOSED_STATUS: u32 = 1;
    /// Delete the disposed status of an application.
    pub const DELETE_DISPOSED_STATUS: u32 = 2;
}

/// Distributed bundle manager transaction codes.
pub mod distributed {
    /// Get one remote ability information.
    pub const GET_REMOTE_ABILITY_INFO: u32 = 0;
    /// Get remote ability information for several elements.
    pub const GET_REMOTE_ABILITY_INFOS: u32 = 1;
    /// Get one remote ability information with a locale.
    pub const GET_REMOTE_ABILITY_INFO_WITH_LOCALE: u32 = 2;
    /// Get remote ability information for several elements with a locale.
    pub const GET_REMOTE_ABILITY_INFOS_WITH_LOCALE: u32 = 3;
}

/// Archive service transaction codes.
pub mod archive {
    /// Zip a file or directory.
    pub const ZIP_FILE: u32 = 0;
    /// Unzip an archive.
    pub const UNZIP_FILE: u32 = 1;
    /// Compress a single file.
    pub const COMPRESS_FILE: u32 = 2;
    /// Decompress a single file.
    pub const DECOMPRESS_FILE: u32 = 3;
}
