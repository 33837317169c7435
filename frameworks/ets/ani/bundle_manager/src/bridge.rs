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

//! Bridge types between the ETS interfaces and the native bundle types.
//!
//! Each struct mirrors one declaration of the bundle manager ETS surface.
//! Resource ids and version codes widen to `i64` on the way out so every
//! `u32` the service reports survives the `number` fields of ArkTS.

use bundle_core::ability_info::{AbilityInfo, ExtensionAbilityInfo};
use bundle_core::app_info::{ApplicationInfo, Metadata, ModuleMetadata};
use bundle_core::bundle_info::{
    BundleInfo, HapModuleInfo, PermissionDef, ReqPermissionDetail, SignatureInfo,
};
use bundle_core::event::BundleChangedInfo;
use bundle_core::pack_info::{
    BundlePackInfo, DispatchInfo, ModuleAbilityInfo, ModuleApiVersion, ModuleDistro, PackageApp,
    PackageConfig, PackageModule, PackageSummary, PackageVersion,
};
use bundle_core::shortcut::{LauncherAbilityInfo, ShortcutInfo, ShortcutWant};
use bundle_core::want::{ElementName, RemoteAbilityInfo, Want};
use bundle_core::zip::ZipOptions;

/// One metadata entry of an ability, extension ability or module.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/MetadataInner")]
pub struct MetadataBridge {
    pub name: String,
    pub value: String,
    pub resource: String,
}

impl From<Metadata> for MetadataBridge {
    fn from(value: Metadata) -> Self {
        MetadataBridge {
            name: value.name,
            value: value.value,
            resource: value.resource,
        }
    }
}

impl From<MetadataBridge> for Metadata {
    fn from(value: MetadataBridge) -> Self {
        Metadata {
            name: value.name,
            value: value.value,
            resource: value.resource,
        }
    }
}

/// Metadata entries of one module.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/ModuleMetadataInner")]
pub struct ModuleMetadataBridge {
    pub module_name: String,
    pub metadata: Vec<MetadataBridge>,
}

impl From<ModuleMetadata> for ModuleMetadataBridge {
    fn from(value: ModuleMetadata) -> Self {
        ModuleMetadataBridge {
            module_name: value.module_name,
            metadata: value.metadata.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ModuleMetadataBridge> for ModuleMetadata {
    fn from(value: ModuleMetadataBridge) -> Self {
        ModuleMetadata {
            module_name: value.module_name,
            metadata: value.metadata.into_iter().map(Into::into).collect(),
        }
    }
}

/// Application details attached to bundle and ability results.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/ApplicationInfoInner")]
pub struct ApplicationInfoBridge {
    pub name: String,
    pub description: String,
    pub description_id: i64,
    pub enabled: bool,
    pub label: String,
    pub label_id: i64,
    pub icon: String,
    pub icon_id: i64,
    pub process: String,
    pub permissions: Vec<String>,
    pub code_path: String,
    pub removable: bool,
    pub access_token_id: i64,
    pub uid: i32,
    pub app_distribution_type: String,
    pub app_provision_type: String,
    pub system_app: bool,
    pub debug: bool,
    pub metadata: Vec<ModuleMetadataBridge>,
}

impl From<ApplicationInfo> for ApplicationInfoBridge {
    fn from(value: ApplicationInfo) -> Self {
        ApplicationInfoBridge {
            name: value.name,
            description: value.description,
            description_id: value.description_id as i64,
            enabled: value.enabled,
            label: value.label,
            label_id: value.label_id as i64,
            icon: value.icon,
            icon_id: value.icon_id as i64,
            process: value.process,
            permissions: value.permissions,
            code_path: value.code_path,
            removable: value.removable,
            access_token_id: value.access_token_id as i64,
            uid: value.uid,
            app_distribution_type: value.app_distribution_type,
            app_provision_type: value.app_provision_type,
            system_app: value.system_app,
            debug: value.debug,
            metadata: value.metadata.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ApplicationInfoBridge> for ApplicationInfo {
    fn from(value: ApplicationInfoBridge) -> Self {
        ApplicationInfo {
            name: value.name,
            description: value.description,
            description_id: value.description_id as u32,
            enabled: value.enabled,
            label: value.label,
            label_id: value.label_id as u32,
            icon: value.icon,
            icon_id: value.icon_id as u32,
            process: value.process,
            permissions: value.permissions,
            code_path: value.code_path,
            removable: value.removable,
            access_token_id: value.access_token_id as u32,
            uid: value.uid,
            app_distribution_type: value.app_distribution_type,
            app_provision_type: value.app_provision_type,
            system_app: value.system_app,
            debug: value.debug,
            metadata: value.metadata.into_iter().map(Into::into).collect(),
        }
    }
}

/// One ability of a module.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/AbilityInfoInner")]
pub struct AbilityInfoBridge {
    pub bundle_name: String,
    pub module_name: String,
    pub name: String,
    pub label: String,
    pub label_id: i64,
    pub description: String,
    pub description_id: i64,
    pub icon: String,
    pub icon_id: i64,
    pub process: String,
    pub exported: bool,
    pub orientation: i32,
    pub launch_type: i32,
    pub permissions: Vec<String>,
    pub device_types: Vec<String>,
    pub uri: String,
    pub metadata: Vec<MetadataBridge>,
    pub enabled: bool,
    pub application_info: ApplicationInfoBridge,
}

impl From<AbilityInfo> for AbilityInfoBridge {
    fn from(value: AbilityInfo) -> Self {
        AbilityInfoBridge {
            bundle_name: value.bundle_name,
            module_name: value.module_name,
            name: value.name,
            label: value.label,
            label_id: value.label_id as i64,
            description: value.description,
            description_id: value.description_id as i64,
            icon: value.icon,
            icon_id: value.icon_id as i64,
            process: value.process,
            exported: value.exported,
            orientation: value.orientation as i32,
            launch_type: value.launch_type as i32,
            permissions: value.permissions,
            device_types: value.device_types,
            uri: value.uri,
            metadata: value.metadata.into_iter().map(Into::into).collect(),
            enabled: value.enabled,
            application_info: value.application_info.into(),
        }
    }
}

impl From<AbilityInfoBridge> for AbilityInfo {
    fn from(value: AbilityInfoBridge) -> Self {
        AbilityInfo {
            bundle_name: value.bundle_name,
            module_name: value.module_name,
            name: value.name,
            label: value.label,
            label_id: value.label_id as u32,
            description: value.description,
            description_id: value.description_id as u32,
            icon: value.icon,
            icon_id: value.icon_id as u32,
            process: value.process,
            exported: value.exported,
            orientation: value.orientation as u32,
            launch_type: value.launch_type as u32,
            permissions: value.permissions,
            device_types: value.device_types,
            uri: value.uri,
            metadata: value.metadata.into_iter().map(Into::into).collect(),
            enabled: value.enabled,
            application_info: value.application_info.into(),
        }
    }
}

/// One extension ability of a module.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/ExtensionAbilityInfoInner")]
pub struct ExtensionAbilityInfoBridge {
    pub bundle_name: String,
    pub module_name: String,
    pub name: String,
    pub label_id: i64,
    pub description_id: i64,
    pub icon_id: i64,
    pub exported: bool,
    pub extension_ability_type: i32,
    pub permissions: Vec<String>,
    pub metadata: Vec<MetadataBridge>,
    pub enabled: bool,
    pub read_permission: String,
    pub write_permission: String,
    pub application_info: ApplicationInfoBridge,
}

impl From<ExtensionAbilityInfo> for ExtensionAbilityInfoBridge {
    fn from(value: ExtensionAbilityInfo) -> Self {
        ExtensionAbilityInfoBridge {
            bundle_name: value.bundle_name,
            module_name: value.module_name,
            name: value.name,
            label_id: value.label_id as i64,
            description_id: value.description_id as i64,
            icon_id: value.icon_id as i64,
            exported: value.exported,
            extension_ability_type: value.extension_ability_type as i32,
            permissions: value.permissions,
            metadata: value.metadata.into_iter().map(Into::into).collect(),
            enabled: value.enabled,
            read_permission: value.read_permission,
            write_permission: value.write_permission,
            application_info: value.application_info.into(),
        }
    }
}

/// One hap module of a bundle.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/HapModuleInfoInner")]
pub struct HapModuleInfoBridge {
    pub name: String,
    pub icon: String,
    pub icon_id: i64,
    pub label: String,
    pub label_id: i64,
    pub description: String,
    pub description_id: i64,
    pub main_element_name: String,
    pub abilities: Vec<AbilityInfoBridge>,
    pub extension_abilities: Vec<ExtensionAbilityInfoBridge>,
    pub metadata: Vec<MetadataBridge>,
    pub device_types: Vec<String>,
    pub installation_free: bool,
    pub hash_value: String,
}

impl From<HapModuleInfo> for HapModuleInfoBridge {
    fn from(value: HapModuleInfo) -> Self {
        HapModuleInfoBridge {
            name: value.name,
            icon: value.icon,
            icon_id: value.icon_id as i64,
            label: value.label,
            label_id: value.label_id as i64,
            description: value.description,
            description_id: value.description_id as i64,
            main_element_name: value.main_element_name,
            abilities: value.abilities.into_iter().map(Into::into).collect(),
            extension_abilities: value
                .extension_abilities
                .into_iter()
                .map(Into::into)
                .collect(),
            metadata: value.metadata.into_iter().map(Into::into).collect(),
            device_types: value.device_types,
            installation_free: value.installation_free,
            hash_value: value.hash_value,
        }
    }
}

/// Signing identity of a bundle.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/SignatureInfoInner")]
pub struct SignatureInfoBridge {
    pub app_id: String,
    pub fingerprint: String,
}

impl From<SignatureInfo> for SignatureInfoBridge {
    fn from(value: SignatureInfo) -> Self {
        SignatureInfoBridge {
            app_id: value.app_id,
            fingerprint: value.fingerprint,
        }
    }
}

/// Details of one requested permission.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/ReqPermissionDetailInner")]
pub struct ReqPermissionDetailBridge {
    pub name: String,
    pub module_name: String,
    pub reason: String,
    pub reason_id: i64,
}

impl From<ReqPermissionDetail> for ReqPermissionDetailBridge {
    fn from(value: ReqPermissionDetail) -> Self {
        ReqPermissionDetailBridge {
            name: value.name,
            module_name: value.module_name,
            reason: value.reason,
            reason_id: value.reason_id as i64,
        }
    }
}

/// One installed bundle.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/BundleInfoInner")]
pub struct BundleInfoBridge {
    pub name: String,
    pub vendor: String,
    pub version_code: i64,
    pub version_name: String,
    pub min_compatible_version_code: i32,
    pub target_version: i32,
    pub app_info: ApplicationInfoBridge,
    pub hap_modules_info: Vec<HapModuleInfoBridge>,
    pub req_permissions: Vec<String>,
    pub req_permission_details: Vec<ReqPermissionDetailBridge>,
    pub permission_grant_states: Vec<i32>,
    pub signature_info: SignatureInfoBridge,
    pub install_time: i64,
    pub update_time: i64,
    pub uid: i32,
}

impl From<BundleInfo> for BundleInfoBridge {
    fn from(value: BundleInfo) -> Self {
        BundleInfoBridge {
            name: value.name,
            vendor: value.vendor,
            version_code: value.version_code as i64,
            version_name: value.version_name,
            min_compatible_version_code: value.min_compatible_version_code,
            target_version: value.target_version,
            app_info: value.application_info.into(),
            hap_modules_info: value.hap_module_infos.into_iter().map(Into::into).collect(),
            req_permissions: value.req_permissions,
            req_permission_details: value
                .req_permission_details
                .into_iter()
                .map(Into::into)
                .collect(),
            permission_grant_states: value.permission_grant_states,
            signature_info: value.signature_info.into(),
            install_time: value.install_time,
            update_time: value.update_time,
            uid: value.uid,
        }
    }
}

/// Definition of one system permission.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/PermissionDefInner")]
pub struct PermissionDefBridge {
    pub permission_name: String,
    pub grant_mode: i32,
    pub label_id: i64,
    pub description_id: i64,
}

impl From<PermissionDef> for PermissionDefBridge {
    fn from(value: PermissionDef) -> Self {
        PermissionDefBridge {
            permission_name: value.permission_name,
            grant_mode: value.grant_mode,
            label_id: value.label_id as i64,
            description_id: value.description_id as i64,
        }
    }
}

/// Query condition of ability and extension ability lookups, and the
/// launch description the disposed and launch-want queries answer.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/WantInner")]
pub struct WantBridge {
    pub bundle_name: Option<String>,
    pub module_name: Option<String>,
    pub ability_name: Option<String>,
    pub uri: Option<String>,
    pub mime_type: Option<String>,
    pub action: Option<String>,
    pub entities: Option<Vec<String>>,
    pub device_id: Option<String>,
    pub flags: Option<i32>,
}

impl From<WantBridge> for Want {
    fn from(value: WantBridge) -> Self {
        Want {
            bundle_name: value.bundle_name.unwrap_or_default(),
            module_name: value.module_name.unwrap_or_default(),
            ability_name: value.ability_name.unwrap_or_default(),
            uri: value.uri.unwrap_or_default(),
            mime_type: value.mime_type.unwrap_or_default(),
            action: value.action.unwrap_or_default(),
            entities: value.entities.unwrap_or_default(),
            device_id: value.device_id.unwrap_or_default(),
            flags: value.flags.unwrap_or_default(),
        }
    }
}

impl From<Want> for WantBridge {
    fn from(value: Want) -> Self {
        WantBridge {
            bundle_name: Some(value.bundle_name),
            module_name: Some(value.module_name),
            ability_name: Some(value.ability_name),
            uri: Some(value.uri),
            mime_type: Some(value.mime_type),
            action: Some(value.action),
            entities: Some(value.entities),
            device_id: Some(value.device_id),
            flags: Some(value.flags),
        }
    }
}

/// Component identity used by default app and distributed queries.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleManager/bundleManager/ElementNameInner")]
pub struct ElementNameBridge {
    pub device_id: Option<String>,
    pub bundle_name: String,
    pub module_name: Option<String>,
    pub ability_name: String,
    pub uri: Option<String>,
    pub short_name: Option<String>,
}

impl From<ElementNameBridge> for ElementName {
    fn from(value: ElementNameBridge) -> Self {
        ElementName {
            device_id: value.device_id.unwrap_or_default(),
            bundle_name: value.bundle_name,
            module_name: value.module_name.unwrap_or_default(),
            ability_name: value.ability_name,
            uri: value.uri.unwrap_or_default(),
            short_name: value.short_name.unwrap_or_default(),
        }
    }
}

impl From<ElementName> for ElementNameBridge {
    fn from(value: ElementName) -> Self {
        ElementNameBridge {
            device_id: Some(value.device_id),
            bundle_name: value.bundle_name,
            module_name: Some(value.module_name),
            ability_name: value.ability_name,
            uri: Some(value.uri),
            short_name: Some(value.short_name),
        }
    }
}

/// Label and icon of one component on a remote device.
#[derive(Clone)]
#[ani_rs::ani(
    path = "L@ohos/bundle/distributedBundleManager/distributedBundle/RemoteAbilityInfoInner"
)]
pub struct RemoteAbilityInfoBridge {
    pub element_name: ElementNameBridge,
    pub label: String,
    pub icon: String,
}

impl From<RemoteAbilityInfo> for RemoteAbilityInfoBridge {
    fn from(value: RemoteAbilityInfo) -> Self {
        RemoteAbilityInfoBridge {
            element_name: value.element_name.into(),
            label: value.label,
            icon: value.icon,
        }
    }
}

/// Target of one home screen shortcut.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/launcherBundleManager/launcherBundleManager/ShortcutWantInner")]
pub struct ShortcutWantBridge {
    pub target_bundle: String,
    pub target_module: Option<String>,
    pub target_ability: Option<String>,
}

impl From<ShortcutWant> for ShortcutWantBridge {
    fn from(value: ShortcutWant) -> Self {
        ShortcutWantBridge {
            target_bundle: value.target_bundle,
            target_module: Some(value.target_module),
            target_ability: Some(value.target_ability),
        }
    }
}

/// One home screen shortcut of a bundle.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/launcherBundleManager/launcherBundleManager/ShortcutInfoInner")]
pub struct ShortcutInfoBridge {
    pub id: String,
    pub bundle_name: String,
    pub module_name: String,
    pub host_ability: String,
    pub icon: String,
    pub icon_id: i64,
    pub label: String,
    pub label_id: i64,
    pub wants: Vec<ShortcutWantBridge>,
}

impl From<ShortcutInfo> for ShortcutInfoBridge {
    fn from(value: ShortcutInfo) -> Self {
        ShortcutInfoBridge {
            id: value.id,
            bundle_name: value.bundle_name,
            module_name: value.module_name,
            host_ability: value.host_ability,
            icon: value.icon,
            icon_id: value.icon_id as i64,
            label: value.label,
            label_id: value.label_id as i64,
            wants: value.wants.into_iter().map(Into::into).collect(),
        }
    }
}

/// One ability shown on the launcher.
#[derive(Clone)]
#[ani_rs::ani(
    path = "L@ohos/bundle/launcherBundleManager/launcherBundleManager/LauncherAbilityInfoInner"
)]
pub struct LauncherAbilityInfoBridge {
    pub application_info: ApplicationInfoBridge,
    pub element_name: ElementNameBridge,
    pub label_id: i64,
    pub icon_id: i64,
    pub user_id: i32,
    pub install_time: i64,
}

impl From<LauncherAbilityInfo> for LauncherAbilityInfoBridge {
    fn from(value: LauncherAbilityInfo) -> Self {
        LauncherAbilityInfoBridge {
            application_info: value.application_info.into(),
            element_name: value.element_name.into(),
            label_id: value.label_id as i64,
            icon_id: value.icon_id as i64,
            user_id: value.user_id,
            install_time: value.install_time,
        }
    }
}

/// One module hash pair of an install request.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/installer/installer/HashParamInner")]
pub struct HashParamBridge {
    pub module_name: String,
    pub hash_value: String,
}

/// Install request options. Absent fields keep the installer defaults.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/installer/installer/InstallParamInner")]
pub struct InstallParamBridge {
    pub user_id: Option<i32>,
    pub install_flag: Option<i32>,
    pub is_keep_data: Option<bool>,
    pub hash_params: Option<Vec<HashParamBridge>>,
    pub crowdtest_deadline: Option<i64>,
}

/// Version block of a bundle package summary.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/freeInstall/freeInstall/PackageVersionInner")]
pub struct PackageVersionBridge {
    pub code: i64,
    pub name: String,
    pub min_compatible_version_code: i64,
}

impl From<PackageVersion> for PackageVersionBridge {
    fn from(value: PackageVersion) -> Self {
        PackageVersionBridge {
            code: value.code as i64,
            name: value.name,
            min_compatible_version_code: value.min_compatible_version_code as i64,
        }
    }
}

/// Application block of a bundle package summary.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/freeInstall/freeInstall/PackageAppInner")]
pub struct PackageAppBridge {
    pub bundle_name: String,
    pub version: PackageVersionBridge,
}

impl From<PackageApp> for PackageAppBridge {
    fn from(value: PackageApp) -> Self {
        PackageAppBridge {
            bundle_name: value.bundle_name,
            version: value.version.into(),
        }
    }
}

/// Api version span one module was built against.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/freeInstall/freeInstall/ModuleApiVersionInner")]
pub struct ModuleApiVersionBridge {
    pub compatible: i64,
    pub release_type: String,
    pub target: i64,
}

impl From<ModuleApiVersion> for ModuleApiVersionBridge {
    fn from(value: ModuleApiVersion) -> Self {
        ModuleApiVersionBridge {
            compatible: value.compatible as i64,
            release_type: value.release_type,
            target: value.target as i64,
        }
    }
}

/// Distribution policy of one module.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/freeInstall/freeInstall/ModuleDistroInner")]
pub struct ModuleDistroBridge {
    pub delivery_with_install: bool,
    pub installation_free: bool,
    pub module_name: String,
    pub module_type: String,
}

impl From<ModuleDistro> for ModuleDistroBridge {
    fn from(value: ModuleDistro) -> Self {
        ModuleDistroBridge {
            delivery_with_install: value.delivery_with_install,
            installation_free: value.installation_free,
            module_name: value.module_name,
            module_type: value.module_type,
        }
    }
}

/// One ability listed in a package summary.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/freeInstall/freeInstall/ModuleAbilityInfoInner")]
pub struct ModuleAbilityInfoBridge {
    pub name: String,
    pub label: String,
    pub exported: bool,
}

impl From<ModuleAbilityInfo> for ModuleAbilityInfoBridge {
    fn from(value: ModuleAbilityInfo) -> Self {
        ModuleAbilityInfoBridge {
            name: value.name,
            label: value.label,
            exported: value.exported,
        }
    }
}

/// Summary block of one module of a package.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/freeInstall/freeInstall/PackageModuleInner")]
pub struct PackageModuleBridge {
    pub main_ability: String,
    pub api_version: ModuleApiVersionBridge,
    pub device_types: Vec<String>,
    pub distro: ModuleDistroBridge,
    pub abilities: Vec<ModuleAbilityInfoBridge>,
}

impl From<PackageModule> for PackageModuleBridge {
    fn from(value: PackageModule) -> Self {
        PackageModuleBridge {
            main_ability: value.main_ability,
            api_version: value.api_version.into(),
            device_types: value.device_types,
            distro: value.distro.into(),
            abilities: value.abilities.into_iter().map(Into::into).collect(),
        }
    }
}

/// Application and module summaries of a package.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/freeInstall/freeInstall/PackageSummaryInner")]
pub struct PackageSummaryBridge {
    pub app: PackageAppBridge,
    pub modules: Vec<PackageModuleBridge>,
}

impl From<PackageSummary> for PackageSummaryBridge {
    fn from(value: PackageSummary) -> Self {
        PackageSummaryBridge {
            app: value.app.into(),
            modules: value.modules.into_iter().map(Into::into).collect(),
        }
    }
}

/// One package declared in the pack.info of an app package.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/freeInstall/freeInstall/PackageConfigInner")]
pub struct PackageConfigBridge {
    pub device_types: Vec<String>,
    pub name: String,
    pub module_type: String,
    pub delivery_with_install: bool,
}

impl From<PackageConfig> for PackageConfigBridge {
    fn from(value: PackageConfig) -> Self {
        PackageConfigBridge {
            device_types: value.device_types,
            name: value.name,
            module_type: value.module_type,
            delivery_with_install: value.delivery_with_install,
        }
    }
}

/// Pack info of one app package.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/freeInstall/freeInstall/BundlePackInfoInner")]
pub struct BundlePackInfoBridge {
    pub packages: Vec<PackageConfigBridge>,
    pub summary: PackageSummaryBridge,
}

impl From<BundlePackInfo> for BundlePackInfoBridge {
    fn from(value: BundlePackInfo) -> Self {
        BundlePackInfoBridge {
            packages: value.packages.into_iter().map(Into::into).collect(),
            summary: value.summary.into(),
        }
    }
}

/// Version pair the dispatcher reports.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/freeInstall/freeInstall/DispatchInfoInner")]
pub struct DispatchInfoBridge {
    pub version: String,
    pub dispatch_api_version: String,
}

impl From<DispatchInfo> for DispatchInfoBridge {
    fn from(value: DispatchInfo) -> Self {
        DispatchInfoBridge {
            version: value.version,
            dispatch_api_version: value.dispatch_api_version,
        }
    }
}

/// Payload delivered to bundle change subscribers.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/bundle/bundleMonitor/bundleMonitor/BundleChangedInfoInner")]
pub struct BundleChangedInfoBridge {
    pub bundle_name: String,
    pub user_id: i32,
}

impl From<BundleChangedInfo> for BundleChangedInfoBridge {
    fn from(value: BundleChangedInfo) -> Self {
        BundleChangedInfoBridge {
            bundle_name: value.bundle_name,
            user_id: value.user_id,
        }
    }
}

/// Archive request options. Absent fields keep the service defaults.
#[derive(Clone)]
#[ani_rs::ani(path = "L@ohos/zlib/zlib/OptionsInner")]
pub struct OptionsBridge {
    pub level: Option<i32>,
    pub mem_level: Option<i32>,
    pub strategy: Option<i32>,
}

impl From<OptionsBridge> for ZipOptions {
    fn from(value: OptionsBridge) -> Self {
        ZipOptions {
            level: value.level,
            mem_level: value.mem_level,
            strategy: value.strategy,
        }
    }
}

#[cfg(test)]
mod ut_bridge {
    include!("../tests/ut/ut_bridge.rs");
}
