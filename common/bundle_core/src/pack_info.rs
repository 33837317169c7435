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

//! Package description of a bundle, used by free install.

use ipc::parcel::{Deserialize, MsgParcel};
use ipc::IpcResult;

/// One package listed in the bundle's package configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageConfig {
    /// Device types the package supports.
    pub device_types: Vec<String>,
    /// Package name.
    pub name: String,
    /// Module type of the package.
    pub module_type: String,
    /// Whether the package installs together with the bundle.
    pub delivery_with_install: bool,
}

impl Deserialize for PackageConfig {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let device_types_len = parcel.read::<u32>().unwrap() as usize;
        let mut device_types = Vec::with_capacity(device_types_len);
        for _ in 0..device_types_len {
            device_types.push(parcel.read::<String>().unwrap());
        }
        let name = parcel.read::<String>().unwrap();
        let module_type = parcel.read::<String>().unwrap();
        let delivery_with_install = parcel.read::<bool>().unwrap();
        Ok(PackageConfig {
            device_types,
            name,
            module_type,
            delivery_with_install,
        })
    }
}

/// Version section of the package summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageVersion {
    /// Version code.
    pub code: u32,
    /// Version name.
    pub name: String,
    /// Earliest compatible version.
    pub min_compatible_version_code: u32,
}

impl Deserialize for PackageVersion {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let code = parcel.read::<u32>().unwrap();
        let name = parcel.read::<String>().unwrap();
        let min_compatible_version_code = parcel.read::<u32>().unwrap();
        Ok(PackageVersion {
            code,
            name,
            min_compatible_version_code,
        })
    }
}

/// Application section of the package summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageApp {
    /// Bundle name.
    pub bundle_name: String,
    /// Bundle version.
    pub version: PackageVersion,
}

impl Deserialize for PackageApp {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let bundle_name = parcel.read::<String>().unwrap();
        let version = parcel.read::<PackageVersion>().unwrap();
        Ok(PackageApp {
            bundle_name,
            version,
        })
    }
}

/// Api version a module was built against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleApiVersion {
    /// Lowest compatible api version.
    pub compatible: u32,
    /// Release type of the target api.
    pub release_type: String,
    /// Api version the module targets.
    pub target: u32,
}

impl Deserialize for ModuleApiVersion {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let compatible = parcel.read::<u32>().unwrap();
        let release_type = parcel.read::<String>().unwrap();
        let target = parcel.read::<u32>().unwrap();
        Ok(ModuleApiVersion {
            compatible,
            release_type,
            target,
        })
    }
}

/// Distribution section of one module summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleDistro {
    /// Whether the module installs together with the bundle.
    pub delivery_with_install: bool,
    /// Whether the module supports free install.
    pub installation_free: bool,
    /// Module name.
    pub module_name: String,
    /// Module type.
    pub module_type: String,
}

impl Deserialize for ModuleDistro {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let delivery_with_install = parcel.read::<bool>().unwrap();
        let installation_free = parcel.read::<bool>().unwrap();
        let module_name = parcel.read::<String>().unwrap();
        let module_type = parcel.read::<String>().unwrap();
        Ok(ModuleDistro {
            delivery_with_install,
            installation_free,
            module_name,
            module_type,
        })
    }
}

/// Ability entry of one module summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleAbilityInfo {
    /// Ability name.
    pub name: String,
    /// Ability label.
    pub label: String,
    /// Whether other bundles may launch the ability.
    pub exported: bool,
}

impl Deserialize for ModuleAbilityInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let name = parcel.read::<String>().unwrap();
        let label = parcel.read::<String>().unwrap();
        let exported = parcel.read::<bool>().unwrap();
        Ok(ModuleAbilityInfo {
            name,
            label,
            exported,
        })
    }
}

/// Summary of one module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageModule {
    /// Entry ability of the module.
    pub main_ability: String,
    /// Api version the module was built against.
    pub api_version: ModuleApiVersion,
    /// Device types the module supports.
    pub device_types: Vec<String>,
    /// Distribution section.
    pub distro: ModuleDistro,
    /// Abilities the module declares.
    pub abilities: Vec<ModuleAbilityInfo>,
}

impl Deserialize for PackageModule {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let main_ability = parcel.read::<String>().unwrap();
        let api_version = parcel.read::<ModuleApiVersion>().unwrap();

        let device_types_len = parcel.read::<u32>().unwrap() as usize;
        let mut device_types = Vec::with_capacity(device_types_len);
        for _ in 0..device_types_len {
            device_types.push(parcel.read::<String>().unwrap());
        }

        let distro = parcel.read::<ModuleDistro>().unwrap();

        let abilities_len = parcel.read::<u32>().unwrap() as usize;
        let mut abilities = Vec::with_capacity(abilities_len);
        for _ in 0..abilities_len {
            abilities.push(parcel.read::<ModuleAbilityInfo>().unwrap());
        }

        Ok(PackageModule {
            main_ability,
            api_version,
            device_types,
            distro,
            abilities,
        })
    }
}

/// Summary section of the package information.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageSummary {
    /// Application section.
    pub app: PackageApp,
    /// One summary per module.
    pub modules: Vec<PackageModule>,
}

impl Deserialize for PackageSummary {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let app = parcel.read::<PackageApp>().unwrap();
        let modules_len = parcel.read::<u32>().unwrap() as usize;
        let mut modules = Vec::with_capacity(modules_len);
        for _ in 0..modules_len {
            modules.push(parcel.read::<PackageModule>().unwrap());
        }
        Ok(PackageSummary { app, modules })
    }
}

/// Package description of one bundle. The sections follow the package
/// query flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BundlePackInfo {
    /// Package configuration entries.
    pub packages: Vec<PackageConfig>,
    /// Summary section.
    pub summary: PackageSummary,
}

impl Deserialize for BundlePackInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let packages_len = parcel.read::<u32>().unwrap() as usize;
        let mut packages = Vec::with_capacity(packages_len);
        for _ in 0..packages_len {
            packages.push(parcel.read::<PackageConfig>().unwrap());
        }
        let summary = parcel.read::<PackageSummary>().unwrap();
        Ok(BundlePackInfo { packages, summary })
    }
}

/// Dispatch version information. Assembled locally; the values are
/// fixed by the dispatch protocol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchInfo {
    /// Dispatch info version.
    pub version: String,
    /// Version of the dispatch api.
    pub dispatch_api_version: String,
}
