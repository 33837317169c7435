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

use once_cell::sync::Lazy;

use super::*;

static SAMPLE_APPLICATION: Lazy<ApplicationInfo> = Lazy::new(|| ApplicationInfo {
    name: "com.example.app".to_string(),
    description: "sample".to_string(),
    description_id: 16777301,
    enabled: true,
    label: "Sample".to_string(),
    label_id: 16777216,
    icon: "$media:icon".to_string(),
    icon_id: 16777217,
    process: "com.example.app".to_string(),
    permissions: vec!["ohos.permission.INTERNET".to_string()],
    code_path: "/data/app/el1/bundle/public/com.example.app".to_string(),
    removable: true,
    access_token_id: u32::MAX,
    uid: 20010041,
    app_distribution_type: "app_gallery".to_string(),
    app_provision_type: "release".to_string(),
    system_app: false,
    debug: false,
    metadata: vec![ModuleMetadata {
        module_name: "entry".to_string(),
        metadata: vec![Metadata {
            name: "ohos.extension.forms".to_string(),
            value: "sample".to_string(),
            resource: "$profile:form_config".to_string(),
        }],
    }],
});

// @tc.name: ut_bridge_want_round_trip
// @tc.desc: Test the want conversions in both directions
// @tc.precon: NA
// @tc.step: 1. Convert a populated want out and back
//           2. Convert a bridge want with absent fields in
// @tc.expect: The round trip preserves every field, absent fields land
//             as defaults
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_bridge_want_round_trip() {
    let want = Want {
        bundle_name: "com.example.app".to_string(),
        module_name: "entry".to_string(),
        ability_name: "MainAbility".to_string(),
        uri: "file://docs/a.txt".to_string(),
        mime_type: "text/plain".to_string(),
        action: "ohos.want.action.viewData".to_string(),
        entities: vec!["entity.system.browsable".to_string()],
        device_id: "udid-1".to_string(),
        flags: 2,
    };
    let round: Want = WantBridge::from(want.clone()).into();
    assert_eq!(round, want);

    let absent = WantBridge {
        bundle_name: None,
        module_name: None,
        ability_name: None,
        uri: None,
        mime_type: None,
        action: None,
        entities: None,
        device_id: None,
        flags: None,
    };
    assert_eq!(Want::from(absent), Want::default());
}

// @tc.name: ut_bridge_element_name_round_trip
// @tc.desc: Test the element name conversions in both directions
// @tc.precon: NA
// @tc.step: 1. Convert a populated element name out and back
// @tc.expect: The round trip preserves every field
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_bridge_element_name_round_trip() {
    let element = ElementName {
        device_id: "udid-1".to_string(),
        bundle_name: "com.example.app".to_string(),
        module_name: "entry".to_string(),
        ability_name: "MainAbility".to_string(),
        uri: "".to_string(),
        short_name: "Main".to_string(),
    };
    let round: ElementName = ElementNameBridge::from(element.clone()).into();
    assert_eq!(round, element);
}

// @tc.name: ut_bridge_ability_info_round_trip
// @tc.desc: Test the ability info conversions used by the enabled state
//           natives
// @tc.precon: NA
// @tc.step: 1. Convert an ability info with nested application info out
//              and back
// @tc.expect: The round trip preserves the names, the numeric fields and
//             the nested application info
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_bridge_ability_info_round_trip() {
    let ability = AbilityInfo {
        bundle_name: "com.example.app".to_string(),
        module_name: "entry".to_string(),
        name: "MainAbility".to_string(),
        label: "Sample".to_string(),
        label_id: u32::MAX,
        description: "sample".to_string(),
        description_id: 16777301,
        icon: "$media:icon".to_string(),
        icon_id: 16777217,
        process: "com.example.app".to_string(),
        exported: true,
        orientation: 3,
        launch_type: 2,
        permissions: vec!["ohos.permission.CAMERA".to_string()],
        device_types: vec!["phone".to_string(), "tablet".to_string()],
        uri: "".to_string(),
        metadata: vec![Metadata {
            name: "ohos.ability.shortcuts".to_string(),
            value: "".to_string(),
            resource: "$profile:shortcuts_config".to_string(),
        }],
        enabled: true,
        application_info: SAMPLE_APPLICATION.clone(),
    };

    let bridge = AbilityInfoBridge::from(ability.clone());
    assert_eq!(bridge.label_id, u32::MAX as i64);
    assert_eq!(bridge.orientation, 3);
    assert_eq!(bridge.application_info.access_token_id, u32::MAX as i64);

    let round: AbilityInfo = bridge.into();
    assert_eq!(round, ability);
}

// @tc.name: ut_bridge_bundle_info_widths
// @tc.desc: Test the width of the numeric bundle info fields
// @tc.precon: NA
// @tc.step: 1. Convert a bundle info carrying the largest version code
// @tc.expect: Version code and resource ids survive unclamped, times and
//             identity fields map through
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_bridge_bundle_info_widths() {
    let info = BundleInfo {
        name: "com.example.app".to_string(),
        vendor: "example".to_string(),
        version_code: u32::MAX,
        version_name: "1.0.0".to_string(),
        min_compatible_version_code: 1000000,
        target_version: 12,
        application_info: SAMPLE_APPLICATION.clone(),
        hap_module_infos: vec![HapModuleInfo {
            name: "entry".to_string(),
            installation_free: true,
            hash_value: "f4aa".to_string(),
            ..Default::default()
        }],
        req_permissions: vec!["ohos.permission.INTERNET".to_string()],
        req_permission_details: vec![ReqPermissionDetail {
            name: "ohos.permission.INTERNET".to_string(),
            module_name: "entry".to_string(),
            reason: "network".to_string(),
            reason_id: 16777400,
        }],
        permission_grant_states: vec![0, -1],
        signature_info: SignatureInfo {
            app_id: "com.example.app_BNtg4JBClbl".to_string(),
            fingerprint: "8E93".to_string(),
        },
        install_time: 1700000000000,
        update_time: 1700000001000,
        uid: 20010041,
    };

    let bridge = BundleInfoBridge::from(info);
    assert_eq!(bridge.version_code, u32::MAX as i64);
    assert_eq!(bridge.min_compatible_version_code, 1000000);
    assert_eq!(bridge.app_info.name, "com.example.app");
    assert_eq!(bridge.hap_modules_info.len(), 1);
    assert!(bridge.hap_modules_info[0].installation_free);
    assert_eq!(bridge.req_permission_details[0].reason_id, 16777400);
    assert_eq!(bridge.permission_grant_states, vec![0, -1]);
    assert_eq!(bridge.signature_info.app_id, "com.example.app_BNtg4JBClbl");
    assert_eq!(bridge.install_time, 1700000000000);
    assert_eq!(bridge.uid, 20010041);
}

// @tc.name: ut_bridge_launcher_types
// @tc.desc: Test the launcher and shortcut conversions
// @tc.precon: NA
// @tc.step: 1. Convert a launcher ability info and a shortcut info
// @tc.expect: Element names, resource ids and shortcut targets map
//             through
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_bridge_launcher_types() {
    let launcher = LauncherAbilityInfo {
        application_info: SAMPLE_APPLICATION.clone(),
        element_name: ElementName {
            bundle_name: "com.example.app".to_string(),
            module_name: "entry".to_string(),
            ability_name: "MainAbility".to_string(),
            ..Default::default()
        },
        label_id: 16777216,
        icon_id: u32::MAX,
        user_id: 100,
        install_time: 1700000000000,
    };
    let bridge = LauncherAbilityInfoBridge::from(launcher);
    assert_eq!(bridge.icon_id, u32::MAX as i64);
    assert_eq!(bridge.element_name.bundle_name, "com.example.app");
    assert_eq!(bridge.element_name.module_name.as_deref(), Some("entry"));
    assert_eq!(bridge.user_id, 100);

    let shortcut = ShortcutInfo {
        id: "first".to_string(),
        bundle_name: "com.example.app".to_string(),
        module_name: "entry".to_string(),
        host_ability: "MainAbility".to_string(),
        icon: "$media:icon".to_string(),
        icon_id: 16777217,
        label: "First".to_string(),
        label_id: 16777216,
        wants: vec![ShortcutWant {
            target_bundle: "com.example.app".to_string(),
            target_module: "entry".to_string(),
            target_ability: "SecondAbility".to_string(),
        }],
    };
    let bridge = ShortcutInfoBridge::from(shortcut);
    assert_eq!(bridge.wants.len(), 1);
    assert_eq!(bridge.wants[0].target_bundle, "com.example.app");
    assert_eq!(
        bridge.wants[0].target_ability.as_deref(),
        Some("SecondAbility")
    );
}

// @tc.name: ut_bridge_pack_info_widths
// @tc.desc: Test the width of the package version fields
// @tc.precon: NA
// @tc.step: 1. Convert a pack info carrying the largest version code
// @tc.expect: Version codes and api levels survive unclamped
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_bridge_pack_info_widths() {
    let pack = BundlePackInfo {
        packages: vec![PackageConfig {
            device_types: vec!["phone".to_string()],
            name: "entry".to_string(),
            module_type: "entry".to_string(),
            delivery_with_install: true,
        }],
        summary: PackageSummary {
            app: PackageApp {
                bundle_name: "com.example.app".to_string(),
                version: PackageVersion {
                    code: u32::MAX,
                    name: "1.0.0".to_string(),
                    min_compatible_version_code: 1000000,
                },
            },
            modules: vec![PackageModule {
                main_ability: "MainAbility".to_string(),
                api_version: ModuleApiVersion {
                    compatible: 9,
                    release_type: "Release".to_string(),
                    target: 12,
                },
                device_types: vec!["phone".to_string()],
                distro: ModuleDistro {
                    delivery_with_install: true,
                    installation_free: false,
                    module_name: "entry".to_string(),
                    module_type: "entry".to_string(),
                },
                abilities: vec![ModuleAbilityInfo {
                    name: "MainAbility".to_string(),
                    label: "Sample".to_string(),
                    exported: true,
                }],
            }],
        },
    };

    let bridge = BundlePackInfoBridge::from(pack);
    assert_eq!(bridge.summary.app.version.code, u32::MAX as i64);
    assert_eq!(bridge.summary.app.version.min_compatible_version_code, 1000000);
    assert_eq!(bridge.summary.modules[0].api_version.compatible, 9);
    assert_eq!(bridge.summary.modules[0].api_version.target, 12);
    assert_eq!(bridge.packages[0].name, "entry");
    assert!(bridge.summary.modules[0].abilities[0].exported);
}

// @tc.name: ut_bridge_zip_options
// @tc.desc: Test the archive option conversion
// @tc.precon: NA
// @tc.step: 1. Convert bridge options with a mix of set and absent fields
// @tc.expect: Set fields map through, absent fields stay absent
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_bridge_zip_options() {
    let options = OptionsBridge {
        level: Some(-1),
        mem_level: None,
        strategy: Some(4),
    };
    let converted = ZipOptions::from(options);
    assert_eq!(converted.level, Some(-1));
    assert_eq!(converted.mem_level, None);
    assert_eq!(converted.strategy, Some(4));
}
