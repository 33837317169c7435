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

use super::*;

// @tc.name: ut_bundle_mgr_codes
// @tc.desc: Test the bundle manager transaction code values
// @tc.precon: NA
// @tc.step: 1. Assert each transaction code matches the service ordinal table
// @tc.expect: All codes match the service ordinal table
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_bundle_mgr_codes() {
    assert_eq!(bundle_mgr::GET_NAME_FOR_UID, 9);
    assert_eq!(bundle_mgr::GET_ABILITY_LABEL_WITH_MODULE_NAME, 21);
    assert_eq!(bundle_mgr::GET_LAUNCH_WANT_FOR_BUNDLE, 24);
    assert_eq!(bundle_mgr::GET_PERMISSION_DEF, 26);
    assert_eq!(bundle_mgr::CLEAN_BUNDLE_CACHE_FILES, 30);
    assert_eq!(bundle_mgr::IS_APPLICATION_ENABLED, 36);
    assert_eq!(bundle_mgr::SET_APPLICATION_ENABLED, 37);
    assert_eq!(bundle_mgr::IS_ABILITY_ENABLED, 38);
    assert_eq!(bundle_mgr::SET_ABILITY_ENABLED, 39);
    assert_eq!(bundle_mgr::GET_BUNDLE_INSTALLER, 47);
    assert_eq!(bundle_mgr::GET_BUNDLE_PACK_INFO_WITH_INT_FLAGS, 54);
    assert_eq!(bundle_mgr::VERIFY_CALLING_PERMISSION, 64);
    assert_eq!(bundle_mgr::IS_MODULE_REMOVABLE, 67);
    assert_eq!(bundle_mgr::SET_MODULE_NEED_UPDATE, 72);
    assert_eq!(bundle_mgr::GET_DEFAULT_APP_PROXY, 81);
    assert_eq!(bundle_mgr::GET_APP_CONTROL_PROXY, 92);
    assert_eq!(bundle_mgr::QUERY_ABILITY_INFOS, 94);
    assert_eq!(bundle_mgr::QUERY_EXTENSION_INFO_WITHOUT_TYPE, 95);
    assert_eq!(bundle_mgr::QUERY_EXTENSION_INFO, 96);
    assert_eq!(bundle_mgr::GET_APPLICATION_INFOS, 97);
    assert_eq!(bundle_mgr::GET_APPLICATION_INFO, 98);
    assert_eq!(bundle_mgr::GET_BUNDLE_ARCHIVE_INFO, 99);
    assert_eq!(bundle_mgr::GET_BUNDLE_INFO, 100);
    assert_eq!(bundle_mgr::GET_BUNDLE_INFOS, 101);
    assert_eq!(bundle_mgr::GET_SHORTCUT_INFO, 102);
    assert_eq!(bundle_mgr::REGISTER_BUNDLE_EVENT_CALLBACK, 103);
    assert_eq!(bundle_mgr::UNREGISTER_BUNDLE_EVENT_CALLBACK, 104);
    assert_eq!(bundle_mgr::GET_BUNDLE_INFO_FOR_SELF, 105);
    assert_eq!(bundle_mgr::VERIFY_SYSTEM_API, 106);
}

// @tc.name: ut_side_service_codes
// @tc.desc: Test the transaction codes of the installer and side services
// @tc.precon: NA
// @tc.step: 1. Assert each installer, default app, app control, distributed
//              and archive code matches its wire value
// @tc.expect: All codes match their wire values
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_side_service_codes() {
    assert_eq!(installer::INSTALL, 0);
    assert_eq!(installer::INSTALL_MULTIPLE_HAPS, 1);
    assert_eq!(installer::UNINSTALL, 2);
    assert_eq!(installer::UNINSTALL_MODULE, 3);
    assert_eq!(installer::RECOVER, 4);

    assert_eq!(status_receiver::ON_FINISHED, 0);

    assert_eq!(default_app::IS_DEFAULT_APPLICATION, 0);
    assert_eq!(default_app::GET_DEFAULT_APPLICATION, 1);
    assert_eq!(default_app::SET_DEFAULT_APPLICATION, 2);
    assert_eq!(default_app::RESET_DEFAULT_APPLICATION, 3);

    assert_eq!(app_control::SET_DISPOSED_STATUS, 0);
    assert_eq!(app_control::GET_DISPOSED_STATUS, 1);
    assert_eq!(app_control::DELETE_DISPOSED_STATUS, 2);

    assert_eq!(distributed::GET_REMOTE_ABILITY_INFO, 0);
    assert_eq!(distributed::GET_REMOTE_ABILITY_INFOS, 1);
    assert_eq!(distributed::GET_REMOTE_ABILITY_INFO_WITH_LOCALE, 2);
    assert_eq!(distributed::GET_REMOTE_ABILITY_INFOS_WITH_LOCALE, 3);

    assert_eq!(archive::ZIP_FILE, 0);
    assert_eq!(archive::UNZIP_FILE, 1);
    assert_eq!(archive::COMPRESS_FILE, 2);
    assert_eq!(archive::DECOMPRESS_FILE, 3);
}

// @tc.name: ut_tokens_and_service_ids
// @tc.desc: Test the interface tokens and system ability ids
// @tc.precon: NA
// @tc.step: 1. Assert each token string and service id matches its value
// @tc.expect: All tokens and service ids match
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_tokens_and_service_ids() {
    assert_eq!(BUNDLE_MGR_TOKEN, "ohos.appexecfwk.BundleMgr");
    assert_eq!(INSTALLER_TOKEN, "ohos.appexecfwk.BundleInstaller");
    assert_eq!(STATUS_RECEIVER_TOKEN, "ohos.appexecfwk.StatusReceiver");
    assert_eq!(DEFAULT_APP_TOKEN, "ohos.appexecfwk.DefaultApp");
    assert_eq!(APP_CONTROL_TOKEN, "ohos.appexecfwk.AppControl");
    assert_eq!(DISTRIBUTED_BMS_TOKEN, "ohos.appexecfwk.DistributedBms");
    assert_eq!(
        BUNDLE_EVENT_CALLBACK_TOKEN,
        "ohos.appexecfwk.BundleEventCallback"
    );
    assert_eq!(ARCHIVE_TOKEN, "ohos.appexecfwk.ArchiveMgr");

    assert_eq!(BUNDLE_MGR_SERVICE_ID, 401);
    assert_eq!(DISTRIBUTED_BMS_SERVICE_ID, 511);
    assert_eq!(ARCHIVE_SERVICE_ID, 4821);
}
