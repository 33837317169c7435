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

//! Natives of the defaultAppManager namespace.
//!
//! The application type argument is either one of the well known type
//! names or a utd id; the service answers INVALID_TYPE for anything it
//! does not manage.

use ani_rs::business_error::BusinessError;
use bundle_client::BundleMgrProxy;
use bundle_core::flags::resolve_user_id;

use crate::bridge::{BundleInfoBridge, ElementNameBridge};
use crate::error::{
    common_error, PERMISSION_GET_DEFAULT_APPLICATION, PERMISSION_NONE,
    PERMISSION_SET_DEFAULT_APPLICATION,
};

#[ani_rs::native]
pub fn is_default_application(app_type: String) -> Result<bool, BusinessError> {
    match BundleMgrProxy::get_instance().is_default_application(&app_type) {
        Ok(is_default) => Ok(is_default),
        Err(code) => {
            error!("IsDefaultApplication of {} failed: {}", app_type, code);
            Err(common_error(code, "IsDefaultApplication", PERMISSION_NONE))
        }
    }
}

/// Returns the bundle serving one application type for a user.
#[ani_rs::native]
pub fn get_default_application(
    app_type: String,
    user_id: i32,
) -> Result<BundleInfoBridge, BusinessError> {
    let user_id = resolve_user_id(Some(user_id), ipc::Skeleton::calling_uid());
    match BundleMgrProxy::get_instance().get_default_application(&app_type, user_id) {
        Ok(info) => Ok(info.into()),
        Err(code) => {
            error!("GetDefaultApplication of {} failed: {}", app_type, code);
            Err(common_error(
                code,
                "GetDefaultApplication",
                PERMISSION_GET_DEFAULT_APPLICATION,
            ))
        }
    }
}

#[ani_rs::native]
pub fn set_default_application(
    app_type: String,
    element: ElementNameBridge,
    user_id: i32,
) -> Result<(), BusinessError> {
    let user_id = resolve_user_id(Some(user_id), ipc::Skeleton::calling_uid());
    let element = element.into();
    match BundleMgrProxy::get_instance().set_default_application(&app_type, &element, user_id) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("SetDefaultApplication of {} failed: {}", app_type, code);
            Err(common_error(
                code,
                "SetDefaultApplication",
                PERMISSION_SET_DEFAULT_APPLICATION,
            ))
        }
    }
}

#[ani_rs::native]
pub fn reset_default_application(app_type: String, user_id: i32) -> Result<(), BusinessError> {
    let user_id = resolve_user_id(Some(user_id), ipc::Skeleton::calling_uid());
    match BundleMgrProxy::get_instance().reset_default_application(&app_type, user_id) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("ResetDefaultApplication of {} failed: {}", app_type, code);
            Err(common_error(
                code,
                "ResetDefaultApplication",
                PERMISSION_SET_DEFAULT_APPLICATION,
            ))
        }
    }
}
