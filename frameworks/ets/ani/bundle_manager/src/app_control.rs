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

//! Disposed status natives of the appControl namespace.
//!
//! A disposed bundle is identified by its app id, the bundle name plus
//! the signing certificate fingerprint reported in the signature info.

use ani_rs::business_error::BusinessError;
use bundle_client::check;
use bundle_client::BundleMgrProxy;

use crate::bridge::WantBridge;
use crate::error::{common_error, PERMISSION_MANAGE_DISPOSED_APP_STATUS};

/// Stores the want shown instead of launching the disposed bundle.
#[ani_rs::native]
pub fn set_disposed_status(app_id: String, disposed_want: WantBridge) -> Result<(), BusinessError> {
    if let Err(code) = check::check_app_id(&app_id) {
        return Err(common_error(
            code,
            "SetDisposedStatus",
            PERMISSION_MANAGE_DISPOSED_APP_STATUS,
        ));
    }
    let want = disposed_want.into();
    match BundleMgrProxy::get_instance().set_disposed_status(&app_id, &want) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("SetDisposedStatus of {} failed: {}", app_id, code);
            Err(common_error(
                code,
                "SetDisposedStatus",
                PERMISSION_MANAGE_DISPOSED_APP_STATUS,
            ))
        }
    }
}

#[ani_rs::native]
pub fn get_disposed_status(app_id: String) -> Result<WantBridge, BusinessError> {
    if let Err(code) = check::check_app_id(&app_id) {
        return Err(common_error(
            code,
            "GetDisposedStatus",
            PERMISSION_MANAGE_DISPOSED_APP_STATUS,
        ));
    }
    match BundleMgrProxy::get_instance().get_disposed_status(&app_id) {
        Ok(want) => Ok(want.into()),
        Err(code) => {
            error!("GetDisposedStatus of {} failed: {}", app_id, code);
            Err(common_error(
                code,
                "GetDisposedStatus",
                PERMISSION_MANAGE_DISPOSED_APP_STATUS,
            ))
        }
    }
}

#[ani_rs::native]
pub fn delete_disposed_status(app_id: String) -> Result<(), BusinessError> {
    if let Err(code) = check::check_app_id(&app_id) {
        return Err(common_error(
            code,
            "DeleteDisposedStatus",
            PERMISSION_MANAGE_DISPOSED_APP_STATUS,
        ));
    }
    match BundleMgrProxy::get_instance().delete_disposed_status(&app_id) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("DeleteDisposedStatus of {} failed: {}", app_id, code);
            Err(common_error(
                code,
                "DeleteDisposedStatus",
                PERMISSION_MANAGE_DISPOSED_APP_STATUS,
            ))
        }
    }
}
