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

//! Natives of the distributedBundleManager namespace.
//!
//! An empty locale string requests the device default labels and icons.

use ani_rs::business_error::BusinessError;
use bundle_client::check;
use bundle_client::DistributedBmsProxy;
use bundle_core::want::ElementName;

use crate::bridge::{ElementNameBridge, RemoteAbilityInfoBridge};
use crate::error::{common_error, PERMISSION_GET_BUNDLE_INFO_PRIVILEGED};

#[ani_rs::native]
pub fn get_remote_ability_info(
    element: ElementNameBridge,
    locale: String,
) -> Result<RemoteAbilityInfoBridge, BusinessError> {
    let element: ElementName = element.into();
    match DistributedBmsProxy::get_instance().get_remote_ability_info(&element, &locale) {
        Ok(info) => Ok(info.into()),
        Err(code) => {
            error!(
                "GetRemoteAbilityInfo of {} on {} failed: {}",
                element.ability_name, element.device_id, code
            );
            Err(common_error(
                code,
                "GetRemoteAbilityInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}

/// Batch variant; at most ten element names per query.
#[ani_rs::native]
pub fn get_remote_ability_infos(
    elements: Vec<ElementNameBridge>,
    locale: String,
) -> Result<Vec<RemoteAbilityInfoBridge>, BusinessError> {
    let elements: Vec<ElementName> = elements.into_iter().map(Into::into).collect();
    if let Err(code) = check::check_element_names(&elements) {
        return Err(common_error(
            code,
            "GetRemoteAbilityInfo",
            PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
        ));
    }
    match DistributedBmsProxy::get_instance().get_remote_ability_infos(&elements, &locale) {
        Ok(infos) => Ok(infos.into_iter().map(Into::into).collect()),
        Err(code) => {
            error!("GetRemoteAbilityInfo of {} elements failed: {}", elements.len(), code);
            Err(common_error(
                code,
                "GetRemoteAbilityInfo",
                PERMISSION_GET_BUNDLE_INFO_PRIVILEGED,
            ))
        }
    }
}
