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

//! Remote ability queries on the distributed bundle manager.
//!
//! The distributed bundle manager is its own System Ability and may stop
//! while the device is offline, so its failures map to the
//! distributed-service code instead of the generic service exception.

// Standard library imports
use std::sync::{Arc, LazyLock, Mutex};

// External dependencies
use ipc::parcel::MsgParcel;
use ipc::remote::RemoteObj;

// Bundle core dependencies
use bundle_core::error_code::{self, convert_server_code};
use bundle_core::interface::{self, distributed};
use bundle_core::want::{ElementName, RemoteAbilityInfo};

// Local dependencies
use crate::proxy::state::SaState;

/// Proxy for interacting with the distributed bundle manager through IPC.
pub struct DistributedBmsProxy {
    /// Service state protected by a mutex for thread safety
    remote: Mutex<SaState>,
}

impl DistributedBmsProxy {
    /// Returns the singleton instance of `DistributedBmsProxy`.
    pub fn get_instance() -> &'static Self {
        static DISTRIBUTED_BMS_PROXY: LazyLock<DistributedBmsProxy> =
            LazyLock::new(|| DistributedBmsProxy {
                remote: Mutex::new(SaState::update(interface::DISTRIBUTED_BMS_SERVICE_ID)),
            });
        &DISTRIBUTED_BMS_PROXY
    }

    /// Retrieves the remote service object for IPC communication.
    ///
    /// # Errors
    /// Returns `DISTRIBUTED_SERVICE_NOT_RUNNING` if the service is not
    /// available and cannot be reconnected.
    fn remote(&self) -> Result<Arc<RemoteObj>, i32> {
        let mut remote = self.remote.lock().unwrap();
        match *remote {
            SaState::Ready(ref obj) => return Ok(obj.clone()),
            SaState::Invalid(ref time) => {
                if time.elapsed().as_secs() > 5 {
                    *remote = SaState::update(interface::DISTRIBUTED_BMS_SERVICE_ID);
                    if let SaState::Ready(ref obj) = *remote {
                        return Ok(obj.clone());
                    }
                }
            }
        }
        error!("distributed bundle manager systemAbility load failed");
        Err(error_code::DISTRIBUTED_SERVICE_NOT_RUNNING)
    }

    /// Retrieves the ability information of one element on a remote device.
    ///
    /// An empty `locale` routes to the locale-less transaction and lets the
    /// remote device answer in its own language.
    pub fn get_remote_ability_info(
        &self,
        element: &ElementName,
        locale: &str,
    ) -> Result<RemoteAbilityInfo, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::DISTRIBUTED_BMS_TOKEN)
            .unwrap();

        data.write(element).unwrap();
        let request = if locale.is_empty() {
            distributed::GET_REMOTE_ABILITY_INFO
        } else {
            data.write(&locale.to_string()).unwrap();
            distributed::GET_REMOTE_ABILITY_INFO_WITH_LOCALE
        };

        let mut reply = remote
            .send_request(request, &mut data)
            .map_err(|_| error_code::DISTRIBUTED_SERVICE_NOT_RUNNING)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<RemoteAbilityInfo>().unwrap())
    }

    /// Retrieves the ability information of several elements on remote
    /// devices.
    pub fn get_remote_ability_infos(
        &self,
        elements: &[ElementName],
        locale: &str,
    ) -> Result<Vec<RemoteAbilityInfo>, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::DISTRIBUTED_BMS_TOKEN)
            .unwrap();

        data.write(&(elements.len() as u32)).unwrap();
        for element in elements {
            data.write(element).unwrap();
        }
        let request = if locale.is_empty() {
            distributed::GET_REMOTE_ABILITY_INFOS
        } else {
            data.write(&locale.to_string()).unwrap();
            distributed::GET_REMOTE_ABILITY_INFOS_WITH_LOCALE
        };

        let mut reply = remote
            .send_request(request, &mut data)
            .map_err(|_| error_code::DISTRIBUTED_SERVICE_NOT_RUNNING)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }

        let len = reply.read::<u32>().unwrap();
        let mut infos = Vec::with_capacity(len as usize);
        for _ in 0..len {
            infos.push(reply.read::<RemoteAbilityInfo>().unwrap());
        }
        Ok(infos)
    }
}
