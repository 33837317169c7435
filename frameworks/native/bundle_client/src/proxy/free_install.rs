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

//! Free install module management.
//!
//! Covers the module upgrade marking and package information queries used
//! by feature-on-demand installs.

// External dependencies
use ipc::parcel::MsgParcel;

// Bundle core dependencies
use bundle_core::error_code::{self, convert_server_code};
use bundle_core::interface::{self, bundle_mgr};
use bundle_core::pack_info::BundlePackInfo;

// Local dependencies
use crate::proxy::BundleMgrProxy;

impl BundleMgrProxy {
    /// Marks a module with an upgrade flag for the next free install check.
    pub fn set_module_upgrade_flag(
        &self,
        bundle_name: &str,
        module_name: &str,
        upgrade_flag: i32,
    ) -> Result<(), i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&module_name.to_string()).unwrap();
        data.write(&upgrade_flag).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::SET_MODULE_NEED_UPDATE, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }

    /// Queries whether a module can be removed by a free install cleanup.
    pub fn is_module_removable(
        &self,
        bundle_name: &str,
        module_name: &str,
    ) -> Result<bool, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&module_name.to_string()).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::IS_MODULE_REMOVABLE, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<bool>().unwrap())
    }

    /// Retrieves the package information of one bundle.
    pub fn get_bundle_pack_info(
        &self,
        bundle_name: &str,
        flags: i32,
    ) -> Result<BundlePackInfo, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&flags).unwrap();

        let mut reply = remote
            .send_request(bundle_mgr::GET_BUNDLE_PACK_INFO_WITH_INT_FLAGS, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<BundlePackInfo>().unwrap())
    }
}
