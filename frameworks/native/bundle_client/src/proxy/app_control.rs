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

//! Disposed status management on the app control side service.
//!
//! A disposed application is intercepted at launch and redirected to the
//! want recorded here. The app control remote object is fetched from the
//! bundle manager per call.

// External dependencies
use ipc::parcel::MsgParcel;

// Bundle core dependencies
use bundle_core::error_code::{self, convert_server_code};
use bundle_core::interface::{self, app_control};
use bundle_core::want::Want;

// Local dependencies
use crate::proxy::BundleMgrProxy;

impl BundleMgrProxy {
    /// Records the disposed want of an application.
    pub fn set_disposed_status(&self, app_id: &str, disposed_want: &Want) -> Result<(), i32> {
        let remote = self.app_control_remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::APP_CONTROL_TOKEN)
            .unwrap();

        data.write(&app_id.to_string()).unwrap();
        data.write(disposed_want).unwrap();

        let mut reply = remote
            .send_request(app_control::SET_DISPOSED_STATUS, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }

    /// Retrieves the disposed want of an application.
    pub fn get_disposed_status(&self, app_id: &str) -> Result<Want, i32> {
        let remote = self.app_control_remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::APP_CONTROL_TOKEN)
            .unwrap();

        data.write(&app_id.to_string()).unwrap();

        let mut reply = remote
            .send_request(app_control::GET_DISPOSED_STATUS, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<Want>().unwrap())
    }

    /// Removes the disposed want of an application.
    pub fn delete_disposed_status(&self, app_id: &str) -> Result<(), i32> {
        let remote = self.app_control_remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::APP_CONTROL_TOKEN)
            .unwrap();

        data.write(&app_id.to_string()).unwrap();

        let mut reply = remote
            .send_request(app_control::DELETE_DISPOSED_STATUS, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }
}
