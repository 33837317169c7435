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

//! Default application management.
//!
//! These operations run on the default application side service, whose
//! remote object is fetched from the bundle manager per call. The
//! application type travels as the utd or the well-known type name; the
//! service owns its validation.

// External dependencies
use ipc::parcel::MsgParcel;

// Bundle core dependencies
use bundle_core::bundle_info::BundleInfo;
use bundle_core::error_code::{self, convert_server_code};
use bundle_core::interface::{self, default_app};
use bundle_core::want::ElementName;

// Local dependencies
use crate::proxy::BundleMgrProxy;

impl BundleMgrProxy {
    /// Queries whether the caller is the default application of a type.
    pub fn is_default_application(&self, app_type: &str) -> Result<bool, i32> {
        let remote = self.default_app_remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::DEFAULT_APP_TOKEN)
            .unwrap();

        data.write(&app_type.to_string()).unwrap();

        let mut reply = remote
            .send_request(default_app::IS_DEFAULT_APPLICATION, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<bool>().unwrap())
    }

    /// Retrieves the bundle serving as the default application of a type.
    pub fn get_default_application(
        &self,
        app_type: &str,
        user_id: i32,
    ) -> Result<BundleInfo, i32> {
        let remote = self.default_app_remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::DEFAULT_APP_TOKEN)
            .unwrap();

        data.write(&user_id).unwrap();
        data.write(&app_type.to_string()).unwrap();

        let mut reply = remote
            .send_request(default_app::GET_DEFAULT_APPLICATION, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(reply.read::<BundleInfo>().unwrap())
    }

    /// Sets the default application of a type to one element.
    pub fn set_default_application(
        &self,
        app_type: &str,
        element: &ElementName,
        user_id: i32,
    ) -> Result<(), i32> {
        let remote = self.default_app_remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::DEFAULT_APP_TOKEN)
            .unwrap();

        data.write(&user_id).unwrap();
        data.write(&app_type.to_string()).unwrap();
        data.write(element).unwrap();

        let mut reply = remote
            .send_request(default_app::SET_DEFAULT_APPLICATION, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }

    /// Clears the default application of a type.
    pub fn reset_default_application(&self, app_type: &str, user_id: i32) -> Result<(), i32> {
        let remote = self.default_app_remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::DEFAULT_APP_TOKEN)
            .unwrap();

        data.write(&user_id).unwrap();
        data.write(&app_type.to_string()).unwrap();

        let mut reply = remote
            .send_request(default_app::RESET_DEFAULT_APPLICATION, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }
}
