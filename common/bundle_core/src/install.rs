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

//! Installation parameters sent to the bundle installer.

use std::collections::HashMap;

use ipc::parcel::{MsgParcel, Serialize};
use ipc::IpcResult;

use crate::flags::UNSPECIFIED_USERID;

/// Crowdtest deadline meaning "not a crowdtest install".
pub const INVALID_CROWDTEST_DEADLINE: i64 = -1;

/// Install flags the installer accepts.
pub mod install_flag {
    /// Fail if the bundle is already installed.
    pub const NORMAL: i32 = 0;
    /// Replace an existing installation.
    pub const REPLACE_EXISTING: i32 = 1;
    /// Install on first launch.
    pub const FREE_INSTALL: i32 = 16;

    /// Returns whether `flag` is one of the accepted install flags.
    pub fn is_valid(flag: i32) -> bool {
        matches!(flag, NORMAL | REPLACE_EXISTING | FREE_INSTALL)
    }
}

/// Parameters of one install, uninstall or recover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallParam {
    /// User to install for.
    pub user_id: i32,
    /// One of [`install_flag`].
    pub install_flag: i32,
    /// Keep user data when uninstalling.
    pub is_keep_data: bool,
    /// Expected module hashes, keyed by module name.
    pub hash_params: HashMap<String, String>,
    /// Crowdtest expiry, [`INVALID_CROWDTEST_DEADLINE`] when unused.
    pub crowdtest_deadline: i64,
}

impl Default for InstallParam {
    fn default() -> Self {
        InstallParam {
            user_id: UNSPECIFIED_USERID,
            install_flag: install_flag::REPLACE_EXISTING,
            is_keep_data: false,
            hash_params: HashMap::new(),
            crowdtest_deadline: INVALID_CROWDTEST_DEADLINE,
        }
    }
}

impl Serialize for InstallParam {
    fn serialize(&self, parcel: &mut MsgParcel) -> IpcResult<()> {
        parcel.write(&self.user_id)?;
        parcel.write(&self.install_flag)?;
        parcel.write(&self.is_keep_data)?;
        parcel.write(&(self.hash_params.len() as u32))?;
        for (module_name, hash_value) in self.hash_params.iter() {
            parcel.write(module_name)?;
            parcel.write(hash_value)?;
        }
        parcel.write(&self.crowdtest_deadline)?;
        Ok(())
    }
}

/// Collects module hash pairs into a map, rejecting duplicate module
/// names.
pub fn collect_hash_params(
    pairs: impl IntoIterator<Item = (String, String)>,
) -> Option<HashMap<String, String>> {
    let mut hash_params = HashMap::new();
    for (module_name, hash_value) in pairs {
        if hash_params.insert(module_name, hash_value).is_some() {
            return None;
        }
    }
    Some(hash_params)
}

#[cfg(test)]
mod ut_install {
    include!("../tests/ut/ut_install.rs");
}
