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

//! Bundle change events delivered to registered monitors.

use ipc::parcel::{Deserialize, MsgParcel};
use ipc::IpcResult;

/// Kind of change a bundle event reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BundleEventType {
    /// A bundle was installed.
    Add,
    /// A bundle was updated.
    Update,
    /// A bundle was uninstalled.
    Remove,
}

impl BundleEventType {
    /// The event name monitors subscribe with.
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleEventType::Add => "add",
            BundleEventType::Update => "update",
            BundleEventType::Remove => "remove",
        }
    }

    /// Parses a subscription event name.
    pub fn from_str(event: &str) -> Option<Self> {
        match event {
            "add" => Some(BundleEventType::Add),
            "update" => Some(BundleEventType::Update),
            "remove" => Some(BundleEventType::Remove),
            _ => None,
        }
    }
}

/// Payload of one bundle change event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BundleChangedInfo {
    /// The bundle that changed.
    pub bundle_name: String,
    /// User the change happened under.
    pub user_id: i32,
}

impl Deserialize for BundleChangedInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let bundle_name = parcel.read::<String>().unwrap();
        let user_id = parcel.read::<i32>().unwrap();
        Ok(BundleChangedInfo {
            bundle_name,
            user_id,
        })
    }
}
