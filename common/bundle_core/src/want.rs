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

//! Launch intents and the element names they resolve to.

use ipc::parcel::{Deserialize, MsgParcel, Serialize};
use ipc::IpcResult;

/// A launch intent. Queries match abilities against the populated
/// fields; unpopulated fields stay empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Want {
    /// Target bundle name.
    pub bundle_name: String,
    /// Target module name.
    pub module_name: String,
    /// Target ability name.
    pub ability_name: String,
    /// Uri to match.
    pub uri: String,
    /// Mime type to match.
    pub mime_type: String,
    /// Action to match.
    pub action: String,
    /// Entities to match.
    pub entities: Vec<String>,
    /// Target device, empty for the local device.
    pub device_id: String,
    /// Matching flags.
    pub flags: i32,
}

impl Serialize for Want {
    fn serialize(&self, parcel: &mut MsgParcel) -> IpcResult<()> {
        parcel.write(&self.bundle_name)?;
        parcel.write(&self.module_name)?;
        parcel.write(&self.ability_name)?;
        parcel.write(&self.uri)?;
        parcel.write(&self.mime_type)?;
        parcel.write(&self.action)?;
        parcel.write(&(self.entities.len() as u32))?;
        for entity in &self.entities {
            parcel.write(entity)?;
        }
        parcel.write(&self.device_id)?;
        parcel.write(&self.flags)?;
        Ok(())
    }
}

impl Deserialize for Want {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let bundle_name = parcel.read::<String>().unwrap();
        let module_name = parcel.read::<String>().unwrap();
        let ability_name = parcel.read::<String>().unwrap();
        let uri = parcel.read::<String>().unwrap();
        let mime_type = parcel.read::<String>().unwrap();
        let action = parcel.read::<String>().unwrap();

        let entities_len = parcel.read::<u32>().unwrap() as usize;
        let mut entities = Vec::with_capacity(entities_len);
        for _ in 0..entities_len {
            entities.push(parcel.read::<String>().unwrap());
        }

        let device_id = parcel.read::<String>().unwrap();
        let flags = parcel.read::<i32>().unwrap();

        Ok(Want {
            bundle_name,
            module_name,
            ability_name,
            uri,
            mime_type,
            action,
            entities,
            device_id,
            flags,
        })
    }
}

/// Fully qualified name of one ability on one device.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementName {
    /// Device the ability lives on.
    pub device_id: String,
    /// Bundle name.
    pub bundle_name: String,
    /// Module name.
    pub module_name: String,
    /// Ability name.
    pub ability_name: String,
    /// Uri of the ability.
    pub uri: String,
    /// Short name of the ability.
    pub short_name: String,
}

impl Serialize for ElementName {
    fn serialize(&self, parcel: &mut MsgParcel) -> IpcResult<()> {
        parcel.write(&self.device_id)?;
        parcel.write(&self.bundle_name)?;
        parcel.write(&self.module_name)?;
        parcel.write(&self.ability_name)?;
        parcel.write(&self.uri)?;
        parcel.write(&self.short_name)?;
        Ok(())
    }
}

impl Deserialize for ElementName {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let device_id = parcel.read::<String>().unwrap();
        let bundle_name = parcel.read::<String>().unwrap();
        let module_name = parcel.read::<String>().unwrap();
        let ability_name = parcel.read::<String>().unwrap();
        let uri = parcel.read::<String>().unwrap();
        let short_name = parcel.read::<String>().unwrap();
        Ok(ElementName {
            device_id,
            bundle_name,
            module_name,
            ability_name,
            uri,
            short_name,
        })
    }
}

/// Ability information resolved on a remote device.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemoteAbilityInfo {
    /// The resolved element.
    pub element_name: ElementName,
    /// Localized label.
    pub label: String,
    /// Icon data.
    pub icon: String,
}

impl Deserialize for RemoteAbilityInfo {
    fn deserialize(parcel: &mut MsgParcel) -> IpcResult<Self> {
        let element_name = parcel.read::<ElementName>().unwrap();
        let label = parcel.read::<String>().unwrap();
        let icon = parcel.read::<String>().unwrap();
        Ok(RemoteAbilityInfo {
            element_name,
            label,
            icon,
        })
    }
}
