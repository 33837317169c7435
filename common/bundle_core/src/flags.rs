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

//! Query flags and user id helpers shared by all bundle queries.

/// Bundle information query flags, combined by bitwise or.
pub mod bundle_flag {
    /// Bundle information with no optional sections.
    pub const GET_BUNDLE_INFO_DEFAULT: u32 = 0x00000000;
    /// Attach the application information.
    pub const GET_BUNDLE_INFO_WITH_APPLICATION: u32 = 0x00000001;
    /// Attach the HAP module information.
    pub const GET_BUNDLE_INFO_WITH_HAP_MODULE: u32 = 0x00000002;
    /// Attach ability information to each module.
    pub const GET_BUNDLE_INFO_WITH_ABILITY: u32 = 0x00000004;
    /// Attach extension ability information to each module.
    pub const GET_BUNDLE_INFO_WITH_EXTENSION_ABILITY: u32 = 0x00000008;
    /// Attach the requested permission details.
    pub const GET_BUNDLE_INFO_WITH_REQUESTED_PERMISSION: u32 = 0x00000010;
    /// Attach metadata to the attached sections.
    pub const GET_BUNDLE_INFO_WITH_METADATA: u32 = 0x00000020;
    /// Include disabled bundles in the result.
    pub const GET_BUNDLE_INFO_WITH_DISABLE: u32 = 0x00000040;
    /// Attach the signature information.
    pub const GET_BUNDLE_INFO_WITH_SIGNATURE_INFO: u32 = 0x00000080;
}

/// Application information query flags.
pub mod application_flag {
    /// Application information with no optional sections.
    pub const GET_APPLICATION_INFO_DEFAULT: u32 = 0x00000000;
    /// Attach the permission list.
    pub const GET_APPLICATION_INFO_WITH_PERMISSION: u32 = 0x00000001;
    /// Attach metadata.
    pub const GET_APPLICATION_INFO_WITH_METADATA: u32 = 0x00000002;
    /// Include disabled applications in the result.
    pub const GET_APPLICATION_INFO_WITH_DISABLE: u32 = 0x00000004;
}

/// Ability information query flags.
pub mod ability_flag {
    /// Ability information with no optional sections.
    pub const GET_ABILITY_INFO_DEFAULT: u32 = 0x00000000;
    /// Attach the permission list.
    pub const GET_ABILITY_INFO_WITH_PERMISSION: u32 = 0x00000001;
    /// Attach the owning application information.
    pub const GET_ABILITY_INFO_WITH_APPLICATION: u32 = 0x00000002;
    /// Attach metadata.
    pub const GET_ABILITY_INFO_WITH_METADATA: u32 = 0x00000004;
    /// Include disabled abilities in the result.
    pub const GET_ABILITY_INFO_WITH_DISABLE: u32 = 0x00000008;
    /// Restrict the result to system applications.
    pub const GET_ABILITY_INFO_ONLY_SYSTEM_APP: u32 = 0x00000010;
}

/// Extension ability information query flags.
pub mod extension_ability_flag {
    /// Extension information with no optional sections.
    pub const GET_EXTENSION_ABILITY_INFO_DEFAULT: u32 = 0x00000000;
    /// Attach the permission list.
    pub const GET_EXTENSION_ABILITY_INFO_WITH_PERMISSION: u32 = 0x00000001;
    /// Attach the owning application information.
    pub const GET_EXTENSION_ABILITY_INFO_WITH_APPLICATION: u32 = 0x00000002;
    /// Attach metadata.
    pub const GET_EXTENSION_ABILITY_INFO_WITH_METADATA: u32 = 0x00000004;
}

/// Bundle package information query flags.
pub mod bundle_pack_flag {
    /// The whole package information.
    pub const GET_PACK_INFO_ALL: u32 = 0x00000000;
    /// Only the package list.
    pub const GET_PACKAGES: u32 = 0x00000001;
    /// Only the bundle summary.
    pub const GET_BUNDLE_SUMMARY: u32 = 0x00000002;
    /// Only the module summaries.
    pub const GET_MODULE_SUMMARY: u32 = 0x00000004;
}

/// Module upgrade flags used by free install.
pub mod upgrade_flag {
    /// The module does not need an upgrade.
    pub const NOT_UPGRADE: i32 = 0;
    /// Only this module needs an upgrade.
    pub const SINGLE_UPGRADE: i32 = 1;
    /// This module and its relations need an upgrade.
    pub const RELATION_UPGRADE: i32 = 2;

    /// Returns whether `flag` is one of the declared upgrade flags.
    pub fn is_valid(flag: i32) -> bool {
        matches!(flag, NOT_UPGRADE | SINGLE_UPGRADE | RELATION_UPGRADE)
    }
}

/// User id meaning "use the caller's user".
pub const UNSPECIFIED_USERID: i32 = -2;

/// Uid span of one user.
pub const BASE_USER_RANGE: i32 = 200000;

/// Derives the user id a uid belongs to.
pub fn user_id_from_uid(uid: u64) -> i32 {
    (uid / BASE_USER_RANGE as u64) as i32
}

/// Resolves an optional user id argument, falling back to the caller's
/// own user when the argument is absent or unspecified.
pub fn resolve_user_id(user_id: Option<i32>, calling_uid: u64) -> i32 {
    match user_id {
        Some(id) if id != UNSPECIFIED_USERID => id,
        _ => user_id_from_uid(calling_uid),
    }
}
