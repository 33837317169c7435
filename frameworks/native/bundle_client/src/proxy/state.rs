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

//! System Ability state tracking for the bundle manager services.
//!
//! The bundle manager, distributed bundle manager and archive services are
//! separate System Abilities. Each proxy tracks whether its SA is ready or
//! invalid and reloads it with retry logic when needed.

// Standard library dependencies
use std::sync::Arc;
use std::time::{self, Instant};

// IPC and service management dependencies
use ipc::remote::RemoteObj;
use samgr::manage::SystemAbilityManager;

pub(crate) enum SaState {
    /// The System Ability is ready to use with the provided remote object.
    Ready(Arc<RemoteObj>),

    /// The System Ability is invalid, with the timestamp when it became invalid.
    Invalid(time::Instant),
}

impl SaState {
    /// Attempts to load the System Ability identified by `sa_id`.
    ///
    /// Tries up to 5 times with a 5-second delay between attempts. Returns
    /// `SaState::Ready` on success, or `SaState::Invalid` stamped with the
    /// current time if all attempts fail.
    pub(crate) fn update(sa_id: i32) -> Self {
        // Try to load the System Ability up to 5 times with retries
        for _ in 0..5 {
            match SystemAbilityManager::load_system_ability(sa_id, 1000) {
                Some(remote) => {
                    return SaState::Ready(Arc::new(remote));
                }
                None => {
                    // Failed to load, wait 5 seconds before retrying
                    std::thread::sleep(std::time::Duration::from_millis(5000));
                    error!("systemAbility {} load failed, retrying...", sa_id);
                }
            }
        }
        // All retries failed, record when the state became invalid
        SaState::Invalid(Instant::now())
    }
}
