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

//! Proxy interface for communicating with the bundle manager services.
//!
//! This module provides singleton proxy implementations that handle
//! communication with the bundle manager service and its side services
//! through IPC. Each proxy manages its service state and serves as the
//! foundation for all service interactions.

// Submodules
mod app_control; // Disposed-status operations on the app control side service
mod archive; // File archive operations on the archive service
mod default_app; // Default application operations on the default app side service
mod distributed; // Remote ability queries on the distributed bundle manager
mod free_install; // Module upgrade marking and package information
mod installer; // Install, uninstall and recover operations
mod launcher; // Launcher ability composition and shortcut queries
mod query; // Bundle, application and ability queries
mod state; // Manages service state tracking

// Standard library imports
use std::sync::{Arc, LazyLock, Mutex};

// External dependencies
use bundle_core::error_code;
use bundle_core::interface;
use ipc::parcel::MsgParcel;
use ipc::remote::RemoteObj;

// Local dependencies
use state::SaState;

pub use archive::ArchiveProxy;
pub use distributed::DistributedBmsProxy;

/// Proxy for interacting with the bundle manager service through IPC.
///
/// Implements the singleton pattern to provide a single point of access to
/// the bundle manager service. Manages connection state and hands out the
/// remote objects of the side services hosted by the bundle manager.
pub struct BundleMgrProxy {
    /// Service state protected by a mutex for thread safety
    remote: Mutex<SaState>,
}

impl BundleMgrProxy {
    /// Returns the singleton instance of `BundleMgrProxy`.
    pub fn get_instance() -> &'static Self {
        static BUNDLE_MGR_PROXY: LazyLock<BundleMgrProxy> = LazyLock::new(|| BundleMgrProxy {
            remote: Mutex::new(SaState::update(interface::BUNDLE_MGR_SERVICE_ID)),
        });
        &BUNDLE_MGR_PROXY
    }

    /// Retrieves the remote service object for IPC communication.
    ///
    /// Checks if the service state is ready. If not, attempts to reconnect
    /// if the last failure occurred more than 5 seconds ago.
    ///
    /// # Errors
    /// Returns `BUNDLE_SERVICE_EXCEPTION` if the service is not available
    /// and cannot be reconnected.
    pub(crate) fn remote(&self) -> Result<Arc<RemoteObj>, i32> {
        let mut remote = self.remote.lock().unwrap();
        match *remote {
            // If service is ready, return the remote object
            SaState::Ready(ref obj) => return Ok(obj.clone()),
            // If service is invalid, attempt to reconnect after a delay
            SaState::Invalid(ref time) => {
                // Only attempt reconnection after 5 seconds to prevent excessive reconnection attempts
                if time.elapsed().as_secs() > 5 {
                    *remote = SaState::update(interface::BUNDLE_MGR_SERVICE_ID);
                    if let SaState::Ready(ref obj) = *remote {
                        return Ok(obj.clone());
                    }
                }
            }
        }
        error!("bundle manager systemAbility load failed");
        Err(error_code::BUNDLE_SERVICE_EXCEPTION)
    }

    /// Fetches the remote object of a side service hosted by the bundle
    /// manager service. The service hands out a fresh remote object per
    /// request, so side remotes are not cached.
    fn side_remote(&self, code: u32) -> Result<RemoteObj, i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::BUNDLE_MGR_TOKEN)
            .unwrap();

        let mut reply = remote
            .send_request(code, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;
        reply
            .read_remote()
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)
    }

    pub(crate) fn installer_remote(&self) -> Result<RemoteObj, i32> {
        self.side_remote(interface::bundle_mgr::GET_BUNDLE_INSTALLER)
    }

    pub(crate) fn default_app_remote(&self) -> Result<RemoteObj, i32> {
        self.side_remote(interface::bundle_mgr::GET_DEFAULT_APP_PROXY)
    }

    pub(crate) fn app_control_remote(&self) -> Result<RemoteObj, i32> {
        self.side_remote(interface::bundle_mgr::GET_APP_CONTROL_PROXY)
    }
}
