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

//! Install, uninstall and recover operations.
//!
//! The installer reports completion through a status receiver handed over
//! with the request. Each operation registers a receiver stub, sends the
//! request on the installer remote and blocks until the receiver fires or
//! the service drops it.

// Standard library imports
use std::sync::mpsc;
use std::sync::Mutex;

// External dependencies
use ipc::parcel::MsgParcel;
use ipc::remote::{RemoteObj, RemoteStub};
use ipc::IpcStatusCode;

// Bundle core dependencies
use bundle_core::error_code::{self, convert_install_code};
use bundle_core::install::InstallParam;
use bundle_core::interface::{self, installer, status_receiver};

// Local dependencies
use crate::proxy::BundleMgrProxy;

/// Final installation result delivered by the service.
type InstallStatus = (i32, String);

/// Receiver stub collecting the final installation result.
///
/// The service keeps a reference to the stub until it reports; if the
/// service dies first, the sender is dropped and the waiting side observes
/// a disconnect instead of blocking forever.
struct StatusReceiver {
    tx: Mutex<mpsc::Sender<InstallStatus>>,
}

impl StatusReceiver {
    fn new(tx: mpsc::Sender<InstallStatus>) -> Self {
        Self { tx: Mutex::new(tx) }
    }
}

impl RemoteStub for StatusReceiver {
    fn on_remote_request(&self, code: u32, data: &mut MsgParcel, _reply: &mut MsgParcel) -> i32 {
        // Verify interface token to ensure the report comes from the installer
        match data.read_interface_token() {
            Ok(token) if token == interface::STATUS_RECEIVER_TOKEN => {}
            _ => {
                error!("Gets invalid token");
                return IpcStatusCode::Failed as i32;
            }
        };

        match code {
            status_receiver::ON_FINISHED => {
                let status = data.read::<i32>().unwrap();
                let msg = data.read::<String>().unwrap();
                // The waiting side may already be gone on service restart
                let _ = self.tx.lock().unwrap().send((status, msg));
                0
            }
            _ => {
                error!("Unexpected status receiver code: {}", code);
                IpcStatusCode::Failed as i32
            }
        }
    }
}

impl BundleMgrProxy {
    /// Installs the HAPs at `file_paths` as one bundle.
    ///
    /// A single path uses the plain install transaction; several paths
    /// install together as a multi-hap bundle.
    pub fn install(
        &self,
        file_paths: &[String],
        param: &InstallParam,
    ) -> Result<(), (i32, String)> {
        let installer_remote = self.installer_remote().map_err(plain)?;

        let (tx, rx) = mpsc::channel();
        let receiver = RemoteObj::from_stub(StatusReceiver::new(tx)).unwrap();

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::INSTALLER_TOKEN)
            .unwrap();

        let request = if file_paths.len() == 1 {
            data.write(&file_paths[0]).unwrap();
            installer::INSTALL
        } else {
            data.write(&(file_paths.len() as u32)).unwrap();
            for path in file_paths {
                data.write(path).unwrap();
            }
            installer::INSTALL_MULTIPLE_HAPS
        };
        data.write(param).unwrap();
        data.write_remote(receiver).unwrap();

        info!("install request, {} hap(s)", file_paths.len());
        let mut reply = installer_remote
            .send_request(request, &mut data)
            .map_err(|_| plain(error_code::BUNDLE_SERVICE_EXCEPTION))?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(plain(convert_install_code(code)));
        }
        wait_install_result(rx)
    }

    /// Uninstalls a bundle.
    pub fn uninstall(&self, bundle_name: &str, param: &InstallParam) -> Result<(), (i32, String)> {
        let installer_remote = self.installer_remote().map_err(plain)?;

        let (tx, rx) = mpsc::channel();
        let receiver = RemoteObj::from_stub(StatusReceiver::new(tx)).unwrap();

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::INSTALLER_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(param).unwrap();
        data.write_remote(receiver).unwrap();

        let mut reply = installer_remote
            .send_request(installer::UNINSTALL, &mut data)
            .map_err(|_| plain(error_code::BUNDLE_SERVICE_EXCEPTION))?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(plain(convert_install_code(code)));
        }
        wait_install_result(rx)
    }

    /// Uninstalls one module of a bundle.
    pub fn uninstall_module(
        &self,
        bundle_name: &str,
        module_name: &str,
        param: &InstallParam,
    ) -> Result<(), (i32, String)> {
        let installer_remote = self.installer_remote().map_err(plain)?;

        let (tx, rx) = mpsc::channel();
        let receiver = RemoteObj::from_stub(StatusReceiver::new(tx)).unwrap();

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::INSTALLER_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(&module_name.to_string()).unwrap();
        data.write(param).unwrap();
        data.write_remote(receiver).unwrap();

        let mut reply = installer_remote
            .send_request(installer::UNINSTALL_MODULE, &mut data)
            .map_err(|_| plain(error_code::BUNDLE_SERVICE_EXCEPTION))?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(plain(convert_install_code(code)));
        }
        wait_install_result(rx)
    }

    /// Recovers a preinstalled bundle that was uninstalled.
    pub fn recover(&self, bundle_name: &str, param: &InstallParam) -> Result<(), (i32, String)> {
        let installer_remote = self.installer_remote().map_err(plain)?;

        let (tx, rx) = mpsc::channel();
        let receiver = RemoteObj::from_stub(StatusReceiver::new(tx)).unwrap();

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::INSTALLER_TOKEN)
            .unwrap();

        data.write(&bundle_name.to_string()).unwrap();
        data.write(param).unwrap();
        data.write_remote(receiver).unwrap();

        let mut reply = installer_remote
            .send_request(installer::RECOVER, &mut data)
            .map_err(|_| plain(error_code::BUNDLE_SERVICE_EXCEPTION))?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(plain(convert_install_code(code)));
        }
        wait_install_result(rx)
    }
}

/// Wraps an error code that carries no service message.
fn plain(code: i32) -> (i32, String) {
    (code, String::new())
}

/// Blocks until the status receiver reports, converting the install status
/// into the public error contract.
fn wait_install_result(rx: mpsc::Receiver<InstallStatus>) -> Result<(), (i32, String)> {
    match rx.recv() {
        Ok((status, msg)) => {
            if status != 0 {
                error!("install operation failed: {} {}", status, msg);
                return Err((convert_install_code(status), msg));
            }
            Ok(())
        }
        // Sender dropped without a report, the service went away
        Err(_) => Err(plain(error_code::BUNDLE_SERVICE_EXCEPTION)),
    }
}
