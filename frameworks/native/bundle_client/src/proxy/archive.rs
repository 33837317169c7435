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

//! File archive operations on the archive service.
//!
//! The archive service owns the actual compression work; the client only
//! carries paths and options across and surfaces the src/dest validation
//! results.

// Standard library imports
use std::sync::{Arc, LazyLock, Mutex};

// External dependencies
use ipc::parcel::MsgParcel;
use ipc::remote::RemoteObj;

// Bundle core dependencies
use bundle_core::error_code::{self, convert_server_code};
use bundle_core::interface::{self, archive};
use bundle_core::zip::ZipOptions;

// Local dependencies
use crate::proxy::state::SaState;

/// Proxy for interacting with the archive service through IPC.
pub struct ArchiveProxy {
    /// Service state protected by a mutex for thread safety
    remote: Mutex<SaState>,
}

impl ArchiveProxy {
    /// Returns the singleton instance of `ArchiveProxy`.
    pub fn get_instance() -> &'static Self {
        static ARCHIVE_PROXY: LazyLock<ArchiveProxy> = LazyLock::new(|| ArchiveProxy {
            remote: Mutex::new(SaState::update(interface::ARCHIVE_SERVICE_ID)),
        });
        &ARCHIVE_PROXY
    }

    /// Retrieves the remote service object for IPC communication.
    fn remote(&self) -> Result<Arc<RemoteObj>, i32> {
        let mut remote = self.remote.lock().unwrap();
        match *remote {
            SaState::Ready(ref obj) => return Ok(obj.clone()),
            SaState::Invalid(ref time) => {
                if time.elapsed().as_secs() > 5 {
                    *remote = SaState::update(interface::ARCHIVE_SERVICE_ID);
                    if let SaState::Ready(ref obj) = *remote {
                        return Ok(obj.clone());
                    }
                }
            }
        }
        error!("archive systemAbility load failed");
        Err(error_code::BUNDLE_SERVICE_EXCEPTION)
    }

    /// Sends one archive request carrying source, destination and options.
    fn archive_request(
        &self,
        request: u32,
        src: &str,
        dest: &str,
        options: &ZipOptions,
    ) -> Result<(), i32> {
        let remote = self.remote()?;

        let mut data = MsgParcel::new();
        data.write_interface_token(interface::ARCHIVE_TOKEN)
            .unwrap();

        data.write(&src.to_string()).unwrap();
        data.write(&dest.to_string()).unwrap();
        data.write(options).unwrap();

        let mut reply = remote
            .send_request(request, &mut data)
            .map_err(|_| error_code::BUNDLE_SERVICE_EXCEPTION)?;

        let code = reply.read::<i32>().unwrap();
        if code != 0 {
            return Err(convert_server_code(code));
        }
        Ok(())
    }

    /// Packs a file or directory into a zip archive.
    pub fn zip_file(&self, src: &str, dest: &str, options: &ZipOptions) -> Result<(), i32> {
        self.archive_request(archive::ZIP_FILE, src, dest, options)
    }

    /// Extracts a zip archive into a directory.
    pub fn unzip_file(&self, src: &str, dest: &str, options: &ZipOptions) -> Result<(), i32> {
        self.archive_request(archive::UNZIP_FILE, src, dest, options)
    }

    /// Compresses a single file.
    pub fn compress_file(&self, src: &str, dest: &str, options: &ZipOptions) -> Result<(), i32> {
        self.archive_request(archive::COMPRESS_FILE, src, dest, options)
    }

    /// Decompresses a single file.
    pub fn decompress_file(&self, src: &str, dest: &str, options: &ZipOptions) -> Result<(), i32> {
        self.archive_request(archive::DECOMPRESS_FILE, src, dest, options)
    }
}
