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

//! Archive natives of the zlib namespace.
//!
//! Path and option checks run here; the archive service performs the
//! actual file work and answers with its own src/dest error codes.

use ani_rs::business_error::BusinessError;
use bundle_client::ArchiveProxy;
use bundle_core::error_code;
use bundle_core::zip::ZipOptions;

use crate::bridge::OptionsBridge;
use crate::error::{common_error, parameter_type_error, PERMISSION_NONE};

fn check_archive_args(
    src: &str,
    dest: &str,
    options: &ZipOptions,
    api_name: &str,
) -> Result<(), BusinessError> {
    if src.is_empty() {
        return Err(common_error(
            error_code::ZLIB_SRC_FILE_INVALID,
            api_name,
            PERMISSION_NONE,
        ));
    }
    if dest.is_empty() {
        return Err(common_error(
            error_code::ZLIB_DEST_FILE_INVALID,
            api_name,
            PERMISSION_NONE,
        ));
    }
    if let Err(field) = options.validate() {
        return Err(parameter_type_error(field, "number"));
    }
    Ok(())
}

#[ani_rs::native]
pub fn zip_file(src: String, dest: String, options: OptionsBridge) -> Result<(), BusinessError> {
    let options: ZipOptions = options.into();
    check_archive_args(&src, &dest, &options, "ZipFile")?;
    match ArchiveProxy::get_instance().zip_file(&src, &dest, &options) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("ZipFile to {} failed: {}", dest, code);
            Err(common_error(code, "ZipFile", PERMISSION_NONE))
        }
    }
}

#[ani_rs::native]
pub fn unzip_file(src: String, dest: String, options: OptionsBridge) -> Result<(), BusinessError> {
    let options: ZipOptions = options.into();
    check_archive_args(&src, &dest, &options, "UnzipFile")?;
    match ArchiveProxy::get_instance().unzip_file(&src, &dest, &options) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("UnzipFile to {} failed: {}", dest, code);
            Err(common_error(code, "UnzipFile", PERMISSION_NONE))
        }
    }
}

#[ani_rs::native]
pub fn compress_file(
    src: String,
    dest: String,
    options: OptionsBridge,
) -> Result<(), BusinessError> {
    let options: ZipOptions = options.into();
    check_archive_args(&src, &dest, &options, "CompressFile")?;
    match ArchiveProxy::get_instance().compress_file(&src, &dest, &options) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("CompressFile to {} failed: {}", dest, code);
            Err(common_error(code, "CompressFile", PERMISSION_NONE))
        }
    }
}

#[ani_rs::native]
pub fn decompress_file(
    src: String,
    dest: String,
    options: OptionsBridge,
) -> Result<(), BusinessError> {
    let options: ZipOptions = options.into();
    check_archive_args(&src, &dest, &options, "DecompressFile")?;
    match ArchiveProxy::get_instance().decompress_file(&src, &dest, &options) {
        Ok(()) => Ok(()),
        Err(code) => {
            error!("DecompressFile to {} failed: {}", dest, code);
            Err(common_error(code, "DecompressFile", PERMISSION_NONE))
        }
    }
}
