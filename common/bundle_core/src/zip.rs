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

//! Archive request options shared with the archive service.

use ipc::parcel::{MsgParcel, Serialize};
use ipc::IpcResult;

/// Compression levels the archive service accepts.
pub mod compress_level {
    /// Store without compression.
    pub const NO_COMPRESSION: i32 = 0;
    /// Fastest compression.
    pub const BEST_SPEED: i32 = 1;
    /// Smallest output.
    pub const BEST_COMPRESSION: i32 = 9;
    /// Service default.
    pub const DEFAULT_COMPRESSION: i32 = -1;
}

/// Memory usage levels the archive service accepts.
pub mod mem_level {
    /// Least memory, slowest.
    pub const MEM_LEVEL_MIN: i32 = 1;
    /// Service default.
    pub const MEM_LEVEL_DEFAULT: i32 = 8;
    /// Most memory, fastest.
    pub const MEM_LEVEL_MAX: i32 = 9;
}

/// Compression strategies the archive service accepts.
pub mod compress_strategy {
    /// Plain deflate.
    pub const DEFAULT_STRATEGY: i32 = 0;
    /// Filtered data.
    pub const FILTERED: i32 = 1;
    /// Huffman coding only.
    pub const HUFFMAN_ONLY: i32 = 2;
    /// Run length encoding.
    pub const RLE: i32 = 3;
    /// Fixed Huffman codes.
    pub const FIXED: i32 = 4;
}

/// Options attached to every archive request. Absent fields keep the
/// service defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZipOptions {
    /// Compression level, one of [`compress_level`].
    pub level: Option<i32>,
    /// Memory usage level, one of [`mem_level`].
    pub mem_level: Option<i32>,
    /// Compression strategy, one of [`compress_strategy`].
    pub strategy: Option<i32>,
}

impl ZipOptions {
    /// Checks every present field against the accepted values. Returns
    /// the name of the first field holding a value the service rejects.
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(level) = self.level {
            if !matches!(
                level,
                compress_level::NO_COMPRESSION
                    | compress_level::BEST_SPEED
                    | compress_level::BEST_COMPRESSION
                    | compress_level::DEFAULT_COMPRESSION
            ) {
                return Err("level");
            }
        }
        if let Some(mem_level) = self.mem_level {
            if !matches!(
                mem_level,
                mem_level::MEM_LEVEL_MIN
                    | mem_level::MEM_LEVEL_DEFAULT
                    | mem_level::MEM_LEVEL_MAX
            ) {
                return Err("memLevel");
            }
        }
        if let Some(strategy) = self.strategy {
            if !(compress_strategy::DEFAULT_STRATEGY..=compress_strategy::FIXED)
                .contains(&strategy)
            {
                return Err("strategy");
            }
        }
        Ok(())
    }
}

impl Serialize for ZipOptions {
    fn serialize(&self, parcel: &mut MsgParcel) -> IpcResult<()> {
        if let Some(level) = self.level {
            parcel.write(&true)?;
            parcel.write(&level)?;
        } else {
            parcel.write(&false)?;
        }
        if let Some(mem_level) = self.mem_level {
            parcel.write(&true)?;
            parcel.write(&mem_level)?;
        } else {
            parcel.write(&false)?;
        }
        if let Some(strategy) = self.strategy {
            parcel.write(&true)?;
            parcel.write(&strategy)?;
        } else {
            parcel.write(&false)?;
        }
        Ok(())
    }
}
