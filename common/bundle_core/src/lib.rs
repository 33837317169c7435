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

//! Core types shared by the bundle manager bindings.
//!
//! This crate holds the data transfer objects populated by the bundle
//! manager services, their parcel codecs, the IPC transaction codes, and
//! the public error-code contract. It performs no IPC itself.

#![allow(clippy::new_without_default)]

/// Ability and extension-ability information.
pub mod ability_info;

/// Application information and metadata.
pub mod app_info;

/// Bundle information, module information and permission definitions.
pub mod bundle_info;

/// Public error codes and server result-code translation.
pub mod error_code;

/// Bundle change event types and payloads.
pub mod event;

/// Query flags and user-id defaulting.
pub mod flags;

/// Installation parameters.
pub mod install;

/// IPC transaction codes, interface tokens and service ids.
pub mod interface;

/// Bundle package information and dispatch information.
pub mod pack_info;

/// Shortcut and launcher ability information.
pub mod shortcut;

/// Want and element-name routing records.
pub mod want;

/// Archive operation options.
pub mod zip;
