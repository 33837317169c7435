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

//! Identity-gated cache for bundle and application queries.
//!
//! The sync query entry points are hot paths for applications asking about
//! themselves, so their results are kept per exact query. An entry is only
//! stored when the calling uid owns the returned information; everything
//! else stays uncached. The bundle monitor clears the cache whenever any
//! bundle changes.

// Standard library imports
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

// Bundle core dependencies
use bundle_core::app_info::ApplicationInfo;
use bundle_core::bundle_info::BundleInfo;

/// Which query family an entry answers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum QueryKind {
    BundleInfo,
    ApplicationInfo,
}

/// One exact query, the cache key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Query {
    kind: QueryKind,
    bundle_name: String,
    flags: i32,
    user_id: i32,
}

/// One cached result. The variant always matches the key's kind.
enum CachedInfo {
    Bundle(Arc<BundleInfo>),
    Application(Arc<ApplicationInfo>),
}

/// Cache of sync query results, keyed by the exact query.
pub struct BundleInfoCache {
    map: Mutex<HashMap<Query, CachedInfo>>,
}

impl BundleInfoCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the process-wide cache instance.
    pub fn get_instance() -> &'static Self {
        static BUNDLE_INFO_CACHE: LazyLock<BundleInfoCache> = LazyLock::new(BundleInfoCache::new);
        &BUNDLE_INFO_CACHE
    }

    /// Looks up a cached bundle query.
    ///
    /// Hits return the stored allocation, so repeated hits share it.
    pub fn get_bundle_info(
        &self,
        bundle_name: &str,
        flags: i32,
        user_id: i32,
    ) -> Option<Arc<BundleInfo>> {
        let map = self.map.lock().unwrap();
        match map.get(&Query {
            kind: QueryKind::BundleInfo,
            bundle_name: bundle_name.to_string(),
            flags,
            user_id,
        }) {
            Some(CachedInfo::Bundle(info)) => Some(info.clone()),
            _ => None,
        }
    }

    /// Looks up a cached application query.
    pub fn get_application_info(
        &self,
        bundle_name: &str,
        flags: i32,
        user_id: i32,
    ) -> Option<Arc<ApplicationInfo>> {
        let map = self.map.lock().unwrap();
        match map.get(&Query {
            kind: QueryKind::ApplicationInfo,
            bundle_name: bundle_name.to_string(),
            flags,
            user_id,
        }) {
            Some(CachedInfo::Application(info)) => Some(info.clone()),
            _ => None,
        }
    }

    /// Stores a bundle query result if the caller owns it.
    ///
    /// Only a caller asking about itself populates the cache; the returned
    /// information of foreign bundles is handed back uncached.
    pub fn check_to_cache_bundle_info(
        &self,
        info: BundleInfo,
        bundle_name: &str,
        flags: i32,
        user_id: i32,
        calling_uid: u64,
    ) -> Arc<BundleInfo> {
        let info = Arc::new(info);
        if info.uid as u64 == calling_uid {
            debug!("caching bundle info of {}", bundle_name);
            self.map.lock().unwrap().insert(
                Query {
                    kind: QueryKind::BundleInfo,
                    bundle_name: bundle_name.to_string(),
                    flags,
                    user_id,
                },
                CachedInfo::Bundle(info.clone()),
            );
        }
        info
    }

    /// Stores an application query result if the caller owns it.
    pub fn check_to_cache_application_info(
        &self,
        info: ApplicationInfo,
        bundle_name: &str,
        flags: i32,
        user_id: i32,
        calling_uid: u64,
    ) -> Arc<ApplicationInfo> {
        let info = Arc::new(info);
        if info.uid as u64 == calling_uid {
            debug!("caching application info of {}", bundle_name);
            self.map.lock().unwrap().insert(
                Query {
                    kind: QueryKind::ApplicationInfo,
                    bundle_name: bundle_name.to_string(),
                    flags,
                    user_id,
                },
                CachedInfo::Application(info.clone()),
            );
        }
        info
    }

    /// Drops every entry. Called when any bundle changes.
    pub fn clear(&self) {
        self.map.lock().unwrap().clear();
    }
}

impl Default for BundleInfoCache {
    fn default() -> Self {
        Self::new()
    }
}
