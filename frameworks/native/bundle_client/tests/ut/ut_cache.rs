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

use super::*;

use bundle_core::app_info::ApplicationInfo;

fn bundle_fixture(uid: i32) -> BundleInfo {
    BundleInfo {
        name: "com.example.app".to_string(),
        version_code: 1000000,
        uid,
        ..Default::default()
    }
}

// @tc.name: ut_cache_hit_preserves_identity
// @tc.desc: Test that cache hits return the stored allocation
// @tc.precon: NA
// @tc.step: 1. Store a result whose uid matches the caller
//           2. Look the same query up twice
// @tc.expect: Both hits point at the allocation returned by the store
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_cache_hit_preserves_identity() {
    let cache = BundleInfoCache::new();
    let stored =
        cache.check_to_cache_bundle_info(bundle_fixture(20010041), "com.example.app", 1, 100, 20010041);

    let first = cache.get_bundle_info("com.example.app", 1, 100).unwrap();
    let second = cache.get_bundle_info("com.example.app", 1, 100).unwrap();
    assert!(Arc::ptr_eq(&stored, &first));
    assert!(Arc::ptr_eq(&first, &second));
}

// @tc.name: ut_cache_uid_gate
// @tc.desc: Test that foreign results are not stored
// @tc.precon: NA
// @tc.step: 1. Store a result whose uid differs from the caller
//           2. Look the query up
// @tc.expect: The store is skipped and the lookup misses
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_cache_uid_gate() {
    let cache = BundleInfoCache::new();
    let returned =
        cache.check_to_cache_bundle_info(bundle_fixture(20010099), "com.example.app", 1, 100, 20010041);

    // The caller still gets the result, it just stays uncached
    assert_eq!(returned.uid, 20010099);
    assert!(cache.get_bundle_info("com.example.app", 1, 100).is_none());
}

// @tc.name: ut_cache_key_exactness
// @tc.desc: Test that flags and user id are part of the key
// @tc.precon: NA
// @tc.step: 1. Store one query result
//           2. Look up the same name with other flags and users
// @tc.expect: Only the exact query hits
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_cache_key_exactness() {
    let cache = BundleInfoCache::new();
    cache.check_to_cache_bundle_info(bundle_fixture(20010041), "com.example.app", 1, 100, 20010041);

    assert!(cache.get_bundle_info("com.example.app", 1, 100).is_some());
    assert!(cache.get_bundle_info("com.example.app", 3, 100).is_none());
    assert!(cache.get_bundle_info("com.example.app", 1, 101).is_none());
    assert!(cache.get_bundle_info("com.example.other", 1, 100).is_none());
    // Bundle and application entries never answer each other
    assert!(cache.get_application_info("com.example.app", 1, 100).is_none());
}

// @tc.name: ut_cache_clear
// @tc.desc: Test that clear drops bundle and application entries
// @tc.precon: NA
// @tc.step: 1. Store one bundle and one application entry
//           2. Clear the cache
// @tc.expect: Both lookups miss afterwards
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_cache_clear() {
    let cache = BundleInfoCache::new();
    cache.check_to_cache_bundle_info(bundle_fixture(20010041), "com.example.app", 1, 100, 20010041);
    let app = ApplicationInfo {
        name: "com.example.app".to_string(),
        uid: 20010041,
        ..Default::default()
    };
    cache.check_to_cache_application_info(app, "com.example.app", 2, 100, 20010041);
    assert!(cache.get_application_info("com.example.app", 2, 100).is_some());

    cache.clear();
    assert!(cache.get_bundle_info("com.example.app", 1, 100).is_none());
    assert!(cache.get_application_info("com.example.app", 2, 100).is_none());
}
