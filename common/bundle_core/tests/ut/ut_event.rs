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

// @tc.name: ut_bundle_event_type_names
// @tc.desc: Test event type name conversion in both directions
// @tc.precon: NA
// @tc.step: 1. Convert each variant to its name and back
//           2. Parse an unknown name
// @tc.expect: Names round trip; unknown names parse to None
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_bundle_event_type_names() {
    assert_eq!(BundleEventType::Add.as_str(), "add");
    assert_eq!(BundleEventType::Update.as_str(), "update");
    assert_eq!(BundleEventType::Remove.as_str(), "remove");

    assert_eq!(BundleEventType::from_str("add"), Some(BundleEventType::Add));
    assert_eq!(
        BundleEventType::from_str("update"),
        Some(BundleEventType::Update)
    );
    assert_eq!(
        BundleEventType::from_str("remove"),
        Some(BundleEventType::Remove)
    );
    assert_eq!(BundleEventType::from_str("install"), None);
    assert_eq!(BundleEventType::from_str(""), None);
}
