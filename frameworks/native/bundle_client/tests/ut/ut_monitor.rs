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

use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingListener {
    count: AtomicUsize,
}

impl CountingListener {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            count: AtomicUsize::new(0),
        })
    }

    fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl BundleChangeListener for CountingListener {
    fn on_bundle_changed(&self, _event: BundleEventType, _info: &BundleChangedInfo) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

struct RemovingListener {
    registry: Arc<ListenerRegistry>,
    target: Arc<dyn BundleChangeListener>,
}

impl BundleChangeListener for RemovingListener {
    fn on_bundle_changed(&self, event: BundleEventType, _info: &BundleChangedInfo) {
        self.registry.unsubscribe(event, &self.target);
    }
}

fn changed_info(bundle_name: &str) -> BundleChangedInfo {
    BundleChangedInfo {
        bundle_name: bundle_name.to_string(),
        user_id: 100,
    }
}

// @tc.name: ut_registry_dispatch
// @tc.desc: Test that events reach only listeners of the matching type
// @tc.precon: NA
// @tc.step: 1. Subscribe a listener to the add event
//           2. Dispatch an add event and then a remove event
// @tc.expect: The listener is called once
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_registry_dispatch() {
    let registry = ListenerRegistry::new();
    let listener = CountingListener::new();
    registry.subscribe(BundleEventType::Add, listener.clone());

    registry.dispatch(BundleEventType::Add, &changed_info("com.example.app"));
    assert_eq!(listener.count(), 1);

    registry.dispatch(BundleEventType::Remove, &changed_info("com.example.app"));
    assert_eq!(listener.count(), 1);
}

// @tc.name: ut_registry_unsubscribe
// @tc.desc: Test that unsubscribe removes exactly the given listener
// @tc.precon: NA
// @tc.step: 1. Subscribe two listeners to the update event
//           2. Unsubscribe the first one and dispatch
// @tc.expect: Only the remaining listener is called
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_registry_unsubscribe() {
    let registry = ListenerRegistry::new();
    let first = CountingListener::new();
    let second = CountingListener::new();
    registry.subscribe(BundleEventType::Update, first.clone());
    registry.subscribe(BundleEventType::Update, second.clone());

    let removed: Arc<dyn BundleChangeListener> = first.clone();
    assert!(registry.unsubscribe(BundleEventType::Update, &removed));
    assert!(!registry.unsubscribe(BundleEventType::Update, &removed));

    registry.dispatch(BundleEventType::Update, &changed_info("com.example.app"));
    assert_eq!(first.count(), 0);
    assert_eq!(second.count(), 1);
}

// @tc.name: ut_registry_unsubscribe_all
// @tc.desc: Test that unsubscribe_all empties one event type
// @tc.precon: NA
// @tc.step: 1. Subscribe listeners to the add and remove events
//           2. Remove every add listener
// @tc.expect: The registry keeps only the remove listener and empties
//             once that one leaves too
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_registry_unsubscribe_all() {
    let registry = ListenerRegistry::new();
    let added = CountingListener::new();
    let removed = CountingListener::new();
    registry.subscribe(BundleEventType::Add, added.clone());
    registry.subscribe(BundleEventType::Add, CountingListener::new());
    registry.subscribe(BundleEventType::Remove, removed.clone());
    assert!(!registry.is_empty());

    registry.unsubscribe_all(BundleEventType::Add);
    registry.dispatch(BundleEventType::Add, &changed_info("com.example.app"));
    assert_eq!(added.count(), 0);
    assert!(!registry.is_empty());

    registry.unsubscribe_all(BundleEventType::Remove);
    assert!(registry.is_empty());
}

// @tc.name: ut_registry_dispatch_snapshot
// @tc.desc: Test that listeners may unsubscribe others during dispatch
// @tc.precon: NA
// @tc.step: 1. Subscribe a listener that unsubscribes a second one
//           2. Dispatch the same event twice
// @tc.expect: The second listener sees the first dispatch but not the next
// @tc.type: FUNC
// @tc.require: issues#ICN31I
#[test]
fn ut_registry_dispatch_snapshot() {
    let registry = Arc::new(ListenerRegistry::new());
    let counting = CountingListener::new();
    let removing = Arc::new(RemovingListener {
        registry: registry.clone(),
        target: counting.clone(),
    });
    registry.subscribe(BundleEventType::Add, removing);
    registry.subscribe(BundleEventType::Add, counting.clone());

    registry.dispatch(BundleEventType::Add, &changed_info("com.example.app"));
    assert_eq!(counting.count(), 1);

    registry.dispatch(BundleEventType::Add, &changed_info("com.example.app"));
    assert_eq!(counting.count(), 1);
}
