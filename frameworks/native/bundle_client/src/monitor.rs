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

//! Bundle change event subscription and dispatch.
//!
//! The bundle manager service reports installs, updates and uninstalls to
//! registered callbacks. One stub per process receives the events and
//! fans them out to the listeners of the matching event type. The callback
//! is registered with the service when the first listener subscribes and
//! unregistered when the last one leaves.

// Standard library imports
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

// External dependencies
use ipc::parcel::MsgParcel;
use ipc::remote::{RemoteObj, RemoteStub};
use ipc::IpcStatusCode;

// Bundle core dependencies
use bundle_core::event::{BundleChangedInfo, BundleEventType};
use bundle_core::interface::{self, bundle_event};

// Local dependencies
use crate::cache::BundleInfoCache;
use crate::proxy::BundleMgrProxy;

/// Observer of bundle change events.
pub trait BundleChangeListener: Send + Sync {
    /// Called for each event of the subscribed type.
    fn on_bundle_changed(&self, event: BundleEventType, info: &BundleChangedInfo);
}

/// Listener registry keyed by event type.
struct ListenerRegistry {
    listeners: Mutex<HashMap<BundleEventType, Vec<Arc<dyn BundleChangeListener>>>>,
}

impl ListenerRegistry {
    fn new() -> Self {
        Self {
            listeners: Mutex::new(HashMap::new()),
        }
    }

    /// Adds a listener for one event type.
    fn subscribe(&self, event: BundleEventType, listener: Arc<dyn BundleChangeListener>) {
        self.listeners
            .lock()
            .unwrap()
            .entry(event)
            .or_default()
            .push(listener);
    }

    /// Removes a listener registered for one event type, matching by
    /// pointer identity. Returns whether anything was removed.
    fn unsubscribe(
        &self,
        event: BundleEventType,
        listener: &Arc<dyn BundleChangeListener>,
    ) -> bool {
        let mut listeners = self.listeners.lock().unwrap();
        match listeners.get_mut(&event) {
            Some(registered) => {
                let before = registered.len();
                registered.retain(|candidate| !Arc::ptr_eq(candidate, listener));
                before != registered.len()
            }
            None => false,
        }
    }

    /// Removes every listener of one event type.
    fn unsubscribe_all(&self, event: BundleEventType) {
        self.listeners.lock().unwrap().remove(&event);
    }

    /// Whether no listener remains for any event type.
    fn is_empty(&self) -> bool {
        self.listeners
            .lock()
            .unwrap()
            .values()
            .all(|registered| registered.is_empty())
    }

    /// Delivers one event to the listeners of its type.
    ///
    /// The listener list is snapshotted first, so a listener may subscribe
    /// or unsubscribe from inside its callback.
    fn dispatch(&self, event: BundleEventType, info: &BundleChangedInfo) {
        let snapshot = match self.listeners.lock().unwrap().get(&event) {
            Some(registered) => registered.clone(),
            None => return,
        };
        for listener in snapshot {
            listener.on_bundle_changed(event, info);
        }
    }
}

/// Callback stub the service reports bundle events to.
struct BundleEventStub {
    registry: Arc<ListenerRegistry>,
}

impl RemoteStub for BundleEventStub {
    fn on_remote_request(&self, code: u32, data: &mut MsgParcel, _reply: &mut MsgParcel) -> i32 {
        // Verify interface token to ensure the event comes from the service
        match data.read_interface_token() {
            Ok(token) if token == interface::BUNDLE_EVENT_CALLBACK_TOKEN => {}
            _ => {
                error!("Gets invalid token");
                return IpcStatusCode::Failed as i32;
            }
        };

        match code {
            bundle_event::ON_RECEIVE_EVENT => {
                let event_name = data.read::<String>().unwrap();
                let event = match BundleEventType::from_str(&event_name) {
                    Some(event) => event,
                    None => {
                        error!("Unknown bundle event: {}", event_name);
                        return IpcStatusCode::Failed as i32;
                    }
                };
                let info = data.read::<BundleChangedInfo>().unwrap();
                debug!("bundle event {} for {}", event_name, info.bundle_name);

                // Any change makes cached query results stale
                BundleInfoCache::get_instance().clear();
                self.registry.dispatch(event, &info);
                0
            }
            _ => {
                error!("Unexpected bundle event code: {}", code);
                IpcStatusCode::Failed as i32
            }
        }
    }
}

/// Process-wide bundle change monitor.
pub struct BundleMonitor {
    registry: Arc<ListenerRegistry>,
    /// Whether a callback stub is currently registered with the service
    registered: Mutex<bool>,
}

impl BundleMonitor {
    /// Returns the singleton instance of `BundleMonitor`.
    pub fn get_instance() -> &'static Self {
        static BUNDLE_MONITOR: LazyLock<BundleMonitor> = LazyLock::new(|| BundleMonitor {
            registry: Arc::new(ListenerRegistry::new()),
            registered: Mutex::new(false),
        });
        &BUNDLE_MONITOR
    }

    /// Adds a listener for one event type, registering the callback stub
    /// with the service when it is the first listener of the process.
    pub fn subscribe(
        &self,
        event: BundleEventType,
        listener: Arc<dyn BundleChangeListener>,
    ) -> Result<(), i32> {
        let mut registered = self.registered.lock().unwrap();
        self.registry.subscribe(event, listener.clone());
        if !*registered {
            let stub = BundleEventStub {
                registry: self.registry.clone(),
            };
            let callback = RemoteObj::from_stub(stub).unwrap();
            if let Err(code) =
                BundleMgrProxy::get_instance().register_bundle_event_callback(callback)
            {
                error!("register bundle event callback failed: {}", code);
                self.registry.unsubscribe(event, &listener);
                return Err(code);
            }
            *registered = true;
        }
        Ok(())
    }

    /// Removes one listener of an event type.
    pub fn unsubscribe(&self, event: BundleEventType, listener: &Arc<dyn BundleChangeListener>) {
        let mut registered = self.registered.lock().unwrap();
        self.registry.unsubscribe(event, listener);
        self.unregister_when_idle(&mut registered);
    }

    /// Removes every listener of an event type.
    pub fn unsubscribe_all(&self, event: BundleEventType) {
        let mut registered = self.registered.lock().unwrap();
        self.registry.unsubscribe_all(event);
        self.unregister_when_idle(&mut registered);
    }

    fn unregister_when_idle(&self, registered: &mut bool) {
        if *registered && self.registry.is_empty() {
            if let Err(code) = BundleMgrProxy::get_instance().unregister_bundle_event_callback() {
                error!("unregister bundle event callback failed: {}", code);
            }
            *registered = false;
        }
    }
}

#[cfg(test)]
mod ut_monitor {
    include!("../tests/ut/ut_monitor.rs");
}
