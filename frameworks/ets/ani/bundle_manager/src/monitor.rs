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

//! Bundle change natives of the bundleMonitor namespace.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use ani_rs::business_error::BusinessError;
use ani_rs::objects::{AniFnObject, GlobalRefCallback};
use ani_rs::AniEnv;
use bundle_client::monitor::{BundleChangeListener, BundleMonitor};
use bundle_client::BundleMgrProxy;
use bundle_core::error_code;
use bundle_core::event::{BundleChangedInfo, BundleEventType};

use crate::bridge::BundleChangedInfoBridge;
use crate::error::{common_error, parameter_type_error, PERMISSION_LISTEN_BUNDLE_CHANGE};

type BundleChangedCallback = GlobalRefCallback<(BundleChangedInfoBridge,)>;

/// Holds the ArkTS callbacks per event type and forwards the change
/// events delivered by the client monitor into them.
struct CallbackManager {
    events: Mutex<HashMap<BundleEventType, Vec<BundleChangedCallback>>>,
    forwarder: Arc<EventForwarder>,
}

struct EventForwarder;

impl BundleChangeListener for EventForwarder {
    fn on_bundle_changed(&self, event: BundleEventType, info: &BundleChangedInfo) {
        CallbackManager::get_instance().notify(event, info);
    }
}

impl CallbackManager {
    fn get_instance() -> &'static Self {
        static INSTANCE: OnceLock<CallbackManager> = OnceLock::new();
        INSTANCE.get_or_init(|| CallbackManager {
            events: Mutex::new(HashMap::new()),
            forwarder: Arc::new(EventForwarder),
        })
    }

    /// Adds a callback, subscribing the forwarder to the client monitor
    /// when it is the first callback of this event type.
    fn register(&self, event: BundleEventType, callback: BundleChangedCallback) -> Result<(), i32> {
        let mut events = self.events.lock().unwrap();
        let callbacks = events.entry(event).or_default();
        callbacks.push(callback);
        if callbacks.len() == 1 {
            if let Err(code) = BundleMonitor::get_instance().subscribe(event, self.forwarder.clone())
            {
                events.remove(&event);
                return Err(code);
            }
        }
        Ok(())
    }

    /// Removes one callback, dropping the forwarder subscription when no
    /// callback of this event type is left.
    fn remove(&self, event: BundleEventType, callback: BundleChangedCallback) {
        let mut events = self.events.lock().unwrap();
        if let Some(callbacks) = events.get_mut(&event) {
            callbacks.retain(|x| *x != callback);
            if callbacks.is_empty() {
                events.remove(&event);
                let listener: Arc<dyn BundleChangeListener> = self.forwarder.clone();
                BundleMonitor::get_instance().unsubscribe(event, &listener);
            }
        }
    }

    /// Removes every callback of one event type.
    fn remove_all(&self, event: BundleEventType) {
        let mut events = self.events.lock().unwrap();
        if events.remove(&event).is_some() {
            BundleMonitor::get_instance().unsubscribe_all(event);
        }
    }

    fn notify(&self, event: BundleEventType, info: &BundleChangedInfo) {
        let events = self.events.lock().unwrap();
        if let Some(callbacks) = events.get(&event) {
            let info = BundleChangedInfoBridge::from(info.clone());
            for callback in callbacks.iter() {
                callback.execute((info.clone(),));
            }
        }
    }
}

fn check_system_api(api_name: &str) -> Result<(), BusinessError> {
    match BundleMgrProxy::get_instance().verify_system_api() {
        Ok(true) => Ok(()),
        Ok(false) => Err(common_error(
            error_code::NOT_SYSTEM_APP,
            api_name,
            PERMISSION_LISTEN_BUNDLE_CHANGE,
        )),
        Err(code) => {
            error!("system api check failed: {}", code);
            Err(common_error(
                code,
                api_name,
                PERMISSION_LISTEN_BUNDLE_CHANGE,
            ))
        }
    }
}

#[ani_rs::native]
pub fn on_event(
    env: &AniEnv,
    event: String,
    callback: AniFnObject,
) -> Result<(), BusinessError> {
    info!("bundle monitor on called with event: {}", event);
    check_system_api("BundleMonitorOn")?;
    let Some(event) = BundleEventType::from_str(&event) else {
        return Err(parameter_type_error("type", "BundleChangedEvent"));
    };
    let callback = callback.into_global_callback(env).unwrap();
    CallbackManager::get_instance()
        .register(event, callback)
        .map_err(|code| common_error(code, "BundleMonitorOn", PERMISSION_LISTEN_BUNDLE_CHANGE))
}

#[ani_rs::native]
pub fn off_event(
    env: &AniEnv,
    event: String,
    callback: AniFnObject,
) -> Result<(), BusinessError> {
    info!("bundle monitor off called with event: {}", event);
    check_system_api("BundleMonitorOff")?;
    let Some(event) = BundleEventType::from_str(&event) else {
        return Err(parameter_type_error("type", "BundleChangedEvent"));
    };
    let callback = callback.into_global_callback(env).unwrap();
    CallbackManager::get_instance().remove(event, callback);
    Ok(())
}

#[ani_rs::native]
pub fn off_events(event: String) -> Result<(), BusinessError> {
    info!("bundle monitor off called for every callback of: {}", event);
    check_system_api("BundleMonitorOff")?;
    let Some(event) = BundleEventType::from_str(&event) else {
        return Err(parameter_type_error("type", "BundleChangedEvent"));
    };
    CallbackManager::get_instance().remove_all(event);
    Ok(())
}
