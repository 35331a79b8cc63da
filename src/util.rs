// Browser-side helpers: console logging and localStorage persistence

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

/// Forwards `log` records to the browser console.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Safe to call more than once; later calls only adjust the level.
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::trace!("console logger already installed");
    }
    log::set_max_level(level);
}

pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let store = web_sys::window()?.local_storage().ok()??;
    let raw = store.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("discarding stored {key}: {e}");
            None
        }
    }
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            match serde_json::to_string(value) {
                Ok(s) => {
                    if let Err(e) = store.set_item(key, &s) {
                        log::warn!("could not store {key}: {e:?}");
                    }
                }
                Err(e) => log::warn!("could not serialize {key}: {e}"),
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::collections::HashMap;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn saved_settings_load_back() {
        save_json("touch-motion-test", &vec![1, 2, 3]);
        assert_eq!(load_json::<Vec<i32>>("touch-motion-test"), Some(vec![1, 2, 3]));
    }

    #[wasm_bindgen_test]
    fn unserializable_value_leaves_previous_entry() {
        save_json("touch-motion-keys", &1);
        // tuple keys have no JSON form
        let bad: HashMap<(i32, i32), i32> = HashMap::from([((1, 2), 3)]);
        save_json("touch-motion-keys", &bad);
        assert_eq!(load_json::<i32>("touch-motion-keys"), Some(1));
    }
}
