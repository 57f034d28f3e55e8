//! Browser Glue
//!
//! `localStorage` token persistence, API base resolution and the local clock.

use chrono::NaiveDate;
use libtask_client::token_store::TokenStorage;
use libtask_client::ClientConfig;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// `TokenStorage` over `window.localStorage`; a missing or blocked storage
/// behaves like an empty one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn keys(&self) -> Vec<String> {
        let Some(storage) = local_storage() else {
            return Vec::new();
        };
        let len = storage.length().unwrap_or(0);
        (0..len).filter_map(|i| storage.key(i).ok().flatten()).collect()
    }
}

/// Client config with a relative API base resolved against the page origin.
pub fn client_config() -> ClientConfig {
    let config = ClientConfig::from_build_env();
    match web_sys::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => config.with_origin(&origin),
        None => config,
    }
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}
