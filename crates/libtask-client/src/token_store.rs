//! Token Store
//!
//! Keeps the bearer credential across page reloads. Lookup walks the
//! primary key, then the keys older builds wrote, then any session blob a
//! previously used hosted-auth SDK left behind (`sb-<ref>-auth-token`).

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

pub const PRIMARY_TOKEN_KEY: &str = "clt_access_token";
pub const LEGACY_TOKEN_KEYS: [&str; 2] = ["access_token", "token"];

const SESSION_KEY_PREFIX: &str = "sb-";
const SESSION_KEY_SUFFIX: &str = "-auth-token";

/// Synchronous key/value storage (browser `localStorage` or in-memory)
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn keys(&self) -> Vec<String>;
}

/// In-memory storage; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

fn is_session_key(key: &str) -> bool {
    key.starts_with(SESSION_KEY_PREFIX) && key.ends_with(SESSION_KEY_SUFFIX)
}

/// Pull an access token out of a stored auth-session blob.
///
/// SDK versions nest it differently: top level, `currentSession` or `session`.
fn token_from_session_blob(raw: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(raw).ok()?;
    let token = [
        parsed.get("access_token"),
        parsed.pointer("/currentSession/access_token"),
        parsed.pointer("/session/access_token"),
    ]
    .into_iter()
    .flatten()
    .filter_map(Value::as_str)
    .find(|token| !token.is_empty())
    .map(str::to_string);
    token
}

/// Bearer token persistence over a [`TokenStorage`]
#[derive(Clone)]
pub struct TokenStore {
    storage: Rc<dyn TokenStorage>,
}

impl TokenStore {
    pub fn new(storage: Rc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// Persist the token under the primary key and the legacy `access_token` key.
    pub fn set_token(&self, token: &str) {
        self.storage.set(PRIMARY_TOKEN_KEY, token);
        self.storage.set(LEGACY_TOKEN_KEYS[0], token);
    }

    /// Current token, or `None` when the session is anonymous.
    pub fn get_token(&self) -> Option<String> {
        let direct = std::iter::once(PRIMARY_TOKEN_KEY)
            .chain(LEGACY_TOKEN_KEYS)
            .filter_map(|key| self.storage.get(key))
            .find(|value| !value.is_empty());
        if direct.is_some() {
            return direct;
        }

        self.storage
            .keys()
            .into_iter()
            .filter(|key| is_session_key(key))
            .filter_map(|key| self.storage.get(&key))
            .find_map(|raw| token_from_session_blob(&raw))
    }

    pub fn has_token(&self) -> bool {
        self.get_token().is_some()
    }

    /// Remove every key a token could be read from.
    pub fn clear_token(&self) {
        self.storage.remove(PRIMARY_TOKEN_KEY);
        for key in LEGACY_TOKEN_KEYS {
            self.storage.remove(key);
        }
        for key in self.storage.keys() {
            if is_session_key(&key) {
                self.storage.remove(&key);
            }
        }
    }
}
