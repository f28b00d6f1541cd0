use ic_core::SessionPersistence;
use ic_types::AuthSession;
use serde::{Deserialize, Serialize};

/// Thin wrapper over the browser's localStorage.
///
/// Off wasm (native builds and tests) every read misses and every write
/// is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    /// Get a value from storage by key
    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(all(feature = "web", target_arch = "wasm32"))]
        {
            let window = web_sys::window()?;
            let storage = window.local_storage().ok()??;
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    web_sys::console::warn_2(&format!("Failed to get item from storage: {}", key).into(), &e);
                    None
                }
            }
        }
        #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
        {
            let _ = key;
            None
        }
    }

    /// Set a value in storage
    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(all(feature = "web", target_arch = "wasm32"))]
        {
            let window = web_sys::window().ok_or_else(|| "Window not available".to_string())?;
            let storage = window
                .local_storage()
                .map_err(|e| format!("{:?}", e))?
                .ok_or_else(|| "Storage not available".to_string())?;
            storage
                .set_item(key, value)
                .map_err(|e| format!("Failed to set item in storage '{}': {:?}", key, e))
        }
        #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    /// Remove a value from storage
    pub fn remove(&self, key: &str) -> Result<(), String> {
        #[cfg(all(feature = "web", target_arch = "wasm32"))]
        {
            let window = web_sys::window().ok_or_else(|| "Window not available".to_string())?;
            let storage = window
                .local_storage()
                .map_err(|e| format!("{:?}", e))?
                .ok_or_else(|| "Storage not available".to_string())?;
            storage
                .remove_item(key)
                .map_err(|e| format!("Failed to remove item from storage '{}': {:?}", key, e))
        }
        #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Get and deserialize a JSON value from storage
    pub fn get_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_str(&value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable storage entry");
                None
            }
        }
    }

    /// Serialize and set a JSON value in storage
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        let json = serde_json::to_string(value).map_err(|e| format!("Failed to serialize to JSON: {}", e))?;
        self.set(key, &json)
    }
}

/// Keeps the signed-in session across reloads under one storage key.
pub struct BrowserSessionPersistence {
    storage: BrowserStorage,
    key: String,
}

impl BrowserSessionPersistence {
    pub fn new(key: &str) -> Self {
        Self {
            storage: BrowserStorage::new(),
            key: key.to_string(),
        }
    }
}

impl SessionPersistence for BrowserSessionPersistence {
    fn load(&self) -> Option<AuthSession> {
        self.storage.get_json(&self.key)
    }

    fn save(&self, session: &AuthSession) {
        if let Err(e) = self.storage.set_json(&self.key, session) {
            tracing::warn!(error = %e, "could not persist session");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::warn!(error = %e, "could not clear persisted session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_storage_is_a_no_op() {
        let persistence = BrowserSessionPersistence::new("ic-auth-session");
        assert!(persistence.load().is_none());
        persistence.clear();
        assert_eq!(BrowserStorage::new().set("k", "v"), Ok(()));
        assert_eq!(BrowserStorage::new().get("k"), None);
    }
}
