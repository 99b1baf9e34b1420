use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("no window object")]
    NoWindow,
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("localStorage rejected key `{0}`")]
    Rejected(String),
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::NoWindow)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage() -> Result<web_sys::Storage, StorageError> {
    Err(StorageError::NoWindow)
}

/// Best-effort read. Any storage failure reads as "no value".
pub fn get_item(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

/// Best-effort write. Failures (storage disabled, quota) are reported to the
/// caller so it can log and degrade to in-memory state.
pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| StorageError::Rejected(key.to_string()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn storage_is_absent_on_the_host() {
        assert_eq!(local_storage().unwrap_err(), StorageError::NoWindow);
        assert!(get_item("theme").is_none());
        assert_eq!(set_item("theme", "dark").unwrap_err(), StorageError::NoWindow);
    }

    #[test]
    fn rejected_error_names_the_key() {
        let err = StorageError::Rejected("theme".into());
        assert_eq!(err.to_string(), "localStorage rejected key `theme`");
    }
}
