//! Shared preference store with write counting.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use console::errors::domain::DomainError;
use console::infra::prefs::PreferenceStore;

#[derive(Default)]
struct Inner {
    flags: HashMap<String, bool>,
    writes: Vec<(String, bool)>,
}

/// Cloneable [`PreferenceStore`] backed by shared state, so a test can hand
/// one clone to a flow and keep another for assertions. Records every write.
#[derive(Clone, Default)]
pub struct SharedPrefs {
    inner: Arc<Mutex<Inner>>,
}

impl SharedPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(&self, key: &str) -> bool {
        self.inner.lock().flags.get(key).copied().unwrap_or(false)
    }

    /// Number of writes issued for `key`.
    pub fn write_count(&self, key: &str) -> usize {
        self.inner.lock().writes.iter().filter(|(k, _)| k == key).count()
    }
}

impl PreferenceStore for SharedPrefs {
    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), DomainError> {
        let mut inner = self.inner.lock();
        inner.flags.insert(key.to_string(), value);
        inner.writes.push((key.to_string(), value));
        Ok(())
    }

    fn flag(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.inner.lock().flags.get(key).copied().unwrap_or(false))
    }
}
