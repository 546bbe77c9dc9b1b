use std::collections::HashMap;

use skintilla_core::DomainResult;

/// String key/value blob store (browser local storage semantics).
///
/// Values are opaque strings; callers own the encoding. There is no schema
/// versioning: a blob that no longer decodes is the caller's to discard.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> DomainResult<()>;
    fn remove(&mut self, key: &str);
}

impl<S> KeyValueStore for &mut S
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> DomainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> DomainResult<()> {
        self.inner.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.inner.remove(key);
    }
}
