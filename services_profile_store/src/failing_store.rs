//! # Failing Store
//!
//! A KeyValueStore wrapper that can simulate write failures for testing
//! degraded persistence (quota exceeded, store unavailable) without a
//! real broken backend.

use std::collections::BTreeMap;

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

/// Policy for when writes should fail
#[derive(Debug, Clone)]
pub enum FailurePolicy {
    /// Never fail (passthrough)
    Never,
    /// Fail every write
    Always,
    /// Fail after N successful writes
    AfterWrites(usize),
    /// Fail writes to specific keys
    OnKeys(Vec<String>),
}

/// Wrapper around a KeyValueStore that can reject writes
///
/// Reads always pass through. Removes fail under the same policy as writes.
pub struct FailingStore<S: KeyValueStore> {
    inner: S,
    policy: FailurePolicy,
    write_count: usize,
    rejected: BTreeMap<String, usize>,
}

impl<S: KeyValueStore> FailingStore<S> {
    /// Create a new failing store with the given policy
    pub fn new(inner: S, policy: FailurePolicy) -> Self {
        Self {
            inner,
            policy,
            write_count: 0,
            rejected: BTreeMap::new(),
        }
    }

    fn should_fail(&self, key: &str) -> bool {
        match &self.policy {
            FailurePolicy::Never => false,
            FailurePolicy::Always => true,
            FailurePolicy::AfterWrites(n) => self.write_count >= *n,
            FailurePolicy::OnKeys(keys) => keys.iter().any(|k| k == key),
        }
    }

    fn reject(&mut self, key: &str) -> StoreError {
        *self.rejected.entry(key.to_string()).or_insert(0) += 1;
        StoreError::WriteRejected {
            key: key.to_string(),
            reason: format!("injected failure ({:?})", self.policy),
        }
    }

    /// Get the underlying store (for inspection)
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Get mutable access to the underlying store
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Number of writes that reached the inner store
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Number of rejected writes and removes for `key`
    pub fn rejected_count(&self, key: &str) -> usize {
        self.rejected.get(key).copied().unwrap_or(0)
    }

    /// Reset the failure policy
    pub fn set_policy(&mut self, policy: FailurePolicy) {
        self.policy = policy;
        self.write_count = 0;
        self.rejected.clear();
    }
}

impl<S: KeyValueStore> KeyValueStore for FailingStore<S> {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        self.inner.get(key)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        if self.should_fail(key) {
            return Err(self.reject(key));
        }
        self.inner.put(key, value)?;
        self.write_count += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.should_fail(key) {
            return Err(self.reject(key));
        }
        self.inner.remove(key)
    }
}
