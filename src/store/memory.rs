use anyhow::{Result, bail};
use std::{cell::RefCell, collections::HashMap};

use super::BlobStore;

/// In-memory blob storage for tests.
#[derive(Default)]
pub(crate) struct MemBlob {
    entries: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBlob {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_entry(key: &str, value: &str) -> Self {
        let blob = Self::new();
        blob.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        blob
    }

    pub(crate) fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub(crate) fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    pub(crate) fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl BlobStore for MemBlob {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entry(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            bail!("simulated write error");
        }
        *self.writes.borrow_mut() += 1;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
