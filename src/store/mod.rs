//! The authoritative in-memory idea collection and its durable copy.
//!
//! Every mutation is applied in memory and then the whole collection is
//! re-encoded and written under a single key before the call returns.

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::domain::idea::{Idea, IdeaId, Status};

mod codec;
mod error;
#[cfg(test)]
pub(crate) mod memory;

pub(crate) use error::{Result, StoreError};

/// Whole-value key/value storage holding the encoded collection.
pub(crate) trait BlobStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoadOutcome {
    /// Nothing stored under the key yet.
    Missing,
    Loaded(usize),
    /// The stored value could not be decoded and was ignored.
    Corrupt,
}

pub(crate) struct IdeaStore<B> {
    backend: B,
    key: String,
    ideas: Vec<Idea>,
    /// Set when the stored value failed to decode; it is kept until a real mutation.
    preserve_stored: bool,
}

impl<B: BlobStore> IdeaStore<B> {
    pub(crate) fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            ideas: Vec::new(),
            preserve_stored: false,
        }
    }

    /// Reads the stored collection. Undecodable data leaves the current
    /// collection untouched and is reported as [`LoadOutcome::Corrupt`].
    pub(crate) fn load(&mut self) -> Result<LoadOutcome> {
        let Some(raw) = self.backend.read(&self.key).map_err(StoreError::Backend)? else {
            debug!(key = %self.key, "no stored ideas");
            return Ok(LoadOutcome::Missing);
        };
        match codec::decode(&raw) {
            Ok(ideas) => {
                debug!(key = %self.key, count = ideas.len(), "loaded ideas");
                self.ideas = ideas;
                self.preserve_stored = false;
                Ok(LoadOutcome::Loaded(self.ideas.len()))
            }
            Err(err) => {
                warn!(key = %self.key, error = ?err, "ignoring undecodable stored ideas");
                self.preserve_stored = true;
                Ok(LoadOutcome::Corrupt)
            }
        }
    }

    /// Fills an empty collection with `defaults`. Returns whether it did.
    ///
    /// The seed is written out, except after a [`LoadOutcome::Corrupt`] load:
    /// then it stays in memory and the undecodable value is left in place.
    pub(crate) fn seed_if_empty(
        &mut self,
        defaults: impl IntoIterator<Item = Idea>,
    ) -> Result<bool> {
        if !self.ideas.is_empty() {
            return Ok(false);
        }
        self.ideas.extend(defaults);
        if self.ideas.is_empty() {
            return Ok(false);
        }
        if self.preserve_stored {
            debug!(key = %self.key, "seeded in memory only, stored value left untouched");
            return Ok(true);
        }
        self.persist()?;
        Ok(true)
    }

    pub(crate) fn add(&mut self, idea: Idea) -> Result<()> {
        self.ideas.push(idea);
        self.persist()
    }

    /// Replaces the idea with the same id in place. Unknown ids are a no-op.
    pub(crate) fn update(&mut self, idea: Idea) -> Result<bool> {
        let Some(slot) = self.ideas.iter_mut().find(|existing| existing.id == idea.id) else {
            return Ok(false);
        };
        *slot = idea;
        self.persist()?;
        Ok(true)
    }

    pub(crate) fn delete(&mut self, id: IdeaId) -> Result<usize> {
        let before = self.ideas.len();
        self.ideas.retain(|idea| idea.id != id);
        self.persist_removed(before)
    }

    /// Removes the ideas at the given zero-based positions of the current
    /// ordering, all computed before anything is removed.
    pub(crate) fn delete_at(
        &mut self,
        positions: impl IntoIterator<Item = usize>,
    ) -> Result<usize> {
        let positions: HashSet<usize> = positions.into_iter().collect();
        let before = self.ideas.len();
        let mut index = 0;
        self.ideas.retain(|_| {
            let keep = !positions.contains(&index);
            index += 1;
            keep
        });
        self.persist_removed(before)
    }

    pub(crate) fn query(&self, status: Status) -> Vec<Idea> {
        self.ideas
            .iter()
            .filter(|idea| idea.status == status)
            .cloned()
            .collect()
    }

    pub(crate) fn all(&self) -> Vec<Idea> {
        self.ideas.clone()
    }

    pub(crate) fn get(&self, id: IdeaId) -> Option<Idea> {
        self.ideas.iter().find(|idea| idea.id == id).cloned()
    }

    /// Ideas whose id starts with `prefix`, ignoring case and hyphens.
    pub(crate) fn find_by_prefix(&self, prefix: &str) -> Vec<Idea> {
        let needle = normalize_id(prefix);
        if needle.is_empty() {
            return Vec::new();
        }
        self.ideas
            .iter()
            .filter(|idea| normalize_id(&idea.id.to_string()).starts_with(&needle))
            .cloned()
            .collect()
    }

    pub(crate) fn counts(&self) -> Vec<(Status, usize)> {
        Status::ALL
            .into_iter()
            .map(|status| {
                let count = self.ideas.iter().filter(|idea| idea.status == status).count();
                (status, count)
            })
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.ideas.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    fn persist_removed(&mut self, before: usize) -> Result<usize> {
        let removed = before - self.ideas.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&mut self) -> Result<()> {
        let encoded = codec::encode(&self.ideas).inspect_err(|err| {
            warn!(error = ?err, "skipping write, ideas could not be encoded");
        })?;
        self.backend
            .write(&self.key, &encoded)
            .map_err(StoreError::Backend)
            .inspect_err(|err| warn!(error = ?err, "failed to write ideas"))?;
        self.preserve_stored = false;
        debug!(key = %self.key, count = self.ideas.len(), "persisted ideas");
        Ok(())
    }
}

fn normalize_id(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| *ch != '-')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}
