use anyhow::Result;
use tracing::{info, warn};

use crate::{
    config,
    db::Db,
    domain::idea::default_seed,
    store::{IdeaStore, LoadOutcome},
};

pub(crate) struct AppContext {
    store: IdeaStore<Db>,
}

impl AppContext {
    pub(crate) fn new() -> Result<Self> {
        let path = config::db_path()?;
        let db = Db::open(&path)?;
        let mut store = IdeaStore::new(db, config::IDEAS_KEY);

        if store.load()? == LoadOutcome::Corrupt {
            warn!(path = %path.display(), "stored ideas are unreadable");
            eprintln!(
                "warning: saved ideas could not be read; they stay on disk until the next change"
            );
        }
        if store.seed_if_empty(default_seed())? {
            info!("seeded placeholder ideas");
        }
        Ok(Self { store })
    }

    pub(crate) fn store(&self) -> &IdeaStore<Db> {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut IdeaStore<Db> {
        &mut self.store
    }
}
