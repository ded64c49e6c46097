use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

use crate::store::BlobStore;

mod kv_repo;
mod schema;

pub(crate) use kv_repo::{get_kv, set_kv};

pub(crate) struct Db {
    conn: Connection,
}

impl Db {
    pub(crate) fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::init(&conn)?;
        Ok(Self { conn })
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl BlobStore for Db {
    fn read(&self, key: &str) -> Result<Option<String>> {
        get_kv(self, key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        set_kv(self, key, value)
    }
}
