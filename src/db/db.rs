use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "taskman.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database file and brings its schema up to date.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        let db_path = config.db_path()?;
        Self::open(db_path, config.database().busy_timeout())
    }

    pub fn open(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Raw connection for inspecting schema state before migrating.
    pub fn new_without_migrations() -> Result<Connection> {
        let config = Config::read()?;
        let conn = Connection::open(config.db_path()?)?;
        conn.busy_timeout(config.database().busy_timeout())?;

        Ok(conn)
    }
}
