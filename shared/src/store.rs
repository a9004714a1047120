//! SQLite store: schema bootstrap at startup and one connection per request.

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use rusqlite::Connection;
use thiserror::Error;
use tracing::{debug, info};

use crate::error::ApiError;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Location of one application's database file.
///
/// Cloned into every request; it never holds a live connection.
#[derive(Debug, Clone)]
pub struct Store {
    path: Arc<PathBuf>,
}

impl Store {
    /// Open the database at `path` and run `schema` against it.
    ///
    /// `schema` must only contain `CREATE ... IF NOT EXISTS` statements so
    /// that reopening an existing file is a no-op.
    pub fn open(path: impl Into<PathBuf>, schema: &str) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self {
            path: Arc::new(path),
        };
        let conn = store.connect()?;
        conn.execute_batch(schema)?;
        info!(path = %store.path.display(), "store initialized");

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(self.path.as_path())?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

/// A connection owned by a single request.
///
/// rusqlite closes the connection (rolling back any open transaction) when
/// the handler drops it, on success and error paths alike.
pub struct Db(pub Connection);

impl Deref for Db {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.0
    }
}

impl DerefMut for Db {
    fn deref_mut(&mut self) -> &mut Connection {
        &mut self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Db
where
    Store: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let store = Store::from_ref(state);
        let conn = store.connect()?;
        debug!(path = %store.path().display(), "opened store connection");
        Ok(Self(conn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS notes (id INTEGER PRIMARY KEY, body TEXT NOT NULL);";

    #[test]
    fn open_is_idempotent_and_keeps_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.db");

        let store = Store::open(&path, SCHEMA).unwrap();
        store
            .connect()
            .unwrap()
            .execute("INSERT INTO notes (body) VALUES (?1)", ["kept"])
            .unwrap();

        let reopened = Store::open(&path, SCHEMA).unwrap();
        let count: i64 = reopened
            .connect()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn open_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("notes.db");

        let store = Store::open(&path, SCHEMA).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn open_fails_on_invalid_schema() {
        let dir = TempDir::new().unwrap();
        let result = Store::open(dir.path().join("bad.db"), "CREATE TABLE (");
        assert!(matches!(result, Err(StoreError::Sqlite(_))));
    }

    #[test]
    fn connections_are_independent() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("notes.db"), SCHEMA).unwrap();

        let first = store.connect().unwrap();
        first
            .execute("INSERT INTO notes (body) VALUES (?1)", ["a"])
            .unwrap();
        drop(first);

        let second = store.connect().unwrap();
        let body: String = second
            .query_row("SELECT body FROM notes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(body, "a");
    }

    #[tokio::test]
    async fn dropping_the_extractor_releases_its_lock() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("notes.db"), SCHEMA).unwrap();

        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        let db = Db::from_request_parts(&mut parts, &store).await.unwrap();
        db.execute_batch("BEGIN IMMEDIATE; INSERT INTO notes (body) VALUES ('pending');")
            .unwrap();
        drop(db);

        let other = store.connect().unwrap();
        other.busy_timeout(Duration::ZERO).unwrap();
        other
            .execute("INSERT INTO notes (body) VALUES (?1)", ["after"])
            .unwrap();
        let bodies: Vec<String> = other
            .prepare("SELECT body FROM notes")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(bodies, vec!["after".to_string()]);
    }

    #[tokio::test]
    async fn extractor_opens_a_connection() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("notes.db"), SCHEMA).unwrap();

        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        let db = Db::from_request_parts(&mut parts, &store).await.unwrap();
        let tables: i64 = db
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'notes'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }
}
