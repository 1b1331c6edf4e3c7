//! Embedded JSON document store
//!
//! All persistent state lives in one JSON file holding named table
//! partitions ("USERS", "BOOKS"), each a sequence of records. Tables expose
//! query/insert/update/remove primitives keyed by an equality predicate on
//! a field.
//!
//! A [`Store`] is a cheap cloneable handle. Every operation runs as a scoped
//! session: acquire the store lock, load the file, run a closure against the
//! deserialized database, persist when the session mutates, and release on
//! every exit path. Serializing sessions behind the lock is what makes the
//! wishlist read-modify-write safe against lost updates (see
//! [`UsersRepository::mutate_wishlist`](super::users::UsersRepository::mutate_wishlist)).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::AppResult;

/// Partition holding user records
pub const USERS_TABLE: &str = "USERS";
/// Partition holding book records
pub const BOOKS_TABLE: &str = "BOOKS";

/// A single stored document
pub type Record = serde_json::Map<String, Value>;

/// In-memory image of the store file: named tables of records
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(flatten)]
    tables: BTreeMap<String, Vec<Record>>,
}

impl Database {
    /// Read-only view of a table; absent tables read as empty.
    pub fn table(&self, name: &str) -> Table<'_> {
        Table(self.tables.get(name).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Mutable view of a table, created on first access.
    pub fn table_mut(&mut self, name: &str) -> TableMut<'_> {
        TableMut(self.tables.entry(name.to_string()).or_default())
    }
}

fn field_eq(record: &Record, field: &str, value: &str) -> bool {
    record.get(field).and_then(Value::as_str) == Some(value)
}

/// Read-only table handle
pub struct Table<'a>(&'a [Record]);

impl<'a> Table<'a> {
    pub fn contains(&self, field: &str, value: &str) -> bool {
        self.0.iter().any(|record| field_eq(record, field, value))
    }

    pub fn get(&self, field: &str, value: &str) -> Option<&'a Record> {
        self.0.iter().find(|record| field_eq(record, field, value))
    }

    pub fn all(&self) -> &'a [Record] {
        self.0
    }
}

/// Mutable table handle
pub struct TableMut<'a>(&'a mut Vec<Record>);

impl TableMut<'_> {
    pub fn contains(&self, field: &str, value: &str) -> bool {
        self.0.iter().any(|record| field_eq(record, field, value))
    }

    pub fn get(&self, field: &str, value: &str) -> Option<&Record> {
        self.0.iter().find(|record| field_eq(record, field, value))
    }

    pub fn insert(&mut self, record: Record) {
        self.0.push(record);
    }

    /// Merge the supplied keys into every matching record; returns the
    /// number of records modified.
    pub fn update(&mut self, partial: &Record, field: &str, value: &str) -> usize {
        let mut modified = 0;
        for record in self
            .0
            .iter_mut()
            .filter(|record| field_eq(record, field, value))
        {
            for (key, val) in partial {
                record.insert(key.clone(), val.clone());
            }
            modified += 1;
        }
        modified
    }

    /// Delete every matching record; returns the number removed.
    pub fn remove(&mut self, field: &str, value: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|record| !field_eq(record, field, value));
        before - self.0.len()
    }
}

/// Handle to the document store file
#[derive(Clone)]
pub struct Store {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl Store {
    /// Open a handle to the store file.
    ///
    /// Clones of one handle share the session lock; two handles created
    /// separately for the same path do not, so a process must create the
    /// store once and clone it everywhere.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Run a read-only session against the store.
    pub async fn read<T>(&self, f: impl FnOnce(&Database) -> AppResult<T>) -> AppResult<T> {
        let _guard = self.lock.lock().await;
        let db = self.load().await?;
        f(&db)
    }

    /// Run a mutating session against the store. The database is persisted
    /// after the closure succeeds; on closure failure nothing is written.
    pub async fn write<T>(&self, f: impl FnOnce(&mut Database) -> AppResult<T>) -> AppResult<T> {
        let _guard = self.lock.lock().await;
        let mut db = self.load().await?;
        let out = f(&mut db)?;
        self.persist(&db).await?;
        Ok(out)
    }

    /// Wipe the store file and reseed every partition from a fixture file.
    pub async fn initialize_from(&self, fixture: impl AsRef<Path>) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let bytes = tokio::fs::read(fixture.as_ref()).await?;
        let db: Database = serde_json::from_slice(&bytes)?;
        match tokio::fs::remove_file(self.path.as_ref()).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        self.persist(&db).await
    }

    /// A missing file reads as an empty database.
    async fn load(&self) -> AppResult<Database> {
        match tokio::fs::read(self.path.as_ref()).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Database::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, db: &Database) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(db)?;
        tokio::fs::write(self.path.as_ref(), bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: Value) -> Record {
        match pairs {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("db.json"));
        (dir, store)
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_tables() {
        let (_dir, store) = temp_store();
        let count = store
            .read(|db| Ok(db.table(USERS_TABLE).all().len()))
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn insert_then_get_by_field_equality() {
        let (_dir, store) = temp_store();
        store
            .write(|db| {
                db.table_mut(BOOKS_TABLE)
                    .insert(record(json!({"isbn": "111", "title": "Foo"})));
                Ok(())
            })
            .await
            .unwrap();

        let title = store
            .read(|db| {
                Ok(db
                    .table(BOOKS_TABLE)
                    .get("isbn", "111")
                    .and_then(|r| r.get("title").cloned()))
            })
            .await
            .unwrap();
        assert_eq!(title, Some(json!("Foo")));
    }

    #[tokio::test]
    async fn update_merges_only_supplied_keys() {
        let (_dir, store) = temp_store();
        store
            .write(|db| {
                let mut table = db.table_mut(USERS_TABLE);
                table.insert(record(
                    json!({"email": "a@x.com", "first_name": "Ada", "last_name": "L"}),
                ));
                let modified = table.update(
                    &record(json!({"first_name": "Grace"})),
                    "email",
                    "a@x.com",
                );
                assert_eq!(modified, 1);
                Ok(())
            })
            .await
            .unwrap();

        let user = store
            .read(|db| Ok(db.table(USERS_TABLE).get("email", "a@x.com").cloned()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user["first_name"], "Grace");
        assert_eq!(user["last_name"], "L");
    }

    #[tokio::test]
    async fn remove_reports_zero_for_absent_key() {
        let (_dir, store) = temp_store();
        let removed = store
            .write(|db| Ok(db.table_mut(USERS_TABLE).remove("email", "ghost@x.com")))
            .await
            .unwrap();
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    async fn sessions_persist_across_reopened_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = Store::new(&path);
        store
            .write(|db| {
                db.table_mut(USERS_TABLE)
                    .insert(record(json!({"email": "a@x.com"})));
                Ok(())
            })
            .await
            .unwrap();

        let reopened = Store::new(&path);
        let exists = reopened
            .read(|db| Ok(db.table(USERS_TABLE).contains("email", "a@x.com")))
            .await
            .unwrap();
        assert!(exists);
    }

    #[tokio::test]
    async fn initialize_from_wipes_and_reseeds() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = dir.path().join("fixture.json");
        std::fs::write(
            &fixture,
            serde_json::to_vec(&json!({
                "USERS": [{"email": "seed@x.com", "wishlist": {}}],
                "BOOKS": [{"isbn": "111", "title": "Foo"}]
            }))
            .unwrap(),
        )
        .unwrap();

        let store = Store::new(dir.path().join("db.json"));
        store
            .write(|db| {
                db.table_mut(USERS_TABLE)
                    .insert(record(json!({"email": "stale@x.com"})));
                Ok(())
            })
            .await
            .unwrap();

        store.initialize_from(&fixture).await.unwrap();

        store
            .read(|db| {
                let users = db.table(USERS_TABLE);
                assert!(!users.contains("email", "stale@x.com"));
                assert!(users.contains("email", "seed@x.com"));
                assert!(db.table(BOOKS_TABLE).contains("isbn", "111"));
                Ok(())
            })
            .await
            .unwrap();
    }
}
