//! Users repository over the USERS partition

use indexmap::IndexMap;

use crate::{
    error::AppResult,
    models::user::{UpdateUser, User},
    repository::{from_record, to_record},
    repository::store::{Store, USERS_TABLE},
};

const KEY: &str = "email";

#[derive(Clone)]
pub struct UsersRepository {
    store: Store,
}

impl UsersRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Get user by email
    pub async fn get(&self, email: &str) -> AppResult<Option<User>> {
        self.store
            .read(|db| {
                db.table(USERS_TABLE)
                    .get(KEY, email)
                    .map(from_record)
                    .transpose()
            })
            .await
    }

    /// All users, in store order
    pub async fn all(&self) -> AppResult<Vec<User>> {
        self.store
            .read(|db| db.table(USERS_TABLE).all().iter().map(from_record).collect())
            .await
    }

    pub async fn exists(&self, email: &str) -> AppResult<bool> {
        self.store
            .read(|db| Ok(db.table(USERS_TABLE).contains(KEY, email)))
            .await
    }

    /// Insert the user unless the email is already taken. Existence check
    /// and insert share one store session, so a concurrent create cannot
    /// slip in between them.
    pub async fn insert_unique(&self, user: &User) -> AppResult<bool> {
        let record = to_record(user)?;
        self.store
            .write(|db| {
                let mut table = db.table_mut(USERS_TABLE);
                if table.contains(KEY, &user.email) {
                    return Ok(false);
                }
                table.insert(record);
                Ok(true)
            })
            .await
    }

    /// Merge the supplied fields into the user's record.
    ///
    /// Returns `None` when no user matches the email, otherwise the number
    /// of records the store reported modified.
    pub async fn update(&self, email: &str, data: &UpdateUser) -> AppResult<Option<usize>> {
        let partial = to_record(data)?;
        self.store
            .write(|db| {
                let mut table = db.table_mut(USERS_TABLE);
                if !table.contains(KEY, email) {
                    return Ok(None);
                }
                Ok(Some(table.update(&partial, KEY, email)))
            })
            .await
    }

    /// Delete user by email; returns the number of records removed.
    pub async fn remove(&self, email: &str) -> AppResult<usize> {
        self.store
            .write(|db| Ok(db.table_mut(USERS_TABLE).remove(KEY, email)))
            .await
    }

    /// Atomically rewrite the user's wishlist.
    ///
    /// The lookup, the mutation and the write-back all happen inside a
    /// single store session, so two concurrent wishlist mutations for the
    /// same user compose instead of overwriting each other.
    ///
    /// Returns the resulting wishlist, or `None` when no user matches.
    pub async fn mutate_wishlist<F>(
        &self,
        email: &str,
        f: F,
    ) -> AppResult<Option<IndexMap<String, String>>>
    where
        F: FnOnce(&mut IndexMap<String, String>),
    {
        self.store
            .write(|db| {
                let mut table = db.table_mut(USERS_TABLE);
                let mut user: User = match table.get(KEY, email) {
                    Some(record) => from_record(record)?,
                    None => return Ok(None),
                };
                f(&mut user.wishlist);

                let mut partial = crate::repository::store::Record::new();
                partial.insert("wishlist".to_string(), serde_json::to_value(&user.wishlist)?);
                table.update(&partial, KEY, email);
                Ok(Some(user.wishlist))
            })
            .await
    }
}
