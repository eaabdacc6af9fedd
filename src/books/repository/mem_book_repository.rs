use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

/// Process-local book store.
///
/// Books are keyed by id in a map behind a single `RwLock`: `get` and `get_all`
/// share the lock, `create`, `update` and `delete` take it exclusively. The lock is
/// never held across an `.await`. Every book going in or out is cloned.
#[derive(Debug, Default)]
pub struct MemBookRepository {
    books: RwLock<HashMap<String, BookEntity>>,
}

impl MemBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }

    // Writers finish building a value before touching the map, so a poisoned
    // lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, BookEntity>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, BookEntity>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Repository<BookEntity> for MemBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<()> {
        let mut books = self.write();
        if books.contains_key(entity.id.as_str()) {
            return Err(LibraryError::already_exists(
                format!("book {} already exists", entity.id).as_str()));
        }
        books.insert(entity.id.clone(), entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<()> {
        let mut books = self.write();
        let merged = match books.get(entity.id.as_str()) {
            Some(old) => old.merge(entity),
            None => {
                return Err(LibraryError::not_found(
                    format!("book not found for {}", entity.id).as_str()));
            }
        };
        books.insert(merged.id.clone(), merged);
        Ok(())
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<()> {
        self.write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn get_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.read().values().cloned().collect())
    }
}
