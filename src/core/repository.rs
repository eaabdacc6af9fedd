use async_trait::async_trait;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Repository is the store contract every backend implements. Implementations keep
// private copies: nothing passed in or handed out aliases stored state.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, fails with AlreadyExists for a duplicate id
    async fn create(&self, entity: &Entity) -> LibraryResult<()>;

    // merges non-empty fields into the stored entity, fails with NotFound
    async fn update(&self, entity: &Entity) -> LibraryResult<()>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<()>;

    // all entities in unspecified order
    async fn get_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    Memory,
}

impl RepositoryStore {
    pub fn all() -> Vec<RepositoryStore> {
        vec![RepositoryStore::Memory]
    }

    // name under which the backend is registered
    pub fn name(&self) -> &'static str {
        match self {
            RepositoryStore::Memory => "mem",
        }
    }
}

impl TryFrom<&str> for RepositoryStore {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        RepositoryStore::all()
            .into_iter()
            .find(|store| store.name() == s)
            .ok_or_else(|| LibraryError::validation(
                format!("unknown store {}", s).as_str(), None))
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_format_store() {
        for store in RepositoryStore::all() {
            let parsed = RepositoryStore::try_from(store.to_string().as_str()).expect("should parse store");
            assert_eq!(store, parsed);
        }
        assert_eq!("mem", RepositoryStore::Memory.name());
    }

    #[tokio::test]
    async fn test_should_reject_unknown_store() {
        let res = RepositoryStore::try_from("cache");
        assert!(matches!(res, Err(LibraryError::Validation{ message: _, reason_code: _ })));
    }
}
