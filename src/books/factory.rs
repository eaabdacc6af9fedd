use std::collections::HashMap;
use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::mem_book_repository::MemBookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

pub(crate) fn create_book_repository(store: RepositoryStore) -> Arc<dyn BookRepository> {
    match store {
        RepositoryStore::Memory => {
            Arc::new(MemBookRepository::new())
        }
    }
}

// BookRepositoryRegistry maps backend names to the one shared instance of each
// backend. It is built by the startup routine and handed to whoever selects a store.
#[derive(Default)]
pub(crate) struct BookRepositoryRegistry {
    repositories: HashMap<String, Arc<dyn BookRepository>>,
}

impl BookRepositoryRegistry {
    pub fn new() -> Self {
        Self {
            repositories: HashMap::new(),
        }
    }

    // registry holding one fresh instance of every known store
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for store in RepositoryStore::all() {
            registry.repositories.insert(store.name().to_string(), create_book_repository(store));
        }
        registry
    }

    pub fn register(&mut self, name: &str, repository: Arc<dyn BookRepository>) -> LibraryResult<()> {
        if self.repositories.contains_key(name) {
            return Err(LibraryError::already_exists(
                format!("store {} is already registered", name).as_str()));
        }
        self.repositories.insert(name.to_string(), repository);
        Ok(())
    }

    pub fn get(&self, name: &str) -> LibraryResult<Arc<dyn BookRepository>> {
        self.repositories.get(name).cloned().ok_or_else(|| LibraryError::validation(
            format!("store {} is not registered", name).as_str(), Some(self.names().join(","))))
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.repositories.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::domain::model::BookEntity;
    use crate::books::factory::{create_book_repository, BookRepositoryRegistry};
    use crate::books::repository::mem_book_repository::MemBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::{Repository, RepositoryStore};

    #[tokio::test]
    async fn test_should_create_mem_repository() {
        let repo = create_book_repository(RepositoryStore::Memory);
        repo.create(&BookEntity::new("1", "A", &["x"], "P")).await.expect("should create book");
        assert_eq!(1, repo.get_all().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_register_defaults() {
        let registry = BookRepositoryRegistry::with_defaults();
        assert_eq!(vec!["mem".to_string()], registry.names());
        let _ = registry.get("mem").expect("should find mem store");
    }

    #[tokio::test]
    async fn test_should_share_registered_instance() {
        let registry = BookRepositoryRegistry::with_defaults();
        let first = registry.get("mem").expect("should find mem store");
        first.create(&BookEntity::new("1", "A", &["x"], "P")).await.expect("should create book");

        let second = registry.get("mem").expect("should find mem store");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!("A", second.get("1").await.expect("should return book").name.as_str());
    }

    #[tokio::test]
    async fn test_should_isolate_registries() {
        let registry = BookRepositoryRegistry::with_defaults();
        registry.get("mem").expect("should find mem store")
            .create(&BookEntity::new("1", "A", &["x"], "P")).await.expect("should create book");

        let other = BookRepositoryRegistry::with_defaults();
        let res = other.get("mem").expect("should find mem store").get("1").await;
        assert!(matches!(res, Err(LibraryError::NotFound{ message: _ })));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_registration() {
        let mut registry = BookRepositoryRegistry::new();
        registry.register("custom", Arc::new(MemBookRepository::new())).expect("should register");
        let res = registry.register("custom", Arc::new(MemBookRepository::new()));
        assert!(matches!(res, Err(LibraryError::AlreadyExists{ message: _ })));
    }

    #[tokio::test]
    async fn test_should_reject_unknown_name() {
        let registry = BookRepositoryRegistry::new();
        assert!(matches!(registry.get("cache"), Err(LibraryError::Validation{ message: _, reason_code: _ })));
    }
}
