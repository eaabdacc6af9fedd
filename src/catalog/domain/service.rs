use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub(crate) struct CatalogServiceImpl {
    store: String,
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            store: config.store.to_string(),
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.create(&BookEntity::from(book)).await?;
        info!(store = %self.store, book_id = %book.id, "added book");
        Ok(book.clone())
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        self.book_repository.delete(id).await?;
        info!(store = %self.store, book_id = %id, "removed book");
        Ok(())
    }

    // returns the stored book after the merge, not the patch
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.update(&BookEntity::from(book)).await?;
        info!(store = %self.store, book_id = %book.id, "updated book");
        self.find_book_by_id(book.id.as_str()).await
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.get_all().await?;
        debug!(store = %self.store, count = books.len(), "listed books");
        Ok(books.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id.to_string(),
            name: other.name.to_string(),
            authors: other.authors.clone(),
            press: other.press.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id.to_string(),
            name: other.name.to_string(),
            authors: other.authors.clone(),
            press: other.press.to_string(),
        }
    }
}
