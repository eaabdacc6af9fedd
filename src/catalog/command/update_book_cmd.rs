use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Fields left empty (or authors left out) keep their stored values.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    #[serde(skip)]
    pub book_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub press: String,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, name: &str, authors: Option<Vec<String>>, press: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            name: name.to_string(),
            authors,
            press: press.to_string(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto {
            id: self.book_id.to_string(),
            name: self.name.to_string(),
            authors: self.authors.clone(),
            press: self.press.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(&book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
