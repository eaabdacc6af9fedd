use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    #[serde(default)]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) authors: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) press: String,
}

impl AddBookCommandRequest {
    pub fn new(id: &str, name: &str, authors: &[&str], press: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            authors: Some(authors.iter().map(|a| a.to_string()).collect()),
            press: press.to_string(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto {
            id: self.id.to_string(),
            name: self.name.to_string(),
            authors: self.authors.clone(),
            press: self.press.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        if req.id.trim().is_empty() {
            return Err(CommandError::Validation {
                message: "book id must not be empty".to_string(),
                reason_code: None,
            });
        }
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
