use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub(crate) book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::BookRepositoryRegistry;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    fn build_cmds() -> (AddBookCommand, GetBookCommand) {
        let config = Configuration::new("mem");
        let registry = BookRepositoryRegistry::with_defaults();
        let add_svc = factory::create_catalog_service(&config, &registry).expect("should create service");
        let get_svc = factory::create_catalog_service(&config, &registry).expect("should create service");
        (AddBookCommand::new(add_svc), GetBookCommand::new(get_svc))
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let (add_cmd, get_cmd) = build_cmds();

        let _ = add_cmd.execute(AddBookCommandRequest::new("1", "test book", &["x"], "press"))
            .await.expect("should add book");
        let res = get_cmd.execute(GetBookCommandRequest::new("1".to_string()))
            .await.expect("should get book");
        assert_eq!("test book", res.book.name.as_str());
    }

    #[tokio::test]
    async fn test_should_not_get_missing_book() {
        let (_, get_cmd) = build_cmds();

        let res = get_cmd.execute(GetBookCommandRequest::new("1".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound{ message: _ })));
    }
}
