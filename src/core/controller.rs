use std::sync::Arc;
use axum::http::StatusCode;
use crate::books::factory::BookRepositoryRegistry;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) registry: Arc<BookRepositoryRegistry>,
}

impl AppState {
    pub fn new(config: Configuration, registry: BookRepositoryRegistry) -> AppState {
        AppState {
            config,
            registry: Arc::new(registry),
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::AlreadyExists { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let conflict: ServerError = CommandError::AlreadyExists { message: "test".to_string() }.into();
        assert_eq!(StatusCode::CONFLICT, conflict.0);
        let missing: ServerError = CommandError::NotFound { message: "test".to_string() }.into();
        assert_eq!(StatusCode::NOT_FOUND, missing.0);
        let invalid: ServerError = CommandError::Validation { message: "test".to_string(), reason_code: None }.into();
        assert_eq!(StatusCode::BAD_REQUEST, invalid.0);
        let internal: ServerError = CommandError::Runtime { message: "test".to_string(), reason_code: None }.into();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, internal.0);
    }
}
