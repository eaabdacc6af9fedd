use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    AlreadyExists {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::AlreadyExists { message } => {
                CommandError::AlreadyExists { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::already_exists("test")), CommandError::AlreadyExists{ message: _ }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound{ message: _ }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation{ message: _, reason_code: _ }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization{ message: _ }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test", None)), CommandError::Runtime{ message: _, reason_code: _ }));
    }
}
