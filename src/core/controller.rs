use std::sync::Arc;
use crate::catalog::domain::LibraryService;
use crate::catalog::factory::create_library_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

// AppState is the single session context handed to every console handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub service: Arc<dyn LibraryService>,
}

impl AppState {
    pub fn new(branch: &str, store: RepositoryStore) -> AppState {
        let config = Configuration::new(branch);
        let service = create_library_service(&config, store);
        AppState {
            config,
            service,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ConsoleStatus {
    Warning,
    Failure,
}

impl ConsoleStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            ConsoleStatus::Warning => "⚠️",
            ConsoleStatus::Failure => "❌",
        }
    }
}

pub type ConsoleError = (ConsoleStatus, String);

pub fn render_console_error((status, message): &ConsoleError) -> String {
    format!("{} {}", status.icon(), message)
}

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (ConsoleStatus::Failure, "Book not found!".to_string())
            }
            CommandError::AlreadyBorrowed { .. } => {
                (ConsoleStatus::Warning, "Book is already borrowed!".to_string())
            }
            CommandError::NotBorrowed { .. } => {
                (ConsoleStatus::Warning, "This book was not borrowed.".to_string())
            }
            CommandError::PaymentDeclined { message, .. } => {
                (ConsoleStatus::Failure, format!("Payment failed! {}", message))
            }
            CommandError::Validation { message, .. } => {
                (ConsoleStatus::Failure, message)
            }
            CommandError::Runtime { .. } => {
                (ConsoleStatus::Failure, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (ConsoleStatus::Failure, format!("{:?}", err))
            }
        }
    }
}
