use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct BorrowBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl BorrowBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    book_id: String,
}

impl BorrowBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub book: BookDto,
}

impl BorrowBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.library_service.borrow_book(req.book_id.as_str())
            .await.map_err(CommandError::from).map(BorrowBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::dto::BookDto;
    use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_borrow_book() {
        let svc = factory::create_library_service(&Configuration::new("test"), RepositoryStore::InMemory);
        svc.add_book(&BookDto::printed("B1", "t", "a", 10)).await.expect("should add book");
        let cmd = BorrowBookCommand::new(svc);

        let res = cmd.execute(BorrowBookCommandRequest::new("B1".to_string())).await.expect("should borrow book");
        assert!(res.book.is_borrowed());

        let err = cmd.execute(BorrowBookCommandRequest::new("B1".to_string())).await.expect_err("should reject");
        assert!(matches!(err, CommandError::AlreadyBorrowed { .. }));
    }

    #[tokio::test]
    async fn test_should_report_unknown_book() {
        let svc = factory::create_library_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let cmd = BorrowBookCommand::new(svc);
        let err = cmd.execute(BorrowBookCommandRequest::new("X".to_string())).await.expect_err("should reject");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
