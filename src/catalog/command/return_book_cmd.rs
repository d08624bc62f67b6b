use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::catalog::dto::ReturnDto;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::payments::PaymentVia;
use crate::payments::factory::create_payment_method;

pub struct ReturnBookCommand {
    config: Configuration,
    library_service: Arc<dyn LibraryService>,
}

impl ReturnBookCommand {
    pub fn new(config: &Configuration, library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            config: config.clone(),
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    book_id: String,
    days_late: i64,
    payment: PaymentVia,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: String, days_late: i64, payment: PaymentVia) -> Self {
        Self {
            book_id,
            days_late,
            payment,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub returned: ReturnDto,
}

impl ReturnBookCommandResponse {
    pub fn new(returned: ReturnDto) -> Self {
        Self {
            returned,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let payment = create_payment_method(&self.config, &req.payment);
        self.library_service.return_book(req.book_id.as_str(), req.days_late, payment.as_ref())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use std::sync::Arc;
    use uuid::Uuid;
    use crate::books::domain::model::BookFormat;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::domain::LibraryService;
    use crate::catalog::factory::create_library_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::Money;
    use crate::core::repository::RepositoryStore;
    use crate::payments::{PaymentKind, PaymentVia};

    lazy_static! {
        static ref SVC : AsyncOnce<Arc<dyn LibraryService>> = AsyncOnce::new(async {
                create_library_service(&Configuration::new("test"), RepositoryStore::InMemory)
            });
    }

    #[tokio::test]
    async fn test_should_run_return_book() {
        let svc = SVC.get().await;
        let book_cmd = AddBookCommand::new(svc.clone());
        let borrow_cmd = BorrowBookCommand::new(svc.clone());
        let return_cmd = ReturnBookCommand::new(&Configuration::new("test"), svc.clone());

        let book_id = Uuid::new_v4().to_string();
        let _ = book_cmd.execute(AddBookCommandRequest::new(book_id.as_str(), "test book", "author",
                                                            BookFormat::Printed { page_count: 300 }))
            .await.expect("should add book");
        let _ = borrow_cmd.execute(BorrowBookCommandRequest::new(book_id.to_string())).await.expect("should borrow book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new(
            book_id.to_string(), 4, PaymentVia::Card { card_number: "4111111111111234".to_string() }))
            .await.expect("should return book");
        assert_eq!(book_id, res.returned.book.book_id);
        assert_eq!(Money::from_cents(200), res.returned.late_fee);
        assert_eq!(PaymentKind::Card, res.returned.receipt.kind);
        assert!(res.returned.receipt.message.ends_with("1234"));
    }

    #[tokio::test]
    async fn test_should_reject_return_of_available_book() {
        let svc = SVC.get().await;
        let book_cmd = AddBookCommand::new(svc.clone());
        let return_cmd = ReturnBookCommand::new(&Configuration::new("test"), svc.clone());

        let book_id = Uuid::new_v4().to_string();
        let _ = book_cmd.execute(AddBookCommandRequest::new(book_id.as_str(), "test book", "author",
                                                            BookFormat::EBook { download_url: "url".to_string() }))
            .await.expect("should add book");
        let err = return_cmd.execute(ReturnBookCommandRequest::new(book_id.to_string(), 0, PaymentVia::Cash))
            .await.expect_err("should reject");
        assert!(matches!(err, CommandError::NotBorrowed { .. }));
    }
}
