pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::dto::ReturnDto;
use crate::core::library::LibraryResult;
use crate::payments::method::PaymentMethod;

#[async_trait]
pub trait LibraryService: Sync + Send {
    // adds or replaces a book keyed by its id
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn list_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn borrow_book(&self, id: &str) -> LibraryResult<BookDto>;
    // charges the late fee through the payment method and only then marks the book available
    async fn return_book(&self, id: &str, days_late: i64, payment: &dyn PaymentMethod) -> LibraryResult<ReturnDto>;
}
