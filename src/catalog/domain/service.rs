use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::LibraryService;
use crate::catalog::dto::ReturnDto;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::payments::method::PaymentMethod;

pub struct LibraryServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl LibraryServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    async fn find_existing(&self, id: &str) -> LibraryResult<BookEntity> {
        match self.book_repository.find_by_id(id).await? {
            Some(book) => Ok(book),
            None => {
                warn!(book_id = id, "book not found");
                Err(LibraryError::not_found(format!("book {} not found", id).as_str()))
            }
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // Events go out after the book is saved, a failed publish does not undo the change.
    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            warn!(error = %err, "failed to publish catalog event");
        }
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    // New entries always start available, whatever state the caller put on the dto.
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::new(book.book_id.as_str(), book.title.as_str(), book.author.as_str(),
                                     book.format.clone());
        self.book_repository.save(&entity).await?;
        info!(book_id = entity.book_id.as_str(), kind = entity.format.label(), "added book");
        let added = BookDto::from(&entity);
        self.publish(DomainEvent::added(
            "book_added", "catalog", added.book_id.as_str(), &self.metadata(), &added)).await;
        Ok(added)
    }

    async fn list_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn borrow_book(&self, id: &str) -> LibraryResult<BookDto> {
        let mut book = self.find_existing(id).await?;
        if book.is_borrowed() {
            warn!(book_id = id, "book is already borrowed");
            return Err(LibraryError::already_borrowed(format!("book {} is already borrowed", id).as_str()));
        }
        book.set_borrowed(true);
        self.book_repository.save(&book).await?;
        info!(book_id = id, "borrowed book");
        let borrowed = BookDto::from(&book);
        self.publish(DomainEvent::borrowed(
            "book_borrowed", "catalog", id, &self.metadata(), &borrowed)).await;
        Ok(borrowed)
    }

    async fn return_book(&self, id: &str, days_late: i64, payment: &dyn PaymentMethod) -> LibraryResult<ReturnDto> {
        let mut book = self.find_existing(id).await?;
        if !book.is_borrowed() {
            warn!(book_id = id, "book was not borrowed");
            return Err(LibraryError::not_borrowed(format!("book {} was not borrowed", id).as_str()));
        }
        let fee = book.calculate_late_fee(days_late);
        let receipt = payment.pay(fee).await;
        if !receipt.is_approved() {
            warn!(book_id = id, receipt_id = receipt.receipt_id.as_str(), via = %receipt.kind, fee_cents = fee.cents(),
                  "late fee payment declined");
            // the receipt's message is what the payer sees
            return Err(LibraryError::payment_failed(receipt.message.as_str(), Some(receipt.receipt_id)));
        }
        book.set_borrowed(false);
        self.book_repository.save(&book).await?;
        info!(book_id = id, days_late, fee_cents = fee.cents(), via = %receipt.kind, "returned book");
        let returned = ReturnDto::new(BookDto::from(&book), days_late, fee, receipt);
        self.publish(DomainEvent::returned(
            "book_returned", "catalog", id, &self.metadata(), &returned)).await;
        Ok(returned)
    }
}
