use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest, BorrowBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, ConsoleError};

pub async fn add_book(
    state: &AppState,
    req: AddBookCommandRequest) -> Result<AddBookCommandResponse, ConsoleError> {
    let res = AddBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(res)
}

pub async fn list_books(
    state: &AppState) -> Result<ListBooksCommandResponse, ConsoleError> {
    let res = ListBooksCommand::new(state.service.clone()).execute(ListBooksCommandRequest::default()).await?;
    Ok(res)
}

pub async fn borrow_book(
    state: &AppState,
    req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, ConsoleError> {
    let res = BorrowBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(res)
}

pub async fn return_book(
    state: &AppState,
    req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, ConsoleError> {
    let res = ReturnBookCommand::new(&state.config, state.service.clone()).execute(req).await?;
    Ok(res)
}
