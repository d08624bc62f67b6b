use std::io::{BufRead, Write};
use crate::books::domain::model::BookFormat;
use crate::catalog::command::add_book_cmd::AddBookCommandRequest;
use crate::catalog::command::borrow_book_cmd::BorrowBookCommandRequest;
use crate::catalog::command::return_book_cmd::ReturnBookCommandRequest;
use crate::catalog::controller;
use crate::console::menu::{MENU, MenuCommand, read_command};
use crate::console::prompt::Prompter;
use crate::core::command::CommandError;
use crate::core::controller::{AppState, ConsoleError, render_console_error};
use crate::core::library::{LibraryError, LibraryResult};

pub mod menu;
pub mod prompt;

pub const EXIT_MESSAGE: &str = "👋 Exiting... Thank you for using the Library System!";

#[derive(Debug, PartialEq, Clone)]
pub enum Outcome {
    Continue(String),
    Exit(String),
}

// dispatch runs one menu command against the catalog and renders the result; rejected
// operations are rendered too and never end the session.
pub async fn dispatch(state: &AppState, command: MenuCommand) -> Outcome {
    let res = match command {
        MenuCommand::AddPrintedBook { book_id, title, author, page_count } => {
            let req = AddBookCommandRequest::new(
                book_id.as_str(), title.as_str(), author.as_str(), BookFormat::Printed { page_count });
            controller::add_book(state, req).await
                .map(|_| "✅ Printed Book added successfully!".to_string())
        }
        MenuCommand::AddEBook { book_id, title, author, download_url } => {
            let req = AddBookCommandRequest::new(
                book_id.as_str(), title.as_str(), author.as_str(), BookFormat::EBook { download_url });
            controller::add_book(state, req).await
                .map(|_| "✅ EBook added successfully!".to_string())
        }
        MenuCommand::ListBooks => {
            controller::list_books(state).await.map(|res| {
                let mut out = String::from("\n📚 Library Books:\n");
                for book in res.books {
                    out.push_str(book.to_string().as_str());
                    out.push('\n');
                }
                out
            })
        }
        MenuCommand::BorrowBook { book_id } => {
            controller::borrow_book(state, BorrowBookCommandRequest::new(book_id)).await
                .map(|res| format!("✅ You borrowed: {}", res.book.title))
        }
        MenuCommand::ReturnBook { book_id, days_late, payment } => {
            controller::return_book(state, ReturnBookCommandRequest::new(book_id, days_late, payment)).await
                .map(|res| format!("{}\nPayment Successful ✅\n✅ Book returned successfully. Late fee: {}",
                                   res.returned.receipt.message, res.returned.late_fee))
        }
        MenuCommand::Exit => return Outcome::Exit(EXIT_MESSAGE.to_string()),
    };
    Outcome::Continue(res.unwrap_or_else(|err| render_console_error(&err)))
}

// run shows the menu until the user exits or input runs out. Bad input is reported and
// the menu is shown again; I/O failures end the session.
pub async fn run<R: BufRead, W: Write>(state: &AppState, prompter: &mut Prompter<R, W>) -> LibraryResult<()> {
    loop {
        prompter.say(MENU)?;
        let outcome = match read_command(prompter) {
            Ok(command) => dispatch(state, command).await,
            Err(err @ LibraryError::Validation { .. }) => {
                let err: ConsoleError = CommandError::from(err).into();
                Outcome::Continue(render_console_error(&err))
            }
            Err(err) => return Err(err),
        };
        match outcome {
            Outcome::Continue(message) => prompter.say(message.as_str())?,
            Outcome::Exit(message) => {
                prompter.say(message.as_str())?;
                return Ok(());
            }
        }
    }
}
