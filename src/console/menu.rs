use std::io::{BufRead, Write};
use crate::console::prompt::Prompter;
use crate::core::library::{LibraryError, LibraryResult};
use crate::payments::PaymentVia;

pub const MENU: &str = "\n========== LIBRARY MANAGEMENT SYSTEM ==========
1. Add Printed Book
2. Add EBook
3. List All Books
4. Borrow Book
5. Return Book
6. Exit";

#[derive(Debug, PartialEq, Clone)]
pub enum MenuCommand {
    AddPrintedBook {
        book_id: String,
        title: String,
        author: String,
        page_count: u32,
    },
    AddEBook {
        book_id: String,
        title: String,
        author: String,
        download_url: String,
    },
    ListBooks,
    BorrowBook {
        book_id: String,
    },
    ReturnBook {
        book_id: String,
        days_late: i64,
        payment: PaymentVia,
    },
    Exit,
}

// read_command prompts for a menu choice and its fields. Running out of input at any
// point ends the session.
pub fn read_command<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> LibraryResult<MenuCommand> {
    let Some(choice) = prompter.ask("Enter your choice: ")? else {
        return Ok(MenuCommand::Exit);
    };
    match choice.as_str() {
        "1" => {
            let Some((book_id, title, author)) = read_book_fields(prompter)? else {
                return Ok(MenuCommand::Exit);
            };
            let Some(page_count) = prompter.ask_number::<u32>("Enter Number of Pages: ")? else {
                return Ok(MenuCommand::Exit);
            };
            Ok(MenuCommand::AddPrintedBook { book_id, title, author, page_count })
        }
        "2" => {
            let Some((book_id, title, author)) = read_book_fields(prompter)? else {
                return Ok(MenuCommand::Exit);
            };
            let Some(download_url) = prompter.ask("Enter Download URL: ")? else {
                return Ok(MenuCommand::Exit);
            };
            Ok(MenuCommand::AddEBook { book_id, title, author, download_url })
        }
        "3" => Ok(MenuCommand::ListBooks),
        "4" => {
            let Some(book_id) = prompter.ask("Enter Book ID to borrow: ")? else {
                return Ok(MenuCommand::Exit);
            };
            Ok(MenuCommand::BorrowBook { book_id })
        }
        "5" => {
            let Some(book_id) = prompter.ask("Enter Book ID to return: ")? else {
                return Ok(MenuCommand::Exit);
            };
            let Some(days_late) = prompter.ask_number::<i64>("Enter days late: ")? else {
                return Ok(MenuCommand::Exit);
            };
            let Some(payment) = read_payment(prompter)? else {
                return Ok(MenuCommand::Exit);
            };
            Ok(MenuCommand::ReturnBook { book_id, days_late, payment })
        }
        "6" => Ok(MenuCommand::Exit),
        _ => Err(LibraryError::validation("Invalid choice! Try again.", Some(choice))),
    }
}

fn read_book_fields<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> LibraryResult<Option<(String, String, String)>> {
    let Some(book_id) = prompter.ask("Enter Book ID: ")? else { return Ok(None) };
    let Some(title) = prompter.ask("Enter Title: ")? else { return Ok(None) };
    let Some(author) = prompter.ask("Enter Author: ")? else { return Ok(None) };
    Ok(Some((book_id, title, author)))
}

// Anything other than card or PayPal falls back to cash.
fn read_payment<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> LibraryResult<Option<PaymentVia>> {
    let Some(selector) = prompter.ask("Select Payment Method (1 = Cash, 2 = Card, 3 = PayPal): ")? else {
        return Ok(None);
    };
    match selector.as_str() {
        "2" => Ok(prompter.ask("Enter Card Number: ")?
            .map(|card_number| PaymentVia::Card { card_number })),
        "3" => Ok(prompter.ask("Enter PayPal Account: ")?
            .map(|account| PaymentVia::PayPal { account })),
        _ => Ok(Some(PaymentVia::Cash)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::console::menu::{MenuCommand, read_command};
    use crate::console::prompt::Prompter;
    use crate::core::library::LibraryError;
    use crate::payments::PaymentVia;

    fn read(input: &str) -> Result<MenuCommand, LibraryError> {
        let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        read_command(&mut prompter)
    }

    #[tokio::test]
    async fn test_should_read_add_printed_book() {
        let cmd = read("1\nB1\nClean Code\nRobert Martin\n300\n").expect("should read");
        assert_eq!(MenuCommand::AddPrintedBook {
            book_id: "B1".to_string(),
            title: "Clean Code".to_string(),
            author: "Robert Martin".to_string(),
            page_count: 300,
        }, cmd);
    }

    #[tokio::test]
    async fn test_should_read_add_ebook() {
        let cmd = read("2\nE1\nAI Basics\nJane Smith\ndownload.com/ai\n").expect("should read");
        assert_eq!(MenuCommand::AddEBook {
            book_id: "E1".to_string(),
            title: "AI Basics".to_string(),
            author: "Jane Smith".to_string(),
            download_url: "download.com/ai".to_string(),
        }, cmd);
    }

    #[tokio::test]
    async fn test_should_read_return_with_each_payment() {
        let cmd = read("5\nB1\n4\n1\n").expect("should read");
        assert_eq!(MenuCommand::ReturnBook { book_id: "B1".to_string(), days_late: 4, payment: PaymentVia::Cash }, cmd);
        let cmd = read("5\nB1\n4\n2\n4111111111111111\n").expect("should read");
        assert_eq!(MenuCommand::ReturnBook {
            book_id: "B1".to_string(),
            days_late: 4,
            payment: PaymentVia::Card { card_number: "4111111111111111".to_string() },
        }, cmd);
        let cmd = read("5\nB1\n0\n3\nreader@example.com\n").expect("should read");
        assert_eq!(MenuCommand::ReturnBook {
            book_id: "B1".to_string(),
            days_late: 0,
            payment: PaymentVia::PayPal { account: "reader@example.com".to_string() },
        }, cmd);
        let cmd = read("5\nB1\n2\n9\n").expect("should read");
        assert_eq!(MenuCommand::ReturnBook { book_id: "B1".to_string(), days_late: 2, payment: PaymentVia::Cash }, cmd);
    }

    #[tokio::test]
    async fn test_should_read_simple_choices() {
        assert_eq!(MenuCommand::ListBooks, read("3\n").expect("should read"));
        assert_eq!(MenuCommand::BorrowBook { book_id: "B1".to_string() }, read("4\nB1\n").expect("should read"));
        assert_eq!(MenuCommand::Exit, read("6\n").expect("should read"));
    }

    #[tokio::test]
    async fn test_should_exit_on_end_of_input() {
        assert_eq!(MenuCommand::Exit, read("").expect("should read"));
        assert_eq!(MenuCommand::Exit, read("1\nB1\nClean Code\n").expect("should read"));
        assert_eq!(MenuCommand::Exit, read("5\nB1\n4\n2\n").expect("should read"));
    }

    #[tokio::test]
    async fn test_should_reject_bad_input() {
        let err = read("9\n").expect_err("should reject");
        assert!(matches!(err, LibraryError::Validation { ref message, .. } if message == "Invalid choice! Try again."));
        let err = read("1\nB1\nt\na\nlots\n").expect_err("should reject");
        assert!(matches!(err, LibraryError::Validation { .. }));
    }
}
