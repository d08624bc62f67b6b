use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookFormat;
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl AddBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub format: BookFormat,
}

impl AddBookCommandRequest {
    pub fn new(book_id: &str, title: &str, author: &str, format: BookFormat) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            format,
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.book_id.as_str(), self.title.as_str(), self.author.as_str(), self.format.clone())
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.library_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
