use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, BookFormat};
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, Money};
use crate::utils::date::{optional_serializer, serializer};

// BookDto is a data transfer object for the library service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub format: BookFormat,
    pub book_status: BookStatus,
    #[serde(default, with = "optional_serializer")]
    pub borrowed_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(book_id: &str, title: &str, author: &str, format: BookFormat) -> BookDto {
        BookDto {
            book_id: book_id.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            format,
            book_status: BookStatus::Available,
            borrowed_at: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn printed(book_id: &str, title: &str, author: &str, page_count: u32) -> BookDto {
        Self::new(book_id, title, author, BookFormat::Printed { page_count })
    }

    pub fn ebook(book_id: &str, title: &str, author: &str, download_url: &str) -> BookDto {
        Self::new(book_id, title, author, BookFormat::EBook { download_url: download_url.to_string() })
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn calculate_late_fee(&self, days_late: i64) -> Money {
        self.format.late_fee(days_late)
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "ID: {} | Title: {} | Author: {} | Borrowed: {} | Type: {}",
               self.book_id, self.title, self.author,
               if self.is_borrowed() { "Yes" } else { "No" }, self.format.label())?;
        match &self.format {
            BookFormat::EBook { download_url } => write!(f, " | URL: {}", download_url),
            BookFormat::Printed { page_count } => write!(f, " | Pages: {}", page_count),
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            format: other.format.clone(),
            book_status: other.book_status,
            borrowed_at: other.borrowed_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            format: other.format.clone(),
            book_status: other.book_status,
            borrowed_at: other.borrowed_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
