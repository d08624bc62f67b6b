use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, Money};
use crate::utils::date::{optional_serializer, serializer};

pub const EBOOK_DAILY_LATE_FEE_CENTS: i64 = 10;
pub const PRINTED_DAILY_LATE_FEE_CENTS: i64 = 50;

// BookFormat is the closed set of catalog entry kinds along with the fields only that
// kind carries.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BookFormat {
    EBook {
        download_url: String,
    },
    Printed {
        page_count: u32,
    },
}

impl BookFormat {
    pub fn daily_late_fee(&self) -> Money {
        match self {
            BookFormat::EBook { .. } => Money::from_cents(EBOOK_DAILY_LATE_FEE_CENTS),
            BookFormat::Printed { .. } => Money::from_cents(PRINTED_DAILY_LATE_FEE_CENTS),
        }
    }

    pub fn late_fee(&self, days_late: i64) -> Money {
        Money::per_day(self.daily_late_fee().cents(), days_late)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookFormat::EBook { .. } => "EBook",
            BookFormat::Printed { .. } => "Printed Book",
        }
    }
}

// BookEntity is a single copy of a book tracked by the catalog. Everything except the
// status and bookkeeping timestamps is fixed at creation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
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

impl BookEntity {
    pub fn new(book_id: &str, title: &str, author: &str, format: BookFormat) -> Self {
        Self {
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

    pub fn printed(book_id: &str, title: &str, author: &str, page_count: u32) -> Self {
        Self::new(book_id, title, author, BookFormat::Printed { page_count })
    }

    pub fn ebook(book_id: &str, title: &str, author: &str, download_url: &str) -> Self {
        Self::new(book_id, title, author, BookFormat::EBook { download_url: download_url.to_string() })
    }

    // No guard here, the library service decides which transitions are valid.
    pub fn set_borrowed(&mut self, borrowed: bool) {
        let now = Utc::now().naive_utc();
        if borrowed {
            self.book_status = BookStatus::Borrowed;
            self.borrowed_at = Some(now);
        } else {
            self.book_status = BookStatus::Available;
            self.borrowed_at = None;
        }
        self.version += 1;
        self.updated_at = now;
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
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
