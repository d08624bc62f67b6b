use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    AlreadyBorrowed {
        message: String,
    },
    NotBorrowed {
        message: String,
    },
    // Payment was declined by the payment method. The book stays checked out so the
    // caller can retry the return with another payment method.
    PaymentFailed {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_borrowed(message: &str) -> LibraryError {
        LibraryError::AlreadyBorrowed { message: message.to_string() }
    }

    pub fn not_borrowed(message: &str) -> LibraryError {
        LibraryError::NotBorrowed { message: message.to_string() }
    }

    pub fn payment_failed(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::PaymentFailed { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => { false }
            LibraryError::AlreadyBorrowed { .. } => { false }
            LibraryError::NotBorrowed { .. } => { false }
            LibraryError::PaymentFailed { .. } => { true }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::PaymentFailed { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for the library catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

// Money is an amount in cents so that fees add up exactly.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    // daily charge for the given number of days, negative days charge nothing
    pub fn per_day(daily_cents: i64, days: i64) -> Self {
        Money(daily_cents.saturating_mul(days.max(0)))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookStatus, LibraryError, Money};

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_already_borrowed_error() {
        assert!(matches!(LibraryError::already_borrowed("test"), LibraryError::AlreadyBorrowed{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_borrowed_error() {
        assert!(matches!(LibraryError::not_borrowed("test"), LibraryError::NotBorrowed{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_payment_failed_error() {
        assert!(matches!(LibraryError::payment_failed("test", None), LibraryError::PaymentFailed{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(false, LibraryError::already_borrowed("test").retryable());
        assert_eq!(false, LibraryError::not_borrowed("test").retryable());
        assert_eq!(true, LibraryError::payment_failed("test", None).retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
        assert_eq!(false, LibraryError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<BookStatus>("not json").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_format_book_status() {
        assert_eq!("Available", BookStatus::Available.to_string());
        assert_eq!("Borrowed", BookStatus::Borrowed.to_string());
    }

    #[tokio::test]
    async fn test_should_charge_per_day() {
        assert_eq!(Money::from_cents(200), Money::per_day(50, 4));
        assert_eq!(Money::ZERO, Money::per_day(50, 0));
        assert_eq!(Money::ZERO, Money::per_day(10, -3));
        assert_eq!(Money::from_cents(i64::MAX), Money::per_day(50, i64::MAX));
    }

    #[tokio::test]
    async fn test_should_format_money() {
        assert_eq!("$2.00", Money::from_cents(200).to_string());
        assert_eq!("$0.30", Money::from_cents(30).to_string());
        assert_eq!("$0.00", Money::ZERO.to_string());
        assert_eq!("-$1.05", Money::from_cents(-105).to_string());
    }
}
