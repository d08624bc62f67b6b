use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, Money};

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn status(&self) -> BookStatus;
    // late fee owed for the given days late, negative days owe nothing
    fn calculate_late_fee(&self, days_late: i64) -> Money;

    fn is_borrowed(&self) -> bool {
        self.status() == BookStatus::Borrowed
    }
}
