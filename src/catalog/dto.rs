use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::library::Money;
use crate::payments::receipt::PaymentReceipt;

// ReturnDto describes a completed return along with the late fee that was collected.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReturnDto {
    pub book: BookDto,
    pub days_late: i64,
    pub late_fee: Money,
    pub receipt: PaymentReceipt,
}

impl ReturnDto {
    pub fn new(book: BookDto, days_late: i64, late_fee: Money, receipt: PaymentReceipt) -> Self {
        Self {
            book,
            days_late,
            late_fee,
            receipt,
        }
    }
}
