use async_trait::async_trait;
use crate::core::library::Money;
use crate::payments::PaymentKind;
use crate::payments::receipt::PaymentReceipt;

// PaymentMethod collects a late fee. Declines are reported through the receipt rather
// than as errors, the library service decides what a decline means for the book.
#[async_trait]
pub trait PaymentMethod: Sync + Send {
    fn kind(&self) -> PaymentKind;
    async fn pay(&self, amount: Money) -> PaymentReceipt;
}
