use async_trait::async_trait;
use crate::core::library::Money;
use crate::payments::PaymentKind;
use crate::payments::method::PaymentMethod;
use crate::payments::receipt::PaymentReceipt;

#[derive(Debug)]
pub struct PayPalPayment {
    account: String,
}

impl PayPalPayment {
    pub fn new(account: &str) -> Self {
        Self {
            account: account.trim().to_string(),
        }
    }
}

#[async_trait]
impl PaymentMethod for PayPalPayment {
    fn kind(&self) -> PaymentKind {
        PaymentKind::PayPal
    }

    async fn pay(&self, amount: Money) -> PaymentReceipt {
        PaymentReceipt::approved(self.kind(), amount,
                                 format!("Processing PayPal payment of {} for {}", amount, self.account).as_str())
    }
}
