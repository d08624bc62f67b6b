use async_trait::async_trait;
use crate::core::library::Money;
use crate::payments::PaymentKind;
use crate::payments::method::PaymentMethod;
use crate::payments::receipt::PaymentReceipt;

#[derive(Debug, Default)]
pub struct CashPayment {}

impl CashPayment {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl PaymentMethod for CashPayment {
    fn kind(&self) -> PaymentKind {
        PaymentKind::Cash
    }

    async fn pay(&self, amount: Money) -> PaymentReceipt {
        PaymentReceipt::approved(self.kind(), amount,
                                 format!("Processing cash payment of {}", amount).as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::Money;
    use crate::payments::cash::CashPayment;
    use crate::payments::method::PaymentMethod;

    #[tokio::test]
    async fn test_should_pay_cash() {
        let receipt = CashPayment::new().pay(Money::from_cents(200)).await;
        assert!(receipt.is_approved());
        assert_eq!("Processing cash payment of $2.00", receipt.message.as_str());
    }

    #[tokio::test]
    async fn test_should_accept_zero_fee() {
        let receipt = CashPayment::new().pay(Money::ZERO).await;
        assert!(receipt.is_approved());
        assert_eq!(Money::ZERO, receipt.amount);
    }
}
