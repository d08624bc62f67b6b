use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::Money;
use crate::payments::PaymentKind;
use crate::utils::date::serializer;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub receipt_id: String,
    pub kind: PaymentKind,
    pub amount: Money,
    pub approved: bool,
    pub message: String,
    #[serde(with = "serializer")]
    pub paid_at: NaiveDateTime,
}

impl PaymentReceipt {
    pub fn approved(kind: PaymentKind, amount: Money, message: &str) -> Self {
        Self::build(kind, amount, true, message)
    }

    pub fn declined(kind: PaymentKind, amount: Money, message: &str) -> Self {
        Self::build(kind, amount, false, message)
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    fn build(kind: PaymentKind, amount: Money, approved: bool, message: &str) -> Self {
        Self {
            receipt_id: Uuid::new_v4().to_string(),
            kind,
            amount,
            approved,
            message: message.to_string(),
            paid_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::Money;
    use crate::payments::PaymentKind;
    use crate::payments::receipt::PaymentReceipt;

    #[tokio::test]
    async fn test_should_build_receipts() {
        let approved = PaymentReceipt::approved(PaymentKind::Cash, Money::from_cents(200), "ok");
        assert!(approved.is_approved());
        assert_eq!(Money::from_cents(200), approved.amount);
        let declined = PaymentReceipt::declined(PaymentKind::Card, Money::ZERO, "no");
        assert!(!declined.is_approved());
        assert_ne!(approved.receipt_id, declined.receipt_id);
    }
}
