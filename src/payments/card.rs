use async_trait::async_trait;
use crate::core::library::Money;
use crate::payments::PaymentKind;
use crate::payments::method::PaymentMethod;
use crate::payments::receipt::PaymentReceipt;

// CardPayment only remembers the trailing digits of the card it was given.
#[derive(Debug)]
pub struct CardPayment {
    card_tail: String,
}

impl CardPayment {
    pub fn new(card_number: &str, tail_digits: usize) -> Self {
        let chars: Vec<char> = card_number.trim().chars().collect();
        let start = chars.len().saturating_sub(tail_digits);
        Self {
            card_tail: chars[start..].iter().collect(),
        }
    }
}

#[async_trait]
impl PaymentMethod for CardPayment {
    fn kind(&self) -> PaymentKind {
        PaymentKind::Card
    }

    async fn pay(&self, amount: Money) -> PaymentReceipt {
        PaymentReceipt::approved(self.kind(), amount,
                                 format!("Processing card payment of {} using card ending with {}",
                                         amount, self.card_tail).as_str())
    }
}
