use crate::core::domain::Configuration;
use crate::payments::PaymentVia;
use crate::payments::card::CardPayment;
use crate::payments::cash::CashPayment;
use crate::payments::method::PaymentMethod;
use crate::payments::paypal::PayPalPayment;

pub fn create_payment_method(config: &Configuration, via: &PaymentVia) -> Box<dyn PaymentMethod> {
    match via {
        PaymentVia::Cash => {
            Box::new(CashPayment::new())
        }
        PaymentVia::Card { card_number } => {
            Box::new(CardPayment::new(card_number.as_str(), config.card_tail_digits))
        }
        PaymentVia::PayPal { account } => {
            Box::new(PayPalPayment::new(account.as_str()))
        }
    }
}
