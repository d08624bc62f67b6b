use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub mod card;
pub mod cash;
pub mod factory;
pub mod method;
pub mod paypal;
pub mod receipt;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum PaymentKind {
    Cash,
    Card,
    PayPal,
}

impl Display for PaymentKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PaymentKind::Cash => write!(f, "Cash"),
            PaymentKind::Card => write!(f, "Card"),
            PaymentKind::PayPal => write!(f, "PayPal"),
        }
    }
}

// PaymentVia selects the payment method for a single return, along with whatever the
// method needs at transaction time. It is never stored.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "via")]
pub enum PaymentVia {
    Cash,
    Card {
        card_number: String,
    },
    PayPal {
        account: String,
    },
}

impl PaymentVia {
    pub fn kind(&self) -> PaymentKind {
        match self {
            PaymentVia::Cash => PaymentKind::Cash,
            PaymentVia::Card { .. } => PaymentKind::Card,
            PaymentVia::PayPal { .. } => PaymentKind::PayPal,
        }
    }
}
