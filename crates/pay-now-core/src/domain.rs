use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies one open session of the payment form. Bumped on every `open()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionId(pub u64);

impl SessionId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Source currencies offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "ETH")]
    Eth,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Btc, Currency::Eth];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Btc => "BTC",
            Currency::Eth => "ETH",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BTC" => Ok(Currency::Btc),
            "ETH" => Ok(Currency::Eth),
            other => Err(UnknownCurrency(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

/// The four editable inputs of the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    To,
    From,
    Amount,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::To,
        FormField::From,
        FormField::Amount,
        FormField::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::To => "to",
            FormField::From => "from",
            FormField::Amount => "amount",
            FormField::Description => "description",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "to" => Some(FormField::To),
            "from" => Some(FormField::From),
            "amount" => Some(FormField::Amount),
            "description" => Some(FormField::Description),
            _ => None,
        }
    }
}

/// In-progress payment fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub to: String,
    pub from: String,
    pub amount: String,
    pub description: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::To => &self.to,
            FormField::From => &self.from,
            FormField::Amount => &self.amount,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::To => self.to = value,
            FormField::From => self.from = value,
            FormField::Amount => self.amount = value,
            FormField::Description => self.description = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parsed source currency, if `from` holds one of the offered codes.
    pub fn currency(&self) -> Option<Currency> {
        self.from.parse().ok()
    }

    pub fn to_request(&self) -> PaymentRequest {
        PaymentRequest {
            to: self.to.clone(),
            from: self.from.clone(),
            amount: self.amount.clone(),
            description: self.description.clone(),
        }
    }
}

/// Payload handed to a [`crate::PaymentTransport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub to: String,
    pub from: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A submission that has left the form and is waiting on the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub session: SessionId,
    pub request: PaymentRequest,
}
