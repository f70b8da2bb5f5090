use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid customer id: {0}")]
  InvalidCustomerId(String),
  #[error("Invalid amount: {0}")]
  InvalidAmount(String),
  #[error("Amount is not a number: {0}")]
  AmountNotANumber(String),
  #[error("Amount is too large: {0}")]
  AmountTooLarge(String),
  #[error("Invalid invoice status: {0}")]
  InvalidStatus(String),
}

// Customer reference - opaque, owned by the customers table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidCustomerId(
        "Customer id cannot be empty".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for CustomerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Invoice Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
  Pending,
  Paid,
}

impl InvoiceStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      InvoiceStatus::Pending => "pending",
      InvoiceStatus::Paid => "paid",
    }
  }
}

impl fmt::Display for InvoiceStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Only the exact lowercase literals are accepted.
impl FromStr for InvoiceStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(InvoiceStatus::Pending),
      "paid" => Ok(InvoiceStatus::Paid),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown status: {}",
        s
      ))),
    }
  }
}

/// Monetary amount stored as integer minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AmountInCents(i64);

impl AmountInCents {
  /// Parses a major-unit amount as submitted in a form ("15.00", " 20.5", "1e2").
  pub fn parse(input: &str) -> Result<Self, ValueObjectError> {
    let trimmed = input.trim();
    // A blank field coerces to zero, which is then rejected as non-positive
    if trimmed.is_empty() {
      return Self::from_major(Decimal::ZERO);
    }

    let major = Decimal::from_str(trimmed)
      .or_else(|_| Decimal::from_scientific(trimmed))
      .map_err(|_| ValueObjectError::AmountNotANumber(input.to_string()))?;

    Self::from_major(major)
  }

  /// Converts a major-unit amount to minor units, rounding half away from zero.
  pub fn from_major(amount: Decimal) -> Result<Self, ValueObjectError> {
    if amount <= Decimal::ZERO {
      return Err(ValueObjectError::InvalidAmount(
        "Amount must be greater than zero".to_string(),
      ));
    }

    let cents = amount
      .checked_mul(Decimal::ONE_HUNDRED)
      .map(|c| c.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
      .and_then(|c| c.to_i64())
      .ok_or_else(|| ValueObjectError::AmountTooLarge(amount.to_string()))?;

    if cents == 0 {
      return Err(ValueObjectError::InvalidAmount(
        "Amount must be at least one cent".to_string(),
      ));
    }

    Ok(Self(cents))
  }

  /// Wraps a value read back from storage.
  pub fn from_cents(cents: i64) -> Self {
    Self(cents)
  }

  pub fn value(&self) -> i64 {
    self.0
  }

  pub fn to_major(&self) -> Decimal {
    Decimal::new(self.0, 2)
  }
}

impl fmt::Display for AmountInCents {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.to_major())
  }
}
