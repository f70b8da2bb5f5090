use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::invoice::{
  AmountInCents, CustomerId, InvoiceFields, InvoiceStatus, ValueObjectError,
};

pub const CUSTOMER_MESSAGE: &str = "Please select a customer.";
pub const AMOUNT_MESSAGE: &str = "Please enter an amount greater than $0.";
pub const AMOUNT_NOT_A_NUMBER_MESSAGE: &str = "Amount must be a number.";
pub const AMOUNT_TOO_LARGE_MESSAGE: &str = "Amount is too large.";
pub const STATUS_MESSAGE: &str = "Please select an invoice status.";

/// Messages per form field, in the order they were raised
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Raw invoice form submission.
///
/// Every value arrives as a string and may be missing altogether; coercion
/// happens in [`InvoiceForm::parse`], never at deserialization.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct InvoiceForm {
  #[serde(rename = "customerId", default)]
  #[validate(required, custom(function = "validate_customer_id"))]
  pub customer_id: Option<String>,

  #[serde(default)]
  #[validate(required, custom(function = "validate_amount"))]
  pub amount: Option<String>,

  #[serde(default)]
  #[validate(required, custom(function = "validate_status"))]
  pub status: Option<String>,
}

impl InvoiceForm {
  /// Validates the submission and coerces it into the storable field set.
  pub fn parse(&self) -> Result<InvoiceFields, FieldErrors> {
    self.validate().map_err(|e| field_errors(&e))?;

    Ok(InvoiceFields {
      customer_id: CustomerId::new(self.customer_id.clone().unwrap_or_default())
        .map_err(|_| single_error("customerId", CUSTOMER_MESSAGE))?,
      amount: AmountInCents::parse(self.amount.as_deref().unwrap_or_default())
        .map_err(|e| single_error("amount", amount_message(&e)))?,
      status: InvoiceStatus::from_str(self.status.as_deref().unwrap_or_default())
        .map_err(|_| single_error("status", STATUS_MESSAGE))?,
    })
  }
}

fn validate_customer_id(value: &str) -> Result<(), ValidationError> {
  CustomerId::new(value.to_string())
    .map(|_| ())
    .map_err(|_| validation_error("customer_id", CUSTOMER_MESSAGE))
}

fn validate_amount(value: &str) -> Result<(), ValidationError> {
  AmountInCents::parse(value)
    .map(|_| ())
    .map_err(|e| validation_error("amount", amount_message(&e)))
}

fn amount_message(error: &ValueObjectError) -> &'static str {
  match error {
    ValueObjectError::AmountNotANumber(_) => AMOUNT_NOT_A_NUMBER_MESSAGE,
    ValueObjectError::AmountTooLarge(_) => AMOUNT_TOO_LARGE_MESSAGE,
    _ => AMOUNT_MESSAGE,
  }
}

fn validate_status(value: &str) -> Result<(), ValidationError> {
  InvoiceStatus::from_str(value)
    .map(|_| ())
    .map_err(|_| validation_error("status", STATUS_MESSAGE))
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
  let mut error = ValidationError::new(code);
  error.message = Some(Cow::Borrowed(message));
  error
}

/// Name of a field as it appears in the submitted form
fn form_field_name(field: &str) -> &str {
  match field {
    "customer_id" => "customerId",
    other => other,
  }
}

/// Message shown when a field is absent from the submission
fn missing_message(field: &str) -> &'static str {
  match field {
    "customerId" => CUSTOMER_MESSAGE,
    "amount" => AMOUNT_MESSAGE,
    "status" => STATUS_MESSAGE,
    _ => "This field is required.",
  }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
  errors
    .field_errors()
    .into_iter()
    .map(|(field, errors)| {
      let name = form_field_name(&field);
      let messages = errors
        .iter()
        .map(|error| {
          error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| missing_message(name).to_string())
        })
        .collect();
      (name.to_string(), messages)
    })
    .collect()
}

fn single_error(field: &str, message: &str) -> FieldErrors {
  FieldErrors::from([(field.to_string(), vec![message.to_string()])])
}
