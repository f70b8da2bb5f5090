use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{AmountInCents, CustomerId, InvoiceStatus};

/// The fields a form submission is allowed to set.
///
/// The id is assigned by storage and the date is stamped once at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceFields {
  pub customer_id: CustomerId,
  pub amount: AmountInCents,
  pub status: InvoiceStatus,
}

// NewInvoice - not yet persisted, no id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvoice {
  pub customer_id: CustomerId,
  pub amount: AmountInCents,
  pub status: InvoiceStatus,
  pub date: NaiveDate,
}

impl NewInvoice {
  pub fn new(fields: InvoiceFields, date: NaiveDate) -> Self {
    Self {
      customer_id: fields.customer_id,
      amount: fields.amount,
      status: fields.status,
      date,
    }
  }
}

// Invoice - persisted row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
  pub id: Uuid,
  pub customer_id: CustomerId,
  pub amount: AmountInCents,
  pub status: InvoiceStatus,
  pub date: NaiveDate,
}

impl Invoice {
  pub fn from_new(id: Uuid, invoice: NewInvoice) -> Self {
    Self {
      id,
      customer_id: invoice.customer_id,
      amount: invoice.amount,
      status: invoice.status,
      date: invoice.date,
    }
  }

  /// Overwrites the mutable fields, leaving id and date untouched.
  pub fn apply(&mut self, fields: InvoiceFields) {
    self.customer_id = fields.customer_id;
    self.amount = fields.amount;
    self.status = fields.status;
  }
}
