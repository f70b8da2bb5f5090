use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService};

pub const DELETE_SUCCESS_MESSAGE: &str = "Deleted Invoice.";

#[derive(Debug, Deserialize)]
pub struct DeleteInvoiceCommand {
  pub invoice_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DeleteInvoiceResponse {
  pub message: String,
}

pub struct DeleteInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl DeleteInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  /// Storage failures, including a missing invoice, are returned to the caller.
  pub async fn execute(
    &self,
    command: DeleteInvoiceCommand,
  ) -> Result<DeleteInvoiceResponse, InvoiceError> {
    self
      .invoice_service
      .delete_invoice(command.invoice_id)
      .await
      .inspect_err(|e| {
        tracing::error!(invoice_id = %command.invoice_id, error = %e, "Failed to delete invoice");
      })?;

    Ok(DeleteInvoiceResponse {
      message: DELETE_SUCCESS_MESSAGE.to_string(),
    })
  }
}
