use std::sync::Arc;

use crate::domain::invoice::InvoiceService;

use super::form::InvoiceForm;
use super::form_state::{ActionOutcome, FormState};

pub const CREATE_VALIDATION_MESSAGE: &str = "Missing Fields. Failed to Create Invoice.";
pub const CREATE_DATABASE_MESSAGE: &str = "Database Error: Failed to Create Invoice.";

#[derive(Debug, Default)]
pub struct CreateInvoiceCommand {
  pub form: InvoiceForm,
  /// State the form was last rendered with
  pub prior_state: FormState,
}

pub struct CreateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: CreateInvoiceCommand) -> ActionOutcome {
    if command.prior_state.has_errors() {
      tracing::debug!(prior = ?command.prior_state, "Resubmitting rejected invoice form");
    }

    let fields = match command.form.parse() {
      Ok(fields) => fields,
      Err(errors) => {
        tracing::debug!(?errors, "Invoice form rejected");
        return ActionOutcome::Rejected(FormState::invalid(errors, CREATE_VALIDATION_MESSAGE));
      }
    };

    match self.invoice_service.create_invoice(fields).await {
      Ok(_) => ActionOutcome::Redirect(self.invoice_service.listing_path().to_string()),
      Err(e) => {
        tracing::error!(error = %e, "Failed to create invoice");
        ActionOutcome::Rejected(FormState::failed(CREATE_DATABASE_MESSAGE))
      }
    }
  }
}
