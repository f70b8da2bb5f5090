use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::InvoiceService;

use super::form::InvoiceForm;
use super::form_state::{ActionOutcome, FormState};

pub const UPDATE_VALIDATION_MESSAGE: &str = "Missing Fields. Failed to Update Invoice.";
pub const UPDATE_DATABASE_MESSAGE: &str = "Database Error: Failed to Update Invoice.";

#[derive(Debug)]
pub struct UpdateInvoiceCommand {
  pub invoice_id: Uuid,
  pub form: InvoiceForm,
}

pub struct UpdateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl UpdateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: UpdateInvoiceCommand) -> ActionOutcome {
    let fields = match command.form.parse() {
      Ok(fields) => fields,
      Err(errors) => {
        tracing::debug!(invoice_id = %command.invoice_id, ?errors, "Invoice form rejected");
        return ActionOutcome::Rejected(FormState::invalid(errors, UPDATE_VALIDATION_MESSAGE));
      }
    };

    match self
      .invoice_service
      .update_invoice(command.invoice_id, fields)
      .await
    {
      Ok(_) => ActionOutcome::Redirect(self.invoice_service.listing_path().to_string()),
      Err(e) => {
        tracing::error!(invoice_id = %command.invoice_id, error = %e, "Failed to update invoice");
        ActionOutcome::Rejected(FormState::failed(UPDATE_DATABASE_MESSAGE))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::invoice::form::{CUSTOMER_MESSAGE, STATUS_MESSAGE};
  use crate::domain::invoice::testing::{InMemoryInvoiceRepository, RecordingPageCache};
  use crate::domain::invoice::{
    AmountInCents, CustomerId, INVOICES_LISTING_PATH, Invoice, InvoiceStatus, NewInvoice,
  };
  use chrono::NaiveDate;

  fn setup() -> (
    Arc<InMemoryInvoiceRepository>,
    Arc<RecordingPageCache>,
    UpdateInvoiceUseCase,
  ) {
    let repo = Arc::new(InMemoryInvoiceRepository::new());
    let cache = Arc::new(RecordingPageCache::new());
    let service = Arc::new(InvoiceService::new(
      repo.clone(),
      cache.clone(),
      INVOICES_LISTING_PATH,
    ));
    (repo, cache, UpdateInvoiceUseCase::new(service))
  }

  fn existing_invoice() -> Invoice {
    Invoice::from_new(
      Uuid::new_v4(),
      NewInvoice {
        customer_id: CustomerId::new("c1".to_string()).unwrap(),
        amount: AmountInCents::from_cents(1500),
        status: InvoiceStatus::Pending,
        date: NaiveDate::from_ymd_opt(2023, 11, 14).unwrap(),
      },
    )
  }

  fn form(customer_id: &str, amount: &str, status: &str) -> InvoiceForm {
    InvoiceForm {
      customer_id: Some(customer_id.to_string()),
      amount: Some(amount.to_string()),
      status: Some(status.to_string()),
    }
  }

  #[tokio::test]
  async fn test_update_changes_amount_and_keeps_id_and_date() {
    let (repo, cache, use_case) = setup();
    let invoice = existing_invoice();
    repo.insert(invoice.clone());

    let outcome = use_case
      .execute(UpdateInvoiceCommand {
        invoice_id: invoice.id,
        form: form("c1", "20.50", "pending"),
      })
      .await;

    assert_eq!(
      outcome,
      ActionOutcome::Redirect(INVOICES_LISTING_PATH.to_string())
    );
    let stored = &repo.invoices()[0];
    assert_eq!(stored.id, invoice.id);
    assert_eq!(stored.date, invoice.date);
    assert_eq!(stored.amount.value(), 2050);
    assert_eq!(cache.revalidated(), vec![INVOICES_LISTING_PATH.to_string()]);
  }

  #[tokio::test]
  async fn test_invalid_form_leaves_invoice_untouched() {
    let (repo, cache, use_case) = setup();
    let invoice = existing_invoice();
    repo.insert(invoice.clone());

    let outcome = use_case
      .execute(UpdateInvoiceCommand {
        invoice_id: invoice.id,
        form: form("", "20.50", "void"),
      })
      .await;

    let ActionOutcome::Rejected(state) = outcome else {
      panic!("expected a rejected form");
    };
    assert_eq!(state.message.as_deref(), Some(UPDATE_VALIDATION_MESSAGE));
    assert_eq!(state.errors["customerId"], vec![CUSTOMER_MESSAGE.to_string()]);
    assert_eq!(state.errors["status"], vec![STATUS_MESSAGE.to_string()]);
    assert_eq!(repo.calls(), 0);
    assert_eq!(repo.invoices(), vec![invoice]);
    assert!(cache.revalidated().is_empty());
  }

  #[tokio::test]
  async fn test_unknown_invoice_reports_database_error() {
    let (_repo, cache, use_case) = setup();

    let outcome = use_case
      .execute(UpdateInvoiceCommand {
        invoice_id: Uuid::new_v4(),
        form: form("c1", "20.50", "paid"),
      })
      .await;

    assert_eq!(
      outcome,
      ActionOutcome::Rejected(FormState::failed(UPDATE_DATABASE_MESSAGE))
    );
    assert!(cache.revalidated().is_empty());
  }
}
