use chrono::{Local, NaiveDate};
use std::sync::Arc;
use uuid::Uuid;

use super::entities::{Invoice, InvoiceFields, NewInvoice};
use super::errors::InvoiceError;
use super::ports::{InvoiceRepository, PageCache};

/// Path of the invoice listing page, invalidated after every write
pub const INVOICES_LISTING_PATH: &str = "/dashboard/invoices";

pub struct InvoiceService {
  invoice_repo: Arc<dyn InvoiceRepository>,
  page_cache: Arc<dyn PageCache>,
  listing_path: String,
}

impl InvoiceService {
  pub fn new(
    invoice_repo: Arc<dyn InvoiceRepository>,
    page_cache: Arc<dyn PageCache>,
    listing_path: impl Into<String>,
  ) -> Self {
    Self {
      invoice_repo,
      page_cache,
      listing_path: listing_path.into(),
    }
  }

  pub fn listing_path(&self) -> &str {
    &self.listing_path
  }

  /// Stores a new invoice dated today (server local time).
  pub async fn create_invoice(&self, fields: InvoiceFields) -> Result<Invoice, InvoiceError> {
    let invoice = NewInvoice::new(fields, today());
    let created = self.invoice_repo.create(invoice).await?;

    tracing::info!(
      invoice_id = %created.id,
      customer_id = %created.customer_id,
      amount = created.amount.value(),
      status = %created.status,
      date = %created.date,
      "Invoice created"
    );

    self.revalidate_listing().await;
    Ok(created)
  }

  pub async fn update_invoice(
    &self,
    id: Uuid,
    fields: InvoiceFields,
  ) -> Result<Invoice, InvoiceError> {
    let updated = self.invoice_repo.update(id, fields).await?;

    tracing::info!(
      invoice_id = %updated.id,
      customer_id = %updated.customer_id,
      amount = updated.amount.value(),
      status = %updated.status,
      "Invoice updated"
    );

    self.revalidate_listing().await;
    Ok(updated)
  }

  pub async fn delete_invoice(&self, id: Uuid) -> Result<(), InvoiceError> {
    self.invoice_repo.delete(id).await?;

    tracing::info!(invoice_id = %id, "Invoice deleted");

    self.revalidate_listing().await;
    Ok(())
  }

  // Cache failures are logged, never returned.
  async fn revalidate_listing(&self) {
    if let Err(e) = self.page_cache.revalidate_path(&self.listing_path).await {
      tracing::warn!(
        path = %self.listing_path,
        error = %e,
        "Failed to revalidate cached page"
      );
    }
  }
}

fn today() -> NaiveDate {
  Local::now().date_naive()
}
