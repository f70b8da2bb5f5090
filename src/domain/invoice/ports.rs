use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Invoice, InvoiceFields, NewInvoice};
use super::errors::InvoiceError;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  /// Inserts the invoice and returns the stored row, id included.
  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError>;
  /// Returns `InvoiceNotFound` when no row has the given id.
  async fn update(&self, id: Uuid, fields: InvoiceFields) -> Result<Invoice, InvoiceError>;
  /// Returns `InvoiceNotFound` when nothing was deleted.
  async fn delete(&self, id: Uuid) -> Result<(), InvoiceError>;
}

/// Cached page renderings, keyed by request path.
#[async_trait]
pub trait PageCache: Send + Sync {
  /// Marks every cached rendering of `path` as stale.
  async fn revalidate_path(&self, path: &str) -> Result<(), InvoiceError>;
}
