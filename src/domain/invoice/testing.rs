//! In-memory port implementations shared by unit tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use uuid::Uuid;

use super::entities::{Invoice, InvoiceFields, NewInvoice};
use super::errors::InvoiceError;
use super::ports::{InvoiceRepository, PageCache};

#[derive(Default)]
pub struct InMemoryInvoiceRepository {
  invoices: Mutex<Vec<Invoice>>,
  calls: AtomicUsize,
  failing: AtomicBool,
}

impl InMemoryInvoiceRepository {
  pub fn new() -> Self {
    Self::default()
  }

  /// Every subsequent call fails as if the database were unreachable.
  pub fn fail_all(&self) {
    self.failing.store(true, Ordering::SeqCst);
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  pub fn invoices(&self) -> Vec<Invoice> {
    self.invoices.lock().unwrap().clone()
  }

  pub fn insert(&self, invoice: Invoice) {
    self.invoices.lock().unwrap().push(invoice);
  }

  fn enter(&self) -> Result<(), InvoiceError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.failing.load(Ordering::SeqCst) {
      return Err(InvoiceError::Database(sqlx::Error::PoolTimedOut));
    }
    Ok(())
  }
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
    self.enter()?;
    let invoice = Invoice::from_new(Uuid::new_v4(), invoice);
    self.invoices.lock().unwrap().push(invoice.clone());
    Ok(invoice)
  }

  async fn update(&self, id: Uuid, fields: InvoiceFields) -> Result<Invoice, InvoiceError> {
    self.enter()?;
    let mut invoices = self.invoices.lock().unwrap();
    let invoice = invoices
      .iter_mut()
      .find(|i| i.id == id)
      .ok_or(InvoiceError::InvoiceNotFound(id))?;
    invoice.apply(fields);
    Ok(invoice.clone())
  }

  async fn delete(&self, id: Uuid) -> Result<(), InvoiceError> {
    self.enter()?;
    let mut invoices = self.invoices.lock().unwrap();
    let before = invoices.len();
    invoices.retain(|i| i.id != id);
    if invoices.len() == before {
      return Err(InvoiceError::InvoiceNotFound(id));
    }
    Ok(())
  }
}

#[derive(Default)]
pub struct RecordingPageCache {
  revalidated: Mutex<Vec<String>>,
  failing: AtomicBool,
}

impl RecordingPageCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn fail_all(&self) {
    self.failing.store(true, Ordering::SeqCst);
  }

  pub fn revalidated(&self) -> Vec<String> {
    self.revalidated.lock().unwrap().clone()
  }
}

#[async_trait]
impl PageCache for RecordingPageCache {
  async fn revalidate_path(&self, path: &str) -> Result<(), InvoiceError> {
    self.revalidated.lock().unwrap().push(path.to_string());
    if self.failing.load(Ordering::SeqCst) {
      return Err(InvoiceError::Cache("connection refused".to_string()));
    }
    Ok(())
  }
}
