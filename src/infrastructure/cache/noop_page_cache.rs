use async_trait::async_trait;

use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::ports::PageCache;

/// Page cache used when Redis is not configured; nothing is cached, so
/// revalidation is only logged
pub struct NoOpPageCache;

impl NoOpPageCache {
  pub fn new() -> Self {
    Self
  }
}

impl Default for NoOpPageCache {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl PageCache for NoOpPageCache {
  async fn revalidate_path(&self, path: &str) -> Result<(), InvoiceError> {
    tracing::debug!("NoOpPageCache: Skipping revalidation of {} (no page cache configured)", path);
    Ok(())
  }
}
