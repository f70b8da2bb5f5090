use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::ports::PageCache;

/// Page cache whose rendered pages live in Redis under `{prefix}{path}`
pub struct RedisPageCache {
  redis: ConnectionManager,
  key_prefix: String,
}

impl RedisPageCache {
  pub fn new(redis: ConnectionManager, key_prefix: impl Into<String>) -> Self {
    Self {
      redis,
      key_prefix: key_prefix.into(),
    }
  }
}

#[async_trait]
impl PageCache for RedisPageCache {
  async fn revalidate_path(&self, path: &str) -> Result<(), InvoiceError> {
    let key = cache_key(&self.key_prefix, path);
    let mut conn = self.redis.clone();

    let removed: i64 = conn.del(&key).await.map_err(|e| {
      tracing::error!("Failed to revalidate page {}: {}", path, e);
      InvoiceError::Cache(e.to_string())
    })?;

    tracing::debug!(path, key = %key, removed, "Revalidated cached page");
    Ok(())
  }
}

pub(crate) fn cache_key(prefix: &str, path: &str) -> String {
  let path = path.trim_end_matches('/');
  if path.is_empty() {
    format!("{}/", prefix)
  } else {
    format!("{}{}", prefix, path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_cache_key() {
    assert_eq!(
      cache_key("page:", "/dashboard/invoices"),
      "page:/dashboard/invoices"
    );
    assert_eq!(
      cache_key("page:", "/dashboard/invoices/"),
      "page:/dashboard/invoices"
    );
    assert_eq!(cache_key("page:", "/"), "page:/");
    assert_eq!(cache_key("", "/dashboard"), "/dashboard");
  }
}
