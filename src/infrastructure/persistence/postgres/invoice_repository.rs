use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::invoice::{
  AmountInCents, CustomerId, Invoice, InvoiceFields, InvoiceStatus, NewInvoice,
  errors::InvoiceError, ports::InvoiceRepository,
};

#[derive(Debug, FromRow)]
struct InvoiceRow {
  id: Uuid,
  customer_id: String,
  amount: i64,
  status: String,
  date: NaiveDate,
}

impl TryFrom<InvoiceRow> for Invoice {
  type Error = InvoiceError;

  fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
    let customer_id = CustomerId::new(row.customer_id)?;
    let status = InvoiceStatus::from_str(&row.status)?;

    Ok(Invoice {
      id: row.id,
      customer_id,
      amount: AmountInCents::from_cents(row.amount),
      status,
      date: row.date,
    })
  }
}

pub struct PostgresInvoiceRepository {
  pool: PgPool,
}

impl PostgresInvoiceRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            INSERT INTO invoices (customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, customer_id, amount, status, date
            "#,
    )
    .bind(invoice.customer_id.value())
    .bind(invoice.amount.value())
    .bind(invoice.status.as_str())
    .bind(invoice.date)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn update(&self, id: Uuid, fields: InvoiceFields) -> Result<Invoice, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            UPDATE invoices
            SET customer_id = $2, amount = $3, status = $4
            WHERE id = $1
            RETURNING id, customer_id, amount, status, date
            "#,
    )
    .bind(id)
    .bind(fields.customer_id.value())
    .bind(fields.amount.value())
    .bind(fields.status.as_str())
    .fetch_optional(&self.pool)
    .await?
    .ok_or(InvoiceError::InvoiceNotFound(id))?;

    row.try_into()
  }

  async fn delete(&self, id: Uuid) -> Result<(), InvoiceError> {
    let result = sqlx::query(
      r#"
            DELETE FROM invoices
            WHERE id = $1
            "#,
    )
    .bind(id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(InvoiceError::InvoiceNotFound(id));
    }

    Ok(())
  }
}
