pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
#[cfg(test)]
pub(crate) mod testing;
pub mod value_objects;

pub use entities::{Invoice, InvoiceFields, NewInvoice};
pub use errors::InvoiceError;
pub use ports::{InvoiceRepository, PageCache};
pub use services::{INVOICES_LISTING_PATH, InvoiceService};
pub use value_objects::{AmountInCents, CustomerId, InvoiceStatus, ValueObjectError};
