pub mod create_invoice;
pub mod delete_invoice;
pub mod form;
pub mod form_state;
pub mod update_invoice;

pub use create_invoice::{
  CREATE_DATABASE_MESSAGE, CREATE_VALIDATION_MESSAGE, CreateInvoiceCommand, CreateInvoiceUseCase,
};
pub use delete_invoice::{
  DELETE_SUCCESS_MESSAGE, DeleteInvoiceCommand, DeleteInvoiceResponse, DeleteInvoiceUseCase,
};
pub use form::{FieldErrors, InvoiceForm};
pub use form_state::{ActionOutcome, FormState};
pub use update_invoice::{
  UPDATE_DATABASE_MESSAGE, UPDATE_VALIDATION_MESSAGE, UpdateInvoiceCommand, UpdateInvoiceUseCase,
};
