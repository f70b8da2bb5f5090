use actix_web::{HttpRequest, HttpResponse, http::header, web};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::errors::ApiError;
use crate::application::invoice::{
  ActionOutcome, CreateInvoiceCommand, CreateInvoiceUseCase, DeleteInvoiceCommand,
  DeleteInvoiceUseCase, FormState, InvoiceForm, UpdateInvoiceCommand, UpdateInvoiceUseCase,
};

/// Submissions made by htmx expect the redirect in a header, not a 3xx
fn is_htmx(req: &HttpRequest) -> bool {
  req
    .headers()
    .get("HX-Request")
    .and_then(|v| v.to_str().ok())
    .is_some_and(|v| v == "true")
}

fn redirect(req: &HttpRequest, location: &str) -> HttpResponse {
  if is_htmx(req) {
    HttpResponse::Ok()
      .insert_header(("HX-Redirect", location))
      .finish()
  } else {
    HttpResponse::SeeOther()
      .insert_header((header::LOCATION, location))
      .finish()
  }
}

fn respond(req: &HttpRequest, outcome: ActionOutcome) -> HttpResponse {
  match outcome {
    ActionOutcome::Redirect(location) => redirect(req, &location),
    ActionOutcome::Rejected(state) => HttpResponse::UnprocessableEntity().json(state),
  }
}

/// Create form submission; a re-rendered form echoes its summary message
/// back in the hidden `priorMessage` field
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceSubmission {
  #[serde(flatten)]
  pub form: InvoiceForm,
  #[serde(rename = "priorMessage", default)]
  pub prior_message: Option<String>,
}

impl CreateInvoiceSubmission {
  pub fn into_command(self) -> CreateInvoiceCommand {
    let prior_state = match self.prior_message.filter(|m| !m.trim().is_empty()) {
      Some(message) => FormState::failed(&message),
      None => FormState::default(),
    };

    CreateInvoiceCommand {
      form: self.form,
      prior_state,
    }
  }
}

// POST /dashboard/invoices/create - Create a new invoice
pub async fn create_invoice_submit(
  req: HttpRequest,
  submission: web::Form<CreateInvoiceSubmission>,
  create_invoice_use_case: web::Data<Arc<CreateInvoiceUseCase>>,
) -> HttpResponse {
  let outcome = create_invoice_use_case
    .execute(submission.into_inner().into_command())
    .await;

  respond(&req, outcome)
}

// POST /dashboard/invoices/{id}/edit - Update an invoice
pub async fn update_invoice_submit(
  req: HttpRequest,
  path: web::Path<Uuid>,
  form: web::Form<InvoiceForm>,
  update_invoice_use_case: web::Data<Arc<UpdateInvoiceUseCase>>,
) -> HttpResponse {
  let outcome = update_invoice_use_case
    .execute(UpdateInvoiceCommand {
      invoice_id: path.into_inner(),
      form: form.into_inner(),
    })
    .await;

  respond(&req, outcome)
}

// DELETE /dashboard/invoices/{id} and POST /dashboard/invoices/{id}/delete
pub async fn delete_invoice(
  path: web::Path<Uuid>,
  delete_invoice_use_case: web::Data<Arc<DeleteInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = delete_invoice_use_case
    .execute(DeleteInvoiceCommand {
      invoice_id: path.into_inner(),
    })
    .await?;

  Ok(HttpResponse::Ok().json(response))
}
