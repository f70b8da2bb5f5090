use actix_web::web;
use std::sync::Arc;

use crate::application::invoice::{
  CreateInvoiceUseCase, DeleteInvoiceUseCase, UpdateInvoiceUseCase,
};

use super::handlers::{health, invoices};

/// Use cases the invoice form routes dispatch to
#[derive(Clone)]
pub struct InvoiceRouteDependencies {
  pub create_invoice_use_case: Arc<CreateInvoiceUseCase>,
  pub update_invoice_use_case: Arc<UpdateInvoiceUseCase>,
  pub delete_invoice_use_case: Arc<DeleteInvoiceUseCase>,
}

/// Configure invoice form action routes
///
/// Mounts the create, update and delete actions under the provided scope
/// (e.g., /dashboard/invoices).
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use invoice_desk::adapters::http::{InvoiceRouteDependencies, configure_invoice_routes};
///
/// # fn example(deps: InvoiceRouteDependencies) {
/// let app = App::new().service(
///   web::scope("/dashboard/invoices").configure(|cfg| configure_invoice_routes(cfg, deps)),
/// );
/// # }
/// ```
pub fn configure_invoice_routes(cfg: &mut web::ServiceConfig, deps: InvoiceRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.create_invoice_use_case))
    .app_data(web::Data::new(deps.update_invoice_use_case))
    .app_data(web::Data::new(deps.delete_invoice_use_case))
    .route("/create", web::post().to(invoices::create_invoice_submit))
    .route("/{id}/edit", web::post().to(invoices::update_invoice_submit))
    .route("/{id}/delete", web::post().to(invoices::delete_invoice))
    .route("/{id}", web::delete().to(invoices::delete_invoice));
}

/// Configure operational routes
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
  cfg.route("/health", web::get().to(health::health));
}
