use actix_web::HttpResponse;

use crate::adapters::http::dtos::HealthResponse;

// GET /health - Liveness probe
pub async fn health() -> HttpResponse {
  HttpResponse::Ok().json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{App, http::StatusCode, test, web};

  #[actix_web::test]
  async fn test_health() {
    let app = test::init_service(App::new().route("/health", web::get().to(health))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: HealthResponse = test::read_body_json(resp).await;
    assert_eq!(body.status, "ok");
  }
}
