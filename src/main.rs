use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoice_desk::{
  adapters::http::{
    InvoiceRouteDependencies, RequestIdMiddleware, configure_health_routes,
    configure_invoice_routes,
  },
  application::invoice::{CreateInvoiceUseCase, DeleteInvoiceUseCase, UpdateInvoiceUseCase},
  domain::invoice::{InvoiceService, PageCache},
  infrastructure::{
    cache::{NoOpPageCache, RedisPageCache},
    config::{Config, RedisConfig},
    persistence::postgres::PostgresInvoiceRepository,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "invoice_desk=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting invoice-desk");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;
  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  let page_cache: Arc<dyn PageCache> = match &config.redis {
    Some(redis_config) => Arc::new(RedisPageCache::new(
      connect_redis(redis_config).await?,
      config.cache.key_prefix.clone(),
    )),
    None => {
      tracing::warn!("Redis not configured; page revalidation will only be logged");
      Arc::new(NoOpPageCache::new())
    }
  };

  // Initialize domain service and use cases
  let invoice_repo = Arc::new(PostgresInvoiceRepository::new(db_pool.clone()));
  let invoice_service = Arc::new(InvoiceService::new(
    invoice_repo,
    page_cache,
    config.cache.listing_path.clone(),
  ));

  let invoice_routes = InvoiceRouteDependencies {
    create_invoice_use_case: Arc::new(CreateInvoiceUseCase::new(invoice_service.clone())),
    update_invoice_use_case: Arc::new(UpdateInvoiceUseCase::new(invoice_service.clone())),
    delete_invoice_use_case: Arc::new(DeleteInvoiceUseCase::new(invoice_service)),
  };

  let bind_address = format!("{}:{}", config.server.host, config.server.port);
  tracing::info!("Starting HTTP server on {}", bind_address);

  HttpServer::new(move || {
    let invoice_routes = invoice_routes.clone();
    App::new()
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .configure(configure_health_routes)
      .service(
        web::scope("/dashboard/invoices")
          .configure(|cfg| configure_invoice_routes(cfg, invoice_routes)),
      )
  })
  .bind(&bind_address)?
  .run()
  .await
}

async fn connect_redis(
  redis_config: &RedisConfig,
) -> std::io::Result<redis::aio::ConnectionManager> {
  tracing::info!("Connecting to Redis: {}", redis_config.url);

  let redis_client = redis::Client::open(redis_config.url.clone()).map_err(|e| {
    tracing::error!("Failed to create Redis client: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("Invalid Redis URL: {}", e),
    )
  })?;

  let redis_conn = tokio::time::timeout(
    Duration::from_secs(redis_config.connect_timeout_seconds),
    redis_client.get_connection_manager(),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Redis connection timed out after {} seconds. Is Redis running?",
      redis_config.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Redis connection timed out after {} seconds",
        redis_config.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to Redis: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::ConnectionRefused,
      format!("Could not connect to Redis at {}", redis_config.url),
    )
  })?;

  tracing::info!("Redis connection established");
  Ok(redis_conn)
}
