//! Prints the configuration the server would start with
//!
//! Run with: cargo run --example config_usage
//!
//! To override configuration with environment variables:
//! ```bash
//! INVOICE_DESK_SERVER__PORT=3000 \
//! INVOICE_DESK_CACHE__KEY_PREFIX=html: \
//! cargo run --example config_usage
//! ```

use invoice_desk::infrastructure::config::Config;

fn main() {
  match Config::load() {
    Ok(config) => {
      println!("Configuration loaded successfully!");
      println!();
      println!("Server:");
      println!("  Host: {}", config.server.host);
      println!("  Port: {}", config.server.port);
      println!();
      println!("Database:");
      println!("  URL: {}", config.database.url);
      println!("  Max Connections: {}", config.database.max_connections);
      println!(
        "  Connect Timeout: {} seconds",
        config.database.connect_timeout_seconds
      );
      println!();
      match &config.redis {
        Some(redis) => {
          println!("Redis:");
          println!("  URL: {}", redis.url);
        }
        None => println!("Redis: not configured, page invalidations are only logged"),
      }
      println!();
      println!("Page cache:");
      println!("  Listing Path: {}", config.cache.listing_path);
      println!("  Key Prefix: {}", config.cache.key_prefix);
    }
    Err(e) => {
      eprintln!("Failed to load configuration: {}", e);
      std::process::exit(1);
    }
  }
}
