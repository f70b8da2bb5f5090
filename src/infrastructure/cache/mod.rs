mod noop_page_cache;
mod redis_page_cache;

pub use noop_page_cache::NoOpPageCache;
pub use redis_page_cache::RedisPageCache;
