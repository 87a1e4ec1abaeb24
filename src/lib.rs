//! Local Cache - a bounded in-memory cache with TTL expiration and LRU
//! eviction.
//!
//! The cache is an explicit instance with an explicit lifecycle: build a
//! [`Config`], call [`LocalCache::start`] once at process startup, share the
//! handle with consumers, and call [`LocalCache::shutdown`] on the way out to
//! stop the background reaper.
//!
//! ```no_run
//! use local_cache::{Config, LocalCache};
//!
//! #[tokio::main]
//! async fn main() -> local_cache::Result<()> {
//!     let cache: LocalCache<String> = LocalCache::start(Config::default())?;
//!
//!     cache.set("user:42", "Ada".to_string()).await;
//!     cache.set_with_ttl("session:42", "token".to_string(), 30).await?;
//!
//!     assert_eq!(cache.get("user:42").await, Some("Ada".to_string()));
//!
//!     cache.shutdown().await;
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{BoundedStore, CacheEntry, CacheStats, LocalCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_reaper;
