mod error;
mod model;
mod service;
mod source;
mod store;

pub use error::{Error, Result};
pub use model::{CacheStatus, CachedTimeline, TimelinePayload};
pub use service::{TimelineService, TimelineSnapshot};
pub use source::TweetSource;
pub use store::{CacheStore, FileStore, MemoryStore, RedisStore};
