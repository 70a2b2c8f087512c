mod config;
mod error;
mod router;
mod state;

use axum::Router;
use chrono::Duration;
use dotenvy::dotenv;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use std::sync::Arc;

use twitter_client::TwitterClient;
use zeke_feed::{CacheStore, FileStore, MemoryStore, RedisStore, TimelineService, TweetSource};

use crate::config::{CacheBackend, Config};
use crate::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Initialize logger
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env()
        .unwrap()
        .add_directive("hyper::proto=info".parse().unwrap())
        .add_directive("hyper::client=info".parse().unwrap())
        .add_directive("reqwest=info".parse().unwrap());
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    // 2. Load configuration
    let config = Config::from_env();
    if config.credentials.is_none() {
        tracing::warn!("Twitter API credentials are not set, /api/tweets will report NotConfigured");
    }

    // 3. Initialize cache store
    let store: Box<dyn CacheStore> = match &config.cache_backend {
        CacheBackend::Memory => Box::new(MemoryStore::new()),
        CacheBackend::File { path } => Box::new(FileStore::new(path.clone())),
        CacheBackend::Redis { url } => Box::new(RedisStore::new(url).expect("cannot open redis cache store")),
    };

    // 4. Initialize Twitter client and timeline service
    let source: Option<Box<dyn TweetSource>> = config.credentials.clone().map(|credentials| {
        let client = TwitterClient::new(credentials).expect("cannot build twitter client");
        Box::new(client) as Box<dyn TweetSource>
    });
    let timeline = TimelineService::new(
        source,
        store,
        config.username.clone(),
        Duration::seconds(config.fresh_ttl_secs as i64),
        Duration::seconds(config.stale_ttl_secs as i64),
    );

    // 5. Setup state and router
    let app_state = AppState {
        timeline: Arc::new(timeline),
    };
    let mut app = Router::new()
        .merge(router::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);
    if let Some(static_dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    // 6. Start server
    tracing::info!("Server starting at {}", config.server_address);
    axum::Server::bind(&config.server_address.parse().unwrap())
        .serve(app.into_make_service())
        .await
        .unwrap();
}
