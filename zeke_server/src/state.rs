use std::sync::Arc;

use zeke_feed::TimelineService;

#[derive(Clone)]
pub struct AppState {
    /// Cached timeline proxy shared by all requests.
    pub timeline: Arc<TimelineService>,
}
