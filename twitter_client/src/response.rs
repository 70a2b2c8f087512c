use serde::Deserialize;

use crate::result::{MediaItem, Tweet, UserProfile};

// Envelopes of the v2 API. Lookups for a nonexistent user come back 2xx with
// an `errors` array instead of `data`, so `data` is optional everywhere.

#[derive(Deserialize, Debug)]
pub(crate) struct UserLookupResponse {
    pub data: Option<UserProfile>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TimelineResponse {
    pub data: Option<Vec<Tweet>>,
    pub includes: Option<Includes>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct Includes {
    #[serde(default)]
    pub media: Vec<MediaItem>,
}
