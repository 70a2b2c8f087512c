pub const API_BASE: &str = "https://api.twitter.com/2";
pub const USER_AGENT: &str = "zeke-server/0.1";

pub const REQUEST_TIMEOUT_SECS: u64 = 10;

pub const USER_FIELDS: &str = "profile_image_url,name,username";
pub const TWEET_FIELDS: &str = "created_at,public_metrics,text";
pub const TWEET_EXPANSIONS: &str = "attachments.media_keys";
pub const MEDIA_FIELDS: &str = "url,preview_image_url,type";

pub const OAUTH_NONCE_LENGTH: usize = 32;
