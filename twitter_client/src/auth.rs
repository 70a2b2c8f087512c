use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::{distributions::Alphanumeric, Rng};
use sha1::Sha1;
use url::Url;

use crate::consts::OAUTH_NONCE_LENGTH;

type HmacSha1 = Hmac<Sha1>;

/// The long-lived credential pair used to sign API requests.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

/// Produces the `Authorization` header value for an upstream request.
pub trait Signer: Send + Sync {
    fn authorization(&self, method: &str, url: &Url) -> String;
}

/// OAuth 1.0a request signing with HMAC-SHA1, per RFC 5849.
#[derive(Debug, Clone)]
pub struct OAuth1Signer {
    credentials: Credentials,
}

impl OAuth1Signer {
    pub fn new(credentials: Credentials) -> Self {
        OAuth1Signer { credentials }
    }

    pub(crate) fn header(&self, method: &str, url: &Url, nonce: &str, timestamp: i64) -> String {
        let timestamp = timestamp.to_string();
        let oauth_params = [
            ("oauth_consumer_key", self.credentials.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", self.credentials.access_token.as_str()),
            ("oauth_version", "1.0"),
        ];

        let base = signature_base_string(method, url, &oauth_params);
        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.credentials.consumer_secret),
            percent_encode(&self.credentials.access_secret)
        );
        // HMAC-SHA1 accepts keys of any length.
        let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes()).expect("HMAC key");
        mac.update(base.as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        let mut header_params: Vec<(String, String)> = oauth_params
            .iter()
            .map(|(k, v)| (k.to_string(), percent_encode(v)))
            .collect();
        header_params.push(("oauth_signature".to_string(), percent_encode(&signature)));
        header_params.sort();

        let params = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth {}", params)
    }
}

impl Signer for OAuth1Signer {
    fn authorization(&self, method: &str, url: &Url) -> String {
        self.header(method, url, &nonce(), Utc::now().timestamp())
    }
}

// MARK: Signing primitives

/// The canonical base string signed by OAuth 1.0a: method, base URL without
/// query, and the sorted percent-encoded parameter list (query pairs plus
/// oauth parameters), each component percent-encoded again.
pub(crate) fn signature_base_string(method: &str, url: &Url, oauth_params: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .collect();
    pairs.extend(oauth_params.iter().map(|(k, v)| (percent_encode(k), percent_encode(v))));
    pairs.sort();

    let params = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut base_url = url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(base_url.as_str()),
        percent_encode(&params)
    )
}

/// RFC 3986 percent-encoding: everything except unreserved characters.
pub(crate) fn percent_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

fn nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(OAUTH_NONCE_LENGTH)
        .map(char::from)
        .collect()
}
