//! Typed boundary to the OTP backend.

pub mod client;
pub mod error;
pub mod types;

pub use self::client::OtpClient;
pub use self::error::OtpError;

use tracing::{debug, instrument};
use url::Url;

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Backend used when no `--url` is given.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

pub const LOGIN_PATH: &str = "/login";
pub const VERIFY_PATH: &str = "/verify";

/// Join an endpoint path onto the backend base URL.
///
/// Any path prefix on the base is kept, so `http://host/api` + `/login` gives
/// `http://host/api/login`. Query and fragment are dropped.
///
/// # Errors
/// Returns `OtpError::Config` if the scheme is not http(s) or the URL has no host.
#[instrument]
pub fn endpoint_url(base: &Url, endpoint: &str) -> Result<Url, OtpError> {
    let scheme = base.scheme();

    if scheme != "http" && scheme != "https" {
        return Err(OtpError::Config(format!(
            "Error parsing URL: unsupported scheme {scheme}"
        )));
    }

    if base.host().is_none() {
        return Err(OtpError::Config(
            "Error parsing URL: no host specified".to_string(),
        ));
    }

    let path = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );

    let mut url = base.clone();
    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);

    debug!("endpoint URL: {}", url);

    Ok(url)
}
