//! HTTP client for the OTP backend. Every call sends exactly one request: no retries,
//! no caching and no timeout beyond what the transport imposes.

use super::{
    endpoint_url,
    types::{IssueOtpRequest, IssueOtpResponse, VerifyOtpRequest, VerifyOtpResponse},
    OtpError, APP_USER_AGENT, LOGIN_PATH, VERIFY_PATH,
};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};
use url::Url;

#[derive(Debug, Clone)]
pub struct OtpClient {
    client: Client,
    base_url: Url,
}

impl OtpClient {
    /// Build a client for the backend at `base_url`.
    ///
    /// # Errors
    /// Returns `OtpError::Config` if the URL can't address the backend or the HTTP
    /// client fails to build.
    pub fn new(base_url: Url) -> Result<Self, OtpError> {
        // fail early on a bad scheme instead of on the first request
        endpoint_url(&base_url, LOGIN_PATH)?;

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|e| OtpError::Config(format!("Error creating reqwest client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Ask the backend to issue an OTP for the draft identity.
    ///
    /// # Errors
    /// Returns `OtpError` on transport failure, non-2xx status or a body without
    /// `otp_for_testing`.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn issue_otp(&self, request: &IssueOtpRequest) -> Result<IssueOtpResponse, OtpError> {
        self.post_json(LOGIN_PATH, request).await
    }

    /// Submit `{username, otp}` for verification.
    ///
    /// # Errors
    /// Returns `OtpError` on transport failure, non-2xx status (invalid or expired
    /// OTP, unknown user) or a body without `message`.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn verify_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<VerifyOtpResponse, OtpError> {
        self.post_json(VERIFY_PATH, request).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, OtpError> {
        let url = endpoint_url(&self.base_url, path)?;

        debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;

        handle_json_response(response).await
    }
}

/// Parse a 2xx JSON body, anything else becomes `OtpError::Http`.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, OtpError> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| OtpError::Parse(format!("Failed to decode response: {e}")))
    } else {
        let body = response.text().await.unwrap_or_else(|e| {
            debug!("Error reading response body: {}", e);
            String::new()
        });

        debug!("{} - {}", status, body);

        Err(OtpError::from_body(status.as_u16(), &body))
    }
}
