use crate::{
    cli::{globals::GlobalArgs, prompt::text_prompt_when_none},
    form::{Notifier, StdoutNotifier},
    otp::{
        types::{Field, VerifyOtpRequest},
        OtpClient,
    },
};
use anyhow::{Context, Result};
use secrecy::SecretString;

#[derive(Debug, Default)]
pub struct Args {
    pub username: Option<String>,
    pub otp: Option<String>,
}

/// Handle the verification step for an OTP issued earlier, e.g. by `request`
/// # Errors
/// Returns an error if the backend call fails or a prompt is aborted.
pub async fn execute(globals: &GlobalArgs, args: Args) -> Result<()> {
    let client = OtpClient::new(globals.backend_url.clone())?;

    let request = VerifyOtpRequest {
        username: text_prompt_when_none(Field::Username.label(), args.username)?,
        otp: SecretString::from(text_prompt_when_none(Field::Otp.label(), args.otp)?),
    };

    let response = client
        .verify_otp(&request)
        .await
        .context("failed to verify OTP")?;

    StdoutNotifier.notify(&response.message);

    Ok(())
}
