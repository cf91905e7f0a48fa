use crate::{
    cli::{
        actions::{enter_identity, IdentityArgs},
        globals::GlobalArgs,
    },
    form::{LoginController, StdoutNotifier},
    otp::OtpClient,
};
use anyhow::{Context, Result};

#[derive(Debug, Default)]
pub struct Args {
    pub identity: IdentityArgs,
}

/// Handle the identity step only
/// # Errors
/// Returns an error if the backend call fails or a prompt is aborted.
pub async fn execute(globals: &GlobalArgs, args: Args) -> Result<()> {
    let client = OtpClient::new(globals.backend_url.clone())?;
    let mut form = LoginController::new(client, StdoutNotifier);

    enter_identity(&mut form, args.identity)?;

    form.request_otp().await.context("failed to request OTP")?;

    Ok(())
}
