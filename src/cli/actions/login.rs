use crate::{
    cli::{
        actions::{enter_identity, IdentityArgs},
        globals::GlobalArgs,
        prompt::text_prompt_when_none,
    },
    form::{LoginController, StdoutNotifier},
    otp::{types::Field, OtpClient},
};
use anyhow::{Context, Result};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Args {
    pub identity: IdentityArgs,
    pub otp: Option<String>,
}

/// Handle the full two-step login
/// # Errors
/// Returns an error if either backend call fails or a prompt is aborted.
pub async fn execute(globals: &GlobalArgs, args: Args) -> Result<()> {
    let client = OtpClient::new(globals.backend_url.clone())?;
    let mut form = LoginController::new(client, StdoutNotifier);

    enter_identity(&mut form, args.identity)?;

    form.request_otp().await.context("failed to request OTP")?;

    debug!("step {}", form.step().number());

    let otp = text_prompt_when_none(Field::Otp.label(), args.otp)?;
    form.input(Field::Otp, otp);

    form.verify_otp().await.context("failed to verify OTP")?;

    Ok(())
}
