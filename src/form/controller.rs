use super::{update, Command, Event, FormState, Notifier, Step};
use crate::otp::{
    types::{Field, IssueOtpResponse, VerifyOtpResponse},
    OtpClient, OtpError,
};
use tracing::{info, instrument};

/// Drives a [`FormState`] against the backend.
///
/// The controller owns the draft for its whole lifetime. Each operation feeds the
/// press and then its result through [`update`], carrying out whatever command
/// comes back.
#[derive(Debug)]
pub struct LoginController<N> {
    client: OtpClient,
    notifier: N,
    state: FormState,
}

impl<N: Notifier> LoginController<N> {
    #[must_use]
    pub fn new(client: OtpClient, notifier: N) -> Self {
        Self {
            client,
            notifier,
            state: FormState::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.state.step
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Type into a field. Fields not on the current screen are ignored.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.apply(Event::Input(field, value.into()));
    }

    /// Press "Generate OTP".
    ///
    /// On success the issued OTP is surfaced as `OTP: <value>` and the form moves to
    /// OTP entry. On failure nothing is surfaced and the form stays on identity entry.
    ///
    /// # Errors
    /// Returns the backend error, or `OtpError::OutOfStep` once the form is past step 1.
    #[instrument(skip(self))]
    pub async fn request_otp(&mut self) -> Result<IssueOtpResponse, OtpError> {
        let Some(Command::IssueOtp(request)) = self.apply(Event::OtpRequested) else {
            return Err(OtpError::OutOfStep("Generate OTP"));
        };

        let result = self.client.issue_otp(&request).await;

        self.apply(Event::OtpIssued(result.clone()));

        if result.is_ok() {
            info!("OTP issued, waiting for verification");
        }

        result
    }

    /// Press "Verify OTP" with the OTP typed so far.
    ///
    /// The username sent is the one captured on the identity screen. The step does not
    /// change whatever the outcome.
    ///
    /// # Errors
    /// Returns the backend error, or `OtpError::OutOfStep` before an OTP was issued.
    #[instrument(skip(self))]
    pub async fn verify_otp(&mut self) -> Result<VerifyOtpResponse, OtpError> {
        let Some(Command::VerifyOtp(request)) = self.apply(Event::VerifyRequested) else {
            return Err(OtpError::OutOfStep("Verify OTP"));
        };

        let result = self.client.verify_otp(&request).await;

        self.apply(Event::Verified(result.clone()));

        result
    }

    fn apply(&mut self, event: Event) -> Option<Command> {
        let (state, command) = update(std::mem::take(&mut self.state), event);
        self.state = state;

        match command {
            Some(Command::Notify(message)) => {
                self.notifier.notify(&message);
                None
            }
            command => command,
        }
    }
}
