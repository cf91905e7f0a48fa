//! Login form state machine.
//!
//! The form is a [`FormState`] value that only changes through [`update`]. Each call
//! consumes the current state plus one [`Event`] and returns the next state and,
//! at most, one [`Command`] for the caller to carry out. Steps only move forward:
//!
//! ```text
//! EnterIdentity -> AwaitingOtpResponse -> EnterOtp
//! ```
//!
//! A failed OTP request drops `AwaitingOtpResponse` back to `EnterIdentity`, so the
//! view stays on step 1. Nothing leaves `EnterOtp`.

pub mod controller;
pub mod notify;

pub use self::controller::LoginController;
pub use self::notify::{Notifier, StdoutNotifier};

use crate::otp::{
    types::{
        CredentialDraft, Field, IssueOtpRequest, IssueOtpResponse, VerifyOtpRequest,
        VerifyOtpResponse,
    },
    OtpError,
};
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    EnterIdentity,
    AwaitingOtpResponse,
    EnterOtp,
}

impl Step {
    /// Screen number shown to the user: identity entry is 1, OTP entry is 2.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::EnterIdentity | Self::AwaitingOtpResponse => 1,
            Self::EnterOtp => 2,
        }
    }

    /// Whether `field` is on the screen for this step.
    #[must_use]
    pub const fn accepts(self, field: Field) -> bool {
        match self {
            Self::EnterIdentity | Self::AwaitingOtpResponse => !matches!(field, Field::Otp),
            Self::EnterOtp => matches!(field, Field::Otp),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub step: Step,
    pub draft: CredentialDraft,
}

#[derive(Debug, Clone)]
pub enum Event {
    Input(Field, String),
    /// "Generate OTP" pressed.
    OtpRequested,
    OtpIssued(Result<IssueOtpResponse, OtpError>),
    /// "Verify OTP" pressed.
    VerifyRequested,
    Verified(Result<VerifyOtpResponse, OtpError>),
}

/// Side effects requested by [`update`].
#[derive(Debug, Clone)]
pub enum Command {
    IssueOtp(IssueOtpRequest),
    VerifyOtp(VerifyOtpRequest),
    Notify(String),
}

/// Apply one event to the form.
#[must_use]
pub fn update(state: FormState, event: Event) -> (FormState, Option<Command>) {
    let FormState { step, mut draft } = state;

    match event {
        Event::Input(field, value) => {
            if step.accepts(field) {
                draft.set(field, value);
            } else {
                debug!(?field, ?step, "ignoring input for a field not on screen");
            }
            (FormState { step, draft }, None)
        }

        // repeated presses while waiting are not deduplicated
        Event::OtpRequested if step != Step::EnterOtp => {
            let request = IssueOtpRequest::from(&draft);
            (
                FormState {
                    step: Step::AwaitingOtpResponse,
                    draft,
                },
                Some(Command::IssueOtp(request)),
            )
        }

        Event::OtpIssued(Ok(response)) => (
            FormState {
                step: Step::EnterOtp,
                draft,
            },
            Some(Command::Notify(format!("OTP: {}", response.otp_for_testing))),
        ),

        Event::OtpIssued(Err(err)) => {
            error!("Error requesting OTP: {}", err);
            let step = if step == Step::AwaitingOtpResponse {
                Step::EnterIdentity
            } else {
                step
            };
            (FormState { step, draft }, None)
        }

        Event::VerifyRequested if step == Step::EnterOtp => {
            let request = VerifyOtpRequest::from(&draft);
            (FormState { step, draft }, Some(Command::VerifyOtp(request)))
        }

        Event::Verified(Ok(response)) => {
            (FormState { step, draft }, Some(Command::Notify(response.message)))
        }

        Event::Verified(Err(err)) => {
            error!("Error verifying OTP: {}", err);
            (FormState { step, draft }, None)
        }

        Event::OtpRequested | Event::VerifyRequested => {
            debug!(?step, "ignoring button not on screen");
            (FormState { step, draft }, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn apply(state: FormState, events: Vec<Event>) -> (FormState, Vec<Command>) {
        events
            .into_iter()
            .fold((state, Vec::new()), |(state, mut commands), event| {
                let (state, command) = update(state, event);
                commands.extend(command);
                (state, commands)
            })
    }

    fn issued(otp: &str) -> Event {
        Event::OtpIssued(Ok(IssueOtpResponse {
            message: None,
            otp_for_testing: otp.to_string(),
        }))
    }

    fn identity(username: &str) -> Vec<Event> {
        vec![
            Event::Input(Field::Username, username.to_string()),
            Event::Input(Field::FirstName, "A".to_string()),
            Event::Input(Field::SecondName, "B".to_string()),
            Event::Input(Field::Gender, "F".to_string()),
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = FormState::default();
        assert_eq!(state.step, Step::EnterIdentity);
        assert_eq!(state.step.number(), 1);
        assert_eq!(state.draft.username, "");
    }

    #[test]
    fn test_request_waits_for_response() {
        let mut events = identity("alice");
        events.push(Event::OtpRequested);
        let (state, commands) = apply(FormState::default(), events);

        assert_eq!(state.step, Step::AwaitingOtpResponse);
        assert_eq!(state.step.number(), 1);
        assert_eq!(commands.len(), 1);
        let Command::IssueOtp(request) = &commands[0] else {
            panic!("expected IssueOtp, got {commands:?}");
        };
        assert_eq!(request.username, "alice");
        assert_eq!(request.first_name, "A");
        assert_eq!(request.second_name, "B");
        assert_eq!(request.gender, "F");
        assert_eq!(request.otp.expose_secret(), "");

        let (state, command) = update(state, issued("123456"));
        assert_eq!(state.step, Step::EnterOtp);
        assert!(matches!(command, Some(Command::Notify(ref m)) if m == "OTP: 123456"));
    }

    #[test]
    fn test_empty_fields_forwarded() {
        let (_, commands) = apply(FormState::default(), vec![Event::OtpRequested]);
        let [Command::IssueOtp(request)] = commands.as_slice() else {
            panic!("expected one IssueOtp, got {commands:?}");
        };
        assert_eq!(request.username, "");
        assert_eq!(request.gender, "");
    }

    #[test]
    fn test_repeated_requests_not_deduplicated() {
        let (state, commands) = apply(
            FormState::default(),
            vec![Event::OtpRequested, Event::OtpRequested, Event::OtpRequested],
        );
        assert_eq!(state.step, Step::AwaitingOtpResponse);
        assert_eq!(commands.len(), 3);
        assert!(commands.iter().all(|c| matches!(c, Command::IssueOtp(_))));
    }

    #[test]
    fn test_failed_request_stays_on_identity() {
        let mut events = identity("alice");
        events.push(Event::OtpRequested);
        events.push(Event::OtpIssued(Err(OtpError::Network(
            "connection refused".to_string(),
        ))));
        let (state, commands) = apply(FormState::default(), events);

        assert_eq!(state.step, Step::EnterIdentity);
        assert_eq!(state.draft.username, "alice");
        assert_eq!(commands.len(), 1, "only the IssueOtp, no notification");
    }

    #[test]
    fn test_late_failure_does_not_leave_otp_entry() {
        let (state, commands) = apply(
            FormState::default(),
            vec![
                Event::OtpRequested,
                Event::OtpRequested,
                issued("111111"),
                Event::OtpIssued(Err(OtpError::Http {
                    status: 500,
                    message: "boom".to_string(),
                })),
            ],
        );
        assert_eq!(state.step, Step::EnterOtp);
        assert_eq!(commands.len(), 3);
    }

    #[test]
    fn test_inputs_gated_by_step() {
        let (state, _) = apply(
            FormState::default(),
            vec![Event::Input(Field::Otp, "999999".to_string())],
        );
        assert_eq!(state.draft.otp.expose_secret(), "");

        let mut events = identity("alice");
        events.extend([
            Event::OtpRequested,
            // typing continues while the request is in flight
            Event::Input(Field::Gender, "M".to_string()),
            issued("123456"),
            Event::Input(Field::Username, "mallory".to_string()),
            Event::Input(Field::Otp, "123456".to_string()),
        ]);
        let (state, _) = apply(FormState::default(), events);

        assert_eq!(state.draft.gender, "M");
        assert_eq!(state.draft.username, "alice");
        assert_eq!(state.draft.otp.expose_secret(), "123456");
    }

    #[test]
    fn test_verify_uses_captured_username() {
        let mut events = identity("alice");
        events.extend([
            Event::OtpRequested,
            issued("123456"),
            Event::Input(Field::Username, "bob".to_string()),
            Event::Input(Field::Otp, "123456".to_string()),
            Event::VerifyRequested,
        ]);
        let (state, commands) = apply(FormState::default(), events);

        let Some(Command::VerifyOtp(request)) = commands.last() else {
            panic!("expected VerifyOtp, got {commands:?}");
        };
        assert_eq!(request.username, "alice");
        assert_eq!(request.otp.expose_secret(), "123456");

        let (state, command) = update(
            state,
            Event::Verified(Ok(VerifyOtpResponse {
                message: "Verified".to_string(),
            })),
        );
        assert_eq!(state.step, Step::EnterOtp);
        assert!(matches!(command, Some(Command::Notify(ref m)) if m == "Verified"));

        let (state, command) = update(
            state,
            Event::Verified(Err(OtpError::Http {
                status: 400,
                message: "Invalid OTP".to_string(),
            })),
        );
        assert_eq!(state.step, Step::EnterOtp);
        assert!(command.is_none());
    }

    #[test]
    fn test_buttons_gated_by_step() {
        let (state, command) = update(FormState::default(), Event::VerifyRequested);
        assert_eq!(state.step, Step::EnterIdentity);
        assert!(command.is_none());

        let (state, _) = apply(FormState::default(), vec![Event::OtpRequested, issued("1")]);
        let (state, command) = update(state, Event::OtpRequested);
        assert_eq!(state.step, Step::EnterOtp);
        assert!(command.is_none());
    }
}
