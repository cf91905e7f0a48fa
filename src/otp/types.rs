use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

/// Input fields of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    FirstName,
    SecondName,
    Gender,
    Otp,
}

impl Field {
    /// Fields shown on the identity entry screen.
    pub const IDENTITY: [Self; 4] = [
        Self::Username,
        Self::FirstName,
        Self::SecondName,
        Self::Gender,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::FirstName => "First Name",
            Self::SecondName => "Second Name",
            Self::Gender => "Gender",
            Self::Otp => "Enter OTP",
        }
    }
}

/// In-memory, unsaved set of form values.
#[derive(Debug, Clone, Default)]
pub struct CredentialDraft {
    pub username: String,
    pub first_name: String,
    pub second_name: String,
    pub gender: String,
    pub otp: SecretString,
}

impl CredentialDraft {
    /// Store a value as typed; nothing is trimmed or validated.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::FirstName => self.first_name = value,
            Field::SecondName => self.second_name = value,
            Field::Gender => self.gender = value,
            Field::Otp => self.otp = SecretString::from(value),
        }
    }
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct IssueOtpRequest {
    pub username: String,
    pub first_name: String,
    pub second_name: String,
    pub gender: String,
    #[serde(serialize_with = "expose")]
    pub otp: SecretString,
}

impl From<&CredentialDraft> for IssueOtpRequest {
    fn from(draft: &CredentialDraft) -> Self {
        Self {
            username: draft.username.clone(),
            first_name: draft.first_name.clone(),
            second_name: draft.second_name.clone(),
            gender: draft.gender.clone(),
            otp: draft.otp.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueOtpResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Only meant for testing setups, a production backend must not echo it.
    pub otp_for_testing: String,
}

/// Body of `POST /verify`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpRequest {
    pub username: String,
    #[serde(serialize_with = "expose")]
    pub otp: SecretString,
}

impl From<&CredentialDraft> for VerifyOtpRequest {
    fn from(draft: &CredentialDraft) -> Self {
        Self {
            username: draft.username.clone(),
            otp: draft.otp.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyOtpResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> CredentialDraft {
        let mut draft = CredentialDraft::default();
        draft.set(Field::Username, "alice".to_string());
        draft.set(Field::FirstName, "A".to_string());
        draft.set(Field::SecondName, "B".to_string());
        draft.set(Field::Gender, "F".to_string());
        draft
    }

    #[test]
    fn test_issue_request_body() {
        let body = serde_json::to_value(IssueOtpRequest::from(&alice())).unwrap();
        assert_eq!(
            body,
            json!({
                "username": "alice",
                "first_name": "A",
                "second_name": "B",
                "gender": "F",
                "otp": ""
            })
        );
    }

    #[test]
    fn test_verify_request_body() {
        let mut draft = alice();
        draft.set(Field::Otp, "123456".to_string());

        let body = serde_json::to_value(VerifyOtpRequest::from(&draft)).unwrap();
        assert_eq!(body, json!({"username": "alice", "otp": "123456"}));
    }

    #[test]
    fn test_otp_redacted_in_debug() {
        let mut draft = alice();
        draft.set(Field::Otp, "123456".to_string());

        assert!(!format!("{draft:?}").contains("123456"));
        assert!(!format!("{:?}", VerifyOtpRequest::from(&draft)).contains("123456"));
    }

    #[test]
    fn test_issue_response_without_message() {
        let response: IssueOtpResponse =
            serde_json::from_value(json!({"otp_for_testing": "123456"})).unwrap();
        assert_eq!(response.message, None);
        assert_eq!(response.otp_for_testing, "123456");

        let missing = serde_json::from_value::<IssueOtpResponse>(json!({"message": "OTP generated"}));
        assert!(missing.is_err());
    }
}
