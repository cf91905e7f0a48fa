pub mod login;
pub mod request;
pub mod verify;

mod run;

use crate::{
    cli::{globals::GlobalArgs, prompt::text_prompt_when_none},
    form::{LoginController, Notifier},
    otp::types::Field,
};
use anyhow::Result;

#[derive(Debug)]
pub enum Action {
    Login {
        globals: GlobalArgs,
        args: login::Args,
    },
    Request {
        globals: GlobalArgs,
        args: request::Args,
    },
    Verify {
        globals: GlobalArgs,
        args: verify::Args,
    },
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Identity fields given up front; `None` means prompt for it.
#[derive(Debug, Clone, Default)]
pub struct IdentityArgs {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub gender: Option<String>,
}

impl IdentityArgs {
    fn take(&mut self, field: Field) -> Option<String> {
        match field {
            Field::Username => self.username.take(),
            Field::FirstName => self.first_name.take(),
            Field::SecondName => self.second_name.take(),
            Field::Gender => self.gender.take(),
            Field::Otp => None,
        }
    }
}

/// Fill the identity screen, prompting for whatever was not given.
fn enter_identity<N: Notifier>(
    form: &mut LoginController<N>,
    mut identity: IdentityArgs,
) -> Result<()> {
    for field in Field::IDENTITY {
        let value = text_prompt_when_none(field.label(), identity.take(field))?;
        form.input(field, value);
    }
    Ok(())
}
