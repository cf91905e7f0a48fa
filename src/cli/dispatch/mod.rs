use crate::cli::{
    actions::{login, request, verify, Action, IdentityArgs},
    commands::{
        ARG_FIRST_NAME, ARG_GENDER, ARG_OTP, ARG_SECOND_NAME, ARG_URL, ARG_USERNAME, CMD_LOGIN,
        CMD_REQUEST, CMD_VERIFY,
    },
    globals::GlobalArgs,
};
use anyhow::{anyhow, Context, Result};
use url::Url;

fn string_arg(matches: &clap::ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

fn identity_args(matches: &clap::ArgMatches) -> IdentityArgs {
    IdentityArgs {
        username: string_arg(matches, ARG_USERNAME),
        first_name: string_arg(matches, ARG_FIRST_NAME),
        second_name: string_arg(matches, ARG_SECOND_NAME),
        gender: string_arg(matches, ARG_GENDER),
    }
}

/// # Errors
/// Returns an error if the backend URL is missing or does not parse.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    // global args land on the deepest subcommand
    let (name, sub_m) = matches.subcommand().unwrap_or((CMD_LOGIN, matches));

    let url = sub_m
        .get_one::<String>(ARG_URL)
        .context("missing required argument: --url")?;
    let backend_url = Url::parse(url).with_context(|| format!("invalid backend URL: {url}"))?;
    let globals = GlobalArgs::new(backend_url);

    match name {
        CMD_LOGIN => Ok(Action::Login {
            globals,
            args: login::Args {
                identity: identity_args(sub_m),
                otp: string_arg(sub_m, ARG_OTP),
            },
        }),
        CMD_REQUEST => Ok(Action::Request {
            globals,
            args: request::Args {
                identity: identity_args(sub_m),
            },
        }),
        CMD_VERIFY => Ok(Action::Verify {
            globals,
            args: verify::Args {
                username: string_arg(sub_m, ARG_USERNAME),
                otp: string_arg(sub_m, ARG_OTP),
            },
        }),
        _ => Err(anyhow!("unknown command: {name}")),
    }
}
