pub mod logging;

use crate::otp::DEFAULT_BACKEND_URL;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_URL: &str = "url";
pub const ARG_USERNAME: &str = "username";
pub const ARG_FIRST_NAME: &str = "first-name";
pub const ARG_SECOND_NAME: &str = "second-name";
pub const ARG_GENDER: &str = "gender";
pub const ARG_OTP: &str = "otp";

pub const CMD_LOGIN: &str = "login";
pub const CMD_REQUEST: &str = "request";
pub const CMD_VERIFY: &str = "verify";

fn field_arg(id: &'static str, help: &'static str, env: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .help(help)
        .env(env)
        .global(true)
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("otp-login")
        .about("Two-step one-time-password login")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Request an OTP and verify it (default when no command is given)"),
        )
        .subcommand(Command::new(CMD_REQUEST).about("Only request an OTP for the identity"))
        .subcommand(Command::new(CMD_VERIFY).about("Only verify an OTP for a username"))
        .arg(
            Arg::new(ARG_URL)
                .short('u')
                .long(ARG_URL)
                .help("Backend base URL")
                .default_value(DEFAULT_BACKEND_URL)
                .env("OTP_LOGIN_URL")
                .global(true),
        )
        .arg(field_arg(
            ARG_USERNAME,
            "Username, prompted for when missing",
            "OTP_LOGIN_USERNAME",
        ))
        .arg(field_arg(
            ARG_FIRST_NAME,
            "First name, prompted for when missing",
            "OTP_LOGIN_FIRST_NAME",
        ))
        .arg(field_arg(
            ARG_SECOND_NAME,
            "Second name, prompted for when missing",
            "OTP_LOGIN_SECOND_NAME",
        ))
        .arg(field_arg(
            ARG_GENDER,
            "Gender, prompted for when missing",
            "OTP_LOGIN_GENDER",
        ))
        .arg(
            field_arg(
                ARG_OTP,
                "OTP to verify, prompted for when missing",
                "OTP_LOGIN_OTP",
            )
            .hide_env_values(true),
        );

    logging::with_args(command)
}
