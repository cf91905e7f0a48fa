//! # otp-login
//!
//! Terminal client for a two-step one-time-password login backend.
//!
//! The flow is the one a login form would drive:
//!
//! 1. Collect the identity fields (`username`, `first_name`, `second_name`, `gender`).
//! 2. `POST /login` to have the backend issue an OTP.
//! 3. Collect the OTP and `POST /verify` with `{username, otp}`.
//!
//! [`form`] holds the step state machine, [`otp`] is the typed HTTP boundary to the
//! backend and [`cli`] wires both to prompts, flags and logging.

pub mod cli;
pub mod form;
pub mod otp;
