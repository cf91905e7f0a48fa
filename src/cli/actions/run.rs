use crate::cli::actions::{login, request, verify, Action};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login { globals, args } => login::execute(&globals, args).await,
        Action::Request { globals, args } => request::execute(&globals, args).await,
        Action::Verify { globals, args } => verify::execute(&globals, args).await,
    }
}
