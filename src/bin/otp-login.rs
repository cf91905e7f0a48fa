use anyhow::Result;
use otp_login::cli::start;

// Main function
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    action.execute().await
}
