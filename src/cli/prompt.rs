use inquire::{error::InquireResult, Text};

/// Prompt the user for input if the value is None.
///
/// An empty answer is returned as-is; fields are not required to be filled in.
pub fn text_prompt_when_none(prompt: &str, val: Option<String>) -> InquireResult<String> {
    Ok(if let Some(val) = val {
        val
    } else {
        Text::new(prompt).prompt()?
    })
}
