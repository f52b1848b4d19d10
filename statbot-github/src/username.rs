//! Syntactic username validation, applied before any network call.

use crate::error::GithubError;

/// Maximum length GitHub allows for a username.
const MAX_LEN: usize = 39;

/// Validates a candidate GitHub username against GitHub's rules: 1–39
/// characters, ASCII alphanumerics and hyphens only, no leading/trailing
/// hyphen, no consecutive hyphens. Returns the trimmed username.
pub fn validate_username(input: &str) -> Result<&str, GithubError> {
    let username = input.trim();
    if username.is_empty() || username.len() > MAX_LEN {
        return Err(GithubError::InvalidUsername(username.to_string()));
    }
    if username.starts_with('-') || username.ends_with('-') || username.contains("--") {
        return Err(GithubError::InvalidUsername(username.to_string()));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(GithubError::InvalidUsername(username.to_string()));
    }
    Ok(username)
}
