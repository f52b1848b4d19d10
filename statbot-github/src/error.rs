use thiserror::Error;

/// Failure modes of the two GitHub lookups. `InvalidUsername` is raised
/// before any network call; the other two map HTTP outcomes.
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("Invalid GitHub username: {0}")]
    InvalidUsername(String),

    #[error("GitHub user not found: {0}")]
    NotFound(String),

    #[error("GitHub request failed: {0}")]
    Upstream(String),
}
