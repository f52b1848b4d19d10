//! GitHub REST client. One attempt per call, bounded by a request timeout;
//! no caching and no retry at this traffic scale.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::GithubError;
use crate::model::{RepositorySummary, UserProfile};
use crate::username::validate_username;

/// Public GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default number of repositories returned by a lookup.
pub const DEFAULT_REPO_LIMIT: usize = 5;

/// Bounded wait on the outbound call; anything slower is an upstream error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("github-statbot/", env!("CARGO_PKG_VERSION"));

/// Masks a token for safe logging: first 7 chars + "***" + last 4 chars,
/// or just "***" when the token is too short to mask partially.
fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// The two read-only lookups the bot performs. Implemented by [`GithubClient`];
/// the engine depends on this trait so tests can substitute canned results.
#[async_trait]
pub trait GithubLookup: Send + Sync {
    /// Fetches the profile for `username`.
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile, GithubError>;

    /// Fetches up to `limit` public repositories for `username`, sorted by
    /// last-updated descending. Empty when the user has no public repositories.
    async fn fetch_top_repositories(
        &self,
        username: &str,
        limit: usize,
    ) -> Result<Vec<RepositorySummary>, GithubError>;
}

/// Reqwest-based GitHub API client. Stateless between calls.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Creates a client against the public GitHub API. When `token` is `None`,
    /// falls back to the GITHUB_TOKEN environment variable; unauthenticated
    /// requests work but get lower rate limits.
    pub fn new(token: Option<String>) -> Result<Self, GithubError> {
        Self::with_base_url(DEFAULT_API_URL.to_string(), token)
    }

    /// Creates a client with a custom base URL (e.g. a mock server in tests).
    pub fn with_base_url(base_url: String, token: Option<String>) -> Result<Self, GithubError> {
        let token = token.or_else(|| std::env::var("GITHUB_TOKEN").ok());
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GithubError::Upstream(format!("building HTTP client: {}", e)))?;

        match &token {
            Some(t) => tracing::info!(token = %mask_token(t), "GitHub client created (authenticated)"),
            None => tracing::info!("GitHub client created without token"),
        }

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }
}

#[async_trait]
impl GithubLookup for GithubClient {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile, GithubError> {
        let username = validate_username(username)?;
        let url = format!("{}/users/{}", self.base_url, username);

        tracing::info!(username = %username, "Fetching GitHub profile");

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| GithubError::Upstream(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(GithubError::NotFound(username.to_string())),
            status if status.is_success() => {
                let profile: UserProfile = response
                    .json()
                    .await
                    .map_err(|e| GithubError::Upstream(format!("malformed profile body: {}", e)))?;
                tracing::debug!(login = %profile.login, "Profile fetched");
                Ok(profile)
            }
            status => Err(GithubError::Upstream(format!(
                "GitHub returned status {} for user {}",
                status, username
            ))),
        }
    }

    async fn fetch_top_repositories(
        &self,
        username: &str,
        limit: usize,
    ) -> Result<Vec<RepositorySummary>, GithubError> {
        let username = validate_username(username)?;
        let url = format!("{}/users/{}/repos", self.base_url, username);
        let per_page = limit.to_string();

        tracing::info!(username = %username, limit = limit, "Fetching GitHub repositories");

        let response = self
            .get(&url)
            .query(&[
                ("sort", "updated"),
                ("direction", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GithubError::Upstream(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(GithubError::NotFound(username.to_string())),
            status if status.is_success() => {
                let mut repos: Vec<RepositorySummary> = response
                    .json()
                    .await
                    .map_err(|e| GithubError::Upstream(format!("malformed repos body: {}", e)))?;
                // Upstream already sorts, but the ordering/size invariant is
                // enforced here rather than trusted.
                repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
                repos.truncate(limit);
                tracing::debug!(count = repos.len(), "Repositories fetched");
                Ok(repos)
            }
            status => Err(GithubError::Upstream(format!(
                "GitHub returned status {} for user {}",
                status, username
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_long() {
        assert_eq!(mask_token("ghp_abcdefghijklmnop"), "ghp_abc***mnop");
    }

    #[test]
    fn test_mask_token_short() {
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token(""), "***");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client =
            GithubClient::with_base_url("https://example.test/".to_string(), None).unwrap();
        assert_eq!(client.base_url, "https://example.test");
    }
}
