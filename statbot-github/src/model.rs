//! GitHub API response records. Field names follow the REST JSON so serde
//! deserializes them directly; both records are immutable once fetched.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A GitHub user profile from `GET /users/{username}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
    pub html_url: String,
}

/// One public repository from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub html_url: String,
    pub updated_at: DateTime<Utc>,
}
