//! # statbot-github
//!
//! Thin GitHub REST client for the two read-only lookups the bot needs:
//! user profile (`GET /users/{username}`) and most recently updated public
//! repositories (`GET /users/{username}/repos`). Exposes the [`GithubLookup`]
//! trait as the seam so the engine can be tested without the network.

mod client;
mod error;
mod model;
mod username;

pub use client::{GithubClient, GithubLookup, DEFAULT_API_URL, DEFAULT_REPO_LIMIT};
pub use error::GithubError;
pub use model::{RepositorySummary, UserProfile};
pub use username::validate_username;
