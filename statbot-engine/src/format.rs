//! Pure reply formatting. Inputs are well-formed by construction (the client
//! only yields valid records), so nothing here can fail.

use statbot_github::{RepositorySummary, UserProfile};

/// Formats a user profile the way the bot announces it: one field per line,
/// `N/A` for missing name or bio, join date as YYYY-MM-DD.
pub fn format_profile(profile: &UserProfile) -> String {
    let name = profile.name.as_deref().unwrap_or("N/A");
    let bio = profile.bio.as_deref().unwrap_or("N/A");
    format!(
        "GitHub User: @{login}\n\
         Name: {name}\n\
         Bio: {bio}\n\
         Public Repos: {repos}\n\
         Followers: {followers}\n\
         Following: {following}\n\
         Joined: {joined}\n\
         {url}",
        login = profile.login,
        name = name,
        bio = bio,
        repos = profile.public_repos,
        followers = profile.followers,
        following = profile.following,
        joined = profile.created_at.format("%Y-%m-%d"),
        url = profile.html_url,
    )
}

/// Formats a last-updated-descending repository list as a numbered block.
/// An empty list yields an explicit "no public repositories" message, never
/// an empty string.
pub fn format_repositories(username: &str, repos: &[RepositorySummary]) -> String {
    if repos.is_empty() {
        return format!("@{} has no public repositories.", username);
    }

    let mut out = format!("Top repositories of @{}:\n", username);
    for (i, repo) in repos.iter().enumerate() {
        out.push_str(&format!(
            "\n{idx}. {name} ({stars} stars)\n",
            idx = i + 1,
            name = repo.name,
            stars = repo.stargazers_count,
        ));
        if let Some(description) = &repo.description {
            out.push_str(&format!("   {}\n", description));
        }
        out.push_str(&format!(
            "   Updated: {}\n   {}\n",
            repo.updated_at.format("%Y-%m-%d"),
            repo.html_url,
        ));
    }
    out
}
