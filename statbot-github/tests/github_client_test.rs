//! Integration tests for [`GithubClient`] against a mockito server.
//!
//! Covers: profile success, 404 → NotFound, 5xx → Upstream, malformed body,
//! repository ordering/truncation, empty repository lists, and syntactic
//! username rejection before any request is made.

use statbot_github::{GithubClient, GithubError, GithubLookup};

const OCTOCAT_PROFILE: &str = r#"{
    "login": "octocat",
    "name": "The Octocat",
    "bio": null,
    "public_repos": 8,
    "followers": 3938,
    "following": 9,
    "created_at": "2011-01-25T18:44:36Z",
    "html_url": "https://github.com/octocat"
}"#;

fn client_for(server: &mockito::ServerGuard) -> GithubClient {
    GithubClient::with_base_url(server.url(), Some("test_github_token".to_string()))
        .expect("client must build")
}

fn repo_json(name: &str, stars: u32, updated_at: &str) -> String {
    format!(
        r#"{{"name":"{}","description":"repo {}","stargazers_count":{},"html_url":"https://github.com/octocat/{}","updated_at":"{}"}}"#,
        name, name, stars, name, updated_at
    )
}

#[tokio::test]
async fn test_fetch_profile_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(OCTOCAT_PROFILE)
        .create_async()
        .await;

    let profile = client_for(&server)
        .fetch_profile("octocat")
        .await
        .expect("profile lookup must succeed");

    mock.assert_async().await;
    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.name.as_deref(), Some("The Octocat"));
    assert!(profile.bio.is_none());
    assert_eq!(profile.public_repos, 8);
    assert_eq!(profile.followers, 3938);
    assert_eq!(profile.following, 9);
    assert_eq!(profile.created_at.format("%Y-%m-%d").to_string(), "2011-01-25");
}

#[tokio::test]
async fn test_fetch_profile_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/nonexistent-user-xyz")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_profile("nonexistent-user-xyz")
        .await
        .expect_err("404 must map to NotFound");

    assert!(matches!(err, GithubError::NotFound(ref u) if u == "nonexistent-user-xyz"));
}

#[tokio::test]
async fn test_fetch_profile_server_error_is_upstream() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/octocat")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_profile("octocat")
        .await
        .expect_err("500 must map to Upstream");

    assert!(matches!(err, GithubError::Upstream(_)));
}

#[tokio::test]
async fn test_fetch_profile_unreachable_host_is_upstream() {
    // Bind an ephemeral port, then drop the listener so connections to it
    // are refused. The send itself fails, not the status handling.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind must succeed");
        listener.local_addr().expect("local addr must resolve")
    };
    let client = GithubClient::with_base_url(
        format!("http://{}", addr),
        Some("test_github_token".to_string()),
    )
    .expect("client must build");

    let err = client
        .fetch_profile("octocat")
        .await
        .expect_err("refused connection must map to Upstream");
    assert!(matches!(err, GithubError::Upstream(_)));

    let err = client
        .fetch_top_repositories("octocat", 5)
        .await
        .expect_err("refused connection must map to Upstream");
    assert!(matches!(err, GithubError::Upstream(_)));
}

#[tokio::test]
async fn test_fetch_profile_malformed_body_is_upstream() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_profile("octocat")
        .await
        .expect_err("garbage body must map to Upstream");

    assert!(matches!(err, GithubError::Upstream(_)));
}

#[tokio::test]
async fn test_invalid_username_rejected_before_request() {
    let server = mockito::Server::new_async().await;
    // No mock registered: a request would fail the test via Upstream instead.
    let client = client_for(&server);

    let err = client
        .fetch_profile("not a username")
        .await
        .expect_err("bad username must be rejected");
    assert!(matches!(err, GithubError::InvalidUsername(_)));

    let err = client
        .fetch_top_repositories("", 5)
        .await
        .expect_err("empty username must be rejected");
    assert!(matches!(err, GithubError::InvalidUsername(_)));
}

#[tokio::test]
async fn test_fetch_top_repositories_sorted_and_truncated() {
    let mut server = mockito::Server::new_async().await;
    // Six repos out of order; client must re-sort by updated_at desc and keep 5.
    let body = format!(
        "[{},{},{},{},{},{}]",
        repo_json("c", 3, "2024-03-01T00:00:00Z"),
        repo_json("a", 1, "2024-06-01T00:00:00Z"),
        repo_json("f", 6, "2023-12-01T00:00:00Z"),
        repo_json("b", 2, "2024-05-01T00:00:00Z"),
        repo_json("e", 5, "2024-01-01T00:00:00Z"),
        repo_json("d", 4, "2024-02-01T00:00:00Z"),
    );
    let _mock = server
        .mock("GET", "/users/octocat/repos")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("sort".into(), "updated".into()),
            mockito::Matcher::UrlEncoded("direction".into(), "desc".into()),
            mockito::Matcher::UrlEncoded("per_page".into(), "5".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let repos = client_for(&server)
        .fetch_top_repositories("octocat", 5)
        .await
        .expect("repo lookup must succeed");

    assert_eq!(repos.len(), 5);
    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    for pair in repos.windows(2) {
        assert!(pair[0].updated_at >= pair[1].updated_at);
    }
}

#[tokio::test]
async fn test_fetch_top_repositories_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/octocat/repos")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let repos = client_for(&server)
        .fetch_top_repositories("octocat", 5)
        .await
        .expect("empty list is a success");

    assert!(repos.is_empty());
}

#[tokio::test]
async fn test_fetch_top_repositories_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/ghost-user/repos")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_top_repositories("ghost-user", 5)
        .await
        .expect_err("404 must map to NotFound");

    assert!(matches!(err, GithubError::NotFound(_)));
}
