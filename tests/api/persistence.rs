//! tests/api/persistence.rs
//!
//! A server restarted on the same snapshot file sees earlier writes.

use crate::common::harness::{react_patterns, TestServer, FIXTURE_BLOG_COUNT};
use anyhow::Result;
use serde_json::json;
use test_log::test;

#[test(tokio::test)]
async fn writes_survive_a_restart() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let data_path = temp_dir.path().join("bloglist.json");

    let server = TestServer::spawn_persistent(data_path.clone()).await?;
    server.post_json("/api/blogs", &react_patterns()).await?;
    let user = json!({ "username": "hellas", "name": "Arto Hellas", "password": "salainen" });
    server.post_json("/api/users", &user).await?;
    server.shutdown().await?;

    let restarted = TestServer::spawn_persistent(data_path).await?;
    assert_eq!(restarted.blogs().await?.len(), FIXTURE_BLOG_COUNT + 1);
    let users = restarted.users().await?;
    assert!(users.iter().any(|u| u["username"] == "hellas"));

    let duplicate = restarted.post_json("/api/users", &user).await?;
    assert_eq!(duplicate.status(), reqwest::StatusCode::BAD_REQUEST);

    restarted.shutdown().await
}
