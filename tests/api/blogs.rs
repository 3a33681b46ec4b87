//! tests/api/blogs.rs
//!
//! `/api/blogs` against a server seeded with the six fixture blogs.

use crate::common::harness::{react_patterns, TestServer, FIXTURE_BLOG_COUNT};
use anyhow::Result;
use reqwest::{header::CONTENT_TYPE, StatusCode};
use serde_json::{json, Value};
use test_log::test;

#[test(tokio::test)]
async fn blogs_are_returned_as_json() -> Result<()> {
    let server = TestServer::spawn().await?;

    let resp = server.get("/api/blogs").await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[CONTENT_TYPE].to_str()?;
    assert!(content_type.starts_with("application/json"), "{content_type}");

    server.shutdown().await
}

#[test(tokio::test)]
async fn all_fixture_blogs_are_listed() -> Result<()> {
    let server = TestServer::spawn().await?;
    assert_eq!(server.blogs().await?.len(), FIXTURE_BLOG_COUNT);
    server.shutdown().await
}

#[test(tokio::test)]
async fn blogs_expose_id_not_mongo_fields() -> Result<()> {
    let server = TestServer::spawn().await?;

    for blog in server.blogs().await? {
        assert!(blog["id"].is_string(), "missing id in {blog}");
        assert!(blog.get("_id").is_none());
        assert!(blog.get("__v").is_none());
    }

    server.shutdown().await
}

#[test(tokio::test)]
async fn posting_a_blog_increments_the_list() -> Result<()> {
    let server = TestServer::spawn().await?;
    let before = server.blogs().await?.len();

    let resp = server.post_json("/api/blogs", &react_patterns()).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await?;
    assert_ne!(created["id"], "5a422a851b54a676234d17f7", "client ids are ignored");
    assert_eq!(created["likes"], 7);

    assert_eq!(server.blogs().await?.len(), before + 1);
    server.shutdown().await
}

#[test(tokio::test)]
async fn posting_without_likes_stores_zero() -> Result<()> {
    let server = TestServer::spawn().await?;

    let mut blog = react_patterns();
    blog.as_object_mut().unwrap().remove("likes");
    let resp = server.post_json("/api/blogs", &blog).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let blogs = server.blogs().await?;
    assert_eq!(blogs[FIXTURE_BLOG_COUNT]["likes"], 0);
    assert_eq!(blogs[FIXTURE_BLOG_COUNT]["title"], "React patterns");
    server.shutdown().await
}

#[test(tokio::test)]
async fn posting_without_title_and_url_is_rejected() -> Result<()> {
    let server = TestServer::spawn().await?;

    let body = json!({ "_id": "5a422a851b54a676234d17f7", "author": "Michael Chan", "__v": 0 });
    let resp = server.post_json("/api/blogs", &body).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = resp.json().await?;
    assert_eq!(error["error"], "`title` is required, `url` is required");

    assert_eq!(server.blogs().await?.len(), FIXTURE_BLOG_COUNT);
    server.shutdown().await
}

#[test(tokio::test)]
async fn malformed_bodies_are_rejected_with_400() -> Result<()> {
    let server = TestServer::spawn().await?;

    let negative_likes = json!({ "title": "t", "url": "u", "likes": -1 });
    let resp = server.post_json("/api/blogs", &negative_likes).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = server
        .client
        .post(server.url("/api/blogs"))
        .header(CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert_eq!(server.blogs().await?.len(), FIXTURE_BLOG_COUNT);
    server.shutdown().await
}

#[test(tokio::test)]
async fn single_blog_can_be_fetched() -> Result<()> {
    let server = TestServer::spawn().await?;
    let first = server.blogs().await?.remove(0);

    let resp = server.get(&format!("/api/blogs/{}", first["id"].as_str().unwrap())).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await?, first);

    server.shutdown().await
}

#[test(tokio::test)]
async fn delete_returns_204_and_shrinks_the_list() -> Result<()> {
    let server = TestServer::spawn().await?;
    let blogs = server.blogs().await?;
    let id = blogs[0]["id"].as_str().unwrap();

    let resp = server.delete(&format!("/api/blogs/{id}")).await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let after = server.blogs().await?;
    assert_eq!(after.len(), blogs.len() - 1);
    assert!(after.iter().all(|b| b["id"] != id));
    server.shutdown().await
}

#[test(tokio::test)]
async fn updating_likes_works() -> Result<()> {
    let server = TestServer::spawn().await?;
    let mut blog = server.blogs().await?.remove(0);
    let id = blog["id"].as_str().unwrap().to_string();
    let before = blog["likes"].as_u64().unwrap();
    blog["likes"] = json!(before + 1);

    let resp = server.put_json(&format!("/api/blogs/{id}"), &blog).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await?["likes"], before + 1);

    let after = server.blogs().await?;
    assert_eq!(after[0]["likes"], before + 1);
    server.shutdown().await
}

#[test(tokio::test)]
async fn partial_update_keeps_other_fields() -> Result<()> {
    let server = TestServer::spawn().await?;
    let blog = server.blogs().await?.remove(0);
    let id = blog["id"].as_str().unwrap();

    let resp = server.put_json(&format!("/api/blogs/{id}"), &json!({ "likes": 100 })).await?;
    let updated: Value = resp.json().await?;
    assert_eq!(updated["likes"], 100);
    assert_eq!(updated["title"], blog["title"]);
    assert_eq!(updated["url"], blog["url"]);

    let resp = server.put_json(&format!("/api/blogs/{id}"), &json!({ "title": "" })).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    server.shutdown().await
}

#[test(tokio::test)]
async fn unknown_ids_are_404_and_malformed_ids_are_400() -> Result<()> {
    let server = TestServer::spawn().await?;
    let unknown = "/api/blogs/000000000000000000000000";

    assert_eq!(server.get(unknown).await?.status(), StatusCode::NOT_FOUND);
    assert_eq!(server.delete(unknown).await?.status(), StatusCode::NOT_FOUND);
    let resp = server.put_json(unknown, &json!({ "likes": 1 })).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = server.delete("/api/blogs/not-an-id").await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>().await?["error"], "malformatted id");

    assert_eq!(server.blogs().await?.len(), FIXTURE_BLOG_COUNT);
    server.shutdown().await
}
