//! End-to-end flow: scroll the feed, click an entry, navigate by path.

use dummyapi_rs::{Client, DetailPhase, DetailResolver, Selection};
use httpmock::prelude::*;
use serde_json::json;

fn page_body(ids: std::ops::Range<usize>) -> serde_json::Value {
    let data: Vec<_> = ids
        .map(|i| {
            json!({
                "id": format!("u{}", i),
                "firstName": format!("First{}", i),
                "lastName": format!("Last{}", i),
                "picture": format!("https://example.com/{}.jpg", i)
            })
        })
        .collect();
    json!({ "data": data, "total": 200, "limit": 10 })
}

fn detail_body(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "firstName": "Sara",
        "lastName": "Andersen",
        "picture": "https://example.com/p.jpg",
        "gender": "female",
        "email": "sara.andersen@example.com",
        "dateOfBirth": "1996-04-30T19:26:49.610Z",
        "phone": 92694011
    })
}

fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .no_env()
        .with_url(server.base_url())
        .with_app_id("627a6b9eaf56419de59a26b9")
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn scroll_then_view_detail() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let page0 = server.mock(|when, then| {
        when.method(GET)
            .path("/user")
            .query_param("page", "0")
            .query_param("limit", "10")
            .header("app-id", "627a6b9eaf56419de59a26b9");
        then.status(200).json_body(page_body(0..10));
    });
    let page1 = server.mock(|when, then| {
        when.method(GET)
            .path("/user")
            .query_param("page", "1")
            .query_param("limit", "10");
        then.status(200).json_body(page_body(10..20));
    });
    let detail = server.mock(|when, then| {
        when.method(GET).path("/user/u3");
        then.status(200).json_body(detail_body("u3"));
    });

    let client = test_client(&server);

    // Initial mount loads page zero, the end of the rendered list loads one
    // more.
    let mut feed = client.feed();
    feed.start().await?;
    feed.load_more().await?;
    assert_eq!(feed.len(), 20);
    assert_eq!(feed.users()[0].id, "u0");
    assert_eq!(feed.users()[19].id, "u19");

    // Click the fourth entry.
    let clicked = feed.users()[3].id.clone();
    let mut resolver = DetailResolver::new();
    resolver
        .resolve(&client.users, &Selection::from_click(&clicked))
        .await;
    assert_eq!(resolver.phase(), DetailPhase::Loaded);
    assert_eq!(resolver.detail().unwrap().id, "u3");

    // Direct navigation to /u3 resolves the same record.
    let mut navigated = DetailResolver::new();
    navigated
        .resolve(&client.users, &Selection::from_path("/u3"))
        .await;
    assert_eq!(navigated.detail(), resolver.detail());

    page0.assert_hits_async(1).await;
    page1.assert_hits_async(1).await;
    detail.assert_hits_async(2).await;
    Ok(())
}

#[tokio::test]
async fn empty_selection_issues_no_request() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let any_detail = server.mock(|when, then| {
        when.method(GET).path_contains("/user");
        then.status(200).json_body(detail_body("u0"));
    });

    let client = test_client(&server);
    let mut resolver = DetailResolver::new();
    resolver.resolve(&client.users, &Selection::default()).await;

    assert_eq!(resolver.phase(), DetailPhase::Idle);
    any_detail.assert_hits_async(0).await;
    Ok(())
}
