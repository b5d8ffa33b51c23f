mod support;

use std::sync::Arc;

use axum::http::{StatusCode, header::LOCATION};
use blog_home::application::pagination::PaginationPolicy;

use support::*;

#[tokio::test]
async fn root_page_lists_first_window_with_next_arrow() {
    let app = router();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("<title>Field Notes</title>"));
    assert!(html.contains(r#"<meta name="description" content="Everything is awesome!">"#));
    assert!(html.contains(r#"<link rel="canonical" href="https://notes.example/">"#));
    assert!(html.contains("<h2>What should you expect?</h2>"));
    assert!(html.contains("<p>Thoughts, summarized.</p>"));
    assert!(html.contains("<h2>Last Posts</h2>"));

    assert!(html.contains(r#"href="/blog/p1/">Post 1</a>"#));
    assert!(html.contains(r#"href="/blog/p2/">Post 2</a>"#));
    assert!(!html.contains("/blog/p3/"));
    assert!(!html.contains("Loading..."));

    assert!(html.contains(r#"rel="next" href="/after/p2/""#));
    assert!(!html.contains(r#"rel="prev""#));
}

#[tokio::test]
async fn second_window_links_back_to_root() {
    let app = router();
    let response = get(&app, "/after/p2/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_to_string(response.into_body()).await;
    assert!(html.contains(r#"<link rel="canonical" href="https://notes.example/after/p2/">"#));
    assert!(html.contains(r#"href="/blog/p3/">p3</a>"#));
    assert!(html.contains(r#"href="/blog/p4/">Post 4</a>"#));
    assert!(html.contains(r#"rel="prev" href="/""#));
    assert!(html.contains(r#"rel="next" href="/after/p4/""#));
}

#[tokio::test]
async fn last_window_links_back_to_inner_page_only() {
    let app = router();
    let html = body_to_string(get(&app, "/after/p4/").await.into_body()).await;

    assert!(html.contains(r#"href="/blog/p5/">Post 5</a>"#));
    assert!(html.contains(r#"rel="prev" href="/after/p2/""#));
    assert!(!html.contains(r#"rel="next""#));
}

#[tokio::test]
async fn exhausted_window_keeps_previous_arrow() {
    let app = router();
    let html = body_to_string(get(&app, "/after/p5/").await.into_body()).await;

    assert!(!html.contains(r#"class="post-box""#));
    assert!(html.contains(r#"rel="prev" href="/after/p3/""#));
}

#[tokio::test]
async fn follow_list_policy_hides_arrows_on_exhausted_window() {
    let app = router_with(Arc::new(content_repo()), PaginationPolicy::FollowList);
    let html = body_to_string(get(&app, "/after/p5/").await.into_body()).await;

    assert!(!html.contains(r#"rel="prev""#));
    assert!(!html.contains(r#"rel="next""#));
}

#[tokio::test]
async fn unknown_cursor_renders_not_found_page() {
    let app = router();
    let response = get(&app, "/after/missing/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Page Not Found"));
    assert!(html.contains(r#"href="/">Back to home</a>"#));
}

#[tokio::test]
async fn cursor_without_trailing_slash_redirects() {
    let app = router();
    let response = get(&app, "/after/p2").await;

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/after/p2/")
    );
}

#[tokio::test]
async fn stalled_source_renders_loading_without_arrows() {
    let app = router_with(Arc::new(StalledRepo), PaginationPolicy::Independent);
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Loading..."));
    assert!(!html.contains(r#"class="post-boxes""#));
    assert!(!html.contains(r#"rel="prev""#));
    assert!(!html.contains(r#"rel="next""#));
}

#[tokio::test]
async fn failing_source_is_a_server_error() {
    let app = router_with(Arc::new(FailingRepo), PaginationPolicy::Independent);
    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_endpoint_has_no_content() {
    let app = router();
    assert_eq!(get(&app, "/_health").await.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_path_renders_not_found_page() {
    let app = router();
    let response = get(&app, "/blog/p1/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Page Not Found"));
}
