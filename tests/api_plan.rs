mod support;

use axum::http::StatusCode;
use serde_json::Value;

use support::*;

async fn plan_json(uri: &str) -> (StatusCode, String) {
    let app = router();
    let response = get(&app, uri).await;
    let status = response.status();
    (status, body_to_string(response.into_body()).await)
}

#[tokio::test]
async fn plan_for_root_window() {
    let (status, body) = plan_json("/api/v1/home").await;
    assert_eq!(status, StatusCode::OK);

    let plan: Value = serde_json::from_str(&body).expect("json plan");
    insta::assert_json_snapshot!(plan, @r#"
    {
      "items": [
        {
          "href": "/blog/p1/",
          "key": "p1",
          "label": "Post 1"
        },
        {
          "href": "/blog/p2/",
          "key": "p2",
          "label": "Post 2"
        }
      ],
      "next_link": {
        "href": "/after/p2/"
      },
      "previous_link": null,
      "state": "list"
    }
    "#);
}

#[tokio::test]
async fn plan_for_last_window() {
    let (status, body) = plan_json("/api/v1/home?after=p4").await;
    assert_eq!(status, StatusCode::OK);

    let plan: Value = serde_json::from_str(&body).expect("json plan");
    insta::assert_json_snapshot!(plan, @r#"
    {
      "items": [
        {
          "href": "/blog/p5/",
          "key": "p5",
          "label": "Post 5"
        }
      ],
      "next_link": null,
      "previous_link": {
        "href": "/after/p2/"
      },
      "state": "list"
    }
    "#);
}

#[tokio::test]
async fn plan_for_unknown_cursor_is_not_found() {
    let (status, body) = plan_json("/api/v1/home?after=missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Unknown page");
}
