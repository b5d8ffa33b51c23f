#![allow(dead_code)]

use std::{num::NonZeroU32, sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use blog_home::application::chrome::ChromeService;
use blog_home::application::home::{HomeCopy, HomeOptions, HomeService};
use blog_home::application::pagination::PaginationPolicy;
use blog_home::application::repos::{PostsRepo, RepoError};
use blog_home::config::SiteSettings;
use blog_home::domain::posts::{PageResult, Post};
use blog_home::infra::content::StaticContentRepo;
use blog_home::infra::http::{HttpState, build_router};

pub fn site() -> SiteSettings {
    SiteSettings {
        title: "Field Notes".to_string(),
        description: "Everything is awesome!".to_string(),
        public_url: "https://notes.example".to_string(),
        intro_heading: "What should you expect?".to_string(),
        intro_body: "Thoughts, summarized.\n\nAnd organized.".to_string(),
        list_heading: "Last Posts".to_string(),
    }
}

pub fn options(policy: PaginationPolicy) -> HomeOptions {
    let site = site();
    HomeOptions {
        page_size: NonZeroU32::new(2).expect("non-zero"),
        load_timeout: Duration::from_millis(200),
        policy,
        copy: HomeCopy {
            intro_heading: site.intro_heading,
            intro_body: site.intro_body,
            list_heading: site.list_heading,
        },
    }
}

/// Five posts, `p1` through `p5`; `p3` has no title.
pub fn content_repo() -> StaticContentRepo {
    let posts = (1..=5)
        .map(|n| {
            let title = (n != 3).then(|| format!("Post {n}"));
            Post::new(format!("p{n}"), title.as_deref())
        })
        .collect();
    StaticContentRepo::from_posts(posts).expect("unique ids")
}

pub fn router_with(posts: Arc<dyn PostsRepo>, policy: PaginationPolicy) -> Router {
    let state = HttpState {
        home: Arc::new(HomeService::new(posts, options(policy))),
        chrome: Arc::new(ChromeService::new(&site())),
    };
    build_router(state)
}

pub fn router() -> Router {
    router_with(Arc::new(content_repo()), PaginationPolicy::Independent)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.clone()
        .oneshot(request)
        .await
        .expect("router should respond")
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.expect("collect body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

/// Never answers within the configured deadline.
pub struct StalledRepo;

#[async_trait]
impl PostsRepo for StalledRepo {
    async fn load_page(
        &self,
        _after: Option<&str>,
        _limit: NonZeroU32,
    ) -> Result<PageResult, RepoError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(PageResult::default())
    }
}

pub struct FailingRepo;

#[async_trait]
impl PostsRepo for FailingRepo {
    async fn load_page(
        &self,
        _after: Option<&str>,
        _limit: NonZeroU32,
    ) -> Result<PageResult, RepoError> {
        Err(RepoError::from_persistence("content store offline"))
    }
}
