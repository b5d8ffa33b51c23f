use std::{num::NonZeroU32, sync::Arc, time::Duration};

use thiserror::Error;
use tracing::{debug, warn};

use crate::application::pagination::{PaginationPolicy, RenderPlan, resolve_with};
use crate::application::repos::{PostsRepo, RepoError};
use crate::config::Settings;
use crate::presentation::views::HomeContext;

const SOURCE: &str = "application::home::HomeService";

#[derive(Debug, Error)]
pub enum HomeError {
    #[error("unknown cursor: {0}")]
    UnknownCursor(String),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Static copy shown above the listing.
#[derive(Debug, Clone, Default)]
pub struct HomeCopy {
    pub intro_heading: String,
    pub intro_body: String,
    pub list_heading: String,
}

#[derive(Debug, Clone)]
pub struct HomeOptions {
    pub page_size: NonZeroU32,
    pub load_timeout: Duration,
    pub policy: PaginationPolicy,
    pub copy: HomeCopy,
}

impl HomeOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            page_size: settings.content.page_size,
            load_timeout: settings.content.load_timeout,
            policy: settings.pagination.policy,
            copy: HomeCopy {
                intro_heading: settings.site.intro_heading.clone(),
                intro_body: settings.site.intro_body.clone(),
                list_heading: settings.site.list_heading.clone(),
            },
        }
    }
}

#[derive(Clone)]
pub struct HomeService {
    posts: Arc<dyn PostsRepo>,
    options: HomeOptions,
}

impl HomeService {
    pub fn new(posts: Arc<dyn PostsRepo>, options: HomeOptions) -> Self {
        Self { posts, options }
    }

    /// Fetch the window after `cursor` and turn it into a render plan.
    ///
    /// A fetch that outlives the configured deadline yields a loading plan
    /// rather than an error.
    pub async fn plan(&self, cursor: Option<&str>) -> Result<RenderPlan, HomeError> {
        let fetch = self.posts.load_page(cursor, self.options.page_size);

        let page = match tokio::time::timeout(self.options.load_timeout, fetch).await {
            Ok(Ok(page)) => Some(page),
            Ok(Err(RepoError::NotFound)) => {
                return Err(match cursor {
                    Some(cursor) => HomeError::UnknownCursor(cursor.to_string()),
                    None => HomeError::Repo(RepoError::NotFound),
                });
            }
            Ok(Err(err)) => return Err(err.into()),
            Err(_) => {
                warn!(
                    target = SOURCE,
                    cursor = cursor.unwrap_or(""),
                    timeout_ms = self.options.load_timeout.as_millis() as u64,
                    "post listing not ready before deadline"
                );
                None
            }
        };

        let plan = resolve_with(self.options.policy, page.is_none(), page.as_ref());
        debug!(
            target = SOURCE,
            cursor = cursor.unwrap_or(""),
            state = ?plan.state,
            items = plan.items.len(),
            has_previous = plan.previous_link.is_some(),
            has_next = plan.next_link.is_some(),
            "resolved home listing"
        );
        Ok(plan)
    }

    pub async fn page_context(&self, cursor: Option<&str>) -> Result<HomeContext, HomeError> {
        let plan = self.plan(cursor).await?;
        let copy = &self.options.copy;

        Ok(HomeContext {
            intro_heading: copy.intro_heading.clone(),
            intro_paragraphs: paragraphs(&copy.intro_body),
            list_heading: copy.list_heading.clone(),
            plan,
        })
    }
}

fn paragraphs(body: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}
