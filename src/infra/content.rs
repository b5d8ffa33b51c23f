//! File-backed post listing.
//!
//! Posts are read once from a TOML file of `[[posts]]` tables. File order is
//! display order, newest first. Page windows are addressed by the id of the
//! post right before them, so `/after/{id}/` shows whatever follows `id`.

use std::{collections::HashMap, num::NonZeroU32, path::Path, path::PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::error::DomainError;
use crate::domain::posts::{self, PageResult, Post};

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read content file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentFile {
    posts: Vec<Post>,
}

#[derive(Debug, Clone)]
pub struct StaticContentRepo {
    posts: Vec<Post>,
    positions: HashMap<String, usize>,
}

impl StaticContentRepo {
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, DomainError> {
        posts::ensure_unique_ids(&posts)?;
        let positions = posts
            .iter()
            .enumerate()
            .map(|(index, post)| (post.id.clone(), index))
            .collect();
        Ok(Self { posts, positions })
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ContentLoadError> {
        let file: ContentFile = toml::from_str(source)?;
        Ok(Self::from_posts(file.posts)?)
    }

    pub async fn load(path: &Path) -> Result<Self, ContentLoadError> {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ContentLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let repo = Self::from_toml_str(&source)?;
        info!(
            target = "blog_home::infra::content",
            path = %path.display(),
            posts = repo.len(),
            "loaded posts"
        );
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Number of pages needed to show every post at `limit` per page.
    pub fn page_count(&self, limit: NonZeroU32) -> usize {
        let limit = usize::try_from(limit.get()).unwrap_or(usize::MAX);
        self.posts.len().div_ceil(limit)
    }

    fn window(&self, after: Option<&str>, limit: usize) -> Result<PageResult, RepoError> {
        let total = self.posts.len();
        let start = match after {
            None => 0,
            Some(cursor) => {
                let position = self.positions.get(cursor).ok_or(RepoError::NotFound)?;
                position + 1
            }
        };
        let end = start.saturating_add(limit).min(total);

        let list = self.posts[start..end].to_vec();
        let has_next_page = end < total;
        let next = has_next_page.then(|| self.posts[end - 1].id.clone());

        let has_previous_page = start > 0;
        let previous_start = start.saturating_sub(limit);
        let previous_page_is_first = has_previous_page && previous_start == 0;
        let previous = (previous_start > 0).then(|| self.posts[previous_start - 1].id.clone());

        Ok(PageResult {
            list: Some(list),
            has_previous_page: Some(has_previous_page),
            has_next_page: Some(has_next_page),
            previous,
            next,
            previous_page_is_first: Some(previous_page_is_first),
        })
    }
}

#[async_trait]
impl PostsRepo for StaticContentRepo {
    async fn load_page(
        &self,
        after: Option<&str>,
        limit: NonZeroU32,
    ) -> Result<PageResult, RepoError> {
        let limit = usize::try_from(limit.get()).map_err(|_| RepoError::InvalidInput {
            message: format!("page size {limit} exceeds platform limits"),
        })?;
        self.window(after, limit)
    }
}
