//! Repository traits describing content sources.

use std::num::NonZeroU32;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::posts::PageResult;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Supplies windows of posts for the home listing.
#[async_trait]
pub trait PostsRepo: Send + Sync {
    /// Load up to `limit` posts following the post identified by `after`,
    /// or the first window when `after` is `None`.
    async fn load_page(
        &self,
        after: Option<&str>,
        limit: NonZeroU32,
    ) -> Result<PageResult, RepoError>;
}
