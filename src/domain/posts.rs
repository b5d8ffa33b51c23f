//! Post listings as handed over by a content source.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Minimal display data for a single entry in the home listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Post {
    pub fn new(id: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_string),
        }
    }

    /// Title when one is set and non-empty, otherwise the id.
    pub fn label(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.id,
        }
    }
}

/// One window of posts plus the flags needed to link its neighbours.
///
/// Every field is optional: content sources are allowed to hand over partial
/// results, and readers must treat a missing flag as `false` and a missing
/// list as "nothing to show".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageResult {
    pub list: Option<Vec<Post>>,
    pub has_previous_page: Option<bool>,
    pub has_next_page: Option<bool>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub previous_page_is_first: Option<bool>,
}

impl PageResult {
    pub fn posts(&self) -> &[Post] {
        self.list.as_deref().unwrap_or_default()
    }

    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page.unwrap_or(false)
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page.unwrap_or(false)
    }

    pub fn previous_page_is_first(&self) -> bool {
        self.previous_page_is_first.unwrap_or(false)
    }
}

/// Reject listings where two posts share an id; ids double as render keys.
pub fn ensure_unique_ids(posts: &[Post]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(posts.len());
    for post in posts {
        if !seen.insert(post.id.as_str()) {
            return Err(DomainError::validation(format!(
                "duplicate post id `{}`",
                post.id
            )));
        }
    }
    Ok(())
}
