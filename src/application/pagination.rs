//! Home listing render plan: which posts to show and where the arrows point.

use serde::{Deserialize, Serialize};

use crate::domain::posts::{PageResult, Post};

const ROOT_PATH: &str = "/";

/// What the listing area of the home page should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListState {
    Loading,
    Empty,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostLink {
    pub key: String,
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationLink {
    pub href: String,
}

/// Declarative description of the listing, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    pub state: ListState,
    pub items: Vec<PostLink>,
    pub previous_link: Option<PaginationLink>,
    pub next_link: Option<PaginationLink>,
}

impl RenderPlan {
    fn loading() -> Self {
        Self {
            state: ListState::Loading,
            items: Vec::new(),
            previous_link: None,
            next_link: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == ListState::Loading
    }

    pub fn is_list(&self) -> bool {
        self.state == ListState::List
    }

    pub fn has_pagination(&self) -> bool {
        self.previous_link.is_some() || self.next_link.is_some()
    }
}

/// Whether arrows are derived from the page flags alone or also require a
/// non-empty listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationPolicy {
    #[default]
    Independent,
    FollowList,
}

/// Build the render plan for one home page view.
///
/// Loading wins over everything else and shows no arrows. Once data is in,
/// arrows come from the page flags regardless of whether the list is empty.
pub fn resolve(is_loading: bool, page: Option<&PageResult>) -> RenderPlan {
    resolve_with(PaginationPolicy::Independent, is_loading, page)
}

pub fn resolve_with(
    policy: PaginationPolicy,
    is_loading: bool,
    page: Option<&PageResult>,
) -> RenderPlan {
    if is_loading {
        return RenderPlan::loading();
    }

    let Some(page) = page else {
        return RenderPlan {
            state: ListState::Empty,
            items: Vec::new(),
            previous_link: None,
            next_link: None,
        };
    };

    let items: Vec<PostLink> = page.posts().iter().map(post_link).collect();
    let state = if items.is_empty() {
        ListState::Empty
    } else {
        ListState::List
    };

    let (previous_link, next_link) = match (policy, state) {
        (PaginationPolicy::FollowList, ListState::Empty) => (None, None),
        _ => (previous_link(page), next_link(page)),
    };

    RenderPlan {
        state,
        items,
        previous_link,
        next_link,
    }
}

fn post_link(post: &Post) -> PostLink {
    PostLink {
        key: post.id.clone(),
        href: post_path(&post.id),
        label: post.label().to_string(),
    }
}

fn previous_link(page: &PageResult) -> Option<PaginationLink> {
    if !page.has_previous_page() {
        return None;
    }
    if page.previous_page_is_first() {
        return Some(PaginationLink {
            href: ROOT_PATH.to_string(),
        });
    }
    page.previous.as_deref().map(|cursor| PaginationLink {
        href: after_path(cursor),
    })
}

fn next_link(page: &PageResult) -> Option<PaginationLink> {
    if !page.has_next_page() {
        return None;
    }
    page.next.as_deref().map(|cursor| PaginationLink {
        href: after_path(cursor),
    })
}

pub fn post_path(id: &str) -> String {
    format!("/blog/{id}/")
}

pub fn after_path(cursor: &str) -> String {
    format!("/after/{cursor}/")
}
