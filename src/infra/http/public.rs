use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use crate::{
    application::{
        chrome::ChromeService,
        error::{ErrorReport, HttpError},
        home::{HomeError, HomeService},
        pagination::after_path,
    },
    presentation::views::{
        IndexTemplate, LayoutContext, render_not_found_response, render_template_response,
    },
};

use super::{
    api,
    middleware::{log_responses, set_request_context},
};

#[derive(Clone)]
pub struct HttpState {
    pub home: Arc<HomeService>,
    pub chrome: Arc<ChromeService>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/after/{cursor}/", get(after_index))
        .route("/after/{cursor}", get(after_redirect))
        .route("/api/v1/home", get(api::home_plan))
        .route("/_health", get(health))
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn index(State(state): State<HttpState>) -> Response {
    render_home(&state, None, "/").await
}

async fn after_index(State(state): State<HttpState>, Path(cursor): Path<String>) -> Response {
    let path = after_path(&cursor);
    render_home(&state, Some(&cursor), &path).await
}

async fn after_redirect(Path(cursor): Path<String>) -> Redirect {
    Redirect::permanent(&after_path(&cursor))
}

async fn render_home(state: &HttpState, cursor: Option<&str>, path: &str) -> Response {
    let chrome = state.chrome.for_path(path);

    match state.home.page_context(cursor).await {
        Ok(content) => {
            let view = LayoutContext::new(chrome, content);
            render_template_response(IndexTemplate { view }, StatusCode::OK)
        }
        Err(HomeError::UnknownCursor(cursor)) => {
            let mut response = render_not_found_response(state.chrome.load());
            ErrorReport::from_message(
                "infra::http::public::render_home",
                StatusCode::NOT_FOUND,
                format!("Unknown cursor `{cursor}`"),
            )
            .attach(&mut response);
            response
        }
        Err(err) => HttpError::from(err).into_response(),
    }
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn fallback(State(state): State<HttpState>) -> Response {
    render_not_found_response(state.chrome.load())
}
