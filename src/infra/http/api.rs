use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::application::{error::HttpError, pagination::RenderPlan};

use super::public::HttpState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct PlanQuery {
    after: Option<String>,
}

/// The home listing plan as JSON, for renderers other than the HTML page.
pub(super) async fn home_plan(
    State(state): State<HttpState>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<RenderPlan>, HttpError> {
    let plan = state.home.plan(query.after.as_deref()).await?;
    Ok(Json(plan))
}
