//! Catalog browsing handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use newsdesk::{Category, Engine, GroupSummary, MainGroup, Selection};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response listing every main category.
#[derive(Serialize)]
pub struct GroupsResponse {
    pub groups: Vec<GroupSummary>,
    pub total_categories: usize,
    pub ungrouped: usize,
}

/// Categories of one main category.
#[derive(Serialize)]
pub struct GroupCategoriesResponse {
    pub group: MainGroup,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub categories: Vec<Category>,
}

/// GET /api/groups
pub async fn list_groups(State(state): State<AppState>) -> Json<GroupsResponse> {
    let selection = Selection::filter([]);
    let engine = Engine::new(&state.catalog, &selection);

    Json(GroupsResponse {
        groups: engine.group_summaries(),
        total_categories: state.catalog.len(),
        ungrouped: state.catalog.stats().ungrouped,
    })
}

/// GET /api/groups/:group/categories
pub async fn group_categories(
    State(state): State<AppState>,
    Path(group): Path<String>,
) -> Result<Json<GroupCategoriesResponse>, ApiError> {
    let group: MainGroup = group
        .parse()
        .map_err(|_| ApiError::NotFound(format!("Unknown main category: {}", group)))?;
    let selection = Selection::filter([]);
    let engine = Engine::new(&state.catalog, &selection);

    Ok(Json(GroupCategoriesResponse {
        group,
        label: group.label(),
        icon: group.icon(),
        color: group.color(),
        categories: engine
            .sub_categories_for(group)
            .into_iter()
            .cloned()
            .collect(),
    }))
}
