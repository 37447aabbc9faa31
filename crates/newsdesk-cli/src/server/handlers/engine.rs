//! Engine handlers: every request carries its own selection.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use newsdesk::{
    Category, CategoryId, CommandResult, DisabledReason, Engine, GroupSummary, MainGroup,
    Selection, Submission,
};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for switching the main category.
#[derive(Deserialize)]
pub struct MainGroupRequest {
    #[serde(default)]
    pub selection: Selection,
    pub group: String,
}

/// Request body for toggling or promoting a category.
#[derive(Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub selection: Selection,
    pub category_id: CategoryId,
}

/// Why a category is disabled, in both machine and display form.
#[derive(Serialize)]
pub struct ReasonInfo {
    pub reason: DisabledReason,
    pub message: &'static str,
}

/// Everything a form needs to render the current selection.
#[derive(Serialize)]
pub struct StateResponse {
    pub selection: Selection,
    pub selected_categories: Vec<Category>,
    pub primary_category: Option<Category>,
    /// Disabled categories, keyed by id. Absent ids are selectable.
    pub disabled: BTreeMap<CategoryId, ReasonInfo>,
    pub groups: Vec<GroupSummary>,
}

/// Result of a command plus the selection to hold afterwards.
#[derive(Serialize)]
pub struct CommandResponse {
    #[serde(flatten)]
    pub result: CommandResult,
    pub selection: Selection,
}

/// POST /api/engine/state
pub async fn engine_state(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Json<StateResponse> {
    let engine = Engine::new(&state.catalog, &selection);

    let disabled = state
        .catalog
        .categories()
        .iter()
        .filter_map(|category| {
            engine.disabled_reason(category.category_id).map(|reason| {
                (
                    category.category_id,
                    ReasonInfo {
                        reason,
                        message: reason.message(),
                    },
                )
            })
        })
        .collect();

    Json(StateResponse {
        selected_categories: engine.selected_categories().into_iter().cloned().collect(),
        primary_category: engine.primary_category().cloned(),
        disabled,
        groups: engine.group_summaries(),
        selection,
    })
}

/// POST /api/engine/main-group
pub async fn select_main_group(
    State(state): State<AppState>,
    Json(req): Json<MainGroupRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let group: MainGroup = req
        .group
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Unknown main category: {}", req.group)))?;

    let change = Engine::new(&state.catalog, &req.selection).select_main_group(group);
    let selection = change.selection.clone();

    Ok(Json(CommandResponse {
        result: change.into_result(),
        selection,
    }))
}

/// POST /api/engine/toggle
pub async fn toggle_sub_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Json<CommandResponse> {
    let outcome = Engine::new(&state.catalog, &req.selection).toggle_sub_category(req.category_id);
    let selection = outcome.clone().apply_to(req.selection);

    Json(CommandResponse {
        result: outcome.into_result(),
        selection,
    })
}

/// POST /api/engine/primary
pub async fn set_primary(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Json<CommandResponse> {
    let outcome = Engine::new(&state.catalog, &req.selection).set_primary(req.category_id);
    let selection = outcome.clone().apply_to(req.selection);

    Json(CommandResponse {
        result: outcome.into_result(),
        selection,
    })
}

/// POST /api/engine/submission
pub async fn submission(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<Submission>, ApiError> {
    Ok(Json(Submission::from_selection(&state.catalog, &selection)?))
}
