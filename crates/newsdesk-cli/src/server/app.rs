//! Axum application setup.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Catalog
        .route("/groups", get(handlers::list_groups))
        .route("/groups/:group/categories", get(handlers::group_categories))
        // Engine
        .route("/engine/state", post(handlers::engine_state))
        .route("/engine/main-group", post(handlers::select_main_group))
        .route("/engine/toggle", post(handlers::toggle_sub_category))
        .route("/engine/primary", post(handlers::set_primary))
        .route("/engine/submission", post(handlers::submission));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    tracing::info!(%addr, "classification API listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use newsdesk::{Catalog, Category, GroupResolver, MainGroup};

    use super::*;

    fn router() -> Router {
        let catalog = Catalog::new(
            vec![
                Category::new(10, "Parliament", "parliament").with_parent("politics"),
                Category::new(11, "Elections", "elections").with_parent("politics"),
                Category::new(12, "Devolution", "devolution").with_parent("politics"),
                Category::new(13, "Diplomacy", "diplomacy").with_parent("politics"),
                Category::new(14, "Courts", "courts").with_parent("politics"),
                Category::new(20, "Football", "football").with_parent("sports"),
            ],
            &GroupResolver::new(),
        )
        .unwrap();
        create_router(AppState::new(Arc::new(catalog)))
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(body) => Body::from(body.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_list_groups() {
        let (status, body) = send(router(), "GET", "/api/groups", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["groups"].as_array().unwrap().len(), 9);
        assert_eq!(body["groups"][2]["group"], "politics");
        assert_eq!(body["groups"][2]["total"], 5);
        assert_eq!(body["groups"][2]["color"], MainGroup::Politics.color());
    }

    #[tokio::test]
    async fn test_unknown_group_is_404() {
        let (status, body) = send(router(), "GET", "/api/groups/weather/categories", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");

        let (status, body) = send(router(), "GET", "/api/groups/sports/categories", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"][0]["category_id"], 20);
        assert_eq!(body["color"], MainGroup::Sports.color());
    }

    #[tokio::test]
    async fn test_toggle_limit_is_rejected() {
        let body = json!({
            "selection": {"mode": "edit", "group": "politics", "ids": [10, 11, 12, 13]},
            "category_id": 14,
        });
        let (status, body) = send(router(), "POST", "/api/engine/toggle", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Maximum of 4 sub-categories already selected");
        assert_eq!(body["selection"]["ids"], json!([10, 11, 12, 13]));
    }

    #[tokio::test]
    async fn test_toggle_applied_returns_new_ids() {
        let body = json!({
            "selection": {"mode": "edit", "group": "politics"},
            "category_id": 10,
        });
        let (_, body) = send(router(), "POST", "/api/engine/toggle", Some(body)).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["newSelectedIds"], json!([10]));
    }

    #[tokio::test]
    async fn test_main_group_switch_clears() {
        let body = json!({
            "selection": {"mode": "edit", "group": "politics", "ids": [10, 11]},
            "group": "sports",
        });
        let (status, body) = send(router(), "POST", "/api/engine/main-group", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["newSelectedIds"], json!([]));
        assert_eq!(body["selection"]["group"], "sports");
    }

    #[tokio::test]
    async fn test_state_reports_disabled_reasons() {
        let body = json!({"mode": "edit", "group": "politics", "ids": [10]});
        let (_, body) = send(router(), "POST", "/api/engine/state", Some(body)).await;

        assert_eq!(body["primary_category"]["category_id"], 10);
        assert_eq!(body["disabled"]["20"]["reason"], "other_group");
        assert!(body["disabled"].get("11").is_none());
    }

    #[tokio::test]
    async fn test_incomplete_submission_is_422() {
        let body = json!({"mode": "edit", "group": "politics"});
        let (status, body) = send(router(), "POST", "/api/engine/submission", Some(body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Please select at least one category");

        let body = json!({"mode": "edit", "group": "politics", "ids": [11, 10]});
        let (status, body) = send(router(), "POST", "/api/engine/submission", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["primary_category_id"], 11);
    }

    #[tokio::test]
    async fn test_submission_enforces_edit_rules() {
        let cases = [
            (json!([10, 11, 12, 13, 14]), "Please select at most 4 sub-categories"),
            (json!([20, 10]), "Category 20 does not belong to Politics"),
            (json!([10, 10]), "Category 10 is selected more than once"),
        ];

        for (ids, message) in cases {
            let body = json!({"mode": "edit", "group": "politics", "ids": ids});
            let (status, body) = send(router(), "POST", "/api/engine/submission", Some(body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body["error"], "validation");
            assert_eq!(body["message"], message);
        }
    }
}
