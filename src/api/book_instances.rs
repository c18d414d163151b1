//! Book availability page

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::AppState;

/// Body sent when the availability list cannot be produced
pub const STATUS_NOT_FOUND: &str = "Status not found";

/// List book instances with status "Available"
#[utoipa::path(
    get,
    path = "/bookinstances/status",
    tag = "book_instances",
    responses(
        (status = 200, description = "Instances as \"<title> : <status>\"", body = Vec<String>),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    )
)]
pub async fn show_all_books_status(State(state): State<AppState>) -> Response {
    match state.services.book_instances.available_status_list().await {
        Ok(lines) => (StatusCode::OK, Json(lines)).into_response(),
        Err(e) => {
            tracing::error!("Book status query failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, STATUS_NOT_FOUND).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::tests::{body_string, get, state_with},
        error::AppError,
        models::BookInstanceRecord,
        repository::MockCatalogStore,
    };

    const PATH: &str = "/api/v1/bookinstances/status";

    #[tokio::test]
    async fn test_available_books() {
        let mut store = MockCatalogStore::new();
        store.expect_book_instances().times(1).returning(|_| {
            Ok(vec![
                BookInstanceRecord::new(Some("Mock Book Title"), "Available"),
                BookInstanceRecord::new(Some("Mock Book Title 2"), "Available"),
            ])
        });

        let response = get(state_with(store), PATH).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Vec<String> = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, vec!["Mock Book Title : Available", "Mock Book Title 2 : Available"]);
    }

    #[tokio::test]
    async fn test_empty_list_is_ok() {
        let mut store = MockCatalogStore::new();
        store.expect_book_instances().returning(|_| Ok(vec![]));

        let response = get(state_with(store), PATH).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn test_missing_title() {
        let mut store = MockCatalogStore::new();
        store
            .expect_book_instances()
            .returning(|_| Ok(vec![BookInstanceRecord::new(None, "Available")]));

        let response = get(state_with(store), PATH).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"["null : Available"]"#);
    }

    #[tokio::test]
    async fn test_store_error_is_500() {
        let mut store = MockCatalogStore::new();
        store
            .expect_book_instances()
            .returning(|_| Err(AppError::Internal("Database error".to_string())));

        let response = get(state_with(store), PATH).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, STATUS_NOT_FOUND);
    }
}
