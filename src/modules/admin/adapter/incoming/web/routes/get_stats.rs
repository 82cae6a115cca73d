use actix_web::{get, web, Responder};

use super::backend_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::console::ContentStats;
use crate::modules::gate::adapter::incoming::web::extractors::UnlockedAdmin;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Row counts for the dashboard header
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "admin",
    responses(
        (status = 200, description = "Entry count per collection", body = inline(SuccessResponse<ContentStats>),
            example = json!({
                "success": true,
                "data": { "skills": 12, "experiences": 3, "projects": 5, "certificates": 4 }
            })),
        (status = 401, description = "Admin console locked", body = ErrorResponse),
        (status = 502, description = "Backend read failed", body = ErrorResponse),
    )
)]
#[get("/api/admin/stats")]
pub async fn get_stats_handler(_admin: UnlockedAdmin, data: web::Data<AppState>) -> impl Responder {
    match data.console.stats().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => backend_error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::content::adapter::outgoing::InMemoryContentStore;
    use crate::modules::content::application::ports::outgoing::TableClient;
    use crate::modules::content::domain::entities::Table;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{admin_cookie, unlocked_session};

    #[actix_web::test]
    async fn test_stats_count_each_collection() {
        let store = Arc::new(InMemoryContentStore::new("http://localhost"));
        for name in ["Rust", "Go"] {
            store
                .insert(
                    Table::Skills,
                    json!({ "name": name, "category": "backend", "proficiency": 70 }),
                )
                .await
                .unwrap();
        }
        store
            .insert(
                Table::Certificates,
                json!({ "title": "CKA", "issuer": "CNCF", "issue_date": "2024-01-01" }),
            )
            .await
            .unwrap();

        let app_state = TestAppStateBuilder::default().with_store(store).build();
        let session = unlocked_session(&app_state).await;
        let app = test::init_service(App::new().app_data(app_state).service(get_stats_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/stats")
            .cookie(admin_cookie(session))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"],
            json!({ "skills": 2, "experiences": 0, "projects": 0, "certificates": 1 })
        );
    }
}
