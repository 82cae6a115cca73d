use actix_web::{get, web, HttpRequest, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::gate::adapter::incoming::web::extractors::{
    gate_error_response, session_from_cookie,
};
use crate::modules::gate::application::GateError;
use crate::modules::gate::domain::GateStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionStatusResponse {
    pub status: GateStatus,
}

/// Admin gate state for this browser session
///
/// Browsers without an unlocked session are reported as locked; nothing is
/// stored for them.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "admin",
    responses(
        (status = 200, description = "Current gate state", body = inline(SuccessResponse<SessionStatusResponse>),
            example = json!({ "success": true, "data": { "status": "locked" } })),
        (status = 503, description = "Admin credentials are not configured", body = ErrorResponse),
    )
)]
#[get("/api/admin/session")]
pub async fn get_session_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    if !data.gate.is_configured() {
        return gate_error_response(&GateError::NotConfigured);
    }

    match data.gate.status(session_from_cookie(&req)).await {
        Ok(status) => ApiResponse::success(SessionStatusResponse { status }),
        Err(e) => gate_error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::gate::adapter::outgoing::InMemorySessionStore;
    use crate::modules::gate::domain::SESSION_COOKIE;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME};

    #[actix_web::test]
    async fn test_first_visit_is_locked_without_a_cookie() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_session_store(sessions.clone())
                        .build(),
                )
                .service(get_session_handler),
        )
        .await;

        for _ in 0..100 {
            let req = test::TestRequest::get().uri("/api/admin/session").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert!(resp.response().cookies().next().is_none());

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["data"]["status"], "locked");
        }

        assert!(sessions.is_empty().await);
    }

    #[actix_web::test]
    async fn test_unknown_session_reports_locked() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/session")
            .cookie(Cookie::new(SESSION_COOKIE, uuid::Uuid::new_v4().to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "locked");
    }

    #[actix_web::test]
    async fn test_unlocked_session_reports_unlocked() {
        let app_state = TestAppStateBuilder::default().build();
        let session = app_state
            .gate
            .unlock(None, TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
            .await
            .unwrap();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_session_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/session")
            .cookie(Cookie::new(SESSION_COOKIE, session.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "unlocked");
    }

    #[actix_web::test]
    async fn test_unconfigured_gate_blocks_admin() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .without_admin_credentials()
                        .build(),
                )
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/admin/session").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ADMIN_NOT_CONFIGURED");
    }
}
