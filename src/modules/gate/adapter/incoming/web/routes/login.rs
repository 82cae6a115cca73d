use actix_web::{http::StatusCode, post, web, HttpRequest, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::validation::LoginForm;
use crate::modules::gate::adapter::incoming::web::extractors::{
    gate_error_response, session_from_cookie,
};
use crate::modules::gate::adapter::incoming::web::routes::get_session::SessionStatusResponse;
use crate::modules::gate::adapter::incoming::web::session_cookie::session_cookie;
use crate::modules::gate::application::GateError;
use crate::modules::gate::domain::GateStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Unlock the admin console
///
/// Credentials must match the configured pair exactly. Any mismatch gets the
/// same generic error. A success always issues a new session id.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Unlocked for this browser session", body = inline(SuccessResponse<SessionStatusResponse>)),
        (status = 400, description = "Username or password missing", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid credentials" }
            })
        ),
        (status = 503, description = "Admin credentials are not configured", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn login_handler(
    req: HttpRequest,
    form: web::Json<LoginForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    if !data.gate.is_configured() {
        return gate_error_response(&GateError::NotConfigured);
    }

    if let Err(errors) = form.validate() {
        return ApiResponse::error_with_details(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            &errors.to_string(),
            errors.fields(),
        );
    }

    info!("Admin login attempt");

    match data
        .gate
        .unlock(session_from_cookie(&req), &form.username, &form.password)
        .await
    {
        Ok(session) => ApiResponse::success_with_cookie(
            SessionStatusResponse {
                status: GateStatus::Unlocked,
            },
            session_cookie(session),
        ),
        Err(e) => gate_error_response(&e),
    }
}
