use actix_web::{post, web, HttpRequest, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::gate::adapter::incoming::web::extractors::{
    gate_error_response, session_from_cookie,
};
use crate::modules::gate::adapter::incoming::web::routes::get_session::SessionStatusResponse;
use crate::modules::gate::adapter::incoming::web::session_cookie::removal_cookie;
use crate::modules::gate::application::GateError;
use crate::modules::gate::domain::GateStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Lock the admin console and end the session
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "admin",
    responses(
        (status = 200, description = "Locked", body = inline(SuccessResponse<SessionStatusResponse>)),
    )
)]
#[post("/api/admin/logout")]
pub async fn logout_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    if !data.gate.is_configured() {
        return gate_error_response(&GateError::NotConfigured);
    }

    if let Some(session) = session_from_cookie(&req) {
        if let Err(e) = data.gate.lock(session).await {
            return gate_error_response(&e);
        }
    }

    ApiResponse::success_with_cookie(
        SessionStatusResponse {
            status: GateStatus::Locked,
        },
        removal_cookie(),
    )
}
