use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::error;
use uuid::Uuid;

use crate::modules::gate::application::GateError;
use crate::modules::gate::domain::SESSION_COOKIE;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A request whose browser session has unlocked the admin console.
#[derive(Debug, Clone, Copy)]
pub struct UnlockedAdmin {
    pub session: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Session id from the gate cookie, if present and well formed.
pub fn session_from_cookie(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
}

pub fn gate_error_response(err: &GateError) -> HttpResponse {
    match err {
        GateError::NotConfigured => ApiResponse::service_unavailable(
            "ADMIN_NOT_CONFIGURED",
            "Admin credentials are not configured",
        ),
        GateError::InvalidCredentials => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }
        GateError::Store(e) => {
            error!(error = %e, "Session store failure");
            ApiResponse::internal_error()
        }
    }
}

impl FromRequest for UnlockedAdmin {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let session = session_from_cookie(req);

        Box::pin(async move {
            let Some(state) = state else {
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            if !state.gate.is_configured() {
                return Err(create_api_error(gate_error_response(&GateError::NotConfigured)));
            }

            let Some(session) = session else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "ADMIN_LOCKED",
                    "Admin console is locked",
                )));
            };

            match state.gate.is_unlocked(session).await {
                Ok(true) => Ok(UnlockedAdmin { session }),
                Ok(false) => Err(create_api_error(ApiResponse::unauthorized(
                    "ADMIN_LOCKED",
                    "Admin console is locked",
                ))),
                Err(e) => Err(create_api_error(gate_error_response(&e))),
            }
        })
    }
}
