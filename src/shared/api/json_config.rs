// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Base64 image payloads ride inside certificate JSON, so the limit sits
/// above the 5 MiB upload cap plus encoding overhead.
pub const JSON_BODY_LIMIT: usize = 8 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("INVALID_JSON", &message),
            )
            .into()
        })
}
