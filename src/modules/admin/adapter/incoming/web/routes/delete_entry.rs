use actix_web::{delete, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use super::{backend_error_response, unknown_table_response};
use crate::api::schemas::ErrorResponse;
use crate::modules::content::domain::entities::Table;
use crate::modules::gate::adapter::incoming::web::extractors::UnlockedAdmin;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteQuery {
    /// Must be `true`; a delete is never issued unconfirmed.
    #[serde(default)]
    pub confirm: bool,
}

/// Delete one entry
#[utoipa::path(
    delete,
    path = "/api/admin/{table}/{id}",
    tag = "admin",
    params(
        ("table" = Table, Path, description = "Collection"),
        ("id" = Uuid, Path, description = "Entry id"),
        DeleteQuery
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 400, description = "Missing confirmation or malformed id", body = ErrorResponse),
        (status = 401, description = "Admin console locked", body = ErrorResponse),
        (status = 404, description = "Unknown collection", body = ErrorResponse),
        (status = 502, description = "Backend rejected the delete", body = ErrorResponse),
    )
)]
#[delete("/api/admin/{table}/{id}")]
pub async fn delete_entry_handler(
    _admin: UnlockedAdmin,
    path: web::Path<(String, String)>,
    query: web::Query<DeleteQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (raw_table, raw_id) = path.into_inner();

    let Ok(table) = raw_table.parse::<Table>() else {
        return unknown_table_response(&raw_table);
    };

    let Ok(id) = Uuid::parse_str(&raw_id) else {
        return ApiResponse::bad_request("INVALID_ID", "Entry id must be a UUID");
    };

    if !query.confirm {
        return ApiResponse::bad_request(
            "CONFIRMATION_REQUIRED",
            &format!("Deleting from {} requires confirm=true", table),
        );
    }

    match data.console.delete(table, id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => backend_error_response(&e),
    }
}
