use actix_web::{get, web, Responder};

use super::{backend_error_response, unknown_table_response};
use crate::api::schemas::{ErrorResponse, RowsResponse};
use crate::modules::content::domain::entities::Table;
use crate::modules::gate::adapter::incoming::web::extractors::UnlockedAdmin;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List a collection as the admin sees it
///
/// Rows come back in the collection's display order, straight from the
/// backend (no entity decoding).
#[utoipa::path(
    get,
    path = "/api/admin/{table}",
    tag = "admin",
    params(("table" = Table, Path, description = "Collection to list")),
    responses(
        (status = 200, description = "Rows of the collection", body = RowsResponse),
        (status = 401, description = "Admin console locked", body = ErrorResponse),
        (status = 404, description = "Unknown collection", body = ErrorResponse),
        (status = 502, description = "Backend read failed", body = ErrorResponse),
    )
)]
#[get("/api/admin/{table}")]
pub async fn list_entries_handler(
    _admin: UnlockedAdmin,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw = path.into_inner();
    let Ok(table) = raw.parse::<Table>() else {
        return unknown_table_response(&raw);
    };

    match data.console.list(table).await {
        Ok(rows) => ApiResponse::success(rows.as_ref()),
        Err(e) => backend_error_response(&e),
    }
}
