pub mod create_entry;
pub mod delete_entry;
pub mod get_stats;
pub mod list_entries;

pub use create_entry::create_entry_handler;
pub use delete_entry::delete_entry_handler;
pub use get_stats::get_stats_handler;
pub use list_entries::list_entries_handler;

use crate::modules::content::application::ports::outgoing::RemoteError;
use crate::shared::api::ApiResponse;
use actix_web::HttpResponse;
use tracing::error;

/// Backend failures are shown to the admin with the backend's own message.
pub(crate) fn backend_error_response(err: &RemoteError) -> HttpResponse {
    error!(error = %err, "Backend call failed");
    ApiResponse::bad_gateway("BACKEND_ERROR", &err.to_string())
}

pub(crate) fn unknown_table_response(table: &str) -> HttpResponse {
    ApiResponse::not_found("TABLE_NOT_FOUND", &format!("Unknown table: {}", table))
}
