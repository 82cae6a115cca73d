use crate::api::schemas::{
    ErrorDetail, ErrorResponse, PortfolioDoc, RowsResponse, SectionDoc, SuccessResponse,
};
use crate::modules::gate::domain::SESSION_COOKIE;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

// Admin
use crate::modules::admin::adapter::incoming::web::routes::create_entry::{
    CreatedEntry, ImagePayload,
};
use crate::modules::admin::application::console::ContentStats;
use crate::modules::admin::application::validation::{
    CertificateForm, ExperienceForm, FieldError, LoginForm, ProjectForm, SkillForm,
};
use crate::modules::content::domain::entities::Table;
use crate::modules::gate::adapter::incoming::web::routes::get_session::SessionStatusResponse;
use crate::modules::gate::domain::GateStatus;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Public portfolio sections and the password-gated admin console"
    ),
    paths(
        // Public endpoints
        crate::modules::content::adapter::incoming::web::routes::get_portfolio::get_portfolio_handler,
        crate::modules::content::adapter::incoming::web::routes::get_section::get_section_handler,

        // Gate endpoints
        crate::modules::gate::adapter::incoming::web::routes::get_session::get_session_handler,
        crate::modules::gate::adapter::incoming::web::routes::login::login_handler,
        crate::modules::gate::adapter::incoming::web::routes::logout::logout_handler,

        // Admin endpoints
        crate::modules::admin::adapter::incoming::web::routes::get_stats::get_stats_handler,
        crate::modules::admin::adapter::incoming::web::routes::list_entries::list_entries_handler,
        crate::modules::admin::adapter::incoming::web::routes::create_entry::create_entry_handler,
        crate::modules::admin::adapter::incoming::web::routes::delete_entry::delete_entry_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            SuccessResponse<PortfolioDoc>,
            RowsResponse,

            // Public
            PortfolioDoc,
            SectionDoc,
            Table,

            // Gate
            GateStatus,
            LoginForm,
            SessionStatusResponse,

            // Admin
            SkillForm,
            ExperienceForm,
            ProjectForm,
            CertificateForm,
            ImagePayload,
            CreatedEntry,
            ContentStats,
            FieldError
        )
    ),
    modifiers(&SessionCookieAddon),
    tags(
        (name = "portfolio", description = "Public display sections"),
        (name = "admin", description = "Admin console, unlocked per browser session"),
    )
)]
pub struct ApiDoc;

struct SessionCookieAddon;

impl utoipa::Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "AdminSession",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE,
                    "Set by POST /api/admin/login",
                ))),
            )
        }
    }
}
