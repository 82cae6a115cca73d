use actix_web::{get, web, HttpResponse, Responder};

use crate::api::schemas::{ErrorResponse, SectionDoc, SuccessResponse};
use crate::modules::content::application::sections::{
    certificates_section, experience_section, projects_section, skills_section,
};
use crate::modules::content::domain::entities::Table;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Single public section
#[utoipa::path(
    get,
    path = "/api/portfolio/{section}",
    tag = "portfolio",
    params(
        ("section" = String, Path, description = "skills, experiences, projects or certificates")
    ),
    responses(
        (status = 200, description = "Section rendered", body = inline(SuccessResponse<SectionDoc>)),
        (
            status = 404,
            description = "Unknown section",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "SECTION_NOT_FOUND", "message": "Unknown section: users" }
            })
        ),
    )
)]
#[get("/api/portfolio/{section}")]
pub async fn get_section_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section = path.into_inner();

    let Ok(table) = section.parse::<Table>() else {
        return ApiResponse::not_found(
            "SECTION_NOT_FOUND",
            &format!("Unknown section: {}", section),
        );
    };

    render(table, &data).await
}

async fn render(table: Table, data: &AppState) -> HttpResponse {
    let query = &data.query;
    match table {
        Table::Skills => ApiResponse::success(skills_section(query).await),
        Table::Experiences => ApiResponse::success(experience_section(query).await),
        Table::Projects => ApiResponse::success(projects_section(query).await),
        Table::Certificates => ApiResponse::success(certificates_section(query).await),
    }
}
