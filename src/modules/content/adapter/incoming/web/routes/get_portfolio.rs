use actix_web::{get, web, Responder};
use tracing::info;

use crate::api::schemas::{PortfolioDoc, SuccessResponse};
use crate::modules::content::application::sections::load_portfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public portfolio
///
/// Returns every display section. Each section loads independently: one that
/// cannot be read is reported as `unavailable` while the others still render.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "All sections, each ready, empty or unavailable",
            body = inline(SuccessResponse<PortfolioDoc>),
            example = json!({
                "success": true,
                "data": {
                    "skills": { "status": "unavailable", "message": "Unable to load skills right now." },
                    "experience": { "status": "empty", "message": "No experience entries yet. Add them via the admin panel to display your timeline." },
                    "projects": { "status": "ready", "data": [] },
                    "certificates": { "status": "ready", "data": [] }
                }
            })
        ),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let portfolio = load_portfolio(&data.query).await;

    info!(
        skills_unavailable = portfolio.skills.is_unavailable(),
        experience_unavailable = portfolio.experience.is_unavailable(),
        projects_unavailable = portfolio.projects.is_unavailable(),
        certificates_unavailable = portfolio.certificates.is_unavailable(),
        "Portfolio rendered"
    );

    ApiResponse::success(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::content::adapter::outgoing::InMemoryContentStore;
    use crate::modules::content::application::ports::outgoing::TableClient;
    use crate::modules::content::domain::entities::Table;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::FailingTableClient;

    #[actix_web::test]
    async fn test_get_portfolio_renders_all_sections() {
        let store = Arc::new(InMemoryContentStore::new("http://localhost"));
        store
            .insert(
                Table::Skills,
                json!({ "name": "Rust", "category": "Backend", "proficiency": 90 }),
            )
            .await
            .unwrap();

        let app_state = TestAppStateBuilder::default().with_store(store).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_portfolio_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["skills"]["status"], "ready");
        assert_eq!(body["data"]["skills"]["data"][0]["title"], "Backend & Python");
        assert_eq!(body["data"]["projects"]["status"], "empty");
    }

    #[actix_web::test]
    async fn test_get_portfolio_degrades_when_backend_is_down() {
        let app_state = TestAppStateBuilder::default()
            .with_remote(Arc::new(FailingTableClient::new(503, "upstream unavailable")))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_portfolio_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let resp = test::call_service(&app, req).await;

        // Section failures never fail the page.
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["certificates"]["status"], "unavailable");
        assert_eq!(
            body["data"]["certificates"]["message"],
            "Unable to load certificates."
        );
        assert_eq!(
            body["data"]["experience"]["message"],
            "Unable to load experience data."
        );
    }
}
