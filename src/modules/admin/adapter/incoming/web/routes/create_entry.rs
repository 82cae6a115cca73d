use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{backend_error_response, unknown_table_response};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::console::{AdminConsole, SubmitError};
use crate::modules::admin::application::validation::{
    CertificateForm, EntityForm, ExperienceForm, ProjectForm, SkillForm, ValidationErrors,
};
use crate::modules::content::application::ports::outgoing::UploadFile;
use crate::modules::content::domain::entities::Table;
use crate::modules::gate::adapter::incoming::web::extractors::UnlockedAdmin;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

/// Image attached to a certificate, sent inline.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ImagePayload {
    #[schema(example = "cka-badge.png")]
    pub file_name: String,
    #[schema(example = "image/png")]
    pub content_type: String,
    /// Standard base64, no data-URL prefix.
    pub data_base64: String,
}

impl ImagePayload {
    fn into_upload(self) -> Result<UploadFile, ValidationErrors> {
        let bytes = STANDARD
            .decode(self.data_base64.trim())
            .map_err(|_| ValidationErrors::single("image", "Image data is not valid base64."))?;
        Ok(UploadFile::new(self.file_name, self.content_type, bytes))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedEntry {
    pub id: Uuid,
    pub table: Table,
}

fn validation_response(errors: &ValidationErrors) -> HttpResponse {
    ApiResponse::error_with_details(
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        &errors.to_string(),
        errors.fields(),
    )
}

fn submit_error_response(err: &SubmitError) -> HttpResponse {
    match err {
        SubmitError::Invalid(errors) => validation_response(errors),
        SubmitError::Upload(e) => {
            error!(error = %e, "Certificate image upload failed");
            ApiResponse::bad_gateway("UPLOAD_FAILED", &err.to_string())
        }
        SubmitError::Insert(e) => backend_error_response(e),
        SubmitError::Encode(e) => {
            error!(error = %e, "Failed to encode record");
            ApiResponse::internal_error()
        }
    }
}

/// Splits the optional `image` member off the body and decodes the form.
fn read_body<F: EntityForm + DeserializeOwned>(
    mut body: Value,
) -> Result<(F, Option<UploadFile>), HttpResponse> {
    let image = match body.as_object_mut().and_then(|m| m.remove("image")) {
        None | Some(Value::Null) => None,
        Some(raw) => {
            let payload: ImagePayload = serde_json::from_value(raw)
                .map_err(|e| ApiResponse::bad_request("INVALID_BODY", &e.to_string()))?;
            Some(
                payload
                    .into_upload()
                    .map_err(|errors| validation_response(&errors))?,
            )
        }
    };

    let form: F = serde_json::from_value(body)
        .map_err(|e| ApiResponse::bad_request("INVALID_BODY", &e.to_string()))?;

    Ok((form, image))
}

async fn create<F: EntityForm + DeserializeOwned>(console: &AdminConsole, body: Value) -> HttpResponse {
    let (form, image) = match read_body::<F>(body) {
        Ok(parts) => parts,
        Err(resp) => return resp,
    };

    match console.submit(&form, image).await {
        Ok(id) => ApiResponse::created(CreatedEntry { id, table: F::TABLE }),
        Err(e) => submit_error_response(&e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a content entry
///
/// Body is the form of the target table. Certificates may carry an `image`.
/// Upload and insert are all-or-nothing: a failed upload creates no record.
#[utoipa::path(
    post,
    path = "/api/admin/{table}",
    tag = "admin",
    params(("table" = Table, Path, description = "Target collection")),
    request_body(content = CertificateForm, description = "One of SkillForm, ExperienceForm, ProjectForm or CertificateForm (+ image)"),
    responses(
        (status = 201, description = "Entry created", body = inline(SuccessResponse<CreatedEntry>)),
        (
            status = 400,
            description = "Field validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid fields: proficiency",
                    "details": [{ "field": "proficiency", "message": "Proficiency must be a whole number between 0 and 100." }]
                }
            })
        ),
        (status = 401, description = "Admin console locked", body = ErrorResponse),
        (status = 502, description = "Backend rejected the upload or insert", body = ErrorResponse),
        (status = 503, description = "Admin credentials are not configured", body = ErrorResponse),
    )
)]
#[post("/api/admin/{table}")]
pub async fn create_entry_handler(
    _admin: UnlockedAdmin,
    path: web::Path<String>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let table = path.into_inner();
    let body = body.into_inner();
    let console = &data.console;

    match table.parse::<Table>() {
        Ok(Table::Skills) => create::<SkillForm>(console, body).await,
        Ok(Table::Experiences) => create::<ExperienceForm>(console, body).await,
        Ok(Table::Projects) => create::<ProjectForm>(console, body).await,
        Ok(Table::Certificates) => create::<CertificateForm>(console, body).await,
        Err(_) => unknown_table_response(&table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::json;
    use std::sync::Arc;

    use crate::modules::admin::application::upload_policy::UploadPolicy;
    use crate::modules::content::adapter::outgoing::InMemoryContentStore;
    use crate::modules::content::application::ports::outgoing::TableClient;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{admin_cookie, unlocked_session};
    use crate::tests::support::stubs::FailingObjectStorage;

    #[actix_web::test]
    async fn test_create_skill_success() {
        let store = Arc::new(InMemoryContentStore::new("http://localhost"));
        let app_state = TestAppStateBuilder::default().with_store(store.clone()).build();
        let session = unlocked_session(&app_state).await;
        let app =
            test::init_service(App::new().app_data(app_state).service(create_entry_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/skills")
            .cookie(admin_cookie(session))
            .set_json(json!({ "name": "Rust", "category": "backend", "proficiency": "85" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["table"], "skills");

        let rows = store
            .select(Table::Skills, Table::Skills.order())
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], body["data"]["id"]);
        assert_eq!(rows[0]["proficiency"], 85);
    }

    #[actix_web::test]
    async fn test_create_requires_unlocked_session() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(create_entry_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/skills")
            .set_json(json!({ "name": "Rust", "category": "backend", "proficiency": 85 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_validation_errors_list_every_field() {
        let app_state = TestAppStateBuilder::default().build();
        let session = unlocked_session(&app_state).await;
        let app =
            test::init_service(App::new().app_data(app_state).service(create_entry_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .cookie(admin_cookie(session))
            .set_json(json!({
                "title": "X",
                "summary": "short",
                "tech_stack": "",
                "live_url": "nope"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        let fields: Vec<&str> = body["error"]["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["title", "summary", "tech_stack", "live_url"]);
    }

    #[actix_web::test]
    async fn test_certificate_with_image_stores_public_url() {
        let store = Arc::new(InMemoryContentStore::new("http://localhost"));
        let app_state = TestAppStateBuilder::default().with_store(store.clone()).build();
        let session = unlocked_session(&app_state).await;
        let app =
            test::init_service(App::new().app_data(app_state).service(create_entry_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/certificates")
            .cookie(admin_cookie(session))
            .set_json(json!({
                "title": "CKA",
                "issuer": "CNCF",
                "issue_date": "2024-02-05",
                "image": {
                    "file_name": "badge.png",
                    "content_type": "image/png",
                    "data_base64": STANDARD.encode([137u8, 80, 78, 71])
                }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        assert_eq!(store.object_count().await, 1);

        let rows = store
            .select(Table::Certificates, Table::Certificates.order())
            .await
            .unwrap();
        let url = rows[0]["image_url"].as_str().unwrap();
        assert!(url.starts_with("http://localhost/storage/v1/object/public/certificates/certificates/"));
    }

    #[actix_web::test]
    async fn test_failed_upload_creates_no_certificate() {
        let store = Arc::new(InMemoryContentStore::new("http://localhost"));
        let app_state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .with_storage(Arc::new(FailingObjectStorage))
            .build();
        let session = unlocked_session(&app_state).await;
        let app =
            test::init_service(App::new().app_data(app_state).service(create_entry_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/certificates")
            .cookie(admin_cookie(session))
            .set_json(json!({
                "title": "CKA",
                "issuer": "CNCF",
                "issue_date": "2024-02-05",
                "image": {
                    "file_name": "badge.png",
                    "content_type": "image/png",
                    "data_base64": STANDARD.encode([1u8, 2, 3])
                }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UPLOAD_FAILED");

        let rows = store
            .select(Table::Certificates, Table::Certificates.order())
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[actix_web::test]
    async fn test_bad_base64_is_field_error() {
        let app_state = TestAppStateBuilder::default().build();
        let session = unlocked_session(&app_state).await;
        let app =
            test::init_service(App::new().app_data(app_state).service(create_entry_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/certificates")
            .cookie(admin_cookie(session))
            .set_json(json!({
                "title": "CKA",
                "issuer": "CNCF",
                "issue_date": "2024-02-05",
                "image": { "file_name": "a.png", "content_type": "image/png", "data_base64": "%%%" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["details"][0]["field"], "image");
    }

    #[actix_web::test]
    async fn test_oversized_image_is_field_error_and_nothing_is_stored() {
        let store = Arc::new(InMemoryContentStore::new("http://localhost"));
        let app_state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .with_upload_policy(UploadPolicy {
                max_file_size_bytes: 2,
                ..UploadPolicy::default()
            })
            .build();
        let session = unlocked_session(&app_state).await;
        let app =
            test::init_service(App::new().app_data(app_state).service(create_entry_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/certificates")
            .cookie(admin_cookie(session))
            .set_json(json!({
                "title": "CKA",
                "issuer": "CNCF",
                "issue_date": "2024-02-05",
                "image": {
                    "file_name": "badge.png",
                    "content_type": "image/png",
                    "data_base64": STANDARD.encode([137u8, 80, 78, 71])
                }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["details"][0]["field"], "image");

        assert_eq!(store.object_count().await, 0);
        let rows = store
            .select(Table::Certificates, Table::Certificates.order())
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_table_is_not_found() {
        let app_state = TestAppStateBuilder::default().build();
        let session = unlocked_session(&app_state).await;
        let app =
            test::init_service(App::new().app_data(app_state).service(create_entry_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/users")
            .cookie(admin_cookie(session))
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
