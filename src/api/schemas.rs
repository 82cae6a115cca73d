// src/api/schemas.rs
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Invalid fields: summary")]
    pub message: String,

    /// Per-field messages when the code is `VALIDATION_ERROR`
    #[schema(value_type = Option<Vec<Object>>)]
    pub details: Option<Value>,
}

/// Documentation shape of one display section.
#[derive(Serialize, ToSchema)]
pub struct SectionDoc {
    /// `ready`, `empty` or `unavailable`
    #[schema(example = "ready")]
    pub status: String,

    /// Present when `status` is `ready`
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,

    /// Present when `status` is `empty` or `unavailable`
    #[schema(example = "Unable to load projects right now.")]
    pub message: Option<String>,
}

/// Documentation shape of the whole public page.
#[derive(Serialize, ToSchema)]
pub struct PortfolioDoc {
    pub skills: SectionDoc,
    pub experience: SectionDoc,
    pub projects: SectionDoc,
    pub certificates: SectionDoc,
}

/// Raw backend rows returned to the admin console.
#[derive(Serialize, ToSchema)]
pub struct RowsResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Value>,
}
