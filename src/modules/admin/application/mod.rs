pub mod console;
pub mod tab;
pub mod upload_policy;
pub mod validation;
