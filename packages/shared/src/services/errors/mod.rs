pub mod auth_service_errors;
pub mod authentication_errors;
pub mod token_service_errors;
