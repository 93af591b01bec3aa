pub mod auth_service;
pub mod authenticator;
pub mod errors;
pub mod token_service;
