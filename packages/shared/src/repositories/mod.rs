pub mod credential_repository;
pub mod errors;
