pub mod credential_repository_errors;
