#[derive(Debug)]
pub enum CredentialRepositoryError {
    NotFound,
    Backend(String),
}

impl std::fmt::Display for CredentialRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialRepositoryError::NotFound => write!(f, "Credential record not found"),
            CredentialRepositoryError::Backend(msg) => write!(f, "Credential backend error: {}", msg),
        }
    }
}

impl std::error::Error for CredentialRepositoryError {}
