use crate::models::credential::CredentialRecord;
use crate::repositories::errors::credential_repository_errors::CredentialRepositoryError;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<CredentialRecord, CredentialRepositoryError>;
}

/// Hands out a single hardcoded record for every username.
///
/// There is no keyed lookup: `find_by_username("nobody")` returns the same
/// record as `find_by_username("admin")`, and `NotFound` is never produced.
pub struct FixedCredentialRepository {
    record: CredentialRecord,
}

impl FixedCredentialRepository {
    pub fn new(record: CredentialRecord) -> Self {
        Self { record }
    }
}

impl Default for FixedCredentialRepository {
    fn default() -> Self {
        Self::new(CredentialRecord::default())
    }
}

#[async_trait]
impl CredentialRepository for FixedCredentialRepository {
    async fn find_by_username(
        &self,
        _username: &str,
    ) -> Result<CredentialRecord, CredentialRepositoryError> {
        Ok(self.record.clone())
    }
}
