pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

/// Username/password/enabled tuple checked during authentication.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialRecord {
    pub username: String,
    pub password: String,
    pub enabled: bool,
}

impl CredentialRecord {
    pub fn new(username: String, password: String) -> Self {
        CredentialRecord {
            username,
            password,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    // Plain comparison, passwords are not hashed.
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}

impl Default for CredentialRecord {
    fn default() -> Self {
        CredentialRecord::new(DEFAULT_USERNAME.to_string(), DEFAULT_PASSWORD.to_string())
    }
}
