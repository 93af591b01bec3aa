use std::fmt;

#[derive(Debug)]
pub enum TokenServiceError {
    Encoding(String),
    InvalidToken,
    ExpiredToken,
}

impl fmt::Display for TokenServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenServiceError::Encoding(msg) => write!(f, "JWT encoding error: {}", msg),
            TokenServiceError::InvalidToken => write!(f, "Invalid JWT token"),
            TokenServiceError::ExpiredToken => write!(f, "JWT token has expired"),
        }
    }
}

impl std::error::Error for TokenServiceError {}
