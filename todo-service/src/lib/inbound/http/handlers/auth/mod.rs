use serde::Serialize;

pub mod issue_token;
pub mod refresh_token;

pub use issue_token::issue_token;
pub use refresh_token::refresh_token;

/// Bearer token response returned by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub access_token: String,
    pub token_type: String,
}

impl TokenData {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}
