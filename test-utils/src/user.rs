/// A signed-in account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub cadet_id: Option<String>,
    pub access_token: String,
}

pub trait UserLike {
    fn access_token(&self) -> &str;
}

impl UserLike for User {
    fn access_token(&self) -> &str {
        &self.access_token
    }
}

/// Sends an arbitrary string as bearer token.
pub struct Token<'a>(pub &'a str);

impl UserLike for Token<'_> {
    fn access_token(&self) -> &str {
        self.0
    }
}
