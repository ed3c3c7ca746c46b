/// Identity of the user an operation runs on behalf of.
///
/// Every store operation takes the session explicitly; there is no ambient
/// current-user lookup below the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
