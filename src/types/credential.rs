use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Feedbin account credentials, held only in memory for the lifetime of one
/// import session. Zeroized on drop; never persisted, never logged.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

// Manual Debug so the password can never leak through `{:?}` formatting.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
