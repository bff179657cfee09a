//! Seller Model

use serde::{Deserialize, Serialize};

/// The seller account. `password` holds the Argon2 PHC string, never plaintext.
///
/// Only the auth layer reads this; it is never part of a response.
#[derive(Clone, Serialize, Deserialize)]
pub struct Seller {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Seller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seller")
            .field("username", &self.username)
            .field("password", &"<hash>")
            .finish()
    }
}
