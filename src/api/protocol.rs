//! src/api/protocol.rs
//!
//! Response shapes that differ from the stored records.

use crate::domain::{ObjectId, User};
use serde::{Deserialize, Serialize};

/// A user as clients see it. The password hash never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: ObjectId,
    pub username: String,
    pub name: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub blogs: usize,
    pub users: usize,
}
