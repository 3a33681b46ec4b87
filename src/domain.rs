//! src/domain.rs
//!
//! Core data structures for blogs and users, their identifiers, and the
//! field rules applied before anything reaches the store.

use crate::error::{Error, Result};
use rand::{rngs::OsRng, RngCore};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::{
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicU32, Ordering},
        OnceLock,
    },
    time::{SystemTime, UNIX_EPOCH},
};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 3;

// --- Identifiers ---

/// A 12-byte record identifier, exposed to clients as 24 lowercase hex chars.
///
/// Layout: 4-byte big-endian seconds since the epoch, 5 bytes of per-process
/// randomness, 3-byte wrapping counter. Ids generated by one process sort by
/// creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

impl ObjectId {
    pub fn new() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or_default();
        let process = PROCESS_UNIQUE.get_or_init(|| {
            let mut bytes = [0u8; 5];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        let count = COUNTER
            .get_or_init(|| AtomicU32::new(OsRng.next_u32()))
            .fetch_add(1, Ordering::Relaxed);

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(process);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| Error::MalformedId(s.to_string()))?;
        let bytes: [u8; 12] = bytes
            .try_into()
            .map_err(|_| Error::MalformedId(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

// --- Blogs ---

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: ObjectId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    #[serde(default)]
    pub likes: u64,
}

/// A blog as submitted by a client. Unknown fields such as `_id` or `__v`
/// are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewBlog {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

impl NewBlog {
    /// Validates the submission and assigns it the given id.
    pub fn into_blog(self, id: ObjectId) -> Result<Blog> {
        let mut missing = Vec::new();
        let title = required("title", self.title, &mut missing);
        let url = required("url", self.url, &mut missing);
        if !missing.is_empty() {
            return Err(Error::Validation(missing.join(", ")));
        }

        Ok(Blog {
            id,
            title,
            author: self.author,
            url,
            likes: self.likes.unwrap_or(0),
        })
    }
}

/// A full or partial replacement of a blog's fields.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlogUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

impl BlogUpdate {
    /// Applies every present field. The blog is left untouched if any
    /// present field is invalid.
    pub fn apply(self, blog: &mut Blog) -> Result<()> {
        let mut invalid = Vec::new();
        for (field, value) in [("title", &self.title), ("url", &self.url)] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                invalid.push(format!("`{field}` is required"));
            }
        }
        if !invalid.is_empty() {
            return Err(Error::Validation(invalid.join(", ")));
        }

        if let Some(title) = self.title {
            blog.title = title;
        }
        if let Some(author) = self.author {
            blog.author = Some(author);
        }
        if let Some(url) = self.url {
            blog.url = url;
        }
        if let Some(likes) = self.likes {
            blog.likes = likes;
        }
        Ok(())
    }
}

fn required(field: &str, value: Option<String>, missing: &mut Vec<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(format!("`{field}` is required"));
            String::new()
        }
    }
}

// --- Users ---

/// A salted SHA-256 password digest, stored as `salt_hex$digest_hex`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(password: &str) -> Self {
        let mut salt = [0u8; 16];
        OsRng.fill_bytes(&mut salt);
        Self(format!("{}${}", hex::encode(salt), digest(&salt, password)))
    }

    /// No login route exists; only the fixture and hashing tests check
    /// passwords.
    #[cfg(test)]
    pub fn verify(&self, password: &str) -> bool {
        let Some((salt_hex, expected)) = self.0.split_once('$') else {
            return false;
        };
        match hex::decode(salt_hex) {
            Ok(salt) => digest(&salt, password) == expected,
            Err(_) => false,
        }
    }
}

fn digest(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// A stored user account. Only the store sees `password_hash`; the API
/// answers with `api::protocol::UserView`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: ObjectId,
    pub username: String,
    #[serde(default)]
    pub name: String,
    pub password_hash: PasswordHash,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewUser {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl NewUser {
    /// Checks field lengths and hashes the password. Uniqueness is the
    /// store's concern.
    pub fn into_user(self, id: ObjectId) -> Result<User> {
        let username = self.username.unwrap_or_default();
        let password = self.password.unwrap_or_default();

        let mut invalid = Vec::new();
        if username.trim().chars().count() < MIN_USERNAME_LEN {
            invalid.push(format!(
                "`username` must be at least {MIN_USERNAME_LEN} characters long"
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            invalid.push(format!(
                "`password` must be at least {MIN_PASSWORD_LEN} characters long"
            ));
        }
        if !invalid.is_empty() {
            return Err(Error::Validation(invalid.join(", ")));
        }

        Ok(User {
            id,
            username: username.trim().to_string(),
            name: self.name.unwrap_or_default(),
            password_hash: PasswordHash::new(&password),
        })
    }
}
