//! src/store/mod.rs
//!
//! Defines the `Store`, which owns the blog and user collections. All field
//! rules run here before a write commits, and every write holds the lock for
//! its whole check-then-modify sequence.

use crate::{
    config::Config,
    domain::{Blog, BlogUpdate, NewBlog, NewUser, ObjectId, User},
    error::{Error, Result},
    fixtures,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod snapshot;

pub use snapshot::Snapshot;

/// Everything the store persists. Both collections keep insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collections {
    pub blogs: Vec<Blog>,
    pub users: Vec<User>,
}

impl Collections {
    pub fn fixtures() -> Result<Self> {
        Ok(Self {
            blogs: fixtures::initial_blogs(),
            users: fixtures::initial_users()?,
        })
    }

    fn is_empty(&self) -> bool {
        self.blogs.is_empty() && self.users.is_empty()
    }
}

#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
    snapshot: Option<Snapshot>,
}

impl Store {
    pub fn in_memory(collections: Collections) -> Self {
        Self {
            inner: Arc::new(RwLock::new(collections)),
            snapshot: None,
        }
    }

    /// Builds the store described by `config`: loads the snapshot if one is
    /// configured, then seeds fixtures into an empty store when asked to.
    pub async fn open(config: &Config) -> Result<Self> {
        let snapshot = config.data_path.as_ref().map(Snapshot::new);
        let mut collections = match &snapshot {
            Some(snapshot) => snapshot.load().await?.unwrap_or_default(),
            None => Collections::default(),
        };

        if config.seed_fixtures && collections.is_empty() {
            tracing::info!("Seeding fixture data");
            collections = Collections::fixtures()?;
            if let Some(snapshot) = &snapshot {
                snapshot.save(&collections).await?;
            }
        }

        tracing::info!(
            blogs = collections.blogs.len(),
            users = collections.users.len(),
            snapshot = ?snapshot.as_ref().map(Snapshot::path),
            "Store opened"
        );

        Ok(Self {
            inner: Arc::new(RwLock::new(collections)),
            snapshot,
        })
    }

    // --- Blogs ---

    pub async fn list_blogs(&self) -> Vec<Blog> {
        self.inner.read().await.blogs.clone()
    }

    pub async fn get_blog(&self, id: ObjectId) -> Result<Blog> {
        self.inner
            .read()
            .await
            .blogs
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(Error::NotFound("blog", id))
    }

    pub async fn create_blog(&self, new_blog: NewBlog) -> Result<Blog> {
        let blog = new_blog.into_blog(ObjectId::new())?;
        self.write(|c| {
            c.blogs.push(blog.clone());
            Ok(())
        })
        .await?;
        tracing::info!(blog_id = %blog.id, title = %blog.title, "Blog created");
        Ok(blog)
    }

    pub async fn update_blog(&self, id: ObjectId, update: BlogUpdate) -> Result<Blog> {
        let blog = self
            .write(|c| {
                let blog = c
                    .blogs
                    .iter_mut()
                    .find(|b| b.id == id)
                    .ok_or(Error::NotFound("blog", id))?;
                update.apply(blog)?;
                Ok(blog.clone())
            })
            .await?;
        tracing::info!(blog_id = %id, likes = blog.likes, "Blog updated");
        Ok(blog)
    }

    pub async fn delete_blog(&self, id: ObjectId) -> Result<()> {
        self.write(|c| {
            let index = c
                .blogs
                .iter()
                .position(|b| b.id == id)
                .ok_or(Error::NotFound("blog", id))?;
            c.blogs.remove(index);
            Ok(())
        })
        .await?;
        tracing::info!(blog_id = %id, "Blog deleted");
        Ok(())
    }

    // --- Users ---

    pub async fn list_users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let user = new_user.into_user(ObjectId::new())?;
        self.write(|c| {
            if c.users.iter().any(|u| u.username == user.username) {
                return Err(Error::DuplicateUsername);
            }
            c.users.push(user.clone());
            Ok(())
        })
        .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    // --- Whole-store operations ---

    /// Replaces the entire contents, e.g. with `Collections::fixtures()`.
    pub async fn reset(&self, collections: Collections) -> Result<()> {
        self.write(move |c| {
            *c = collections;
            Ok(())
        })
        .await?;
        tracing::info!("Store reset");
        Ok(())
    }

    pub async fn counts(&self) -> (usize, usize) {
        let guard = self.inner.read().await;
        (guard.blogs.len(), guard.users.len())
    }

    /// Runs `f` under the write lock. With a snapshot configured, `f` works on
    /// a copy that only replaces the live state once it is on disk.
    async fn write<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Collections) -> Result<T>,
    {
        let mut guard = self.inner.write().await;
        match &self.snapshot {
            None => f(&mut *guard),
            Some(snapshot) => {
                let mut next = guard.clone();
                let out = f(&mut next)?;
                snapshot.save(&next).await?;
                *guard = next;
                Ok(out)
            }
        }
    }
}
