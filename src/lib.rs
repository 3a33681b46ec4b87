//! src/lib.rs
//!
//! The bloglist library crate: a JSON REST service for blogs and users,
//! and the blog entry form served alongside it.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod form;
pub mod store;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
