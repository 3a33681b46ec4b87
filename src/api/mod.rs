//! src/api/mod.rs
//!
//! Defines the `ApiServer` service: the JSON REST API for blogs and users
//! plus the server-rendered blog form.

use crate::{api::protocol::HealthResponse, store::Store};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

pub mod blogs;
pub mod frontend;
pub mod protocol;
pub mod testing;
pub mod users;

/// The shared state accessible by all Axum handlers.
#[derive(Clone)]
pub struct ApiState {
    pub store: Store,
}

/// Builds the full route table. `/api/testing/reset` only exists when
/// `testing_routes` is set.
pub fn router(store: Store, testing_routes: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(frontend::index).post(frontend::create))
        .route("/api/health", get(health))
        .route("/api/blogs", get(blogs::list).post(blogs::create))
        .route(
            "/api/blogs/:id",
            get(blogs::get).put(blogs::update).delete(blogs::delete),
        )
        .route("/api/users", get(users::list).post(users::create));

    if testing_routes {
        tracing::warn!("Testing routes are enabled");
        app = app.route("/api/testing/reset", post(testing::reset));
    }

    app.layer(TraceLayer::new_for_http())
        .with_state(ApiState { store })
}

async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    let (blogs, users) = state.store.counts().await;
    Json(HealthResponse {
        status: "ok",
        blogs,
        users,
    })
}

pub struct ApiServer {
    bind_addr: SocketAddr,
    store: Store,
    testing_routes: bool,
}

impl ApiServer {
    pub fn new(bind_addr: SocketAddr, store: Store, testing_routes: bool) -> Self {
        Self {
            bind_addr,
            store,
            testing_routes,
        }
    }

    pub async fn run(self, shutdown_token: CancellationToken) -> crate::error::Result<()> {
        let app = router(self.store, self.testing_routes);

        let listener = tokio::net::TcpListener::bind(self.bind_addr).await?;
        tracing::info!(listen_addr = %listener.local_addr()?, "API server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_token.cancelled().await;
                tracing::info!("API server received shutdown signal.");
            })
            .await?;

        Ok(())
    }
}
