use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::settings::AppSettings;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::routing::{get, post};
use sqlx::{Pool, Sqlite};
use std::convert::Infallible;
use std::net::SocketAddr;
use tracing::info;

pub mod messages;
pub mod users;

pub struct RequestContext {
    pub db: Pool<Sqlite>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route(
            "/api/message",
            post(messages::send).get(messages::fetch_history),
        )
        .route("/api/users", post(users::create))
}

pub async fn index() -> &'static str {
    "Running cipher-service v0.1"
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router().with_state(state);

    let addr = SocketAddr::from((settings.app_host, settings.app_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving cipher-service on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
        })
    }
}

impl Context for RequestContext {
    fn db(&self) -> &Pool<Sqlite> {
        &self.db
    }
}
