use std::{future::Future, sync::Arc};

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tgrelay_proto::ApiRoute;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::{
    relay::{DocumentSender, TelegramSender},
    Settings,
};

use self::controller::*;

mod controller;
mod error;

pub use error::UploadError;

pub type SharedServerState = Arc<ServerState>;

pub struct ServerState {
    pub settings: Settings,
    pub sender: Arc<dyn DocumentSender>,
}

impl ServerState {
    pub fn new(settings: Settings) -> Self {
        let sender = Arc::new(TelegramSender::new(&settings));
        Self::with_sender(settings, sender)
    }

    pub fn with_sender(settings: Settings, sender: Arc<dyn DocumentSender>) -> Self {
        Self { settings, sender }
    }
}

pub fn router(state: SharedServerState) -> Router {
    let body_limit = state.settings.max_upload_size;
    Router::new()
        .route(ApiRoute::UploadTelegram.path(), post(upload_telegram))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_api_server(
    state: SharedServerState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(state.settings.addr()).await?;
    serve(listener, state, shutdown).await
}

pub async fn serve(
    listener: TcpListener,
    state: SharedServerState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
