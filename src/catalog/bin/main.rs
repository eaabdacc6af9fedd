include!("../../lib.rs");
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use crate::books::factory::BookRepositoryRegistry;
use crate::catalog::controller::{add_book, find_all_books, find_book_by_id, remove_book, update_book};
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Configuration::from_env();
    setup_tracing(config.tracing_level()?);

    let registry = BookRepositoryRegistry::with_defaults();
    // fail at startup rather than on the first request
    let _ = registry.get(config.store.as_str())?;
    let addr = config.socket_addr()?;
    info!(store = %config.store, stores = ?registry.names(), %addr, "starting bookstore");

    let app = Router::new()
        .route("/book",
               get(find_all_books).post(add_book))
        .route("/book/:id",
               get(find_book_by_id).post(update_book).delete(remove_book))
        .with_state(AppState::new(config, registry));

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("bookstore stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
