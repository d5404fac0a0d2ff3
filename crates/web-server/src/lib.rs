use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::cookie::Key;
use configuration::Settings;
use database::{Database, DbRepository, ReviewRepository};
use std::any::Any;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod error;
pub mod flash;
pub mod handlers;
pub mod views;

use error::AppError;

/// Submissions are four short text fields.
const BODY_LIMIT: usize = 64 * 1024;

/// The shared application state that all handlers can access.
///
/// It is immutable: the repository opens a fresh connection per call and the
/// key only signs cookies.
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<dyn ReviewRepository>,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(reviews: Arc<dyn ReviewRepository>, cookie_key: Key) -> Self {
        Self {
            reviews,
            cookie_key,
        }
    }
}

// Lets `SignedCookieJar` find its key in the state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Builds the full router: the three pages, the 404 fallback and the
/// middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(handlers::HOME_PATH, get(handlers::home))
        .route(
            handlers::ADD_REVIEW_PATH,
            get(handlers::add_review_form).post(handlers::submit_review),
        )
        .route(handlers::REVIEWS_PATH, get(handlers::list_reviews))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}

/// Renders the 500 page for a handler that panicked.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(detail).into_response()
}

/// The main function to configure and run the web server.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    // Note: Tracing is already initialized by the binary.
    let db = Database::new(&settings.database);
    let reviews: Arc<dyn ReviewRepository> = Arc::new(DbRepository::new(db));
    let cookie_key = Key::derive_from(settings.secret_key.as_bytes());

    let app = build_router(AppState::new(reviews, cookie_key));

    let addr = settings.server.address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received.");
}
