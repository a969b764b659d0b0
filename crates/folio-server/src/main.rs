mod config;
mod hot_reload;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use folio_router::{Params, RouteTable};
use folio_site::{fallback_page, route_table, Page};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_livereload::LiveReloadLayer;
use tracing::{debug, info};

use crate::config::Config;
use crate::hot_reload::create_watcher;

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    table: Arc<RouteTable<Page>>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    let table = route_table();
    info!("Registered {} routes", table.len());
    for pattern in table.patterns() {
        info!("  {} -> page", pattern);
    }

    let state = AppState {
        table: Arc::new(table),
    };

    let app = Router::new()
        .route("/", get(index_handler))
        .nest_service("/static", ServeDir::new(&config.site.static_dir))
        .route("/*path", get(page_handler))
        .with_state(state);

    // Dev livereload: watch static assets and nudge connected browsers.
    let app = if config.dev.hot_reload {
        let livereload = LiveReloadLayer::new();
        let reloader = livereload.reloader();

        match create_watcher(&config.dev.watch_paths) {
            Ok(watcher) => {
                let mut rx = watcher.subscribe();
                tokio::spawn(async move {
                    let _watcher = watcher;
                    while let Ok(change) = rx.recv().await {
                        info!("Asset changed: {:?}", change.path);
                        reloader.reload();
                    }
                });
            }
            Err(e) => eprintln!("Failed to create asset watcher: {}", e),
        }

        app.layer(livereload)
    } else {
        app
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Serving {} at http://{}", config.project.name, addr);
    axum::serve(listener, app).await.unwrap();
}

async fn index_handler(State(state): State<AppState>) -> Response {
    respond(&state, "/")
}

async fn page_handler(
    State(state): State<AppState>,
    axum::extract::Path(path): axum::extract::Path<String>,
) -> Response {
    let route = format!("/{}", path);
    respond(&state, &route)
}

/// Matches a path against the route table; unmatched paths get the
/// fallback page with a 404 status.
fn respond(state: &AppState, path: &str) -> Response {
    match state.table.match_path(path) {
        Some(m) => {
            debug!(path, pattern = m.pattern, "dispatch");
            Html((m.page)(&m.params).into_string()).into_response()
        }
        None => {
            debug!(path, "no route matched");
            let body = (fallback_page())(&Params::new()).into_string();
            (StatusCode::NOT_FOUND, Html(body)).into_response()
        }
    }
}
