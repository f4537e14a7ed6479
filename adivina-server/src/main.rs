use crate::{
    config::load_config,
    game::{AppState, GameHost},
    hint::HintService,
    storage::StatsStore,
};
use adivina_data::{StatsLedger, WordCatalog};
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod api;
mod config;
mod game;
mod hint;
mod storage;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = load_config();
    info!("starting adivina server");

    let catalog = Arc::new(WordCatalog::builtin());
    let stats = Arc::new(StatsStore::new(&config.stats_file));
    let hints = Arc::new(HintService::new(
        Arc::clone(&catalog),
        config.ai_hints,
        config.hint_delay_ms,
    ));
    let state = Arc::new(AppState {
        host: GameHost::new(
            catalog,
            Arc::clone(&hints),
            Arc::clone(&stats) as Arc<dyn StatsLedger>,
        ),
        hints,
        stats,
    });

    let app = Router::new()
        .route("/api/game", get(api::get_game).post(api::create_game))
        .route("/api/game/guess", post(api::submit_guess))
        .route("/api/game/hint", post(api::game_hint))
        .route("/api/hint", get(api::hint_info).post(api::request_hint))
        .route("/api/stats", get(api::get_stats).delete(api::reset_stats))
        .fallback_service(
            ServeDir::new(&config.public_dir)
                .not_found_service(ServeFile::new(format!("{}/index.html", config.public_dir))),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from((config.address, config.port));
    info!("listening on {addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("failed to open server");
}
