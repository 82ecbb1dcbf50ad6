use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::{catalog::CatalogService, pricing::Converter, runtime, storage::json_file::JsonCatalogStore};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr(cfg: &configs::AppConfig) -> anyhow::Result<SocketAddr> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| cfg.server.host.clone());
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(cfg.server.port);
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate().unwrap_or_else(|_| {
        let mut cfg = configs::AppConfig::default();
        cfg.storage.normalize_from_env();
        cfg.pricing.normalize_from_env();
        cfg
    });

    // 目录检查：确保 data/ 存在，否则首个写入会失败
    let data_dir = Path::new(&cfg.storage.data_file)
        .parent()
        .and_then(|p| p.to_str())
        .filter(|p| !p.is_empty())
        .unwrap_or("data");
    runtime::ensure_env(data_dir).await?;

    // 课程目录存储（文件持久化，缺失时创建空目录文件）
    let store = JsonCatalogStore::new(&cfg.storage.data_file).await?;
    let state = ServerState {
        catalog: CatalogService::new(store),
        converter: Converter::new(cfg.pricing.feed_url.as_str()),
    };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    // Bind and serve
    let addr = load_bind_addr(&cfg)?;
    info!(%addr, data_file = %cfg.storage.data_file, "starting catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
