// region:    --- Imports
use crate::catalog::{BackendItemSource, CatalogManager};
use crate::scheduler::CatalogScheduler;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

// endregion: --- Imports

// region:    --- Modules
mod catalog;
mod handlers;
mod listing;
mod scheduler;
mod search;

// endregion: --- Modules

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // CatalogManager 생성 (백엔드 상품 소스 연결)
    let catalog = Arc::new(CatalogManager::new(Box::new(BackendItemSource::new())));

    // 초기 카탈로그 적재
    // 실패해도 빈 카탈로그로 기동하고 주기 갱신에서 재시도한다.
    match catalog.refresh().await {
        Ok(count) => info!("{:<12} --> 초기 카탈로그 적재 성공: 상품 {}개", "Main", count),
        Err(e) => warn!("{:<12} --> 초기 카탈로그 적재 실패: {}", "Main", e),
    }

    // 카탈로그 갱신 스케줄러 시작 (0이면 비활성화)
    let refresh_secs = std::env::var("CATALOG_REFRESH_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(30);
    let _scheduler_handle = if refresh_secs > 0 {
        let scheduler =
            CatalogScheduler::new(Arc::clone(&catalog), Duration::from_secs(refresh_secs));
        Some(scheduler.start())
    } else {
        info!("{:<12} --> 카탈로그 갱신 스케줄러 비활성화", "Main");
        None
    };

    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = Router::new()
        .route("/items", get(handlers::handle_get_items))
        .route("/items/search", get(handlers::handle_search_items))
        .route("/items/:id", get(handlers::handle_get_item))
        .route("/catalog/refresh", post(handlers::handle_refresh_catalog))
        .layer(cors)
        .with_state(catalog);

    // 리스너 생성
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
