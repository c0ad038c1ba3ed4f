// region:    --- Imports
use crate::catalog::CatalogManager;
use crate::search::filter::{
    search_items, FilterCriteria, ListingTypeFilter, SortKey, DEFAULT_PRICE_MAX,
};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Search Params
/// 상품 검색 쿼리 파라미터
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    /// 검색어
    pub q: Option<String>,
    /// 카테고리 (기본값 "all")
    pub category: Option<String>,
    /// 판매 방식 (all | fixed | auction)
    #[serde(default)]
    pub listing_type: ListingTypeFilter,
    /// 상품 상태 (쉼표로 구분, 예: "new,used")
    pub conditions: Option<String>,
    /// 가격 범위 하한
    pub min_price: Option<i64>,
    /// 가격 범위 상한
    pub max_price: Option<i64>,
    /// 정렬 키 (newest | price-low | price-high | popular)
    #[serde(default)]
    pub sort: SortKey,
}

/// 쿼리 파라미터를 필터 조건으로 변환
impl SearchParams {
    pub fn to_criteria(&self) -> FilterCriteria {
        let conditions = self
            .conditions
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let mut criteria = FilterCriteria {
            query: self.q.clone(),
            category: self.category.clone().unwrap_or_else(|| "all".to_string()),
            listing_type: self.listing_type,
            conditions,
            price_min: self.min_price.unwrap_or(0),
            price_max: self.max_price.unwrap_or(DEFAULT_PRICE_MAX),
        };
        criteria.normalize();
        criteria
    }
}
// endregion: --- Search Params

// region:    --- Query Handlers

/// 상품 검색 요청 처리
pub async fn handle_search_items(
    State(catalog): State<Arc<CatalogManager>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    info!("{:<12} --> 상품 검색: {:?}", "HandlerQuery", params);

    let criteria = params.to_criteria();
    let snapshot = catalog.snapshot().await;
    let results = search_items(&snapshot, &criteria, params.sort);

    Json(serde_json::json!({
        "total": results.len(),
        "items": results
    }))
    .into_response()
}

/// 모든 상품 조회
pub async fn handle_get_items(
    State(catalog): State<Arc<CatalogManager>>,
) -> impl IntoResponse {
    info!("{:<12} --> 모든 상품 조회", "HandlerQuery");
    let items = catalog.snapshot().await;
    Json(serde_json::json!({
        "total": items.len(),
        "items": items
    }))
    .into_response()
}

/// 상품 조회
pub async fn handle_get_item(
    State(catalog): State<Arc<CatalogManager>>,
    Path(item_id): Path<String>,
) -> impl IntoResponse {
    info!("{:<12} --> 상품 조회 id: {}", "HandlerQuery", item_id);
    match catalog.get_item(&item_id).await {
        Some(item) => Json(item).into_response(),
        None => (
            axum::http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": "상품을 찾을 수 없습니다.",
                "code": "NOT_FOUND",
                "item_id": item_id
            })),
        )
            .into_response(),
    }
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// 카탈로그 즉시 갱신 요청 처리
pub async fn handle_refresh_catalog(
    State(catalog): State<Arc<CatalogManager>>,
) -> impl IntoResponse {
    info!("{:<12} --> 카탈로그 갱신 요청 처리 시작", "Command");
    match catalog.refresh().await {
        Ok(count) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({
                "message": "카탈로그가 성공적으로 갱신되었습니다.",
                "total": count
            })),
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({
                "error": e,
                "code": "UPSTREAM_FETCH_FAILED"
            })),
        )
            .into_response(),
    }
}

// endregion: --- Command Handlers
