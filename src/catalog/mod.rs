// region:    --- Imports
use crate::listing::model::Item;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Item Source Trait
/// 백엔드 상품 목록 응답 모델
#[derive(Debug, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// 상품 소스 트레이트
/// 카탈로그가 상품 컬렉션을 가져오는 외부 협력자 추상화
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<Item>, String>;
}

/// 마켓플레이스 백엔드 상품 소스 구현체
pub struct BackendItemSource {
    client: reqwest::Client,
    base_url: String,
}

/// 백엔드 상품 소스 생성
impl BackendItemSource {
    pub fn new() -> Self {
        let base_url = std::env::var("BACKEND_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: String) -> Self {
        BackendItemSource {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

impl Default for BackendItemSource {
    fn default() -> Self {
        Self::new()
    }
}

/// 백엔드 상품 소스 메서드 구현
#[async_trait]
impl ItemSource for BackendItemSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, String> {
        let url = format!("{}/api/items", self.base_url);
        info!("{:<12} --> 백엔드 상품 조회: {}", "ItemSource", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("백엔드 요청 실패: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("백엔드 응답 오류: {}", response.status()));
        }

        let body: ItemsResponse = response
            .json()
            .await
            .map_err(|e| format!("백엔드 응답 파싱 실패: {}", e))?;

        Ok(body.items)
    }
}
// endregion: --- Item Source Trait

// region:    --- Catalog Manager
/// 메모리 상품 카탈로그 매니저
/// 검색기는 항상 현재 캐시된 스냅샷을 소비한다.
pub struct CatalogManager {
    items: RwLock<Vec<Item>>,
    source: Box<dyn ItemSource>,
}

/// 카탈로그 매니저 메서드 구현
impl CatalogManager {
    /// 카탈로그 매니저 생성 (빈 카탈로그로 시작)
    pub fn new(source: Box<dyn ItemSource>) -> Self {
        CatalogManager {
            items: RwLock::new(Vec::new()),
            source,
        }
    }

    /// 상품 소스에서 카탈로그 갱신
    /// 갱신 실패 시 기존 스냅샷을 유지한다.
    pub async fn refresh(&self) -> Result<usize, String> {
        match self.source.fetch_items().await {
            Ok(fetched) => {
                let count = fetched.len();
                let mut items = self.items.write().await;
                *items = fetched;
                info!("{:<12} --> 카탈로그 갱신 성공: 상품 {}개", "Catalog", count);
                Ok(count)
            }
            Err(e) => {
                warn!(
                    "{:<12} --> 카탈로그 갱신 실패, 기존 스냅샷 유지: {}",
                    "Catalog", e
                );
                Err(e)
            }
        }
    }

    /// 현재 카탈로그 스냅샷 반환
    pub async fn snapshot(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// 상품 id로 조회
    pub async fn get_item(&self, item_id: &str) -> Option<Item> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id == item_id)
            .cloned()
    }

    /// 카탈로그 상품 수
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// 카탈로그가 비어 있는지 확인
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
// endregion: --- Catalog Manager
