use async_trait::async_trait;
use market_search_service::catalog::{CatalogManager, ItemSource};
use market_search_service::listing::model::{Item, ListingType};
use market_search_service::scheduler::CatalogScheduler;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::time::Duration;

/// 테스트용 상품 생성
fn test_item(id: &str, title: &str) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} 테스트 상품입니다.", title),
        category: "furniture".to_string(),
        condition: "Used".to_string(),
        listing_type: ListingType::Fixed,
        price: Some(10000),
        starting_bid: None,
        current_bid: None,
        bid_increment: None,
        views: 0,
        created_at: None,
    }
}

/// 테스트용 메모리 상품 소스
/// 호출 횟수를 기록하고, 지정된 횟수 이후에는 실패를 반환
struct StubItemSource {
    items: Vec<Item>,
    calls: AtomicUsize,
    fail_after: usize,
}

impl StubItemSource {
    fn new(items: Vec<Item>) -> Self {
        StubItemSource {
            items,
            calls: AtomicUsize::new(0),
            fail_after: usize::MAX,
        }
    }

    fn failing_after(items: Vec<Item>, fail_after: usize) -> Self {
        StubItemSource {
            items,
            calls: AtomicUsize::new(0),
            fail_after,
        }
    }
}

#[async_trait]
impl ItemSource for StubItemSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call >= self.fail_after {
            return Err("백엔드 연결 실패".to_string());
        }
        Ok(self.items.clone())
    }
}

/// 카탈로그 갱신 테스트
#[tokio::test]
async fn test_catalog_refresh() {
    let source = StubItemSource::new(vec![test_item("1", "의자"), test_item("2", "책상")]);
    let catalog = CatalogManager::new(Box::new(source));

    assert!(catalog.is_empty().await);

    let count = catalog.refresh().await.expect("갱신 실패");
    assert_eq!(count, 2);
    assert_eq!(catalog.len().await, 2);

    let snapshot = catalog.snapshot().await;
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].id, "1");
}

/// 상품 id 조회 테스트
#[tokio::test]
async fn test_catalog_get_item() {
    let source = StubItemSource::new(vec![test_item("abc", "의자")]);
    let catalog = CatalogManager::new(Box::new(source));
    catalog.refresh().await.expect("갱신 실패");

    let found = catalog.get_item("abc").await;
    assert!(found.is_some());
    assert_eq!(found.unwrap().title, "의자");

    assert!(catalog.get_item("missing").await.is_none());
}

/// 갱신 실패 시 기존 스냅샷 유지 테스트
#[tokio::test]
async fn test_catalog_keeps_snapshot_on_failure() {
    let source = StubItemSource::failing_after(vec![test_item("1", "의자")], 1);
    let catalog = CatalogManager::new(Box::new(source));

    // 첫 번째 갱신은 성공
    catalog.refresh().await.expect("첫 갱신 실패");
    assert_eq!(catalog.len().await, 1);

    // 두 번째 갱신은 실패하지만 기존 스냅샷은 유지
    let result = catalog.refresh().await;
    assert!(result.is_err());
    assert_eq!(catalog.len().await, 1);
    assert_eq!(catalog.snapshot().await[0].id, "1");
}

/// 스케줄러 주기 갱신 및 명시적 취소 테스트
#[tokio::test]
async fn test_scheduler_refresh_and_cancellation() {
    let source = Arc::new(StubItemSource::new(vec![test_item("1", "의자")]));

    // Arc로 감싼 소스를 공유하기 위한 래퍼
    struct SharedSource(Arc<StubItemSource>);
    #[async_trait]
    impl ItemSource for SharedSource {
        async fn fetch_items(&self) -> Result<Vec<Item>, String> {
            self.0.fetch_items().await
        }
    }

    let catalog = Arc::new(CatalogManager::new(Box::new(SharedSource(Arc::clone(
        &source,
    )))));
    let scheduler = CatalogScheduler::new(Arc::clone(&catalog), Duration::from_millis(50));
    let handle = scheduler.start();

    // 주기 갱신이 여러 번 실행될 때까지 대기
    tokio::time::sleep(Duration::from_millis(220)).await;
    assert!(!catalog.is_empty().await);
    let calls_before_stop = source.calls.load(Ordering::SeqCst);
    assert!(calls_before_stop >= 2, "calls = {}", calls_before_stop);

    // 종료 후에는 더 이상 갱신이 실행되지 않는다
    handle.shutdown().await;
    let calls_after_stop = source.calls.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), calls_after_stop);
}
