/// 카탈로그 갱신 스케줄러
/// 상품 데이터는 별도의 마켓플레이스 백엔드 마이크로서비스가 관리한다 가정
/// 본 서비스는 주기적으로 백엔드에서 카탈로그를 가져와 메모리 스냅샷을 갱신한다.
/// 종료 시 핸들을 통해 명시적으로 작업을 취소할 수 있다.
// region:    --- Imports
use crate::catalog::CatalogManager;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};
use tracing::{debug, error, info};

// endregion: --- Imports

// region:    --- Catalog Scheduler
/// 카탈로그 갱신 스케줄러
pub struct CatalogScheduler {
    catalog: Arc<CatalogManager>,
    period: Duration,
}

/// 실행 중인 스케줄러 핸들
/// 명시적 취소를 위한 종료 신호와 작업 핸들을 보관
pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

/// 스케줄러 핸들 메서드 구현
impl SchedulerHandle {
    /// 스케줄러에 종료 신호 전송
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }

    /// 종료 신호 전송 후 작업 완료 대기
    pub async fn shutdown(self) {
        self.stop();
        let _ = self.task.await;
    }
}

/// 카탈로그 갱신 스케줄러 구현
impl CatalogScheduler {
    pub fn new(catalog: Arc<CatalogManager>, period: Duration) -> Self {
        Self { catalog, period }
    }

    /// 카탈로그 갱신 스케줄러 시작
    pub fn start(&self) -> SchedulerHandle {
        let catalog = Arc::clone(&self.catalog);
        let period = self.period;
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut interval = interval(period);
            // 첫 tick은 즉시 발생하므로 건너뛴다 (초기 적재는 부트스트랩에서 수행).
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        match catalog.refresh().await {
                            Ok(count) => debug!(
                                "{:<12} --> 주기 갱신 완료: 상품 {}개",
                                "Scheduler", count
                            ),
                            Err(e) => error!(
                                "{:<12} --> 카탈로그 갱신 중 오류 발생: {}",
                                "Scheduler", e
                            ),
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        info!("{:<12} --> 스케줄러 종료", "Scheduler");
                        break;
                    }
                }
            }
        });

        SchedulerHandle { shutdown, task }
    }
}
// endregion: --- Catalog Scheduler
