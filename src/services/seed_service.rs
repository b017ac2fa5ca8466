use std::sync::Arc;

use tokio::sync::Mutex;

use crate::database::SharedStore;
use crate::error::AppResult;
use crate::external::{TransactionFeed, parse_feed};
use crate::models::SeedResponse;

#[derive(Clone)]
pub struct SeedService {
    store: SharedStore,
    feed: Arc<dyn TransactionFeed>,
    // 同一进程内的导入串行执行，避免两次删除/插入交错
    reseed_lock: Arc<Mutex<()>>,
}

impl SeedService {
    pub fn new(store: SharedStore, feed: Arc<dyn TransactionFeed>) -> Self {
        Self {
            store,
            feed,
            reseed_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 从第三方数据源重新导入全部交易记录。
    ///
    /// 数据源返回内容先校验再清表，校验失败时原有数据保持不变。
    /// 读请求不参与加锁，导入过程中可能短暂读到空表。
    pub async fn reseed(&self) -> AppResult<SeedResponse> {
        let _guard = self.reseed_lock.lock().await;

        log::info!("Fetching data from third-party API...");
        let payload = self.feed.fetch().await?;
        let records = parse_feed(payload)?;
        log::info!(
            "Fetched {} records. Inserting into database...",
            records.len()
        );

        let deleted = self.store.delete_all().await?;
        log::debug!("Deleted {deleted} existing transactions");

        let inserted = self.store.insert_many(records).await?;
        log::info!("Inserted {inserted} records into the database.");

        Ok(SeedResponse {
            message: "Database initialized with seed data.".to_string(),
            inserted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{MemoryTransactionStore, TransactionFilter, TransactionStore};
    use crate::error::AppError;
    use crate::test_support::{StaticFeed, record, sample_feed};
    use chrono::Month;
    use serde_json::json;

    async fn march_count(store: &MemoryTransactionStore) -> u64 {
        store
            .count(&TransactionFilter::for_month(Month::March))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_reseed_replaces_existing_records() {
        let store = Arc::new(MemoryTransactionStore::new());
        store
            .insert_many(vec![record("stale", 1.0, 3, true); 5])
            .await
            .unwrap();

        let service = SeedService::new(store.clone(), Arc::new(StaticFeed::ok(sample_feed())));
        let resp = service.reseed().await.unwrap();

        assert_eq!(resp.inserted, 3);
        assert_eq!(march_count(&store).await, 2);
        let titles: Vec<String> = store
            .find(&TransactionFilter::for_month(Month::March), 0, 10)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert!(!titles.contains(&"stale".to_string()));
    }

    #[tokio::test]
    async fn test_reseed_twice_does_not_accumulate() {
        let store = Arc::new(MemoryTransactionStore::new());
        let service = SeedService::new(store.clone(), Arc::new(StaticFeed::ok(sample_feed())));
        service.reseed().await.unwrap();
        service.reseed().await.unwrap();
        assert_eq!(march_count(&store).await, 2);
    }

    #[tokio::test]
    async fn test_empty_or_non_array_feed_fails_and_leaves_store_empty() {
        for payload in [json!([]), json!({ "items": [] }), json!(42)] {
            let store = Arc::new(MemoryTransactionStore::new());
            let service = SeedService::new(store.clone(), Arc::new(StaticFeed::ok(payload)));
            let err = service.reseed().await.unwrap_err();
            assert!(matches!(err, AppError::ExternalApiError(_)));
            assert_eq!(march_count(&store).await, 0);
        }
    }

    #[tokio::test]
    async fn test_feed_failure_keeps_existing_records() {
        let store = Arc::new(MemoryTransactionStore::new());
        store.insert_many(vec![record("kept", 1.0, 3, true)]).await.unwrap();

        let feed = Arc::new(StaticFeed::failing("connection refused"));
        let service = SeedService::new(store.clone(), feed);
        let err = service.reseed().await.unwrap_err();
        assert!(matches!(err, AppError::ExternalApiError(_)));
        assert_eq!(march_count(&store).await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_reseeds_are_serialised() {
        let store = Arc::new(MemoryTransactionStore::new());
        let service = SeedService::new(store.clone(), Arc::new(StaticFeed::ok(sample_feed())));

        let (a, b) = tokio::join!(service.reseed(), service.reseed());
        assert!(a.is_ok() && b.is_ok());
        assert_eq!(march_count(&store).await, 2);
    }
}
