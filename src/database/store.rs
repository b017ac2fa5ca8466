use std::sync::Arc;

use async_trait::async_trait;

use crate::database::TransactionFilter;
use crate::error::AppResult;
use crate::models::{CategoryCount, NewTransaction, Transaction};

pub type SharedStore = Arc<dyn TransactionStore>;

/// 查询与统计依赖的记录存储接口
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// 按 id 排序，跳过 `offset` 条后最多返回 `limit` 条
    async fn find(
        &self,
        filter: &TransactionFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<Vec<Transaction>>;

    async fn count(&self, filter: &TransactionFilter) -> AppResult<u64>;

    /// 匹配记录的价格之和，无匹配时为 0
    async fn sum_price(&self, filter: &TransactionFilter) -> AppResult<f64>;

    /// 按分类分组计数，结果按分类名排序
    async fn count_by_category(&self, filter: &TransactionFilter) -> AppResult<Vec<CategoryCount>>;

    async fn insert_many(&self, records: Vec<NewTransaction>) -> AppResult<u64>;

    async fn delete_all(&self) -> AppResult<u64>;
}
