use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::{TransactionFilter, TransactionStore};
use crate::error::AppResult;
use crate::models::{CategoryCount, NewTransaction, Transaction};

/// 进程内存储：用于测试以及 `memory://` 本地运行
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i64,
    rows: Vec<Transaction>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn find(
        &self,
        filter: &TransactionFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<Vec<Transaction>> {
        let state = self.state.read().await;
        // id 递增追加，插入顺序即 id 顺序
        Ok(state
            .rows
            .iter()
            .filter(|tx| filter.matches(tx))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &TransactionFilter) -> AppResult<u64> {
        let state = self.state.read().await;
        Ok(state.rows.iter().filter(|tx| filter.matches(tx)).count() as u64)
    }

    async fn sum_price(&self, filter: &TransactionFilter) -> AppResult<f64> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .iter()
            .filter(|tx| filter.matches(tx))
            .map(|tx| tx.price)
            .sum())
    }

    async fn count_by_category(&self, filter: &TransactionFilter) -> AppResult<Vec<CategoryCount>> {
        let state = self.state.read().await;
        let mut groups: BTreeMap<&str, u64> = BTreeMap::new();
        for tx in state.rows.iter().filter(|tx| filter.matches(tx)) {
            *groups.entry(tx.category.as_str()).or_default() += 1;
        }
        Ok(groups
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect())
    }

    async fn insert_many(&self, records: Vec<NewTransaction>) -> AppResult<u64> {
        let mut state = self.state.write().await;
        let inserted = records.len() as u64;
        for record in records {
            state.next_id += 1;
            let id = state.next_id;
            state.rows.push(record.into_transaction(id));
        }
        Ok(inserted)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut state = self.state.write().await;
        let deleted = state.rows.len() as u64;
        state.rows.clear();
        Ok(deleted)
    }
}
