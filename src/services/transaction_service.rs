use crate::database::SharedStore;
use crate::error::AppResult;
use crate::models::*;
use crate::services::ListQuery;

#[derive(Clone)]
pub struct TransactionService {
    store: SharedStore,
}

impl TransactionService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// 按月份和搜索词分页查询交易记录
    pub async fn list_transactions(&self, query: &TransactionQuery) -> AppResult<Vec<Transaction>> {
        let list_query = ListQuery::from_request(query)?;
        self.store
            .find(&list_query.filter, list_query.offset(), list_query.limit())
            .await
    }
}
