use std::ops::Bound;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::database::{TransactionFilter, TransactionStore};
use crate::entities::transaction_entity as transactions;
use crate::error::AppResult;
use crate::models::{CategoryCount, NewTransaction, Transaction};

// 单条 INSERT 的绑定参数有上限，整批导入时分块写入
const INSERT_CHUNK_SIZE: usize = 1000;

#[derive(Clone)]
pub struct SeaOrmTransactionStore {
    pool: DatabaseConnection,
}

impl SeaOrmTransactionStore {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }
}

/// LIKE 模式中的通配符需要转义，搜索词按字面匹配
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn contains_ignore_case(column: transactions::Column, needle: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Condition::all().add(
        Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\')),
    )
}

fn build_condition(filter: &TransactionFilter) -> Condition {
    // month 已经是校验过的 1..=12，可以直接拼接
    let mut cond = Condition::all().add(Expr::cust(
        format!(
            "EXTRACT(MONTH FROM \"date_of_sale\" AT TIME ZONE 'UTC') = {}",
            filter.month.number_from_month()
        )
        .as_str(),
    ));

    if let Some(search) = &filter.search {
        let mut any = Condition::any()
            .add(contains_ignore_case(transactions::Column::Title, search.text()))
            .add(contains_ignore_case(
                transactions::Column::Description,
                search.text(),
            ));
        if let Some(price) = search.price() {
            any = any.add(transactions::Column::Price.eq(price));
        }
        cond = cond.add(any);
    }

    if let Some(range) = &filter.price {
        cond = match range.min {
            Bound::Included(v) => cond.add(transactions::Column::Price.gte(v)),
            Bound::Excluded(v) => cond.add(transactions::Column::Price.gt(v)),
            Bound::Unbounded => cond,
        };
        cond = match range.max {
            Bound::Included(v) => cond.add(transactions::Column::Price.lte(v)),
            Bound::Excluded(v) => cond.add(transactions::Column::Price.lt(v)),
            Bound::Unbounded => cond,
        };
    }

    if let Some(sold) = filter.sold {
        cond = cond.add(transactions::Column::Sold.eq(sold));
    }

    cond
}

#[async_trait]
impl TransactionStore for SeaOrmTransactionStore {
    async fn find(
        &self,
        filter: &TransactionFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<Vec<Transaction>> {
        let models = transactions::Entity::find()
            .filter(build_condition(filter))
            .order_by_asc(transactions::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Transaction::from).collect())
    }

    async fn count(&self, filter: &TransactionFilter) -> AppResult<u64> {
        let total = transactions::Entity::find()
            .filter(build_condition(filter))
            .count(&self.pool)
            .await?;
        Ok(total)
    }

    async fn sum_price(&self, filter: &TransactionFilter) -> AppResult<f64> {
        #[derive(Debug, FromQueryResult)]
        struct SumRow {
            total: Option<f64>,
        }
        let total = transactions::Entity::find()
            .filter(build_condition(filter))
            .select_only()
            .column_as(Expr::col(transactions::Column::Price).sum(), "total")
            .into_model::<SumRow>()
            .one(&self.pool)
            .await?
            .and_then(|r| r.total)
            .unwrap_or(0.0);
        Ok(total)
    }

    async fn count_by_category(&self, filter: &TransactionFilter) -> AppResult<Vec<CategoryCount>> {
        #[derive(Debug, FromQueryResult)]
        struct CategoryRow {
            category: String,
            count: i64,
        }
        let rows = transactions::Entity::find()
            .filter(build_condition(filter))
            .select_only()
            .column(transactions::Column::Category)
            .column_as(Expr::val(1).count(), "count")
            .group_by(transactions::Column::Category)
            .order_by_asc(transactions::Column::Category)
            .into_model::<CategoryRow>()
            .all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| CategoryCount {
                category: r.category,
                count: r.count.max(0) as u64,
            })
            .collect())
    }

    async fn insert_many(&self, records: Vec<NewTransaction>) -> AppResult<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let txn = self.pool.begin().await?;
        let mut inserted = 0u64;
        for chunk in records.chunks(INSERT_CHUNK_SIZE) {
            let models = chunk.iter().cloned().map(|r| transactions::ActiveModel {
                title: Set(r.title),
                description: Set(r.description),
                price: Set(r.price),
                date_of_sale: Set(r.date_of_sale),
                category: Set(r.category),
                sold: Set(r.sold),
                ..Default::default()
            });
            transactions::Entity::insert_many(models).exec(&txn).await?;
            inserted += chunk.len() as u64;
        }
        txn.commit().await?;

        Ok(inserted)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = transactions::Entity::delete_many().exec(&self.pool).await?;
        Ok(result.rows_affected)
    }
}
