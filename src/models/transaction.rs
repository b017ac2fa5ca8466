use crate::entities::transaction_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 单条销售记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date_of_sale: DateTime<Utc>,
    pub category: String,
    pub sold: bool,
}

/// 待写入的记录（id 由存储分配）
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date_of_sale: DateTime<Utc>,
    pub category: String,
    pub sold: bool,
}

impl NewTransaction {
    pub fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            date_of_sale: self.date_of_sale,
            category: self.category,
            sold: self.sold,
        }
    }
}

/// 交易列表查询参数。
///
/// 分页参数以字符串接收，在构建查询时再做类型转换，
/// 这样非法取值也能返回统一的 JSON 错误。
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub month: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl From<transaction_entity::Model> for Transaction {
    fn from(m: transaction_entity::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            price: m.price,
            date_of_sale: m.date_of_sale,
            category: m.category,
            sold: m.sold,
        }
    }
}
