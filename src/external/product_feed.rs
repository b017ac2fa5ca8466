use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::FeedConfig;
use crate::error::{AppError, AppResult};
use crate::models::NewTransaction;

/// 整批导入时使用的第三方数据源
#[async_trait]
pub trait TransactionFeed: Send + Sync {
    /// 返回原始 JSON，是否为非空数组由调用方判断
    async fn fetch(&self) -> AppResult<Value>;
}

#[derive(Clone)]
pub struct ProductFeedClient {
    http: Client,
    cfg: FeedConfig,
}

impl ProductFeedClient {
    pub fn new(cfg: FeedConfig) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent("sales-stats-backend/feed")
            .build()?;
        Ok(Self { http, cfg })
    }
}

#[async_trait]
impl TransactionFeed for ProductFeedClient {
    async fn fetch(&self) -> AppResult<Value> {
        let resp = self.http.get(&self.cfg.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Feed request failed: HTTP {}",
                status.as_u16()
            )));
        }

        Ok(resp.json().await?)
    }
}

/// 数据源中的单条记录。
///
/// 只做类型转换：`id`、`image` 等多余字段直接忽略，id 由存储重新分配。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Value>,
    pub date_of_sale: Option<String>,
    pub category: Option<String>,
    pub sold: Option<Value>,
}

impl TryFrom<FeedRecord> for NewTransaction {
    type Error = String;

    fn try_from(r: FeedRecord) -> Result<Self, Self::Error> {
        let price = match &r.price {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|p| p.is_finite())
        .ok_or("price is missing or not numeric")?;
        if price < 0.0 {
            return Err(format!("price must not be negative, got {price}"));
        }

        let sold = match &r.sold {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => true,
            Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => false,
            Some(other) => return Err(format!("sold is not a boolean: {other}")),
        };

        let raw_date = r.date_of_sale.ok_or("dateOfSale is missing")?;
        let date_of_sale = DateTime::parse_from_rfc3339(raw_date.trim())
            .map_err(|e| format!("dateOfSale {raw_date:?} is not RFC 3339: {e}"))?
            .with_timezone(&Utc);

        Ok(NewTransaction {
            title: r.title.unwrap_or_default(),
            description: r.description.unwrap_or_default(),
            price,
            date_of_sale,
            category: r.category.unwrap_or_default(),
            sold,
        })
    }
}

/// 校验数据源返回值并转换为待写入记录。
///
/// 非数组或空数组视为数据源失败；无法转换的单条记录跳过并记录日志。
pub fn parse_feed(payload: Value) -> AppResult<Vec<NewTransaction>> {
    let items = match payload {
        Value::Array(items) if !items.is_empty() => items,
        _ => {
            return Err(AppError::ExternalApiError(
                "No data fetched from the third-party API".into(),
            ));
        }
    };

    let total = items.len();
    let mut records = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        let converted = serde_json::from_value::<FeedRecord>(item)
            .map_err(|e| e.to_string())
            .and_then(NewTransaction::try_from);
        match converted {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("Skipping feed item #{index}: {e}"),
        }
    }

    if records.is_empty() {
        return Err(AppError::ExternalApiError(format!(
            "None of the {total} fetched records could be converted"
        )));
    }

    Ok(records)
}
