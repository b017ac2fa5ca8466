//! 单元测试共用的数据与应用构造

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

use sea_orm::DbErr;

use crate::database::{SharedStore, TransactionFilter, TransactionStore};
use crate::error::{AppError, AppResult};
use crate::external::TransactionFeed;
use crate::handlers;
use crate::models::{CategoryCount, NewTransaction, Transaction};
use crate::services::{SeedService, StatisticsService, TransactionService};

pub fn record(title: &str, price: f64, month: u32, sold: bool) -> NewTransaction {
    record_with(title, "misc", price, month, sold, "")
}

pub fn record_with(
    title: &str,
    category: &str,
    price: f64,
    month: u32,
    sold: bool,
    description: &str,
) -> NewTransaction {
    NewTransaction {
        title: title.to_string(),
        description: description.to_string(),
        price,
        date_of_sale: Utc.with_ymd_and_hms(2022, month, 15, 10, 30, 0).unwrap(),
        category: category.to_string(),
        sold,
    }
}

/// 三条数据源记录：三月两条（一条已售），四月一条
pub fn sample_feed() -> Value {
    json!([
        {
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "sold": false,
            "dateOfSale": "2022-03-27T20:29:54+05:30"
        },
        {
            "id": 2,
            "title": "Silver Dragon Bracelet",
            "price": 695,
            "description": "From our Legends Collection",
            "category": "jewelery",
            "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
            "sold": true,
            "dateOfSale": "2022-03-10T08:00:00Z"
        },
        {
            "id": 3,
            "title": "WD 2TB Hard Drive",
            "price": 64,
            "description": "USB 3.0 and USB 2.0 compatibility",
            "category": "electronics",
            "image": "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg",
            "sold": true,
            "dateOfSale": "2022-04-02T11:00:00Z"
        }
    ])
}

/// 返回固定内容或固定错误的数据源
pub struct StaticFeed {
    result: Result<Value, String>,
}

impl StaticFeed {
    pub fn ok(payload: Value) -> Self {
        Self {
            result: Ok(payload),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl TransactionFeed for StaticFeed {
    async fn fetch(&self) -> AppResult<Value> {
        self.result.clone().map_err(AppError::ExternalApiError)
    }
}

pub const STORE_FAILURE: &str = "connection to server was lost";

/// 所有操作都返回数据库错误的存储
pub struct FailingStore;

fn store_failure<T>() -> AppResult<T> {
    Err(AppError::DatabaseError(DbErr::Custom(STORE_FAILURE.to_string())))
}

#[async_trait]
impl TransactionStore for FailingStore {
    async fn find(
        &self,
        _filter: &TransactionFilter,
        _offset: u64,
        _limit: u64,
    ) -> AppResult<Vec<Transaction>> {
        store_failure()
    }

    async fn count(&self, _filter: &TransactionFilter) -> AppResult<u64> {
        store_failure()
    }

    async fn sum_price(&self, _filter: &TransactionFilter) -> AppResult<f64> {
        store_failure()
    }

    async fn count_by_category(
        &self,
        _filter: &TransactionFilter,
    ) -> AppResult<Vec<CategoryCount>> {
        store_failure()
    }

    async fn insert_many(&self, _records: Vec<NewTransaction>) -> AppResult<u64> {
        store_failure()
    }

    async fn delete_all(&self) -> AppResult<u64> {
        store_failure()
    }
}

/// 使用给定存储与数据源装配的 `/api` 路由
pub fn test_app(
    store: SharedStore,
    feed: Arc<dyn TransactionFeed>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(TransactionService::new(store.clone())))
        .app_data(web::Data::new(StatisticsService::new(store.clone())))
        .app_data(web::Data::new(SeedService::new(store, feed)))
        .service(web::scope("/api").configure(handlers::api_config))
}
